//! Keyword categorization for generating icon datasets.
//!
//! Icon libraries export their glyphs as camel-case symbols such as
//! `faArrowRight`. [`generate`] turns a list of such symbols into dataset
//! entries with a kebab-case id, a display name and a category picked by an
//! ordered rule table.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::icon::LibraryKind;

/// Category given to symbols no rule matches.
pub const FALLBACK_CATEGORY: &str = "other";

/// Package exports that are not icons.
const NON_ICON_EXPORTS: &[&str] = &["fas", "far", "fab", "prefix"];

// ============================================================================
// Rules
// ============================================================================

/// One category and the symbols that belong to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub name: &'static str,
    /// Exact symbols, e.g. `faBell`.
    pub exact: &'static [&'static str],
    /// Substrings of the kebab-case name, e.g. `clock-`.
    pub keywords: &'static [&'static str],
}

/// Category rules for FontAwesome solid icons, in priority order.
#[rustfmt::skip]
pub const FONT_AWESOME_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "accessibility",
        exact: &[
            "faAccessibleIcon", "faAudioDescription", "faBlind", "faBraille", "faClosedCaptioning",
            "faDeaf", "faEarDeaf", "faEarListen", "faEyeLowVision", "faUniversalAccess",
            "faWheelchair", "faWheelchairMove", "faSignLanguage",
        ],
        keywords: &[
            "accessible", "braille", "deaf", "wheelchair", "ear-listen", "sign-language",
        ],
    },
    CategoryRule {
        name: "alert",
        exact: &[
            "faBell", "faBellSlash", "faBullhorn", "faExclamation", "faInfo", "faQuestion",
            "faCircleInfo", "faCircleQuestion", "faCircleExclamation", "faTriangleExclamation",
            "faRadiation", "faBiohazard", "faSkullCrossbones",
        ],
        keywords: &[
            "bell", "bullhorn", "exclamation", "radiation", "biohazard", "warning", "alert",
            "siren",
        ],
    },
    CategoryRule {
        name: "alphabet",
        exact: &[
            "faA", "faB", "faC", "faD", "faE", "faF", "faG", "faH", "faI", "faJ", "faK", "faL",
            "faM", "faN", "faO", "faP", "faQ", "faR", "faS", "faT", "faU", "faV", "faW", "faX",
            "faY", "faZ",
        ],
        keywords: &[],
    },
    CategoryRule {
        name: "animals",
        exact: &[
            "faCat", "faDog", "faDove", "faDragon", "faFish", "faFrog", "faHippo", "faHorse",
            "faOtter", "faPaw", "faSpider", "faCrow", "faKiwiBird", "faLocust", "faMosquito",
            "faWorm", "faBug", "faCocktail",
        ],
        keywords: &[
            "cat", "dog", "dove", "dragon", "fish", "frog", "hippo", "horse", "otter", "paw",
            "spider", "crow", "bird", "locust", "mosquito", "worm",
        ],
    },
    CategoryRule {
        name: "arrows",
        exact: &[],
        keywords: &[
            "arrow", "chevron", "angle", "caret", "angles", "turn", "rotate", "sync", "reply",
            "share-from", "level", "exchange", "circle-arrow",
        ],
    },
    CategoryRule {
        name: "astronomy",
        exact: &[
            "faMeteor", "faMoon", "faSatellite", "faShuttleSpace", "faStar", "faSun", "faRocket",
            "faUserAstronaut",
        ],
        keywords: &[
            "meteor", "moon", "satellite", "shuttle", "space", "rocket", "astronaut", "star-",
        ],
    },
    CategoryRule {
        name: "automotive",
        exact: &[],
        keywords: &[
            "car-", "taxi", "bus", "truck", "van-", "motorcycle", "bicycle", "trailer", "oil-can",
            "gas-pump", "charging-station",
        ],
    },
    CategoryRule {
        name: "buildings",
        exact: &[],
        keywords: &[
            "building", "church", "city", "fort-", "gopuram", "hospital", "hotel", "house",
            "igloo", "industry", "kaaba", "landmark", "monument", "mosque", "school", "shop",
            "store", "synagogue", "tent-", "torii-gate", "tower", "tree-city", "vihara",
            "warehouse",
        ],
    },
    CategoryRule {
        name: "business",
        exact: &[],
        keywords: &[
            "briefcase", "bullseye", "calculator", "calendar", "chart-", "clipboard", "envelope-",
            "fax", "file-", "folder", "marker", "paperclip", "pen-", "pencil", "phone-", "print",
            "scissors", "stamp", "stapler", "table-", "thumbtack", "award", "certificate",
            "id-badge", "id-card", "business",
        ],
    },
    CategoryRule {
        name: "camping",
        exact: &[],
        keywords: &[
            "campground", "caravan", "compass", "fire-", "map-", "mountain", "person-hiking",
            "route", "tent", "tents", "toilet-paper", "tree-", "binoculars",
        ],
    },
    CategoryRule {
        name: "charity",
        exact: &[],
        keywords: &[
            "donate", "dove", "gift", "hand-holding-heart", "hand-holding-dollar", "handshake",
            "parachute-box", "piggy-bank", "ribbon", "seedling", "charity",
        ],
    },
    CategoryRule {
        name: "charts-diagrams",
        exact: &[],
        keywords: &[
            "chart-", "diagram", "graph", "sitemap", "project-diagram",
        ],
    },
    CategoryRule {
        name: "childhood",
        exact: &[],
        keywords: &[
            "baby", "child", "children", "person-dress",
        ],
    },
    CategoryRule {
        name: "clothing-fashion",
        exact: &[],
        keywords: &[
            "glasses", "hat-", "shirt", "shoe", "mitten", "vest", "user-tie", "crown",
        ],
    },
    CategoryRule {
        name: "code",
        exact: &[],
        keywords: &[
            "code", "terminal", "laptop-code", "file-code", "bug", "brackets", "window-maximize",
            "window-minimize", "window-restore", "server", "database", "git-", "github", "gitlab",
        ],
    },
    CategoryRule {
        name: "communication",
        exact: &[],
        keywords: &[
            "comment", "comments", "inbox", "message", "paper-plane", "square-phone", "at-",
            "bluetooth", "broadcast", "fax", "microphone", "rss", "satellite-dish", "tower-cell",
            "video-", "voicemail", "wifi",
        ],
    },
    CategoryRule {
        name: "connectivity",
        exact: &[],
        keywords: &[
            "bluetooth", "ethernet", "rss", "signal", "tower-broadcast", "tower-cell", "wifi",
        ],
    },
    CategoryRule {
        name: "construction",
        exact: &[],
        keywords: &[
            "hammer", "helmet", "screwdriver", "wrench", "person-digging", "ruler", "trowel",
            "truck-pickup", "hard-hat", "construction",
        ],
    },
    CategoryRule {
        name: "design",
        exact: &[],
        keywords: &[
            "bezier-curve", "brush", "crop-", "drafting-compass", "draw-polygon", "droplet",
            "eraser", "eye-dropper", "fill-", "highlighter", "paint-brush", "paint-roller",
            "palette", "pen-fancy", "pen-nib", "ruler-", "splotch", "spray-can", "swatchbook",
            "vector-square", "wand-magic",
        ],
    },
    CategoryRule {
        name: "devices",
        exact: &[],
        keywords: &[
            "mobile-", "tablet", "laptop", "desktop", "tv-", "computer", "keyboard", "mouse",
            "headphones", "sim-card", "sd-card", "hard-drive", "memory", "plug-", "power-off",
            "battery",
        ],
    },
    CategoryRule {
        name: "disaster",
        exact: &[],
        keywords: &[
            "burst", "explosion", "fire-extinguisher", "house-fire", "person-drowning", "skull-",
            "tornado", "virus", "volcano",
        ],
    },
    CategoryRule {
        name: "editing",
        exact: &[],
        keywords: &[
            "pen-to-square", "undo", "redo",
        ],
    },
    CategoryRule {
        name: "education",
        exact: &[],
        keywords: &[
            "atom", "book-", "bookmark", "graduation-cap", "user-graduate", "chalkboard", "flask",
            "microscope", "school", "university",
        ],
    },
    CategoryRule {
        name: "emoji",
        exact: &[],
        keywords: &[
            "face-", "smile", "frown", "grin", "laugh-", "meh", "sad-", "angry", "kiss", "heart-",
        ],
    },
    CategoryRule {
        name: "energy",
        exact: &[],
        keywords: &[
            "atom", "bolt-", "charging-station", "gas-pump", "leaf-", "lightbulb", "solar-panel",
            "wind", "oil-well", "fan-",
        ],
    },
    CategoryRule {
        name: "files",
        exact: &[],
        keywords: &[
            "file-", "folder-", "floppy", "save-", "copy-", "clone",
        ],
    },
    CategoryRule {
        name: "film-video",
        exact: &[],
        keywords: &[
            "camera", "clapperboard", "film", "photo-film", "circle-play", "circle-pause",
            "circle-stop",
        ],
    },
    CategoryRule {
        name: "food",
        exact: &[],
        keywords: &[
            "apple", "beer", "cake", "bottle-", "bowl", "burger", "candy", "carrot", "cheese",
            "coffee", "cookie", "drumstick", "egg", "glass-", "hotdog", "ice-cream", "lemon",
            "martini", "mug", "pepper", "pizza", "plate", "utensils", "wine", "bacon", "bread",
            "stroopwafel",
        ],
    },
    CategoryRule {
        name: "fruits-vegetables",
        exact: &[],
        keywords: &[
            "apple", "carrot", "lemon", "pepper",
        ],
    },
    CategoryRule {
        name: "gaming",
        exact: &[],
        keywords: &[
            "chess", "dice", "gamepad", "ghost", "headset", "puzzle", "trophy", "vr-cardboard",
            "ranking-star",
        ],
    },
    CategoryRule {
        name: "genders",
        exact: &[
            "faGenderless", "faMars", "faMercury", "faNeuter", "faTransgender", "faVenus",
            "faMarsAndVenus", "faVenusMars",
        ],
        keywords: &[
            "gender", "mars", "venus", "mercury", "transgender",
        ],
    },
    CategoryRule {
        name: "halloween",
        exact: &[],
        keywords: &[
            "broom", "ghost", "hat-wizard", "mask", "skull",
        ],
    },
    CategoryRule {
        name: "hands",
        exact: &[],
        keywords: &[
            "hand-", "fist", "thumbs", "peace", "handshake", "praying-hands",
        ],
    },
    CategoryRule {
        name: "holidays",
        exact: &[],
        keywords: &[
            "candy-cane", "gifts", "holly-berry", "menorah", "sleigh", "snowman",
        ],
    },
    CategoryRule {
        name: "household",
        exact: &[],
        keywords: &[
            "bath", "bed-", "blender", "broom", "chair", "couch", "door-", "fan-", "faucet",
            "key-", "kitchen-set", "lamp", "shower", "sink", "soap", "toilet", "vacuum",
        ],
    },
    CategoryRule {
        name: "humanitarian",
        exact: &[],
        keywords: &[
            "hand-holding-heart", "hand-holding-dollar", "hand-holding-droplet", "hands-holding",
            "house-chimney-heart", "parachute-box", "ribbon",
        ],
    },
    CategoryRule {
        name: "logistics",
        exact: &[],
        keywords: &[
            "box-", "boxes", "clipboard-check", "clipboard-list", "dolly", "pallet", "warehouse",
        ],
    },
    CategoryRule {
        name: "maps",
        exact: &[],
        keywords: &[
            "anchor", "arrow-pointer", "diamond-turn-right", "directions", "location-", "map-",
            "person-walking", "road-", "sign-", "street-view", "traffic-light",
        ],
    },
    CategoryRule {
        name: "maritime",
        exact: &[],
        keywords: &[
            "anchor", "ferry", "sailboat", "ship", "water-",
        ],
    },
    CategoryRule {
        name: "marketing",
        exact: &[],
        keywords: &[
            "bullhorn", "bullseye", "hashtag", "icons", "rectangle-ad", "square-poll", "tag-",
        ],
    },
    CategoryRule {
        name: "mathematics",
        exact: &[],
        keywords: &[
            "divide", "equals", "greater-than", "infinity", "less-than", "minus-", "not-equal",
            "percent", "plus-", "square-root", "subscript", "superscript", "wave-square", "xmark",
        ],
    },
    CategoryRule {
        name: "media-playback",
        exact: &[],
        keywords: &[
            "backward", "eject", "forward-", "pause", "play-", "stop-", "volume-",
        ],
    },
    CategoryRule {
        name: "medical",
        exact: &[],
        keywords: &[
            "ambulance", "bandage", "bed-pulse", "briefcase-medical", "capsules", "circle-h",
            "crutch", "dna", "file-medical", "hand-dots", "heart-pulse", "kit-medical", "lungs",
            "microscope", "notes-medical", "pills", "prescription", "stethoscope", "syringe",
            "tablets", "thermometer", "tooth", "truck-medical", "user-doctor", "vial",
            "weight-scale", "x-ray",
        ],
    },
    CategoryRule {
        name: "money",
        exact: &[],
        keywords: &[
            "dollar", "euro", "sterling", "rupee", "yen", "won", "bitcoin", "coins", "credit-card",
            "money-bill", "piggy-bank", "wallet", "cash-register", "receipt", "sack-",
            "scale-balanced",
        ],
    },
    CategoryRule {
        name: "moving",
        exact: &[],
        keywords: &[
            "people-carry-box", "sign-hanging", "tape", "truck-moving", "truck-ramp-box",
            "wine-bottle",
        ],
    },
    CategoryRule {
        name: "music",
        exact: &[],
        keywords: &[
            "compact-disc", "drum", "file-audio", "guitar", "music-", "radio", "record-vinyl",
            "sliders",
        ],
    },
    CategoryRule {
        name: "nature",
        exact: &[],
        keywords: &[
            "binoculars", "cloud-", "feather", "plant-wilt", "snowflake", "worm",
        ],
    },
    CategoryRule {
        name: "numbers",
        exact: &[
            "fa0", "fa1", "fa2", "fa3", "fa4", "fa5", "fa6", "fa7", "fa8", "fa9",
        ],
        keywords: &[],
    },
    CategoryRule {
        name: "photos",
        exact: &[],
        keywords: &[
            "camera-retro", "image", "images", "panorama", "photo-film",
        ],
    },
    CategoryRule {
        name: "political",
        exact: &[],
        keywords: &[
            "balance-scale", "check-to-slot", "flag-", "gavel", "landmark-", "person-booth",
            "scale-balanced",
        ],
    },
    CategoryRule {
        name: "punctuation",
        exact: &[],
        keywords: &[
            "asterisk", "ellipsis", "quote", "section", "slash",
        ],
    },
    CategoryRule {
        name: "religion",
        exact: &[],
        keywords: &[
            "ankh", "bahai", "book-bible", "cross-", "dharmachakra", "gopuram", "hamsa",
            "hands-praying", "hanukiah", "jain", "kaaba", "khanda", "menorah", "om-",
            "place-of-worship", "person-praying", "quran", "star-and-crescent", "star-of-david",
            "yin-yang",
        ],
    },
    CategoryRule {
        name: "science",
        exact: &[],
        keywords: &[
            "biohazard", "brain", "capsules", "disease", "eye-dropper", "filter-", "frog",
            "magnet", "mortar-pestle", "prescription-bottle", "vials",
        ],
    },
    CategoryRule {
        name: "science-fiction",
        exact: &[],
        keywords: &[
            "dragon", "explosion", "hand-sparkles", "jet-fighter", "meteor", "ring-", "robot",
            "space-shuttle", "wand-magic",
        ],
    },
    CategoryRule {
        name: "security",
        exact: &[],
        keywords: &[
            "ban-", "dungeon", "eye-slash", "file-shield", "fingerprint", "lock-", "shield",
            "unlock", "user-lock", "user-secret", "user-shield", "vault",
        ],
    },
    CategoryRule {
        name: "shapes",
        exact: &[],
        keywords: &[
            "circle-", "square-", "star-", "certificate", "clover", "diamond-", "hexagon",
            "octagon", "pentagon", "triangle-",
        ],
    },
    CategoryRule {
        name: "shopping",
        exact: &[],
        keywords: &[
            "bag-shopping", "basket-shopping", "cart-shopping", "shop-", "store-", "tags",
        ],
    },
    CategoryRule {
        name: "social",
        exact: &[],
        keywords: &[
            "retweet", "share-nodes", "square-share-nodes",
        ],
    },
    CategoryRule {
        name: "spinners",
        exact: &[],
        keywords: &[
            "circle-notch", "compact-disc", "dharmachakra", "life-ring", "spinner", "stroopwafel",
            "yin-yang",
        ],
    },
    CategoryRule {
        name: "sports",
        exact: &[],
        keywords: &[
            "baseball", "basketball", "bowling-ball", "dumbbell", "football", "futbol", "golf-",
            "hockey-puck", "medal-", "person-biking", "person-running", "person-skating",
            "person-skiing", "person-swimming", "table-tennis", "volleyball",
        ],
    },
    CategoryRule {
        name: "text-formatting",
        exact: &[],
        keywords: &[
            "align-", "bold", "font-", "heading", "indent", "italic", "list-", "outdent",
            "paragraph", "strikethrough", "text-height", "text-width", "underline",
        ],
    },
    CategoryRule {
        name: "time",
        exact: &[],
        keywords: &[
            "alarm", "clock-", "hourglass", "stopwatch", "timer",
        ],
    },
    CategoryRule {
        name: "toggle",
        exact: &[
            "faToggleOff", "faToggleOn",
        ],
        keywords: &[
            "toggle-",
        ],
    },
    CategoryRule {
        name: "transportation",
        exact: &[],
        keywords: &[
            "helicopter", "plane-", "train-", "shuttle-",
        ],
    },
    CategoryRule {
        name: "travel-hotel",
        exact: &[],
        keywords: &[
            "archway", "baby-carriage", "bell-concierge", "caravan", "elevator", "hot-tub",
            "luggage-cart", "mug-saucer", "person-swimming", "restroom", "smoking", "spa-",
            "suitcase", "swimming-pool", "umbrella-beach",
        ],
    },
    CategoryRule {
        name: "users",
        exact: &[],
        keywords: &[
            "address-book", "address-card", "people-", "person-", "street-view", "user-", "users-",
        ],
    },
    CategoryRule {
        name: "weather",
        exact: &[],
        keywords: &[
            "bolt", "cloud-", "icicles", "poo-storm", "rainbow", "smog", "temperature-",
            "umbrella-",
        ],
    },
    CategoryRule {
        name: "writing",
        exact: &[],
        keywords: &[
            "book-", "eraser", "feather", "note-sticky", "pen-fancy", "pen-nib", "quote-left",
            "quote-right", "signature",
        ],
    },
    CategoryRule {
        name: "ui",
        exact: &[],
        keywords: &[
            "home", "house-", "user-", "cog", "settings", "gear", "heart", "star", "search",
            "bell", "notification", "download", "upload", "edit", "trash", "delete", "check",
            "times", "xmark", "cross", "plus", "minus", "bars", "menu", "sun", "moon", "filter",
            "share", "copy", "clone", "save", "bookmark", "tag", "label", "eye", "view", "lock",
            "unlock", "key", "shield", "power", "sliders", "toggle", "ellipsis", "grip", "grid",
            "list",
        ],
    },
];

// ============================================================================
// Categorizer
// ============================================================================

/// Assigns categories from an ordered rule table.
///
/// Exact symbol matches are checked across all rules first. Failing that,
/// the first rule with a keyword contained in the kebab-case name wins.
#[derive(Debug, Clone, Copy)]
pub struct Categorizer {
    rules: &'static [CategoryRule],
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(FONT_AWESOME_RULES)
    }
}

impl Categorizer {
    pub fn new(rules: &'static [CategoryRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [CategoryRule] {
        self.rules
    }

    /// Category for a symbol such as `faCarSide`.
    pub fn categorize(&self, symbol: &str) -> &'static str {
        let exact = self
            .rules
            .iter()
            .find(|rule| rule.exact.iter().any(|exact| *exact == symbol));
        if let Some(rule) = exact {
            return rule.name;
        }

        let name = symbol_stem(symbol);
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| name.contains(keyword)))
            .map_or(FALLBACK_CATEGORY, |rule| rule.name)
    }
}

// ============================================================================
// Symbols
// ============================================================================

/// Returns true for exports that name an icon.
pub fn is_icon_symbol(symbol: &str) -> bool {
    symbol.len() > 2
        && symbol.starts_with("fa")
        && !NON_ICON_EXPORTS.iter().any(|export| *export == symbol)
}

/// Kebab-case name without the `fa` prefix: `faCarSide` becomes `car-side`.
fn symbol_stem(symbol: &str) -> String {
    let bare = symbol.strip_prefix("fa").unwrap_or(symbol);
    let mut stem = String::with_capacity(bare.len() + 4);
    for (i, ch) in bare.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                stem.push('-');
            }
            stem.push(ch.to_ascii_lowercase());
        } else {
            stem.push(ch);
        }
    }
    stem
}

/// Catalog id for a symbol: `faCarSide` becomes `fa-car-side`.
pub fn symbol_to_id(symbol: &str) -> String {
    format!("fa-{}", symbol_stem(symbol))
}

/// Display name for a symbol: `faCarSide` becomes `Car Side`.
pub fn symbol_to_name(symbol: &str) -> String {
    let bare = symbol.strip_prefix("fa").unwrap_or(symbol);
    let mut name = String::with_capacity(bare.len() + 4);
    for (i, ch) in bare.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            name.push(' ');
        }
        name.push(ch);
    }
    name
}

// ============================================================================
// Dataset
// ============================================================================

/// One generated catalog entry, without vector data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetEntry {
    pub symbol: String,
    pub id: String,
    pub name: String,
    pub category: String,
    pub tags: Vec<String>,
    pub library: LibraryKind,
}

/// Output of a categorization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub entries: Vec<DatasetEntry>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry count per category, largest first, ties by name.
    pub fn category_stats(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entry in &self.entries {
            *counts.entry(entry.category.as_str()).or_insert(0) += 1;
        }
        let mut stats: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(category, count)| (category.to_string(), count))
            .collect();
        stats.sort_by(|(a_name, a_count), (b_name, b_count)| {
            b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
        });
        stats
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}

/// Builds dataset entries for every icon symbol in `symbols`.
///
/// Blank lines and non-icon exports are skipped; repeated symbols are kept
/// once.
pub fn generate<'a, I>(symbols: I, categorizer: &Categorizer) -> Dataset
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let entries: Vec<DatasetEntry> = symbols
        .into_iter()
        .map(str::trim)
        .filter(|symbol| is_icon_symbol(symbol) && seen.insert(*symbol))
        .map(|symbol| DatasetEntry {
            symbol: symbol.to_string(),
            id: symbol_to_id(symbol),
            name: symbol_to_name(symbol),
            category: categorizer.categorize(symbol).to_string(),
            tags: Vec::new(),
            library: LibraryKind::FontAwesome,
        })
        .collect();

    tracing::debug!(icons = entries.len(), "categorized symbols");
    Dataset { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_naming() {
        assert_eq!(symbol_to_id("faCarSide"), "fa-car-side");
        assert_eq!(symbol_to_name("faCarSide"), "Car Side");
        assert_eq!(symbol_to_id("faFlask"), "fa-flask");
        assert_eq!(symbol_to_name("faFlask"), "Flask");
        assert_eq!(symbol_to_id("fa7"), "fa-7");
        assert_eq!(symbol_to_id("faArrowDown19"), "fa-arrow-down19");
    }

    #[test]
    fn non_icon_exports_are_filtered() {
        for symbol in ["fas", "far", "fab", "prefix", "fa", "library", ""] {
            assert!(!is_icon_symbol(symbol), "{symbol}");
        }
        assert!(is_icon_symbol("faBell"));
        assert!(is_icon_symbol("fa0"));
    }

    #[test]
    fn exact_matches_win_over_keywords() {
        let categorizer = Categorizer::default();
        // "star" would otherwise hit later keyword rules
        assert_eq!(categorizer.categorize("faStar"), "astronomy");
        assert_eq!(categorizer.categorize("faToggleOn"), "toggle");
        assert_eq!(categorizer.categorize("fa7"), "numbers");
        assert_eq!(categorizer.categorize("faQ"), "alphabet");
    }

    #[test]
    fn first_keyword_rule_wins() {
        let categorizer = Categorizer::default();
        assert_eq!(categorizer.categorize("faFlask"), "education");
        assert_eq!(categorizer.categorize("faCarSide"), "automotive");
        assert_eq!(categorizer.categorize("faHeart"), "ui");
        assert_eq!(categorizer.categorize("faMugHot"), "food");
        // arrows ("rotate") is listed before time ("clock-")
        assert_eq!(categorizer.categorize("faClockRotateLeft"), "arrows");
        // emoji ("heart-") is listed before medical ("heart-pulse")
        assert_eq!(categorizer.categorize("faHeartPulse"), "emoji");
    }

    #[test]
    fn unmatched_symbols_fall_back() {
        assert_eq!(Categorizer::default().categorize("faZzz"), FALLBACK_CATEGORY);
    }

    #[test]
    fn custom_rule_tables() {
        const RULES: &[CategoryRule] = &[
            CategoryRule {
                name: "vehicles",
                exact: &[],
                keywords: &["car-"],
            },
            CategoryRule {
                name: "cards",
                exact: &["faCarSide"],
                keywords: &["card"],
            },
        ];
        let categorizer = Categorizer::new(RULES);
        assert_eq!(categorizer.categorize("faCarSide"), "cards");
        assert_eq!(categorizer.categorize("faCarRear"), "vehicles");
        assert_eq!(categorizer.categorize("faIdCard"), "cards");
        assert_eq!(categorizer.categorize("faScarf"), FALLBACK_CATEGORY);
    }

    #[test]
    fn dataset_generation_and_stats() {
        let input = "fas\nfaFlask\n\nfaCarSide\nfaTruck\nfaFlask\nprefix\nfaZzz\n";
        let dataset = generate(input.lines(), &Categorizer::default());

        let ids: Vec<_> = dataset.entries.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, ["fa-flask", "fa-car-side", "fa-truck", "fa-zzz"]);
        assert_eq!(dataset.len(), 4);

        let stats = dataset.category_stats();
        assert_eq!(stats[0], ("automotive".to_string(), 2));
        assert_eq!(stats.len(), 3);

        let json = dataset.to_json_pretty().unwrap();
        assert!(json.contains(r#""symbol": "faCarSide""#));
        assert!(json.contains(r#""library": "fontawesome""#));
        assert!(json.contains(r#""category": "education""#));
    }
}
