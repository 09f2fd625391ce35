//! Catalog search, filtering and sorting.
//!
//! Everything here is a pure function over borrowed icon records. User
//! state that influences ordering (favorites, recents) is passed in through
//! [`UsageContext`].

use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;

use crate::icon::{IconRecord, LibraryKind};

// ============================================================================
// Text search
// ============================================================================

const NAME_EXACT: u32 = 100;
const NAME_PREFIX: u32 = 90;
const NAME_CONTAINS: u32 = 80;
const TAG_EXACT: u32 = 60;
const TAG_PREFIX: u32 = 50;
const TAG_CONTAINS: u32 = 40;
const CATEGORY_CONTAINS: u32 = 20;

/// Scores one query word against an icon. Zero means no match.
fn score_word(icon: &IconRecord, name: &str, word: &str) -> u32 {
    let name_score = if name == word {
        NAME_EXACT
    } else if name.starts_with(word) {
        NAME_PREFIX
    } else if name.contains(word) {
        NAME_CONTAINS
    } else {
        0
    };

    let tag_score = icon
        .tags
        .iter()
        .map(|tag| {
            let tag = tag.to_lowercase();
            if tag == word {
                TAG_EXACT
            } else if tag.starts_with(word) {
                TAG_PREFIX
            } else if tag.contains(word) {
                TAG_CONTAINS
            } else {
                0
            }
        })
        .max()
        .unwrap_or(0);

    let category_score = if icon.category.to_lowercase().contains(word) {
        CATEGORY_CONTAINS
    } else {
        0
    };

    name_score.max(tag_score).max(category_score)
}

/// Lowercases `text` and collapses runs of whitespace to one space.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive name order, raw names breaking ties.
fn by_name(a: &IconRecord, b: &IconRecord) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Relevance of an icon for a whole query, or `None` if some word misses.
pub fn score(icon: &IconRecord, query: &str) -> Option<u32> {
    let name = icon.name.to_lowercase();
    let mut total = 0;
    for word in query.to_lowercase().split_whitespace() {
        match score_word(icon, &name, word) {
            0 => return None,
            points => total += points,
        }
    }
    Some(total)
}

/// Finds icons mentioning every word of `query` in their name, tags or
/// category.
///
/// Icons whose whole name equals the query come first. The rest are ordered
/// by relevance, best first, ties broken by name. A blank query matches
/// everything in the original order.
pub fn search<'a>(icons: &'a [IconRecord], query: &str) -> Vec<&'a IconRecord> {
    let phrase = normalize(query);
    if phrase.is_empty() {
        return icons.iter().collect();
    }

    let mut scored: Vec<(bool, u32, &IconRecord)> = icons
        .iter()
        .filter_map(|icon| {
            let points = score(icon, &phrase)?;
            Some((normalize(&icon.name) == phrase, points, icon))
        })
        .collect();
    scored.sort_by(|(a_exact, a_points, a), (b_exact, b_points, b)| {
        b_exact
            .cmp(a_exact)
            .then_with(|| b_points.cmp(a_points))
            .then_with(|| by_name(a, b))
    });
    scored.into_iter().map(|(_, _, icon)| icon).collect()
}

// ============================================================================
// Filters
// ============================================================================

/// Favorites and recents used by filters and sorts.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageContext<'a> {
    pub favorites: &'a [String],
    /// Most recent first.
    pub recent: &'a [String],
}

impl UsageContext<'_> {
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|favorite| favorite == id)
    }

    pub fn recent_position(&self, id: &str) -> Option<usize> {
        self.recent.iter().position(|recent| recent == id)
    }
}

/// Which slice of the catalog to show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Favorites,
    /// Recently used icons, most recent first.
    Recent,
    Category(String),
}

impl CategoryFilter {
    /// Parses `all`, `favorites`, `recent` or a category name.
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Self::All,
            "favorites" => Self::Favorites,
            "recent" => Self::Recent,
            category => Self::Category(category.to_string()),
        }
    }

    pub fn matches(&self, icon: &IconRecord, usage: &UsageContext<'_>) -> bool {
        match self {
            Self::All => true,
            Self::Favorites => usage.is_favorite(&icon.id),
            Self::Recent => usage.recent_position(&icon.id).is_some(),
            Self::Category(category) => icon.category == *category,
        }
    }
}

/// Restricts results to one library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LibraryFilter {
    #[default]
    All,
    Only(LibraryKind),
}

impl LibraryFilter {
    pub fn matches(&self, icon: &IconRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(library) => icon.library() == *library,
        }
    }
}

impl From<Option<LibraryKind>> for LibraryFilter {
    fn from(library: Option<LibraryKind>) -> Self {
        library.map_or(Self::All, Self::Only)
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    /// Recently used first, by recency; the rest by name.
    Recent,
    /// Favorites first; each group by name.
    #[cfg_attr(feature = "clap", value(name = "popular"))]
    FavoritesFirst,
}

fn compare(order: SortOrder, a: &IconRecord, b: &IconRecord, usage: &UsageContext<'_>) -> Ordering {
    match order {
        SortOrder::NameAsc => by_name(a, b),
        SortOrder::NameDesc => by_name(b, a),
        SortOrder::Recent => {
            let rank = |icon: &IconRecord| usage.recent_position(&icon.id).unwrap_or(usize::MAX);
            rank(a).cmp(&rank(b)).then_with(|| by_name(a, b))
        }
        SortOrder::FavoritesFirst => {
            let favored = |icon: &IconRecord| Reverse(usage.is_favorite(&icon.id));
            favored(a).cmp(&favored(b)).then_with(|| by_name(a, b))
        }
    }
}

/// Sorts icons in place. The sort is stable.
pub fn sort_icons(icons: &mut [&IconRecord], order: SortOrder, usage: &UsageContext<'_>) {
    icons.sort_by(|a, b| compare(order, a, b, usage));
}

// ============================================================================
// IconQuery
// ============================================================================

/// A full browse request: text, filters and ordering.
#[derive(Debug, Clone, Default)]
pub struct IconQuery {
    pub text: String,
    pub category: CategoryFilter,
    pub library: LibraryFilter,
    /// `None` keeps relevance order.
    pub sort: Option<SortOrder>,
}

impl IconQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_library(mut self, library: LibraryFilter) -> Self {
        self.library = library;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Runs the query. The recent filter without an explicit sort lists
    /// icons by recency.
    pub fn run<'a>(&self, icons: &'a [IconRecord], usage: &UsageContext<'_>) -> Vec<&'a IconRecord> {
        let mut results: Vec<&IconRecord> = search(icons, &self.text)
            .into_iter()
            .filter(|icon| self.category.matches(icon, usage) && self.library.matches(icon))
            .collect();

        let sort = match (self.sort, &self.category) {
            (Some(sort), _) => Some(sort),
            (None, CategoryFilter::Recent) => Some(SortOrder::Recent),
            (None, _) => None,
        };
        if let Some(sort) = sort {
            sort_icons(&mut results, sort, usage);
        }
        results
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Icon count per category, largest first, ties by name.
pub fn category_counts(icons: &[IconRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for icon in icons {
        *counts.entry(icon.category.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect();
    counts.sort_by(|(a_name, a_count), (b_name, b_count)| {
        b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
    });
    counts
}

/// Turns a category slug into a label: `"charts-diagrams"` becomes
/// `"Charts Diagrams"`.
pub fn display_category(category: &str) -> String {
    category
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{IconSource, StrokeIcon};

    fn icon(id: &str, name: &str, category: &str, tags: &[&str]) -> IconRecord {
        IconRecord::new(id, name, category, IconSource::Tabler(StrokeIcon::new(Vec::new())))
            .with_tags(tags.iter().copied())
    }

    fn sample() -> Vec<IconRecord> {
        vec![
            icon("heart", "Heart", "ui", &["love", "like"]),
            icon("heart-broken", "Heart Broken", "emotions", &["sad"]),
            icon("flask", "Flask", "science", &["lab", "chemistry"]),
            icon("beaker", "Beaker", "science", &["lab"]),
            icon("sweetheart", "Sweetheart", "people", &[]),
        ]
    }

    fn ids<'a>(icons: &[&'a IconRecord]) -> Vec<&'a str> {
        icons.iter().map(|icon| icon.id.as_str()).collect()
    }

    #[test]
    fn scoring_weights() {
        let heart = icon("heart", "Heart", "love-and-care", &["favorite", "like"]);
        assert_eq!(score(&heart, "heart"), Some(NAME_EXACT));
        assert_eq!(score(&heart, "hea"), Some(NAME_PREFIX));
        assert_eq!(score(&heart, "art"), Some(NAME_CONTAINS));
        assert_eq!(score(&heart, "like"), Some(TAG_EXACT));
        assert_eq!(score(&heart, "fav"), Some(TAG_PREFIX));
        assert_eq!(score(&heart, "vori"), Some(TAG_CONTAINS));
        assert_eq!(score(&heart, "care"), Some(CATEGORY_CONTAINS));
        assert_eq!(score(&heart, "zebra"), None);
    }

    #[test]
    fn every_word_must_match() {
        let icons = sample();
        assert_eq!(ids(&search(&icons, "heart sad")), ["heart-broken"]);
        assert!(search(&icons, "heart chemistry").is_empty());
    }

    #[test]
    fn results_ranked_then_named() {
        let icons = sample();
        let results = search(&icons, "HEART");
        assert_eq!(ids(&results), ["heart", "heart-broken", "sweetheart"]);

        let results = search(&icons, "lab");
        assert_eq!(ids(&results), ["beaker", "flask"]);
    }

    #[test]
    fn whole_name_match_ranks_first() {
        let icons = vec![
            icon("check-circle", "Check Circle", "ui", &[]),
            icon("circle-check", "Circle Check", "ui", &[]),
        ];
        assert_eq!(score(&icons[0], "circle check"), score(&icons[1], "circle check"));

        let results = search(&icons, "circle check");
        assert_eq!(ids(&results), ["circle-check", "check-circle"]);

        let results = search(&icons, "  CHECK   circle ");
        assert_eq!(ids(&results), ["check-circle", "circle-check"]);
    }

    #[test]
    fn names_compare_case_insensitively() {
        let icons = vec![
            icon("zebra", "Zebra", "animals", &[]),
            icon("apple", "apple", "food", &[]),
            icon("mango", "Mango", "food", &[]),
        ];
        let usage = UsageContext::default();
        let mut all: Vec<&IconRecord> = icons.iter().collect();

        sort_icons(&mut all, SortOrder::NameAsc, &usage);
        assert_eq!(ids(&all), ["apple", "mango", "zebra"]);

        sort_icons(&mut all, SortOrder::NameDesc, &usage);
        assert_eq!(ids(&all), ["zebra", "mango", "apple"]);

        let fruit = vec![
            icon("zest", "Zest", "food", &["fruit"]),
            icon("apricot", "apricot", "food", &["fruit"]),
        ];
        assert_eq!(ids(&search(&fruit, "fruit")), ["apricot", "zest"]);
    }

    #[test]
    fn blank_query_keeps_catalog_order() {
        let icons = sample();
        let all = search(&icons, "   ");
        assert_eq!(all.len(), icons.len());
        assert_eq!(all[0].id, "heart");
        assert_eq!(all[4].id, "sweetheart");
    }

    #[test]
    fn category_and_library_filters() {
        let mut icons = sample();
        icons.push(IconRecord::new(
            "phosphor-flask",
            "Flask",
            "science",
            IconSource::Phosphor(StrokeIcon::new(Vec::new())),
        ));
        let usage = UsageContext::default();

        let science = IconQuery::new("")
            .with_category(CategoryFilter::parse("science"))
            .run(&icons, &usage);
        assert_eq!(ids(&science), ["flask", "beaker", "phosphor-flask"]);

        let phosphor = IconQuery::new("flask")
            .with_library(Some(LibraryKind::Phosphor).into())
            .run(&icons, &usage);
        assert_eq!(ids(&phosphor), ["phosphor-flask"]);
    }

    #[test]
    fn favorites_and_recent_filters() {
        let icons = sample();
        let favorites = vec!["flask".to_string(), "heart".to_string()];
        let recent = vec!["beaker".to_string(), "heart".to_string()];
        let usage = UsageContext {
            favorites: &favorites,
            recent: &recent,
        };

        let fav = IconQuery::new("")
            .with_category(CategoryFilter::Favorites)
            .run(&icons, &usage);
        assert_eq!(ids(&fav), ["heart", "flask"]);

        let rec = IconQuery::new("")
            .with_category(CategoryFilter::parse("recent"))
            .run(&icons, &usage);
        assert_eq!(ids(&rec), ["beaker", "heart"]);
    }

    #[test]
    fn sort_orders() {
        let icons = sample();
        let favorites = vec!["sweetheart".to_string()];
        let recent = vec!["flask".to_string()];
        let usage = UsageContext {
            favorites: &favorites,
            recent: &recent,
        };
        let mut all: Vec<&IconRecord> = icons.iter().collect();

        sort_icons(&mut all, SortOrder::NameAsc, &usage);
        assert_eq!(ids(&all), ["beaker", "flask", "heart", "heart-broken", "sweetheart"]);

        sort_icons(&mut all, SortOrder::NameDesc, &usage);
        assert_eq!(ids(&all)[0], "sweetheart");

        sort_icons(&mut all, SortOrder::FavoritesFirst, &usage);
        assert_eq!(ids(&all), ["sweetheart", "beaker", "flask", "heart", "heart-broken"]);

        sort_icons(&mut all, SortOrder::Recent, &usage);
        assert_eq!(ids(&all), ["flask", "beaker", "heart", "heart-broken", "sweetheart"]);
    }

    #[test]
    fn categories_counted_and_labelled() {
        let counts = category_counts(&sample());
        assert_eq!(counts[0], ("science".to_string(), 2));
        assert_eq!(counts[1], ("emotions".to_string(), 1));
        assert_eq!(counts.len(), 4);

        assert_eq!(display_category("charts-diagrams"), "Charts Diagrams");
        assert_eq!(display_category("ui"), "Ui");
        assert_eq!(display_category(""), "");
    }
}
