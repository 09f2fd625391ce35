//! Icon records and the in-memory catalog.
//!
//! Every icon comes from one of a small, fixed set of libraries. The vector
//! definition differs per library: FontAwesome ships an abstract path tree,
//! while the stroke-based libraries ship a list of elements that are drawn
//! with an explicit stroke color and weight.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::markup::SvgNode;

// ============================================================================
// LibraryKind
// ============================================================================

/// The icon library an icon belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LibraryKind {
    #[cfg_attr(feature = "clap", value(name = "fontawesome"))]
    FontAwesome,
    Lucide,
    Tabler,
    Phosphor,
}

impl LibraryKind {
    pub const ALL: [LibraryKind; 4] = [
        LibraryKind::FontAwesome,
        LibraryKind::Lucide,
        LibraryKind::Tabler,
        LibraryKind::Phosphor,
    ];

    /// Stable lowercase identifier, as used in catalogs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FontAwesome => "fontawesome",
            Self::Lucide => "lucide",
            Self::Tabler => "tabler",
            Self::Phosphor => "phosphor",
        }
    }

    /// Human-readable library name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FontAwesome => "Font Awesome",
            Self::Lucide => "Lucide",
            Self::Tabler => "Tabler",
            Self::Phosphor => "Phosphor",
        }
    }

    /// Returns true if icons of this library honour a stroke weight.
    pub fn is_stroke_based(&self) -> bool {
        match self {
            Self::FontAwesome => false,
            Self::Lucide | Self::Tabler | Self::Phosphor => true,
        }
    }

    /// The view box stroke icons of this library are drawn in.
    pub fn default_view_box(&self) -> &'static str {
        match self {
            Self::FontAwesome => "0 0 512 512",
            Self::Lucide | Self::Tabler => "0 0 24 24",
            Self::Phosphor => "0 0 256 256",
        }
    }

    /// Factor applied to the user's stroke weight.
    ///
    /// Stroke weights are expressed on a 24-unit grid; Phosphor draws on a
    /// 256-unit grid where its regular weight is 16.
    pub fn stroke_scale(&self) -> f32 {
        match self {
            Self::FontAwesome | Self::Lucide | Self::Tabler => 1.0,
            Self::Phosphor => 8.0,
        }
    }
}

// ============================================================================
// IconSource
// ============================================================================

/// A stroke-drawn icon: child elements of an `<svg>` root that the renderer
/// creates with the requested stroke parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeIcon {
    /// Overrides the library's default view box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_box: Option<String>,

    pub elements: Vec<SvgNode>,
}

impl StrokeIcon {
    pub fn new(elements: Vec<SvgNode>) -> Self {
        Self {
            view_box: None,
            elements,
        }
    }
}

/// The vector definition of an icon, tagged by library.
///
/// In JSON this is `{ "library": "lucide", "definition": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "library", content = "definition", rename_all = "lowercase")]
pub enum IconSource {
    /// Solid icon as an abstract `<svg>` tree whose fills are recolored.
    FontAwesome(SvgNode),
    Lucide(StrokeIcon),
    Tabler(StrokeIcon),
    Phosphor(StrokeIcon),
}

impl IconSource {
    pub fn library(&self) -> LibraryKind {
        match self {
            Self::FontAwesome(_) => LibraryKind::FontAwesome,
            Self::Lucide(_) => LibraryKind::Lucide,
            Self::Tabler(_) => LibraryKind::Tabler,
            Self::Phosphor(_) => LibraryKind::Phosphor,
        }
    }
}

// ============================================================================
// IconRecord
// ============================================================================

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub source: IconSource,
}

impl IconRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        source: IconSource,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            tags: Vec::new(),
            source,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn library(&self) -> LibraryKind {
        self.source.library()
    }
}

// ============================================================================
// IconCatalog
// ============================================================================

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// The read-only list of icons available to the application.
///
/// Icons keep the order they were loaded in. Ids are unique.
#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    icons: Vec<IconRecord>,
    index: HashMap<String, usize>,
}

impl IconCatalog {
    /// Builds a catalog, rejecting empty or duplicate ids.
    pub fn from_icons(icons: Vec<IconRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(icons.len());
        for (position, icon) in icons.iter().enumerate() {
            if icon.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if index.insert(icon.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(icon.id.clone()));
            }
        }
        Ok(Self { icons, index })
    }

    /// Parses a catalog from a JSON array of icon records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let icons: Vec<IconRecord> = serde_json::from_str(json)?;
        Self::from_icons(icons)
    }

    /// Reads a JSON catalog from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), icons = catalog.len(), "loaded icon catalog");
        Ok(catalog)
    }

    /// The small catalog bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn get(&self, id: &str) -> Option<&IconRecord> {
        self.index.get(id).map(|&position| &self.icons[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconRecord> {
        self.icons.iter()
    }

    pub fn as_slice(&self) -> &[IconRecord] {
        &self.icons
    }

    /// Number of icons per library.
    pub fn library_counts(&self) -> BTreeMap<LibraryKind, usize> {
        let mut counts = BTreeMap::new();
        for icon in &self.icons {
            *counts.entry(icon.library()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a IconCatalog {
    type Item = &'a IconRecord;
    type IntoIter = std::slice::Iter<'a, IconRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lucide(id: &str, name: &str) -> IconRecord {
        IconRecord::new(
            id,
            name,
            "shapes",
            IconSource::Lucide(StrokeIcon::new(vec![
                SvgNode::new("circle").attr("cx", "12").attr("cy", "12").attr("r", "10"),
            ])),
        )
    }

    #[test]
    fn library_is_derived_from_source() {
        let icon = lucide("lucide-circle", "Circle");
        assert_eq!(icon.library(), LibraryKind::Lucide);
        assert!(icon.library().is_stroke_based());
        assert!(!LibraryKind::FontAwesome.is_stroke_based());
    }

    #[test]
    fn catalog_rejects_duplicates() {
        let err = IconCatalog::from_icons(vec![
            lucide("lucide-circle", "Circle"),
            lucide("lucide-circle", "Circle Again"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "lucide-circle"));

        let err = IconCatalog::from_icons(vec![lucide("", "Nameless")]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId));
    }

    #[test]
    fn catalog_lookup_preserves_order() {
        let catalog = IconCatalog::from_icons(vec![
            lucide("b", "Bee"),
            lucide("a", "Ant"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").unwrap().name, "Ant");
        assert!(catalog.get("c").is_none());
        let ids: Vec<_> = catalog.iter().map(|icon| icon.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn record_json_format() {
        let json = r#"[{
            "id": "fa-flask",
            "name": "Flask",
            "category": "science",
            "tags": ["lab"],
            "source": {
                "library": "fontawesome",
                "definition": {
                    "tag": "svg",
                    "attributes": { "viewBox": "0 0 448 512" },
                    "children": [{ "tag": "path", "attributes": { "fill": "currentColor", "d": "M0 0H448V512Z" } }]
                }
            }
        }]"#;
        let catalog = IconCatalog::from_json(json).unwrap();
        let flask = catalog.get("fa-flask").unwrap();
        assert_eq!(flask.library(), LibraryKind::FontAwesome);
        assert_eq!(flask.tags, ["lab"]);
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = IconCatalog::builtin().unwrap();
        assert!(catalog.contains("fa-flask"));
        let counts = catalog.library_counts();
        for kind in LibraryKind::ALL {
            assert!(counts.get(&kind).copied().unwrap_or(0) > 0, "no {kind:?} icons");
        }
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            IconCatalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
