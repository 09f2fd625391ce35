//! icony-renderer: icon catalog, customization and export pipeline
//!
//! This crate renders icons from several vector icon libraries at a chosen
//! color, size and stroke weight, and exports them as PNG or SVG files or
//! to the clipboard. User preferences (favorites, recently used icons and
//! colors, saved palettes) persist through a pluggable key-value store.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use icony_renderer::{
//!     DirectorySink, ExportFormat, HexColor, IconCatalog, IconCustomizer, MemoryStore,
//! };
//!
//! let catalog = Arc::new(IconCatalog::builtin().unwrap());
//! let mut customizer = IconCustomizer::new(catalog, MemoryStore::new());
//!
//! customizer.select_icon("lucide-heart").unwrap();
//! customizer.set_color("#EF4444".parse::<HexColor>().unwrap());
//! customizer.set_size(64);
//!
//! let dir = std::env::temp_dir().join("icony-doc-example");
//! let receipt = customizer
//!     .download(ExportFormat::Png, &mut DirectorySink::new(&dir))
//!     .unwrap();
//! assert!(receipt.filename.starts_with("heart-red-64px-"));
//! ```
//!
//! # Searching
//!
//! ```
//! use icony_renderer::{IconCatalog, IconQuery, UsageContext};
//!
//! let catalog = IconCatalog::builtin().unwrap();
//! let hits = IconQuery::new("heart").run(catalog.as_slice(), &UsageContext::default());
//! assert!(hits.iter().all(|icon| icon.name.to_lowercase().contains("heart")));
//! ```

mod clipboard;
mod color;
mod customizer;
mod error;
mod export;
mod icon;
mod markup;
mod picker;
mod profile;
mod render;
mod search;
mod share;
mod storage;

pub mod categorize;

pub use clipboard::{Clipboard, NoClipboard};

#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use color::{HexColor, PRESET_COLORS, PresetColor};
pub use customizer::{
    Configurable, CustomizerState, DEFAULT_SIZE, DEFAULT_STROKE_WEIGHT, IconCustomizer, MAX_SIZE,
    MAX_STROKE_WEIGHT, MIN_SIZE, MIN_STROKE_WEIGHT, Selection,
};
pub use error::{
    CatalogError, ClipboardError, ColorParseError, CustomizeError, ExportError, PickError,
    RenderError, StorageError,
};
pub use export::{
    DirectorySink, ExportFormat, ExportReceipt, ExportSink, build_filename, build_filename_at,
    kebab_name,
};
pub use icon::{IconCatalog, IconRecord, IconSource, LibraryKind, StrokeIcon};
pub use markup::{AttributeRewriter, SVG_NAMESPACE, SvgChild, SvgNode, Verbatim};
pub use picker::{NoPicker, ScreenColorPicker};
pub use profile::CustomizationProfile;
pub use render::{IconRenderer, MIN_PADDING, RasterImage, padding_for, rasterize_markup};
pub use search::{
    CategoryFilter, IconQuery, LibraryFilter, SortOrder, UsageContext, category_counts,
    display_category, search, sort_icons,
};
pub use share::{ShareLink, ShareParams};
pub use storage::{
    FileStore, KeyValueStore, MemoryStore, Preferences, RECENT_COLORS_CAPACITY,
    RECENT_ICONS_CAPACITY, RecentList, SavedPalette,
};
