//! Customization state and the export/copy orchestration around it.

use std::cell::Cell;
use std::sync::Arc;

use crate::clipboard::Clipboard;
use crate::color::HexColor;
use crate::error::CustomizeError;
use crate::export::{ExportFormat, ExportReceipt, ExportSink, build_filename};
use crate::icon::{IconCatalog, IconRecord};
use crate::picker::ScreenColorPicker;
use crate::profile::CustomizationProfile;
use crate::render::{IconRenderer, RasterImage};
use crate::share::{ShareLink, ShareParams};
use crate::storage::{KeyValueStore, Preferences};

pub const MIN_SIZE: u32 = 16;
pub const MAX_SIZE: u32 = 512;
pub const DEFAULT_SIZE: u32 = 128;

pub const MIN_STROKE_WEIGHT: f32 = 0.5;
pub const MAX_STROKE_WEIGHT: f32 = 4.0;
pub const DEFAULT_STROKE_WEIGHT: f32 = 2.0;

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from a [`CustomizationProfile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    fn apply_profile(&mut self, profile: &CustomizationProfile);

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> CustomizationProfile;
}

// ============================================================================
// Selection
// ============================================================================

/// The icon being customized and its render parameters.
///
/// Size and stroke weight are clamped on every write, so a `Selection`
/// always holds values the renderer accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    icon: Option<String>,
    color: HexColor,
    size: u32,
    stroke_weight: f32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            icon: None,
            color: HexColor::default(),
            size: DEFAULT_SIZE,
            stroke_weight: DEFAULT_STROKE_WEIGHT,
        }
    }
}

impl Selection {
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn color(&self) -> HexColor {
        self.color
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn stroke_weight(&self) -> f32 {
        self.stroke_weight
    }

    pub fn set_color(&mut self, color: HexColor) {
        self.color = color;
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(MIN_SIZE, MAX_SIZE);
    }

    /// NaN falls back to the default weight.
    pub fn set_stroke_weight(&mut self, stroke_weight: f32) {
        self.stroke_weight = if stroke_weight.is_nan() {
            DEFAULT_STROKE_WEIGHT
        } else {
            stroke_weight.clamp(MIN_STROKE_WEIGHT, MAX_STROKE_WEIGHT)
        };
    }
}

/// Coarse state of an [`IconCustomizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomizerState {
    NoSelection,
    Selected,
    /// A download or clipboard copy is in progress.
    Exporting,
}

// ============================================================================
// IconCustomizer
// ============================================================================

/// Holds the current selection and drives rendering, export and copy.
///
/// User preferences (favorites, recents, palettes) live in the injected
/// store. Failing to record a recent icon or color is logged and does not
/// fail the operation that triggered it.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use icony_renderer::{HexColor, IconCatalog, IconCustomizer, MemoryStore};
///
/// let catalog = Arc::new(IconCatalog::builtin().unwrap());
/// let mut customizer = IconCustomizer::new(catalog, MemoryStore::new());
///
/// customizer.select_icon("fa-flask").unwrap();
/// customizer.set_color(HexColor::new(0x3B, 0x82, 0xF6));
/// customizer.set_size(256);
///
/// let svg = customizer.render_markup().unwrap();
/// assert!(svg.contains("#3B82F6"));
/// ```
pub struct IconCustomizer<S> {
    catalog: Arc<IconCatalog>,
    selection: Selection,
    preferences: Preferences<S>,
    renderer: IconRenderer,
    exporting: Cell<bool>,
}

/// Clears the exporting flag when dropped.
struct ExportingGuard<'a>(&'a Cell<bool>);

impl<'a> ExportingGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for ExportingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S: KeyValueStore> IconCustomizer<S> {
    /// Creates a customizer with nothing selected.
    pub fn new(catalog: Arc<IconCatalog>, store: S) -> Self {
        Self {
            catalog,
            selection: Selection::default(),
            preferences: Preferences::new(store),
            renderer: IconRenderer::new(),
            exporting: Cell::new(false),
        }
    }

    pub fn catalog(&self) -> &IconCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn preferences(&self) -> &Preferences<S> {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut Preferences<S> {
        &mut self.preferences
    }

    pub fn state(&self) -> CustomizerState {
        if self.exporting.get() {
            CustomizerState::Exporting
        } else if self.selection.icon.is_some() {
            CustomizerState::Selected
        } else {
            CustomizerState::NoSelection
        }
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting.get()
    }

    /// The catalog record of the selected icon.
    pub fn selected_icon(&self) -> Option<&IconRecord> {
        self.selection
            .icon
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Selects an icon by id and records it as recently used.
    pub fn select_icon(&mut self, id: &str) -> Result<(), CustomizeError> {
        if !self.catalog.contains(id) {
            return Err(CustomizeError::UnknownIcon(id.to_string()));
        }
        self.selection.icon = Some(id.to_string());
        if let Err(err) = self.preferences.push_recent_icon(id) {
            tracing::warn!(icon = id, error = %err, "failed to record recent icon");
        }
        tracing::debug!(icon = id, "selected icon");
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.icon = None;
    }

    /// Sets the color and records it as recently used.
    pub fn set_color(&mut self, color: HexColor) {
        self.selection.set_color(color);
        if let Err(err) = self.preferences.push_recent_color(color) {
            tracing::warn!(%color, error = %err, "failed to record recent color");
        }
    }

    pub fn set_size(&mut self, size: u32) {
        self.selection.set_size(size);
    }

    pub fn set_stroke_weight(&mut self, stroke_weight: f32) {
        self.selection.set_stroke_weight(stroke_weight);
    }

    // ------------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------------

    /// Flips favorite membership; returns whether `id` is now a favorite.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, CustomizeError> {
        if !self.catalog.contains(id) {
            return Err(CustomizeError::UnknownIcon(id.to_string()));
        }
        Ok(self.preferences.toggle_favorite(id)?)
    }

    /// Unreadable preferences count as "not a favorite".
    pub fn is_favorite(&self, id: &str) -> bool {
        self.preferences.is_favorite(id).unwrap_or_else(|err| {
            tracing::warn!(icon = id, error = %err, "failed to read favorites");
            false
        })
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    fn require_selection(&self) -> Result<&IconRecord, CustomizeError> {
        self.selected_icon().ok_or(CustomizeError::NoSelection)
    }

    /// SVG markup for the current selection.
    pub fn render_markup(&self) -> Result<String, CustomizeError> {
        let icon = self.require_selection()?;
        let s = &self.selection;
        Ok(self
            .renderer
            .render_to_markup(icon, s.size, s.color, s.stroke_weight))
    }

    /// PNG raster for the current selection.
    pub fn render_raster(&self) -> Result<RasterImage, CustomizeError> {
        let icon = self.require_selection()?;
        let s = &self.selection;
        Ok(self
            .renderer
            .render_to_raster(icon, s.size, s.color, s.stroke_weight)?)
    }

    /// Runs `op` with the exporting flag raised; the flag is lowered on every
    /// exit path.
    fn bracket_export<T>(
        &self,
        action: &'static str,
        op: impl FnOnce() -> Result<T, CustomizeError>,
    ) -> Result<T, CustomizeError> {
        let _guard = ExportingGuard::enter(&self.exporting);
        let result = op();
        if let Err(err) = &result {
            tracing::error!(action, error = %err, "export failed");
        }
        result
    }

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------

    /// Renders the selection in `format` and hands it to `sink`.
    pub fn download(
        &self,
        format: ExportFormat,
        sink: &mut dyn ExportSink,
    ) -> Result<ExportReceipt, CustomizeError> {
        let icon = self.require_selection()?;
        self.bracket_export("download", || {
            let bytes = match format {
                ExportFormat::Png => self.render_raster()?.into_png(),
                ExportFormat::Svg => self.render_markup()?.into_bytes(),
            };
            let filename = build_filename(icon, self.selection.color, self.selection.size, format);
            let location = sink.deliver(&bytes, &filename)?;
            tracing::info!(file = %location.display(), "exported icon");
            Ok(ExportReceipt {
                filename,
                location,
                bytes: bytes.len(),
            })
        })
    }

    /// Copies the selection to the clipboard as an image.
    ///
    /// An unsupported clipboard is reported without attempting a write.
    pub fn copy_to_clipboard(&self, clipboard: &mut dyn Clipboard) -> Result<(), CustomizeError> {
        self.require_selection()?;
        if !clipboard.is_supported() {
            return Err(CustomizeError::ClipboardUnsupported);
        }
        self.bracket_export("copy", || {
            let image = self.render_raster()?;
            clipboard.copy_image(&image)?;
            tracing::info!(width = image.width(), height = image.height(), "copied icon");
            Ok(())
        })
    }

    /// Lets the user sample the color from screen.
    ///
    /// Returns the picked color, or `None` if the user cancelled.
    pub fn pick_screen_color(
        &mut self,
        picker: &mut dyn ScreenColorPicker,
    ) -> Result<Option<HexColor>, CustomizeError> {
        if !picker.is_supported() {
            return Err(CustomizeError::ColorPickerUnsupported);
        }
        let picked = picker.pick()?;
        if let Some(color) = picked {
            self.set_color(color);
        }
        Ok(picked)
    }

    // ------------------------------------------------------------------------
    // Sharing
    // ------------------------------------------------------------------------

    pub fn share_link(&self) -> Result<ShareLink, CustomizeError> {
        let icon = self.require_selection()?;
        Ok(ShareLink::new(
            icon.id.clone(),
            self.selection.color,
            self.selection.size,
        ))
    }

    /// Restores what a shared link carries. Unknown icons are skipped.
    pub fn apply_share_params(&mut self, params: &ShareParams) {
        if let Some(id) = &params.icon {
            if let Err(err) = self.select_icon(id) {
                tracing::warn!(error = %err, "ignoring shared icon");
            }
        }
        if let Some(color) = params.color {
            self.set_color(color);
        }
        if let Some(size) = params.size {
            self.set_size(size);
        }
    }
}

impl<S: KeyValueStore> Configurable for IconCustomizer<S> {
    /// Applies a profile without touching recents or favorites.
    ///
    /// An icon id that is not in the catalog is logged and skipped.
    fn apply_profile(&mut self, profile: &CustomizationProfile) {
        if let Some(id) = &profile.icon {
            if self.catalog.contains(id) {
                self.selection.icon = Some(id.clone());
            } else {
                tracing::warn!(icon = %id, "profile names an unknown icon");
            }
        }
        if let Some(color) = profile.color {
            self.selection.set_color(color);
        }
        if let Some(size) = profile.size {
            self.selection.set_size(size);
        }
        if let Some(stroke_weight) = profile.stroke_weight {
            self.selection.set_stroke_weight(stroke_weight);
        }
    }

    fn export_profile(&self) -> CustomizationProfile {
        CustomizationProfile {
            icon: self.selection.icon.clone(),
            color: Some(self.selection.color),
            size: Some(self.selection.size),
            stroke_weight: Some(self.selection.stroke_weight),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::error::{ClipboardError, ExportError, PickError, StorageError};
    use crate::storage::MemoryStore;

    fn customizer() -> IconCustomizer<MemoryStore> {
        IconCustomizer::new(Arc::new(IconCatalog::builtin().unwrap()), MemoryStore::new())
    }

    fn blue() -> HexColor {
        "#3B82F6".parse().unwrap()
    }

    #[derive(Default)]
    struct MemorySink {
        files: Vec<(String, Vec<u8>)>,
        fail: bool,
    }

    impl ExportSink for MemorySink {
        fn deliver(&mut self, bytes: &[u8], filename: &str) -> Result<PathBuf, ExportError> {
            if self.fail {
                return Err(ExportError::Write {
                    path: PathBuf::from(filename),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.files.push((filename.to_string(), bytes.to_vec()));
            Ok(PathBuf::from("memory").join(filename))
        }
    }

    struct MockClipboard {
        supported: bool,
        outcome: Result<(), ClipboardError>,
        writes: Vec<(u32, u32)>,
    }

    impl MockClipboard {
        fn new(supported: bool, outcome: Result<(), ClipboardError>) -> Self {
            Self {
                supported,
                outcome,
                writes: Vec::new(),
            }
        }
    }

    impl Clipboard for MockClipboard {
        fn is_supported(&self) -> bool {
            self.supported
        }

        fn copy_image(&mut self, image: &RasterImage) -> Result<(), ClipboardError> {
            self.writes.push((image.width(), image.height()));
            self.outcome.clone()
        }
    }

    struct MockPicker(Option<Result<Option<HexColor>, PickError>>);

    impl ScreenColorPicker for MockPicker {
        fn is_supported(&self) -> bool {
            self.0.is_some()
        }

        fn pick(&mut self) -> Result<Option<HexColor>, PickError> {
            self.0.clone().unwrap_or(Ok(None))
        }
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn starts_without_selection() {
        let c = customizer();
        assert_eq!(c.state(), CustomizerState::NoSelection);
        assert_eq!(c.selection().color(), HexColor::new(0, 0, 0));
        assert_eq!(c.selection().size(), DEFAULT_SIZE);
        assert_eq!(c.selection().stroke_weight(), DEFAULT_STROKE_WEIGHT);

        let mut sink = MemorySink::default();
        let err = c.download(ExportFormat::Png, &mut sink).unwrap_err();
        assert!(matches!(err, CustomizeError::NoSelection));
        assert_eq!(err.notice(), "Please select an icon first");
        assert!(sink.files.is_empty());
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let mut c = customizer();
        let err = c.select_icon("fa-unicorn").unwrap_err();
        assert!(matches!(err, CustomizeError::UnknownIcon(id) if id == "fa-unicorn"));
        assert_eq!(c.state(), CustomizerState::NoSelection);
    }

    #[test]
    fn setters_clamp() {
        let mut c = customizer();
        c.set_size(4);
        assert_eq!(c.selection().size(), MIN_SIZE);
        c.set_size(4096);
        assert_eq!(c.selection().size(), MAX_SIZE);
        c.set_stroke_weight(0.1);
        assert_eq!(c.selection().stroke_weight(), MIN_STROKE_WEIGHT);
        c.set_stroke_weight(9.0);
        assert_eq!(c.selection().stroke_weight(), MAX_STROKE_WEIGHT);
        c.set_stroke_weight(f32::NAN);
        assert_eq!(c.selection().stroke_weight(), DEFAULT_STROKE_WEIGHT);
    }

    #[test]
    fn selecting_and_coloring_record_recents() {
        let mut c = customizer();
        c.select_icon("fa-heart").unwrap();
        c.select_icon("lucide-heart").unwrap();
        c.select_icon("fa-heart").unwrap();
        c.set_color(blue());

        let recent = c.preferences().recent_icons().unwrap();
        assert_eq!(recent.as_slice(), ["fa-heart", "lucide-heart"]);
        let colors = c.preferences().recent_colors().unwrap();
        assert_eq!(colors.as_slice(), [blue()]);
        assert_eq!(c.state(), CustomizerState::Selected);
    }

    #[test]
    fn storage_failures_do_not_block_selection() {
        let catalog = Arc::new(IconCatalog::builtin().unwrap());
        let mut c = IconCustomizer::new(catalog, ReadOnlyStore);

        c.select_icon("tabler-home").unwrap();
        c.set_color(blue());
        assert_eq!(c.selection().icon(), Some("tabler-home"));
        assert_eq!(c.selection().color(), blue());

        let err = c.toggle_favorite("tabler-home").unwrap_err();
        assert!(matches!(err, CustomizeError::Storage(_)));
        assert!(!c.is_favorite("tabler-home"));
    }

    #[test]
    fn favorite_toggle_twice_is_noop() {
        let mut c = customizer();
        assert!(c.toggle_favorite("phosphor-star").unwrap());
        assert!(c.is_favorite("phosphor-star"));
        assert!(!c.toggle_favorite("phosphor-star").unwrap());
        assert!(!c.is_favorite("phosphor-star"));
        assert!(matches!(
            c.toggle_favorite("nope"),
            Err(CustomizeError::UnknownIcon(_))
        ));
    }

    #[test]
    fn flask_png_export_filename() {
        let mut c = customizer();
        c.select_icon("fa-flask").unwrap();
        c.set_color(blue());
        c.set_size(256);

        let mut sink = MemorySink::default();
        let receipt = c.download(ExportFormat::Png, &mut sink).unwrap();

        let stamp = receipt
            .filename
            .strip_prefix("flask-blue-256px-")
            .and_then(|rest| rest.strip_suffix(".png"))
            .unwrap();
        assert!(!stamp.is_empty() && stamp.chars().all(|c| c.is_ascii_digit()));

        let (name, bytes) = &sink.files[0];
        assert_eq!(name, &receipt.filename);
        assert_eq!(receipt.bytes, bytes.len());
        let decoded = image::load_from_memory(bytes).unwrap();
        assert_eq!(decoded.width(), 256 + 40);
        assert_eq!(c.state(), CustomizerState::Selected);
    }

    #[test]
    fn svg_export_writes_markup() {
        let mut c = customizer();
        c.select_icon("lucide-circle-check").unwrap();
        c.set_color("#10B981".parse().unwrap());

        let mut sink = MemorySink::default();
        let receipt = c.download(ExportFormat::Svg, &mut sink).unwrap();
        assert!(receipt.filename.starts_with("circle-check-green-128px-"));
        assert!(receipt.filename.ends_with(".svg"));

        let markup = String::from_utf8(sink.files[0].1.clone()).unwrap();
        assert!(markup.starts_with("<svg"));
        assert!(markup.contains(r##"stroke="#10B981""##));
    }

    #[test]
    fn failed_export_resets_flag() {
        let mut c = customizer();
        c.select_icon("fa-heart").unwrap();

        let mut sink = MemorySink {
            fail: true,
            ..MemorySink::default()
        };
        let err = c.download(ExportFormat::Png, &mut sink).unwrap_err();
        assert!(matches!(err, CustomizeError::Export(_)));
        assert_eq!(err.notice(), "Export failed");
        assert!(!c.is_exporting());
        assert_eq!(c.state(), CustomizerState::Selected);
    }

    #[test]
    fn copy_without_clipboard_makes_no_write() {
        let mut c = customizer();
        c.select_icon("fa-heart").unwrap();

        let mut clipboard = MockClipboard::new(false, Ok(()));
        let err = c.copy_to_clipboard(&mut clipboard).unwrap_err();

        assert!(matches!(err, CustomizeError::ClipboardUnsupported));
        assert!(err.is_capability_absent());
        assert!(clipboard.writes.is_empty());
        assert!(!c.is_exporting());
    }

    #[test]
    fn copy_permission_denied_is_distinct() {
        let mut c = customizer();
        c.select_icon("fa-heart").unwrap();

        let mut clipboard = MockClipboard::new(true, Err(ClipboardError::PermissionDenied));
        let err = c.copy_to_clipboard(&mut clipboard).unwrap_err();

        assert!(matches!(err, CustomizeError::ClipboardPermissionDenied));
        assert_eq!(err.notice(), "Clipboard permission denied");
        assert_eq!(clipboard.writes.len(), 1);
        assert!(!c.is_exporting());
    }

    #[test]
    fn copy_writes_padded_raster() {
        let mut c = customizer();
        c.select_icon("tabler-home").unwrap();
        c.set_size(64);
        c.set_stroke_weight(4.0);

        let mut clipboard = MockClipboard::new(true, Ok(()));
        c.copy_to_clipboard(&mut clipboard).unwrap();
        assert_eq!(clipboard.writes, [(104, 104)]);
    }

    #[test]
    fn screen_color_picking() {
        let mut c = customizer();

        let err = c.pick_screen_color(&mut MockPicker(None)).unwrap_err();
        assert!(matches!(err, CustomizeError::ColorPickerUnsupported));

        let picked = c.pick_screen_color(&mut MockPicker(Some(Ok(None)))).unwrap();
        assert_eq!(picked, None);
        assert_eq!(c.selection().color(), HexColor::default());

        let picked = c
            .pick_screen_color(&mut MockPicker(Some(Ok(Some(blue())))))
            .unwrap();
        assert_eq!(picked, Some(blue()));
        assert_eq!(c.selection().color(), blue());
        assert_eq!(c.preferences().recent_colors().unwrap().as_slice(), [blue()]);

        let failing = &mut MockPicker(Some(Err(PickError("portal closed".into()))));
        assert!(matches!(
            c.pick_screen_color(failing),
            Err(CustomizeError::Picker(_))
        ));
    }

    #[test]
    fn share_link_round_trip() {
        let mut c = customizer();
        c.select_icon("fa-flask").unwrap();
        c.set_color(blue());
        c.set_size(300);
        let url = c.share_link().unwrap().to_url("https://icony.app");

        let mut reopened = customizer();
        reopened.apply_share_params(&ShareParams::parse(&url));
        assert_eq!(reopened.selection().icon(), Some("fa-flask"));
        assert_eq!(reopened.selection().color(), blue());
        assert_eq!(reopened.selection().size(), 300);
    }

    #[test]
    fn share_params_skip_unknown_icon() {
        let mut c = customizer();
        c.apply_share_params(&ShareParams::parse("icon=missing&size=2048"));
        assert_eq!(c.state(), CustomizerState::NoSelection);
        assert_eq!(c.selection().size(), MAX_SIZE);
        assert!(matches!(c.share_link(), Err(CustomizeError::NoSelection)));
    }

    #[test]
    fn profile_apply_and_export() {
        let mut c = customizer();
        let profile = CustomizationProfile::new()
            .with_icon("phosphor-star")
            .with_color(blue())
            .with_size(1000)
            .with_stroke_weight(1.5);
        c.apply_profile(&profile);

        assert_eq!(c.selection().icon(), Some("phosphor-star"));
        assert_eq!(c.selection().size(), MAX_SIZE);
        assert!(c.preferences().recent_icons().unwrap().is_empty());

        let exported = c.export_profile();
        assert_eq!(exported.icon.as_deref(), Some("phosphor-star"));
        assert_eq!(exported.color, Some(blue()));
        assert_eq!(exported.size, Some(MAX_SIZE));
        assert_eq!(exported.stroke_weight, Some(1.5));
    }

    #[test]
    fn profile_with_unknown_icon_keeps_selection() {
        let mut c = customizer();
        c.select_icon("fa-heart").unwrap();
        c.apply_profile(&CustomizationProfile::new().with_icon("gone").with_size(32));
        assert_eq!(c.selection().icon(), Some("fa-heart"));
        assert_eq!(c.selection().size(), 32);
    }
}
