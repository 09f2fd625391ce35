//! Error types for every stage of the icon pipeline.
//!
//! Each concern has its own enum so callers can match on exactly the
//! failures a stage can produce. [`CustomizeError`] wraps them at the
//! orchestration layer and knows how to phrase each one for the user.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to parse a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color `{input}`")]
pub struct ColorParseError {
    pub input: String,
}

/// Failure while building or loading an [`IconCatalog`](crate::IconCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("icon record has an empty id")]
    EmptyId,

    #[error("duplicate icon id `{0}`")]
    DuplicateId(String),

    #[error("failed to read catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while turning an icon into pixels.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The generated markup could not be loaded as an image.
    #[error("failed to load icon markup: {0}")]
    Markup(String),

    /// No drawing surface could be allocated at the requested dimensions.
    #[error("cannot allocate a {width}x{height} drawing surface")]
    Surface { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Failure while delivering exported bytes.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("refusing to export to `{0}`: not a plain file name")]
    InvalidFilename(String),

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while writing to the system clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("image clipboard is not supported on this platform")]
    NotSupported,

    #[error("clipboard permission denied")]
    PermissionDenied,

    #[error("clipboard error: {0}")]
    Other(String),
}

/// Failure of the interactive screen color picker.
///
/// A user dismissing the picker is not an error; pickers report it as
/// `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("screen color picker failed: {0}")]
pub struct PickError(pub String);

/// Failure of the preference backend.
///
/// Corrupt stored values are not reported here; they decode to empty
/// collections.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access preference `{key}`")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode preference `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure of a user-level customization operation.
#[derive(Debug, Error)]
pub enum CustomizeError {
    #[error("no icon selected")]
    NoSelection,

    #[error("unknown icon `{0}`")]
    UnknownIcon(String),

    #[error("clipboard is not supported")]
    ClipboardUnsupported,

    #[error("clipboard permission denied")]
    ClipboardPermissionDenied,

    #[error("screen color picker is not supported")]
    ColorPickerUnsupported,

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Clipboard(ClipboardError),

    #[error(transparent)]
    Picker(#[from] PickError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CustomizeError {
    /// Short message suitable for a transient user-facing notice.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::NoSelection => "Please select an icon first",
            Self::UnknownIcon(_) => "Icon not found",
            Self::ClipboardUnsupported => "Clipboard is not supported on this system",
            Self::ClipboardPermissionDenied => "Clipboard permission denied",
            Self::ColorPickerUnsupported => "Screen color picking is not supported on this system",
            Self::Render(_) | Self::Export(_) => "Export failed",
            Self::Clipboard(_) => "Copy failed",
            Self::Picker(_) => "Color picking failed",
            Self::Storage(_) => "Could not save preferences",
        }
    }

    /// Returns true for failures caused by a missing platform capability.
    pub fn is_capability_absent(&self) -> bool {
        matches!(
            self,
            Self::ClipboardUnsupported | Self::ColorPickerUnsupported
        )
    }
}

impl From<ClipboardError> for CustomizeError {
    fn from(err: ClipboardError) -> Self {
        match err {
            ClipboardError::NotSupported => Self::ClipboardUnsupported,
            ClipboardError::PermissionDenied => Self::ClipboardPermissionDenied,
            other => Self::Clipboard(other),
        }
    }
}
