//! Export file naming and delivery.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::color::HexColor;
use crate::error::ExportError;
use crate::icon::IconRecord;

// ============================================================================
// ExportFormat
// ============================================================================

/// The file formats an icon can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

// ============================================================================
// Filenames
// ============================================================================

/// Lowercases a display name and joins its words with `-`.
///
/// `"Arrow Right"` becomes `"arrow-right"`.
pub fn kebab_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Builds an export filename for a fixed timestamp.
///
/// The shape is `{name}-{preset color or "custom"}-{size}px-{millis}.{ext}`.
pub fn build_filename_at(
    icon: &IconRecord,
    color: HexColor,
    size: u32,
    format: ExportFormat,
    unix_millis: u128,
) -> String {
    format!(
        "{}-{}-{}px-{}.{}",
        kebab_name(&icon.name),
        color.file_label(),
        size,
        unix_millis,
        format.extension()
    )
}

/// Builds an export filename stamped with the current time.
pub fn build_filename(icon: &IconRecord, color: HexColor, size: u32, format: ExportFormat) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    build_filename_at(icon, color, size, format, millis)
}

// ============================================================================
// Sinks
// ============================================================================

/// What a completed export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub filename: String,
    pub location: PathBuf,
    pub bytes: usize,
}

/// Destination for exported file contents.
pub trait ExportSink {
    /// Stores `bytes` under `filename` and returns where they ended up.
    fn deliver(&mut self, bytes: &[u8], filename: &str) -> Result<PathBuf, ExportError>;
}

/// Writes exports into a directory.
///
/// Files are written to a hidden temporary name first and then renamed, so a
/// partially written export is never visible under its final name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&mut self, bytes: &[u8], filename: &str) -> Result<PathBuf, ExportError> {
        if !is_plain_filename(filename) {
            return Err(ExportError::InvalidFilename(filename.to_string()));
        }

        fs::create_dir_all(&self.dir).map_err(|source| ExportError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let target = self.dir.join(filename);
        let partial = self.dir.join(format!(".{filename}.part"));
        fs::write(&partial, bytes).map_err(|source| ExportError::Write {
            path: partial.clone(),
            source,
        })?;
        fs::rename(&partial, &target).map_err(|source| {
            let _ = fs::remove_file(&partial);
            ExportError::Write {
                path: target.clone(),
                source,
            }
        })?;

        tracing::debug!(path = %target.display(), bytes = bytes.len(), "wrote export");
        Ok(target)
    }
}

fn is_plain_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\', '\0'])
}
