//! Image clipboard access.
//!
//! The platform clipboard is optional: [`Clipboard::is_supported`] is a
//! cheap probe callers check before attempting a write.

use crate::error::ClipboardError;
use crate::render::RasterImage;

/// A clipboard that can hold an image.
pub trait Clipboard {
    /// Returns true if image writes can be attempted at all.
    fn is_supported(&self) -> bool;

    /// Places a rendered image on the clipboard.
    fn copy_image(&mut self, image: &RasterImage) -> Result<(), ClipboardError>;
}

/// A clipboard for environments without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn is_supported(&self) -> bool {
        false
    }

    fn copy_image(&mut self, _image: &RasterImage) -> Result<(), ClipboardError> {
        Err(ClipboardError::NotSupported)
    }
}

#[cfg(feature = "clipboard")]
pub use system::SystemClipboard;

#[cfg(feature = "clipboard")]
mod system {
    use std::borrow::Cow;

    use arboard::ImageData;

    use super::Clipboard;
    use crate::error::ClipboardError;
    use crate::render::RasterImage;

    /// The operating system clipboard.
    ///
    /// Opening the clipboard can fail (no display server, for instance), in
    /// which case the probe reports it as unsupported.
    pub struct SystemClipboard {
        inner: Option<arboard::Clipboard>,
    }

    impl SystemClipboard {
        pub fn new() -> Self {
            let inner = match arboard::Clipboard::new() {
                Ok(clipboard) => Some(clipboard),
                Err(err) => {
                    tracing::debug!(error = %err, "system clipboard unavailable");
                    None
                }
            };
            Self { inner }
        }
    }

    impl Default for SystemClipboard {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clipboard for SystemClipboard {
        fn is_supported(&self) -> bool {
            self.inner.is_some()
        }

        fn copy_image(&mut self, image: &RasterImage) -> Result<(), ClipboardError> {
            let clipboard = self.inner.as_mut().ok_or(ClipboardError::NotSupported)?;
            let pixels = image.pixels();
            let data = ImageData {
                width: pixels.width() as usize,
                height: pixels.height() as usize,
                bytes: Cow::Borrowed(pixels.as_raw().as_slice()),
            };
            clipboard.set_image(data).map_err(map_error)
        }
    }

    fn map_error(err: arboard::Error) -> ClipboardError {
        match err {
            arboard::Error::ClipboardNotSupported => ClipboardError::NotSupported,
            other => ClipboardError::Other(other.to_string()),
        }
    }
}
