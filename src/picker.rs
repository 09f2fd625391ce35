//! Interactive screen color picking.

use crate::color::HexColor;
use crate::error::PickError;

/// Lets the user sample a color from anywhere on screen.
pub trait ScreenColorPicker {
    /// Returns true if the platform offers a picker.
    fn is_supported(&self) -> bool;

    /// Blocks until the user picks a color.
    ///
    /// Returns `Ok(None)` when the user dismisses the picker.
    fn pick(&mut self) -> Result<Option<HexColor>, PickError>;
}

/// A picker for platforms without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPicker;

impl ScreenColorPicker for NoPicker {
    fn is_supported(&self) -> bool {
        false
    }

    fn pick(&mut self) -> Result<Option<HexColor>, PickError> {
        Ok(None)
    }
}
