//! Readable text color selection

use super::gradient::Rgb;

/// Near-white, for dark backgrounds
pub(crate) const TEXT_LIGHT: Rgb = Rgb::new(0xf4, 0xf4, 0xf5);

/// Near-black, for light backgrounds
pub(crate) const TEXT_DARK: Rgb = Rgb::new(0x1a, 0x1a, 0x1b);

/// Pick a readable text color for the given background.
/// Luma 128 and above counts as a light background.
pub(crate) fn contrasting_text_color(background: Rgb) -> Rgb {
    if background.luma() < 128.0 {
        TEXT_LIGHT
    } else {
        TEXT_DARK
    }
}
