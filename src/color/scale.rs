//! Logarithmic size normalization and the per-run palette

use super::contrast::contrasting_text_color;
use super::gradient::{Gradient, Rgb};

/// Neutral colors for packages without a usable size
pub(crate) const FALLBACK_BACKGROUND: Rgb = Rgb::new(0x3f, 0x3f, 0x46);
pub(crate) const FALLBACK_TEXT: Rgb = Rgb::new(0xf4, 0xf4, 0xf5);

/// Log-scale bounds of the positive sizes in the current manifest
#[derive(Debug, Clone, Copy)]
pub(crate) struct SizeRange {
    log_min: f64,
    log_max: f64,
}

impl SizeRange {
    /// Compute the range over the positive sizes, ignoring zeros.
    /// Returns None when no positive size exists.
    pub(crate) fn from_sizes(sizes: impl IntoIterator<Item = u64>) -> Option<SizeRange> {
        let mut min = u64::MAX;
        let mut max = 0u64;
        for size in sizes {
            if size > 0 {
                min = min.min(size);
                max = max.max(size);
            }
        }
        if max == 0 {
            return None;
        }
        Some(SizeRange {
            log_min: (min as f64).ln(),
            log_max: (max as f64).ln(),
        })
    }

    /// Position of `size` on the log scale, in [0, 1].
    /// A degenerate range (all sizes equal) maps everything to 0 via an
    /// explicit guard, never through division by zero.
    pub(crate) fn normalize(&self, size: u64) -> f64 {
        debug_assert!(size > 0, "zero sizes never reach the log path");
        if self.log_max == self.log_min {
            return 0.0;
        }
        let percent = ((size as f64).ln() - self.log_min) / (self.log_max - self.log_min);
        percent.clamp(0.0, 1.0)
    }
}

/// Background/text pair for one package
#[derive(Debug, Clone, Copy)]
pub(crate) struct SizeColors {
    pub(crate) background: Rgb,
    pub(crate) text: Rgb,
}

/// Size-to-color mapping for one rendering pass. Pure: results depend
/// only on the sizes the palette was built over.
pub(crate) struct SizePalette {
    gradient: Gradient,
    range: Option<SizeRange>,
}

impl SizePalette {
    pub(crate) fn new(gradient: Gradient, sizes: impl IntoIterator<Item = u64>) -> SizePalette {
        SizePalette {
            gradient,
            range: SizeRange::from_sizes(sizes),
        }
    }

    /// Colors for a single package size. Zero-byte packages get the fixed
    /// neutral pair instead of a computed one.
    pub(crate) fn colors_for(&self, size: u64) -> SizeColors {
        match self.range {
            Some(range) if size > 0 => {
                let background = self.gradient.sample(range.normalize(size));
                SizeColors {
                    background,
                    text: contrasting_text_color(background),
                }
            }
            _ => SizeColors {
                background: FALLBACK_BACKGROUND,
                text: FALLBACK_TEXT,
            },
        }
    }
}
