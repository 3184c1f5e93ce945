//! Multi-stop gradient interpolation over 24-bit colors

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Parse a "#rrggbb" string (case-insensitive, exactly 6 hex digits)
    pub(crate) fn parse(hex: &str) -> Result<Rgb, String> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| format!("Invalid color '{}': missing '#'", hex))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid color '{}': expected 6 hex digits", hex));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
        Ok(Rgb {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        })
    }

    /// Format as lowercase "#rrggbb"
    pub(crate) fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceptual brightness (ITU-R BT.709 weights)
    pub(crate) fn luma(self) -> f64 {
        0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64
    }
}

/// Gradient control point
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColorStop {
    pub(crate) color: Rgb,
    pub(crate) pos: f64,
}

/// Piecewise-linear gradient over sorted color stops
#[derive(Debug)]
pub(crate) struct Gradient {
    stops: Vec<ColorStop>,
}

/// Default spectrum for size grading
pub(crate) const SIZE_SPECTRUM: [(&str, f64); 4] = [
    ("#0c4a6e", 0.0),  // Deep sky blue
    ("#0891b2", 0.25), // Vibrant cyan
    ("#c026d3", 0.75), // Neon fuchsia
    ("#f59e0b", 1.0),  // Warm amber
];

impl Gradient {
    /// Build a gradient from (hex color, position) pairs. Stops may arrive
    /// in any order and are sorted here. At least two stops are required,
    /// the lowest anchored at 0.0 and the highest at 1.0. Malformed colors
    /// are a configuration error, rejected before any sampling happens.
    pub(crate) fn new(stops: &[(&str, f64)]) -> Result<Gradient, String> {
        let mut parsed = stops
            .iter()
            .map(|&(hex, pos)| {
                if !pos.is_finite() || !(0.0..=1.0).contains(&pos) {
                    return Err(format!("Invalid stop position {} for '{}'", pos, hex));
                }
                Ok(ColorStop {
                    color: Rgb::parse(hex)?,
                    pos,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        parsed.sort_by(|a, b| a.pos.total_cmp(&b.pos));

        if parsed.len() < 2 {
            return Err("Gradient requires at least 2 color stops".to_string());
        }
        if parsed[0].pos != 0.0 {
            return Err("Gradient must have a stop at position 0.0".to_string());
        }
        if parsed[parsed.len() - 1].pos != 1.0 {
            return Err("Gradient must have a stop at position 1.0".to_string());
        }

        Ok(Gradient { stops: parsed })
    }

    /// Sample the gradient at `percent` in [0, 1].
    ///
    /// The first pair of stops bracketing `percent` defines the segment;
    /// each channel interpolates linearly within it and rounds to the
    /// nearest integer. percent 0.0 and 1.0 reproduce the end stops
    /// exactly.
    pub(crate) fn sample(&self, percent: f64) -> Rgb {
        let mut start = &self.stops[0];
        let mut end = &self.stops[self.stops.len() - 1];

        for pair in self.stops.windows(2) {
            if percent >= pair[0].pos && percent <= pair[1].pos {
                start = &pair[0];
                end = &pair[1];
                break;
            }
        }

        let range = end.pos - start.pos;
        let relative = if range == 0.0 {
            0.0
        } else {
            (percent - start.pos) / range
        };

        let lerp = |from: u8, to: u8| {
            (from as f64 + (to as f64 - from as f64) * relative)
                .round()
                .clamp(0.0, 255.0) as u8
        };

        Rgb {
            r: lerp(start.color.r, end.color.r),
            g: lerp(start.color.g, end.color.g),
            b: lerp(start.color.b, end.color.b),
        }
    }
}
