//! Human-readable byte formatting

/// Size units, base 1024
const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// A byte count split into a display value and its unit
pub(crate) struct FormattedSize {
    pub(crate) value: String,
    pub(crate) unit: &'static str,
}

/// Format a byte count with at most `decimals` fractional digits,
/// trailing zeros trimmed. The default precision at the CLI is 1.
/// Zero bytes short-circuits before the logarithm.
pub(crate) fn format_bytes(bytes: u64, decimals: u8) -> FormattedSize {
    if bytes == 0 {
        return FormattedSize {
            value: "0".to_string(),
            unit: UNITS[0],
        };
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    FormattedSize {
        value: trim_trailing_zeros(format!("{:.*}", decimals as usize, scaled)),
        unit: UNITS[exponent],
    }
}

fn trim_trailing_zeros(value: String) -> String {
    if !value.contains('.') {
        return value;
    }
    value.trim_end_matches('0').trim_end_matches('.').to_string()
}
