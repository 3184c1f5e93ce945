//! Chart rendering for the package size distribution

mod sizes;

pub(crate) use sizes::render_size_chart;

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#0A0A0C"; // Near black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#505050"; // Grid lines

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2800;
pub(super) const CHART_HEIGHT: u32 = 1200;

/// Maximum number of packages supported for chart rendering.
/// Category labels stop being legible beyond this.
pub(crate) fn max_chart_packages() -> usize {
    60
}
