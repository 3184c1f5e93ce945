//! Size distribution chart (one gradient-colored bar per package)

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    datatype::DataPointItem,
    element::{AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, TextStyle},
    renderer::ImageFormat,
    series::Bar,
};

use super::{CHART_HEIGHT, CHART_WIDTH, COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT, max_chart_packages};
use crate::color::SizePalette;
use crate::manifest::PackageEntry;

/// Render the package size distribution to a PNG file. Every bar carries
/// the same background color the package gets in the gallery.
pub(crate) fn render_size_chart(
    packages: &[PackageEntry],
    palette: &SizePalette,
    output_path: &str,
) -> Result<(), String> {
    if packages.is_empty() || packages.len() > max_chart_packages() {
        return Err(format!("Chart requires 1-{} packages", max_chart_packages()));
    }

    let labels: Vec<String> = packages.iter().map(|p| p.name.clone()).collect();

    // Bar heights in MiB, rounded to 2 decimal places for display
    let data: Vec<DataPointItem> = packages
        .iter()
        .map(|pkg| {
            let mib = pkg.size as f64 / (1024.0 * 1024.0);
            let value = (mib * 100.0).round() / 100.0;
            let background = palette.colors_for(pkg.size).background;
            DataPointItem::new(value).item_style(ItemStyle::new().color(background.to_hex()))
        })
        .collect();

    let chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text("Package Size Distribution")
                .subtext(format!("{} packages", packages.len()))
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("3%")
                .bottom("7%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(
                    AxisLabel::new()
                        .color(COLOR_TEXT)
                        .font_size(20)
                        .rotate(45),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("MiB")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        )
        .series(Bar::new().name("Size").data(data));

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
