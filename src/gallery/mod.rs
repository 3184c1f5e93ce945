//! Static gallery page rendering

mod page;

use std::fs;

use crate::color::SizePalette;
use crate::format::format_bytes;
use crate::manifest::PackageEntry;
use page::{PAGE_HEAD, PAGE_TAIL};

/// Fly-in animation classes, cycled across cards
const FLY_IN_DIRECTIONS: [&str; 4] = ["from-left", "from-right", "from-top", "from-bottom"];

/// Stagger delay: (index % 20) * 50 ms
const STAGGER_GROUP: usize = 20;
const STAGGER_STEP_MS: usize = 50;

/// Render the whole gallery document to `output_path`. `prefix` is the
/// directory component prepended to download links.
pub(crate) fn render_gallery_page(
    packages: &[PackageEntry],
    palette: &SizePalette,
    prefix: Option<&str>,
    decimals: u8,
    output_path: &str,
) -> Result<(), String> {
    let mut html = String::from(PAGE_HEAD);
    if packages.is_empty() {
        html.push_str("                <p class=\"loading-text\">No packages found.</p>\n");
    } else {
        for (index, pkg) in packages.iter().enumerate() {
            html.push_str(&build_card(pkg, palette, prefix, decimals, index));
        }
    }
    html.push_str(PAGE_TAIL);

    fs::write(output_path, html).map_err(|e| format!("Error writing {}: {}", output_path, e))
}

fn build_card(
    pkg: &PackageEntry,
    palette: &SizePalette,
    prefix: Option<&str>,
    decimals: u8,
    index: usize,
) -> String {
    let size = format_bytes(pkg.size, decimals);
    let colors = palette.colors_for(pkg.size);
    let direction = FLY_IN_DIRECTIONS[index % FLY_IN_DIRECTIONS.len()];
    let delay = (index % STAGGER_GROUP) * STAGGER_STEP_MS;
    let href = match prefix {
        Some(prefix) => format!("{}/{}", prefix, pkg.filename),
        None => pkg.filename.clone(),
    };

    format!(
        r#"                <a href="{href}"
                   class="package-card card-fly-in {direction}"
                   title="Download {name} {version}"
                   style="--size-bg-color: {bg}; --size-text-color: {fg}; animation-delay: {delay}ms;">
                    <div class="package-name">{name}</div>
                    <div class="package-meta">
                        <div class="package-info">
                            <span class="package-version">v{version}</span>
                            <span class="package-arch">arch: {arch}</span>
                        </div>
                        <div class="package-size">{size_value} {size_unit}</div>
                    </div>
                </a>
"#,
        href = escape_html(&href),
        name = escape_html(&pkg.name),
        version = escape_html(&pkg.version),
        arch = escape_html(&pkg.arch),
        bg = colors.background.to_hex(),
        fg = colors.text.to_hex(),
        size_value = size.value,
        size_unit = size.unit,
    )
}

/// Escape text for HTML body and attribute positions
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
