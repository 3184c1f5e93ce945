use colored::*;

use crate::color::SizePalette;
use crate::format::{FormattedSize, format_bytes};
use crate::manifest::PackageEntry;

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_package_table(packages: &[PackageEntry], palette: &SizePalette, decimals: u8) {
    let sizes: Vec<String> = packages
        .iter()
        .map(|pkg| {
            let FormattedSize { value, unit } = format_bytes(pkg.size, decimals);
            format!("{} {}", value, unit)
        })
        .collect();

    let name_w = column_width(packages.iter().map(|p| p.name.len()), "NAME".len());
    let ver_w = column_width(packages.iter().map(|p| p.version.len()), "VERSION".len());
    let arch_w = column_width(packages.iter().map(|p| p.arch.len()), "ARCH".len());
    let size_w = column_width(sizes.iter().map(|s| s.len()), "SIZE".len());

    // Width-padding a styled string would count the escape codes, so the
    // header row stays plain.
    println!(
        "{:<name_w$}  {:<ver_w$}  {:<arch_w$}  {}",
        "NAME", "VERSION", "ARCH", "SIZE"
    );
    println!("{}", "-".repeat(name_w + ver_w + arch_w + size_w + 8));

    for (pkg, size) in packages.iter().zip(&sizes) {
        let size_text = format!(" {:>size_w$} ", size);
        let colors = palette.colors_for(pkg.size);
        let cell = size_text
            .truecolor(colors.text.r, colors.text.g, colors.text.b)
            .on_truecolor(colors.background.r, colors.background.g, colors.background.b);
        println!(
            "{:<name_w$}  {:<ver_w$}  {:<arch_w$} {}",
            pkg.name, pkg.version, pkg.arch, cell
        );
    }
}

pub(crate) fn print_summary(packages: &[PackageEntry], decimals: u8) {
    let total: u64 = packages.iter().map(|p| p.size).sum();
    let FormattedSize { value, unit } = format_bytes(total, decimals);
    println!();
    println!("{} packages, {} {} total", packages.len(), value, unit);
}

fn column_width(lengths: impl Iterator<Item = usize>, header: usize) -> usize {
    lengths.chain(std::iter::once(header)).max().unwrap_or(header)
}
