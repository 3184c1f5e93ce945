mod chart;
mod color;
mod format;
mod gallery;
mod manifest;
mod output;

use std::path::Path;

use clap::Parser;

use color::{Gradient, SIZE_SPECTRUM, SizePalette};
use manifest::{PackageEntry, load_manifest, scan_repo, write_manifest};
use output::{print_error, print_package_table, print_summary};

#[derive(Parser)]
#[command(
    name = "pkgdeck",
    version,
    about = "Package repository indexer with size-graded gallery and chart output",
    after_help = "Examples:
  pkgdeck x86_64                                Scan a repository and print the package table
  pkgdeck x86_64 --manifest packages.json       Also write the JSON manifest
  pkgdeck packages.json --html index.html       Render a gallery page from an existing manifest
  pkgdeck x86_64 --image sizes.png              Output a size distribution chart
  pkgdeck --no-color x86_64                     Disable colored output"
)]
struct Args {
    /// Repository directory to scan, or an existing packages.json manifest
    path: String,

    /// Write the package manifest as JSON
    #[arg(short, long, value_name = "PATH")]
    manifest: Option<String>,

    /// Write a static gallery page
    #[arg(long, value_name = "PATH")]
    html: Option<String>,

    /// Output size distribution chart as PNG image
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Decimal places for formatted sizes (0-6)
    #[arg(short, long, default_value = "1", value_name = "N")]
    decimals: u8,

    /// Download link prefix for gallery cards (defaults to the scanned
    /// directory's name; empty in manifest mode)
    #[arg(long, value_name = "DIR")]
    prefix: Option<String>,

    /// Suppress the package table (file outputs only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate precision
    if args.decimals > 6 {
        print_error("--decimals must be between 0 and 6");
        std::process::exit(1);
    }

    let path = Path::new(&args.path);
    if !path.exists() {
        print_error(&format!("No such file or directory: {}", args.path));
        std::process::exit(1);
    }

    // Validate output paths
    for out in [&args.manifest, &args.html, &args.image].into_iter().flatten() {
        if let Some(parent) = Path::new(out).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
    }

    let scanning = path.is_dir();
    let packages: Vec<PackageEntry> = if scanning {
        scan_repo(path)
    } else {
        load_manifest(path)
    }
    .unwrap_or_else(|e| {
        print_error(&e);
        std::process::exit(1);
    });

    if args.image.is_some() {
        if packages.is_empty() {
            print_error("--image requires at least one package");
            std::process::exit(1);
        }
        if packages.len() > chart::max_chart_packages() {
            print_error(&format!(
                "--image supports up to {} packages",
                chart::max_chart_packages()
            ));
            std::process::exit(1);
        }
    }

    let gradient = Gradient::new(&SIZE_SPECTRUM).unwrap_or_else(|e| {
        print_error(&e);
        std::process::exit(1);
    });
    let palette = SizePalette::new(gradient, packages.iter().map(|p| p.size));

    if !args.quiet {
        if packages.is_empty() {
            println!("No packages found.");
        } else {
            print_package_table(&packages, &palette, args.decimals);
            print_summary(&packages, args.decimals);
        }
    }

    if let Some(ref out) = args.manifest {
        match write_manifest(Path::new(out), &packages) {
            Ok(()) => eprintln!("Manifest saved to: {}", out),
            Err(e) => print_error(&e),
        }
    }

    if let Some(ref out) = args.html {
        // Cards link to <prefix>/<filename>; scanning derives the prefix
        // from the repository directory name.
        let prefix = args.prefix.clone().or_else(|| {
            if scanning {
                path.file_name().map(|n| n.to_string_lossy().into_owned())
            } else {
                None
            }
        });
        match gallery::render_gallery_page(&packages, &palette, prefix.as_deref(), args.decimals, out)
        {
            Ok(()) => eprintln!("Gallery saved to: {}", out),
            Err(e) => print_error(&e),
        }
    }

    if let Some(ref out) = args.image {
        match chart::render_size_chart(&packages, &palette, out) {
            Ok(()) => eprintln!("Chart saved to: {}", out),
            Err(e) => print_error(&e),
        }
    }
}
