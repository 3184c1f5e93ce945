//! Package manifest: repository scanning and JSON (de)serialization

mod pkginfo;

pub(crate) use pkginfo::read_pkginfo;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::output::print_warning;

/// Package archive filename suffix
pub(crate) const PKG_SUFFIX: &str = ".pkg.tar.zst";

/// One package record in the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PackageEntry {
    pub(crate) name: String,
    pub(crate) version: String,
    pub(crate) arch: String,
    pub(crate) size: u64,
    pub(crate) filename: String,
}

/// Scan a repository directory for package archives and build manifest
/// entries, sorted by case-insensitive name. A package whose metadata
/// cannot be read is warned about and skipped, never fatal.
pub(crate) fn scan_repo(dir: &Path) -> Result<Vec<PackageEntry>, String> {
    let read_err = |e| format!("Error reading directory {}: {}", dir.display(), e);
    let entries = fs::read_dir(dir).map_err(read_err)?;

    let mut packages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(read_err)?;
        let filename = entry.file_name().to_string_lossy().into_owned();
        if !filename.ends_with(PKG_SUFFIX) {
            continue;
        }
        // Per-package failures (stat or metadata extraction) are skipped,
        // never fatal to the scan.
        let metadata = match fs::metadata(entry.path()) {
            Ok(metadata) => metadata,
            Err(e) => {
                print_warning(&format!("skipping '{}': {}", filename, e));
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }
        let info = match read_pkginfo(&entry.path()) {
            Ok(info) => info,
            Err(e) => {
                print_warning(&format!("skipping '{}': {}", filename, e));
                continue;
            }
        };
        packages.push(PackageEntry {
            name: info.name,
            version: info.version,
            arch: info.arch,
            size: metadata.len(),
            filename,
        });
    }

    packages.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(packages)
}

/// Load an existing packages.json manifest
pub(crate) fn load_manifest(path: &Path) -> Result<Vec<PackageEntry>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Error opening manifest {}: {}", path.display(), e))?;
    serde_json::from_str(&data).map_err(|e| format!("Invalid manifest {}: {}", path.display(), e))
}

/// Write the manifest as pretty-printed JSON
pub(crate) fn write_manifest(path: &Path, packages: &[PackageEntry]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(packages)
        .map_err(|e| format!("Failed to serialize manifest: {}", e))?;
    fs::write(path, json).map_err(|e| format!("Error writing {}: {}", path.display(), e))
}
