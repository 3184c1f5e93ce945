//! .PKGINFO extraction from zstd-compressed package archives

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Metadata parsed from a package's .PKGINFO
#[derive(Debug, PartialEq)]
pub(crate) struct PkgInfo {
    pub(crate) name: String,
    pub(crate) version: String,
    pub(crate) arch: String,
}

/// Stream-decompress the archive and pull metadata from its .PKGINFO
/// entry. The archive is never decompressed to memory as a whole.
pub(crate) fn read_pkginfo(path: &Path) -> Result<PkgInfo, String> {
    let file = File::open(path).map_err(|e| format!("Error opening file: {}", e))?;
    let decoder = zstd::stream::read::Decoder::new(file)
        .map_err(|e| format!("Not a zstd archive: {}", e))?;
    let mut archive = tar::Archive::new(decoder);

    let entries = archive
        .entries()
        .map_err(|e| format!("Not a tar archive: {}", e))?;
    for entry in entries {
        let mut entry = entry.map_err(|e| format!("Error reading archive: {}", e))?;
        let is_pkginfo = entry
            .path()
            .map(|p| p.as_ref() == Path::new(".PKGINFO"))
            .unwrap_or(false);
        if !is_pkginfo {
            continue;
        }
        let mut content = String::new();
        entry
            .read_to_string(&mut content)
            .map_err(|e| format!("Error reading .PKGINFO: {}", e))?;
        return parse_pkginfo(&content);
    }

    Err("No .PKGINFO entry found".to_string())
}

/// Parse .PKGINFO `key = value` lines. `pkgname` and `pkgver` are
/// required; comments and malformed lines are ignored.
pub(crate) fn parse_pkginfo(content: &str) -> Result<PkgInfo, String> {
    let mut name = None;
    let mut version = None;
    let mut arch = None;

    for line in content.lines() {
        if line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(" = ") else {
            continue;
        };
        match key.trim() {
            "pkgname" => name = Some(value.trim().to_string()),
            "pkgver" => version = Some(value.trim().to_string()),
            "arch" => arch = Some(value.trim().to_string()),
            _ => {}
        }
    }

    Ok(PkgInfo {
        name: name.ok_or("Missing pkgname in .PKGINFO")?,
        version: version.ok_or("Missing pkgver in .PKGINFO")?,
        arch: arch.unwrap_or_else(|| "unknown".to_string()),
    })
}
