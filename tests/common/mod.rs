//! Shared helpers for integration tests

use std::fs::File;
use std::path::{Path, PathBuf};

/// Write a minimal .pkg.tar.zst archive with a .PKGINFO entry and a
/// payload of `payload_len` bytes.
pub fn write_package(
    dir: &Path,
    filename: &str,
    name: &str,
    version: &str,
    arch: &str,
    payload_len: usize,
) -> PathBuf {
    let path = dir.join(filename);
    let file = File::create(&path).unwrap();
    let encoder = zstd::stream::write::Encoder::new(file, 0).unwrap();
    let mut builder = tar::Builder::new(encoder);

    let pkginfo = format!(
        "# Generated by makepkg\npkgname = {}\npkgver = {}\narch = {}\n",
        name, version, arch
    );
    append_entry(&mut builder, ".PKGINFO", pkginfo.as_bytes());

    // Incompressible payload so archives get distinct on-disk sizes
    let payload: Vec<u8> = (0..payload_len)
        .map(|i| (i.wrapping_mul(2654435761) >> 7) as u8)
        .collect();
    append_entry(&mut builder, "usr/share/payload.bin", &payload);

    let encoder = builder.into_inner().unwrap();
    encoder.finish().unwrap();
    path
}

fn append_entry<W: std::io::Write>(builder: &mut tar::Builder<W>, path: &str, data: &[u8]) {
    let mut header = tar::Header::new_gnu();
    header.set_size(data.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder.append_data(&mut header, path, data).unwrap();
}
