//! Discovery of patch images by file-name convention.
//!
//! A patch image is named `<name>.9.png` or `<name>.9.gif` (any case).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

const PATCH_SUFFIXES: [&str; 2] = [".9.png", ".9.gif"];

/// Whether `path` follows the patch-image naming convention.
pub fn is_patch_image(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();
    PATCH_SUFFIXES
        .iter()
        .any(|suffix| name.len() > suffix.len() && name.ends_with(suffix))
}

/// The output name stem: the file name without its `.9.ext` suffix.
pub fn patch_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let cut = name.len().saturating_sub(PATCH_SUFFIXES[0].len());
    if is_patch_image(path) && name.is_char_boundary(cut) {
        name[..cut].to_string()
    } else {
        name
    }
}

/// List patch images directly inside `dir`, sorted by path.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_patch_image(&path) {
            found.push(path);
        } else {
            log::debug!("Skipping {}", path.display());
        }
    }
    found.sort();
    Ok(found)
}
