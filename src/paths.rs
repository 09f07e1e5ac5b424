//! Input discovery and output naming
//!
//! Output files are never clobbered unless the caller asks for it: a taken
//! name gets a numeric suffix (`curves.png` → `curves_1.png` →
//! `curves_2.png` ...). This is the only protection against concurrent
//! writers; two processes racing for the same name can still collide.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// List regular files in `dir` whose name ends with `.{extension}`.
///
/// Not recursive. Sorted by path so runs are processed deterministically.
///
/// # Errors
///
/// Returns error if the directory cannot be read.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{extension}");
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(&suffix));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// List the direct subdirectories of `dir` as `(name, path)` pairs, sorted
/// by name. Entries with non UTF-8 names are skipped.
///
/// # Errors
///
/// Returns error if the directory cannot be read.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            dirs.push((name.to_string(), path));
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Split a path into `(stem, extension)` where extension keeps its dot.
///
/// `out/curves.png` → `("curves", ".png")`; `out/curves` → `("curves", "")`.
fn stem_and_extension(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (stem, ext)
}

/// Return `path` if nothing exists there, otherwise the first free
/// `{stem}_{i}{ext}` sibling for `i = 1, 2, ...`.
#[must_use]
pub fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }
    let (stem, ext) = stem_and_extension(path);
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    (1u64..)
        .map(|i| parent.join(format!("{stem}_{i}{ext}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Prefix the file name of `path`: `IMG/curves.png` + `mAP50` →
/// `IMG/mAP50_curves.png`.
#[must_use]
pub fn prefixed_path(path: &Path, prefix: &str) -> PathBuf {
    let (stem, ext) = stem_and_extension(path);
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{prefix}_{stem}{ext}"))
}

/// Create the parent directory of `path` if it has one.
///
/// # Errors
///
/// Returns error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
