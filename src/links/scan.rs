use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::resolve::{absolutize, normalize};

/// List the names of files directly inside `dir`, sorted by name.
///
/// Symlinks to regular files count as files; subdirectories are skipped.
/// Hidden files are included.
pub fn list_available(dir: &Path) -> io::Result<Vec<String>> {
    ensure_dir(dir)?;

    let mut names = Vec::new();
    for entry in entries(dir) {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry_name(&entry) {
            names.push(name);
        }
    }

    debug!(dir = %dir.display(), count = names.len(), "listed available files");
    Ok(names)
}

/// List the names of symlinks in `target_dir` that point at a file directly
/// inside `source_dir`, sorted by name.
///
/// Link targets are interpreted relative to `target_dir`, the way the OS
/// resolves them. The linked file does not need to exist.
pub fn list_enabled(source_dir: &Path, target_dir: &Path) -> io::Result<Vec<String>> {
    ensure_dir(target_dir)?;

    let cwd = std::env::current_dir()?;
    let source = absolutize(&cwd, source_dir);
    let target = absolutize(&cwd, target_dir);

    let mut names = Vec::new();
    for entry in entries(target_dir) {
        let entry = entry?;
        if !entry.path_is_symlink() {
            continue;
        }

        let link = fs::read_link(entry.path())?;
        let resolved = normalize(&target.join(&link));
        let points_into_source = resolved
            .parent()
            .is_some_and(|parent| same_dir(parent, &source));
        if !points_into_source {
            debug!(link = %entry.path().display(), to = %link.display(), "ignoring foreign symlink");
            continue;
        }

        if let Some(name) = entry_name(&entry) {
            names.push(name);
        }
    }

    debug!(dir = %target_dir.display(), count = names.len(), "listed enabled files");
    Ok(names)
}

fn entries(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
}

fn ensure_dir(dir: &Path) -> io::Result<()> {
    if fs::metadata(dir)?.is_dir() {
        Ok(())
    } else {
        Err(io::Error::other(format!("not a directory: {}", dir.display())))
    }
}

fn entry_name(entry: &DirEntry) -> Option<String> {
    let name = entry.file_name().to_str().map(str::to_string);
    if name.is_none() {
        warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
    }
    name
}

/// Compare two absolute directories, falling back to canonical paths so that
/// a directory reached through a symlinked parent still matches.
fn same_dir(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
