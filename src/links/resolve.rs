//! Link target computation.
//!
//! Given the directory holding the real files (`source`) and the directory the
//! symlinks live in (`target`), computes what to write into `target/<name>` so
//! that it points at `source/<name>`. Targets are relative whenever the two
//! directories share a root, so a tree of links keeps working after the
//! common parent is moved or renamed.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
    #[error("invalid file name: {0:?}")]
    InvalidFileName(String),
}

/// Compute the symlink target for `target_dir/file_name` pointing at
/// `source_dir/file_name`.
///
/// Both directories may be absolute or relative to the working directory.
/// When they are the same directory the result is the bare file name.
pub fn resolve_link_target(
    source_dir: &Path,
    target_dir: &Path,
    file_name: &str,
) -> Result<PathBuf, ResolveError> {
    validate_file_name(file_name)?;

    if source_dir.is_absolute() && target_dir.is_absolute() {
        return Ok(resolve_with_base(Path::new("/"), source_dir, target_dir, file_name));
    }

    let cwd = std::env::current_dir().map_err(ResolveError::CurrentDir)?;
    Ok(resolve_with_base(&cwd, source_dir, target_dir, file_name))
}

/// Same as [`resolve_link_target`] with relative inputs anchored at `base`
/// instead of the process working directory. `file_name` is not validated.
pub(crate) fn resolve_with_base(
    base: &Path,
    source_dir: &Path,
    target_dir: &Path,
    file_name: &str,
) -> PathBuf {
    let source = absolutize(base, source_dir);
    let target = absolutize(base, target_dir);

    if source == target {
        return PathBuf::from(file_name);
    }

    match relative_path(&target, &source) {
        Some(rel) => rel.join(file_name),
        // No shared root (e.g. different drives), an absolute link is all we can do
        None => source.join(file_name),
    }
}

fn validate_file_name(file_name: &str) -> Result<(), ResolveError> {
    let has_separator = file_name.contains('/') || file_name.contains(std::path::MAIN_SEPARATOR);
    if file_name.is_empty() || file_name == "." || file_name == ".." || has_separator {
        return Err(ResolveError::InvalidFileName(file_name.to_string()));
    }
    Ok(())
}

/// Make `path` absolute against `base` and normalize it.
pub(crate) fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Lexically normalize a path: drop `.`, fold `..` into its parent.
///
/// `..` directly below the root stays at the root. Symlinks are not
/// followed, the filesystem is never touched.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Relative path leading from directory `from` to directory `to`.
///
/// Both paths must be absolute and normalized. Returns `None` when they do
/// not share a root.
fn relative_path(from: &Path, to: &Path) -> Option<PathBuf> {
    let from: Vec<Component> = from.components().collect();
    let to: Vec<Component> = to.components().collect();

    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();
    if common == 0 {
        return None;
    }

    let mut rel = PathBuf::new();
    for _ in common..from.len() {
        rel.push("..");
    }
    for component in &to[common..] {
        rel.push(component);
    }
    Some(rel)
}
