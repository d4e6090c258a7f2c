use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::plan::LinkPlan;
use super::resolve::{resolve_link_target, ResolveError};

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("cannot compute link target for {name}: {source}")]
    Resolve {
        name: String,
        #[source]
        source: ResolveError,
    },
    #[error("failed to create link {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to remove link {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("refusing to remove {}: not a symlink", path.display())]
    NotASymlink { path: PathBuf },
}

/// Outcome of applying a [`LinkPlan`].
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub enabled: Vec<String>,
    pub disabled: Vec<String>,
    pub failures: Vec<LinkError>,
}

impl ApplyReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Create `target_dir/name` as a symlink to `source_dir/name`.
///
/// Returns the path of the new link.
pub fn create_link(source_dir: &Path, target_dir: &Path, name: &str) -> Result<PathBuf, LinkError> {
    let target = resolve_link_target(source_dir, target_dir, name).map_err(|source| {
        LinkError::Resolve {
            name: name.to_string(),
            source,
        }
    })?;
    let link_path = target_dir.join(name);
    symlink_at(&target, &link_path)?;
    Ok(link_path)
}

/// Remove the symlink `target_dir/name`. Anything other than a symlink is
/// left alone and reported as an error.
pub fn remove_link(target_dir: &Path, name: &str) -> Result<(), LinkError> {
    remove_link_at(&target_dir.join(name))
}

/// Apply a plan: removals first, then creations. Failures are collected per
/// item and do not stop the remaining changes.
pub fn apply_plan(plan: &LinkPlan) -> ApplyReport {
    let mut report = ApplyReport::default();

    for removal in &plan.removals {
        match remove_link_at(&removal.link_path) {
            Ok(()) => {
                info!(name = %removal.name, "disabled");
                report.disabled.push(removal.name.clone());
            }
            Err(e) => {
                warn!(name = %removal.name, error = %e, "disable failed");
                report.failures.push(e);
            }
        }
    }

    for link in &plan.links {
        match symlink_at(&link.target, &link.link_path) {
            Ok(()) => {
                info!(name = %link.name, target = %link.target.display(), "enabled");
                report.enabled.push(link.name.clone());
            }
            Err(e) => {
                warn!(name = %link.name, error = %e, "enable failed");
                report.failures.push(e);
            }
        }
    }

    report
}

fn symlink_at(target: &Path, link_path: &Path) -> Result<(), LinkError> {
    platform_symlink(target, link_path).map_err(|source| LinkError::Create {
        path: link_path.to_path_buf(),
        source,
    })
}

fn remove_link_at(link_path: &Path) -> Result<(), LinkError> {
    let metadata = fs::symlink_metadata(link_path).map_err(|source| LinkError::Remove {
        path: link_path.to_path_buf(),
        source,
    })?;
    if !metadata.file_type().is_symlink() {
        return Err(LinkError::NotASymlink {
            path: link_path.to_path_buf(),
        });
    }
    fs::remove_file(link_path).map_err(|source| LinkError::Remove {
        path: link_path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn platform_symlink(target: &Path, link_path: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link_path)
}

#[cfg(windows)]
fn platform_symlink(target: &Path, link_path: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link_path)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::links::plan::LinkPlan;
    use tempfile::TempDir;

    #[test]
    fn test_create_link_sibling_directories() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("services-available");
        let target = temp.path().join("services-enabled");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&target).unwrap();
        fs::write(source.join("test-file.yml"), "test content").unwrap();

        let link_path = create_link(&source, &target, "test-file.yml").unwrap();

        assert_eq!(
            fs::read_link(&link_path).unwrap(),
            PathBuf::from("../services-available/test-file.yml")
        );
        assert_eq!(fs::read_to_string(&link_path).unwrap(), "test content");
    }

    #[test]
    fn test_create_link_nested_directories() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("config").join("available");
        let target = temp.path().join("active");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir(&target).unwrap();
        fs::write(source.join("test.conf"), "config data").unwrap();

        let link_path = create_link(&source, &target, "test.conf").unwrap();

        assert_eq!(
            fs::read_link(&link_path).unwrap(),
            PathBuf::from("../config/available/test.conf")
        );
        assert_eq!(fs::read_to_string(&link_path).unwrap(), "config data");
    }

    #[test]
    fn test_create_link_missing_target_dir_fails() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        fs::create_dir(&source).unwrap();

        let result = create_link(&source, &temp.path().join("missing"), "a");
        assert!(matches!(result, Err(LinkError::Create { .. })));
    }

    #[test]
    fn test_remove_link_refuses_regular_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("real.conf"), "keep me").unwrap();

        let result = remove_link(temp.path(), "real.conf");
        assert!(matches!(result, Err(LinkError::NotASymlink { .. })));
        assert!(temp.path().join("real.conf").exists());
    }

    #[test]
    fn test_apply_plan_continues_past_failures() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("available");
        let target = temp.path().join("enabled");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&target).unwrap();
        for name in ["a", "b", "c"] {
            fs::write(source.join(name), name).unwrap();
        }
        std::os::unix::fs::symlink("../available/c", target.join("c")).unwrap();
        // "b" is occupied by a regular file, so creating its link fails
        fs::write(target.join("b"), "occupied").unwrap();

        let plan = LinkPlan::build(
            &source,
            &target,
            &["a".to_string(), "b".to_string()],
            &["c".to_string()],
        );
        let report = apply_plan(&plan);

        assert_eq!(report.enabled, vec!["a"]);
        assert_eq!(report.disabled, vec!["c"]);
        assert_eq!(report.failures.len(), 1);
        assert!(!report.is_success());
        assert_eq!(fs::read_to_string(target.join("a")).unwrap(), "a");
        assert!(fs::symlink_metadata(target.join("c")).is_err());
    }
}
