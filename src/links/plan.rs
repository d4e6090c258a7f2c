use std::path::{Path, PathBuf};

use tracing::warn;

use super::resolve::{resolve_link_target, ResolveError};

/// A symlink to create at `link_path` with contents `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLink {
    pub name: String,
    pub link_path: PathBuf,
    pub target: PathBuf,
}

/// A symlink to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRemoval {
    pub name: String,
    pub link_path: PathBuf,
}

/// A name whose link target could not be computed. Only that name is skipped.
#[derive(Debug)]
pub struct PlanFailure {
    pub name: String,
    pub error: ResolveError,
}

/// Filesystem changes needed to bring the target directory in line with a
/// selection. Building a plan never touches the disk.
#[derive(Debug, Default)]
pub struct LinkPlan {
    pub links: Vec<PlannedLink>,
    pub removals: Vec<PlannedRemoval>,
    pub failures: Vec<PlanFailure>,
}

impl LinkPlan {
    pub fn build(
        source_dir: &Path,
        target_dir: &Path,
        to_enable: &[String],
        to_disable: &[String],
    ) -> Self {
        let mut plan = LinkPlan::default();

        for name in to_enable {
            match resolve_link_target(source_dir, target_dir, name) {
                Ok(target) => plan.links.push(PlannedLink {
                    name: name.clone(),
                    link_path: target_dir.join(name),
                    target,
                }),
                Err(error) => {
                    warn!(name = %name, error = %error, "cannot compute link target");
                    plan.failures.push(PlanFailure {
                        name: name.clone(),
                        error,
                    });
                }
            }
        }

        plan.removals = to_disable
            .iter()
            .map(|name| PlannedRemoval {
                name: name.clone(),
                link_path: target_dir.join(name),
            })
            .collect();

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.removals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_plan_sibling_dirs() {
        let plan = LinkPlan::build(
            Path::new("/etc/app/available"),
            Path::new("/etc/app/enabled"),
            &names(&["b.conf", "a.conf"]),
            &names(&["old.conf"]),
        );

        assert_eq!(plan.links.len(), 2);
        assert_eq!(plan.links[0].name, "b.conf");
        assert_eq!(plan.links[0].link_path, PathBuf::from("/etc/app/enabled/b.conf"));
        assert_eq!(plan.links[0].target, PathBuf::from("../available/b.conf"));
        assert_eq!(plan.links[1].name, "a.conf");
        assert_eq!(
            plan.removals,
            vec![PlannedRemoval {
                name: "old.conf".to_string(),
                link_path: PathBuf::from("/etc/app/enabled/old.conf"),
            }]
        );
        assert!(plan.failures.is_empty());
    }

    #[test]
    fn test_bad_name_only_fails_that_item() {
        let plan = LinkPlan::build(
            Path::new("/a/src"),
            Path::new("/a/dst"),
            &names(&["good", "bad/name"]),
            &[],
        );

        assert_eq!(plan.links.len(), 1);
        assert_eq!(plan.links[0].name, "good");
        assert_eq!(plan.failures.len(), 1);
        assert_eq!(plan.failures[0].name, "bad/name");
    }

    #[test]
    fn test_empty_plan() {
        let plan = LinkPlan::build(Path::new("/a"), Path::new("/b"), &[], &[]);
        assert!(plan.is_empty());
    }
}
