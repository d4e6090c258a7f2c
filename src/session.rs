//! Session orchestration: load the listings, let the user pick, work out
//! what changes, and plan the links. Nothing here writes to disk.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::links::{list_available, list_enabled, LinkPlan};
use crate::tui::SelectError;

/// Interactive front end used by a [`Session`].
pub trait Prompter {
    /// Let the user pick from `available`, with `enabled` pre-selected.
    /// Returns the picked names in selection order.
    fn select(&mut self, available: Vec<String>, enabled: &[String]) -> Result<Vec<String>, SelectError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> Result<bool, SelectError>;
}

/// Files found on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub available: Vec<String>,
    pub enabled: Vec<String>,
}

impl Listing {
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.iter().any(|enabled| enabled == name)
    }
}

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("failed to list available files in {}: {source}", dir.display())]
    Available {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The available listing succeeded and is kept in `available`.
    #[error("failed to list enabled files in {}: {source}", dir.display())]
    Enabled {
        dir: PathBuf,
        available: Vec<String>,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Listing(#[from] ListingError),
    #[error(transparent)]
    Select(#[from] SelectError),
}

/// Load available and enabled names for a source/target pair.
pub fn load_listing(source_dir: &Path, target_dir: &Path) -> Result<Listing, ListingError> {
    let available = list_available(source_dir).map_err(|source| ListingError::Available {
        dir: source_dir.to_path_buf(),
        source,
    })?;

    let enabled = match list_enabled(source_dir, target_dir) {
        Ok(enabled) => enabled,
        Err(source) => {
            return Err(ListingError::Enabled {
                dir: target_dir.to_path_buf(),
                available,
                source,
            })
        }
    };

    Ok(Listing { available, enabled })
}

/// Difference between the current and the desired set of enabled names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// In selection order
    pub to_enable: Vec<String>,
    /// In listing order
    pub to_disable: Vec<String>,
}

impl ChangeSet {
    pub fn diff(selected: &[String], enabled: &[String]) -> Self {
        let selected_set: HashSet<&str> = selected.iter().map(String::as_str).collect();
        let enabled_set: HashSet<&str> = enabled.iter().map(String::as_str).collect();

        let to_enable = selected
            .iter()
            .filter(|name| !enabled_set.contains(name.as_str()))
            .cloned()
            .collect();
        let to_disable = enabled
            .iter()
            .filter(|name| !selected_set.contains(name.as_str()))
            .cloned()
            .collect();

        Self {
            to_enable,
            to_disable,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_enable.is_empty() && self.to_disable.is_empty()
    }

    /// Human readable summary, used as the confirmation message.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        if !self.to_enable.is_empty() {
            lines.push(format!(
                "Enable {} file(s): {}",
                self.to_enable.len(),
                self.to_enable.join(", ")
            ));
        }
        if !self.to_disable.is_empty() {
            lines.push(format!(
                "Disable {} file(s): {}",
                self.to_disable.len(),
                self.to_disable.join(", ")
            ));
        }
        lines.join("\n")
    }
}

#[derive(Debug)]
pub enum SessionOutcome {
    /// The user quit the selection or the confirmation
    Aborted,
    /// The selection matches what is already enabled
    Unchanged,
    /// The user answered no to the confirmation
    Declined,
    Planned { changes: ChangeSet, plan: LinkPlan },
}

/// One interactive run over a source/target directory pair
#[derive(Debug, Clone)]
pub struct Session {
    source_dir: PathBuf,
    target_dir: PathBuf,
    confirm: bool,
}

impl Session {
    pub fn new(source_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
            confirm: false,
        }
    }

    /// Ask for confirmation before planning any change.
    pub fn with_confirmation(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn load(&self) -> Result<Listing, ListingError> {
        load_listing(&self.source_dir, &self.target_dir)
    }

    /// Load the listings from disk and run the session.
    pub fn run(&self, prompter: &mut impl Prompter) -> Result<SessionOutcome, SessionError> {
        let listing = self.load()?;
        self.run_with_listing(listing, prompter)
    }

    #[instrument(skip_all, fields(source = %self.source_dir.display(), target = %self.target_dir.display()))]
    pub fn run_with_listing(
        &self,
        listing: Listing,
        prompter: &mut impl Prompter,
    ) -> Result<SessionOutcome, SessionError> {
        info!(
            available = listing.available.len(),
            enabled = listing.enabled.len(),
            "starting selection"
        );

        let selected = match prompter.select(listing.available, &listing.enabled) {
            Ok(selected) => selected,
            Err(SelectError::Aborted) => {
                info!("selection aborted");
                return Ok(SessionOutcome::Aborted);
            }
            Err(e) => return Err(e.into()),
        };

        let changes = ChangeSet::diff(&selected, &listing.enabled);
        info!(
            enable = changes.to_enable.len(),
            disable = changes.to_disable.len(),
            "computed changes"
        );
        if changes.is_empty() {
            return Ok(SessionOutcome::Unchanged);
        }

        if self.confirm {
            let message = format!("{}\n\nApply these changes?", changes.summary());
            match prompter.confirm(&message) {
                Ok(true) => {}
                Ok(false) => return Ok(SessionOutcome::Declined),
                Err(SelectError::Aborted) => return Ok(SessionOutcome::Aborted),
                Err(e) => return Err(e.into()),
            }
        }

        let plan = LinkPlan::build(
            &self.source_dir,
            &self.target_dir,
            &changes.to_enable,
            &changes.to_disable,
        );
        Ok(SessionOutcome::Planned { changes, plan })
    }
}
