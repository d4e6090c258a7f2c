use std::path::Path;

use anyhow::{Context, Result};

use crate::session::{load_listing, Listing};

/// Load the enabled state of every available file without prompting.
pub fn run_status(source_dir: &Path, target_dir: &Path) -> Result<Listing> {
    load_listing(source_dir, target_dir).with_context(|| {
        format!(
            "Failed to read status of {} -> {}",
            source_dir.display(),
            target_dir.display()
        )
    })
}

/// Plain-text report: one `[x]`/`[ ]` line per available file and a total.
pub fn format_status(listing: &Listing) -> String {
    let mut out = String::new();
    for name in &listing.available {
        let mark = if listing.is_enabled(name) { 'x' } else { ' ' };
        out.push_str(&format!("[{}] {}\n", mark, name));
    }
    out.push_str(&format!(
        "{} of {} enabled",
        listing.enabled.len(),
        listing.available.len()
    ));
    out
}
