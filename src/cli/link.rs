use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::links::{apply_plan, ApplyReport, LinkPlan, PlanFailure};
use crate::session::{Prompter, Session, SessionOutcome};

/// Options for the interactive link command
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkOptions {
    /// Ask before applying changes
    pub confirm: bool,
    /// Print the plan instead of touching disk
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum LinkOutcome {
    Aborted,
    Unchanged,
    Declined,
    DryRun(LinkPlan),
    Applied {
        plan_failures: Vec<PlanFailure>,
        report: ApplyReport,
    },
}

impl LinkOutcome {
    /// Number of names that could not be linked or unlinked
    pub fn failure_count(&self) -> usize {
        match self {
            LinkOutcome::DryRun(plan) => plan.failures.len(),
            LinkOutcome::Applied {
                plan_failures,
                report,
            } => plan_failures.len() + report.failures.len(),
            _ => 0,
        }
    }
}

/// Run an interactive session and apply the resulting plan.
#[instrument(skip(prompter))]
pub fn run_link(
    source_dir: &Path,
    target_dir: &Path,
    options: &LinkOptions,
    prompter: &mut impl Prompter,
) -> Result<LinkOutcome> {
    let session = Session::new(source_dir, target_dir).with_confirmation(options.confirm);
    let outcome = session
        .run(prompter)
        .with_context(|| format!("Failed to run session for {}", source_dir.display()))?;

    let plan = match outcome {
        SessionOutcome::Aborted => return Ok(LinkOutcome::Aborted),
        SessionOutcome::Unchanged => return Ok(LinkOutcome::Unchanged),
        SessionOutcome::Declined => return Ok(LinkOutcome::Declined),
        SessionOutcome::Planned { plan, .. } => plan,
    };

    if options.dry_run {
        info!(
            links = plan.links.len(),
            removals = plan.removals.len(),
            "dry run, leaving disk untouched"
        );
        return Ok(LinkOutcome::DryRun(plan));
    }

    let report = apply_plan(&plan);
    info!(
        enabled = report.enabled.len(),
        disabled = report.disabled.len(),
        failed = report.failures.len(),
        "applied changes"
    );

    Ok(LinkOutcome::Applied {
        plan_failures: plan.failures,
        report,
    })
}
