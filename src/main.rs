use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lnka::cli::{format_status, run_link, run_status, LinkOptions, LinkOutcome};
use lnka::logging::init_logging;
use lnka::tui::{SelectOptions, TerminalPrompter, DEFAULT_MAX_VISIBLE_ITEMS};

#[derive(Parser)]
#[command(name = "lnka")]
#[command(about = "Pick which files from an available directory are linked into an enabled directory")]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the available files
    #[arg(required = true)]
    source_dir: Option<PathBuf>,

    /// Directory the symlinks are created in
    #[arg(required = true)]
    target_dir: Option<PathBuf>,

    /// Title shown above the list
    #[arg(long)]
    title: Option<String>,

    /// Maximum number of rows in the list
    #[arg(long, default_value_t = DEFAULT_MAX_VISIBLE_ITEMS)]
    max_items: usize,

    /// Ask before applying changes
    #[arg(long)]
    confirm: bool,

    /// Show what would change without touching the target directory
    #[arg(long)]
    dry_run: bool,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which available files are enabled
    Status {
        /// Directory holding the available files
        source_dir: PathBuf,
        /// Directory the symlinks live in
        target_dir: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Guard must be held for logs to flush
    let _guard = init_logging(cli.debug).ok();
    let verbose = std::env::var("LNKA_LOG").is_ok();
    let start = Instant::now();

    let result = run_command(cli);

    if verbose {
        eprintln!("Completed in {:.2?}", start.elapsed());
    }

    result
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Status {
            source_dir,
            target_dir,
            json,
        }) => {
            let listing = run_status(&source_dir, &target_dir)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                println!("{}", format_status(&listing));
            }
        }
        None => {
            let (Some(source_dir), Some(target_dir)) = (cli.source_dir, cli.target_dir) else {
                bail!("SOURCE_DIR and TARGET_DIR are required");
            };
            let options = LinkOptions {
                confirm: cli.confirm,
                dry_run: cli.dry_run,
            };
            let mut prompter = TerminalPrompter::new(SelectOptions {
                title: cli.title,
                max_visible_items: cli.max_items,
            });
            let outcome = run_link(&source_dir, &target_dir, &options, &mut prompter)?;
            report_outcome(&outcome)?;
        }
    }

    Ok(())
}

fn report_outcome(outcome: &LinkOutcome) -> Result<()> {
    match outcome {
        LinkOutcome::Aborted => println!("Aborted, no changes made."),
        LinkOutcome::Declined => println!("Cancelled, no changes made."),
        LinkOutcome::Unchanged => println!("No changes."),
        LinkOutcome::DryRun(plan) => {
            for link in &plan.links {
                println!("+ {} -> {}", link.name, link.target.display());
            }
            for removal in &plan.removals {
                println!("- {}", removal.name);
            }
            for failure in &plan.failures {
                eprintln!("! {}: {}", failure.name, failure.error);
            }
        }
        LinkOutcome::Applied {
            plan_failures,
            report,
        } => {
            if !report.enabled.is_empty() {
                println!(
                    "Enabled {} file(s): {}",
                    report.enabled.len(),
                    report.enabled.join(", ")
                );
            }
            if !report.disabled.is_empty() {
                println!(
                    "Disabled {} file(s): {}",
                    report.disabled.len(),
                    report.disabled.join(", ")
                );
            }
            for failure in plan_failures {
                eprintln!("Error: {}: {}", failure.name, failure.error);
            }
            for failure in &report.failures {
                eprintln!("Error: {}", failure);
            }
        }
    }

    let failures = outcome.failure_count();
    if failures > 0 {
        bail!("{} change(s) failed", failures);
    }
    Ok(())
}
