mod link;
mod status;

pub use link::{run_link, LinkOptions, LinkOutcome};
pub use status::{format_status, run_status};
