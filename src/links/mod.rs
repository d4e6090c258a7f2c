//! The on-disk side of lnka: computing link targets, listing available and
//! enabled files, and creating or removing the links.

mod apply;
mod plan;
mod resolve;
mod scan;

pub use apply::{apply_plan, create_link, remove_link, ApplyReport, LinkError};
pub use plan::{LinkPlan, PlanFailure, PlannedLink, PlannedRemoval};
pub use resolve::{resolve_link_target, ResolveError};
pub use scan::{list_available, list_enabled};
