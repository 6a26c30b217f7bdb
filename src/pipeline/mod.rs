//! Cut pipeline orchestration.
//!
//! One pipeline invocation per cut request: probe the source, resolve the
//! retention ranges, extract one clip per range, concatenate them in order
//! and deliver the merged output. Each invocation owns an isolated
//! workspace that is released on success and failure alike.

mod runner;
mod workspace;

pub use runner::{CutRequest, CutSummary, run_cut};
pub use workspace::{Workspace, cleanup_all_workspaces};
