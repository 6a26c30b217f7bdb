//! Time range handling and retention resolution.
//!
//! This module turns the caller-supplied list of ranges to remove into the
//! ordered, disjoint list of ranges to keep within the source duration.

mod range;
mod resolver;

pub use range::TimeRange;
pub use resolver::{ComplementMode, resolve_retained};
