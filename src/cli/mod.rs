//! CLI argument parsing and command handling.

mod args;
mod validators;

pub use args::{Cli, Command, ConfigAction, CutArgs};
pub use validators::parse_timeout;
