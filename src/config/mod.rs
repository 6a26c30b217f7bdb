//! Configuration management.

mod file;
mod types;

pub use file::{
    config_dir, config_file_path, load_config_file, load_default_config, save_config,
    save_default_config,
};
pub use types::{Config, DefaultsConfig, ToolsConfig};
