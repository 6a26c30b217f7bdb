//! On-disk configuration: locating, reading and writing the TOML file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::config::Config;
use crate::constants::{APP_NAME, CONFIG_FILENAME};
use crate::error::{Error, Result};

/// Platform config directory (`~/.config/audiocut/` on Linux,
/// `~/Library/Application Support/audiocut/` on macOS,
/// `%APPDATA%\audiocut\` on Windows).
pub fn config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", APP_NAME).ok_or(Error::ConfigDirNotFound)?;
    Ok(dirs.config_dir().to_path_buf())
}

/// Full path of the config file inside [`config_dir`].
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Read the config at `path`.
///
/// A missing file yields the built-in defaults. A file that exists but
/// cannot be read or parsed is an error: ignoring it would silently drop
/// the user's tool paths.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(Error::ConfigRead {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the config from the default platform location.
///
/// Falls back to the built-in defaults when the platform config directory
/// cannot be determined, so first runs work without `config init`.
pub fn load_default_config() -> Result<Config> {
    match config_file_path() {
        Ok(path) => load_config_file(&path),
        Err(_) => Ok(Config::default()),
    }
}

/// Write `config` to `path` as pretty TOML, creating missing parent
/// directories.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let contents =
        toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize { source: e })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, contents).map_err(|e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `config` to the default platform location and return that path.
pub fn save_default_config(config: &Config) -> Result<PathBuf> {
    let path = config_file_path()?;
    save_config(config, &path)?;
    Ok(path)
}
