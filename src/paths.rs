//! XDG-style path resolution for the configuration directory.
//!
//! `$XDG_CONFIG_HOME` is preferred over OS-specific locations on every
//! platform, so the config file lives in the same place everywhere.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "gtx";

/// Returns the configuration directory for gtx.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/gtx` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/gtx` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}
