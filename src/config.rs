use std::path::Path;

use crate::error::{AppError, Result};
use crate::ownership::Ownership;
use crate::paths::Layout;

/// Key in the defaults file overriding the owner of instance directories.
pub const OWNER_KEY: &str = "REDMINE_INSTANCES_OWNER";
/// Key in the defaults file enabling FHS mode.
pub const FOLLOW_FHS_KEY: &str = "REDMINE_INSTANCES_FOLLOW_FHS";

/// Settings read once at startup and passed to every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub owner: Ownership,
    pub follow_fhs: bool,
}

impl Settings {
    /// Defaults are the current owner of the base directory and FHS mode
    /// off; the defaults file at `defaults_file` may override both.
    pub fn load(layout: &Layout, defaults_file: &Path) -> Result<Self> {
        let mut settings = Self {
            owner: Ownership::of_path(layout.base_dir())?,
            follow_fhs: false,
        };

        if !defaults_file.exists() {
            log::debug!("No defaults file at {:?}", defaults_file);
            return Ok(settings);
        }

        log::debug!("Reading defaults from {:?}", defaults_file);
        let entries = dotenvy::from_path_iter(defaults_file).map_err(|e| {
            AppError::config(format!("failed to read {:?}: {}", defaults_file, e))
        })?;
        for entry in entries {
            let (key, value) = entry.map_err(|e| {
                AppError::config(format!("failed to parse {:?}: {}", defaults_file, e))
            })?;
            match key.as_str() {
                OWNER_KEY => settings.owner = Ownership::parse(&value)?,
                FOLLOW_FHS_KEY => settings.follow_fhs = parse_flag(&value),
                _ => {}
            }
        }

        log::debug!(
            "Owner {}, FHS mode {}",
            settings.owner,
            if settings.follow_fhs { "on" } else { "off" }
        );
        Ok(settings)
    }
}

/// Boolean-like strings as written in shell defaults files.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "1" | "on"
    )
}
