//! Centralized path utilities for an installation.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::instance::DirKind;

/// Environment variable overriding the defaults file location.
pub const DEFAULTS_FILE_ENV: &str = "REDMINE_INSTANCES_DEFAULTS";

/// Name of the hosted application; used when building FHS locations.
pub const APP_NAME: &str = "redmine";

const DEFAULT_DEFAULTS_FILE: &str = "/etc/default/redmine";

/// Where an installation keeps its instances, and where FHS directories
/// go when FHS mode is on.
///
/// ```txt
/// <base>/
///     bin/redmine-instances
///     instances/
///         <instance>/{config,log,files,tmp}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    base_dir: PathBuf,
    fhs_root: PathBuf,
}

impl Layout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            fhs_root: PathBuf::from("/"),
        }
    }

    /// Evaluate the FHS table under `root` instead of `/`.
    pub fn with_fhs_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.fhs_root = root.into();
        self
    }

    /// Locate the installation from the running executable, which is
    /// expected at `<base>/bin/<exe>`.
    pub fn discover() -> Result<Self> {
        let exe = env::current_exe()
            .map_err(|e| AppError::io(format!("Cannot locate executable: {}", e)))?;
        let exe = exe.canonicalize().unwrap_or(exe);
        let base = exe
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| AppError::io(format!("Cannot derive base directory from {:?}", exe)))?;
        Ok(Self::new(base))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn fhs_root(&self) -> &Path {
        &self.fhs_root
    }

    /// Get the root directory holding every instance.
    pub fn instances_dir(&self) -> PathBuf {
        self.base_dir.join("instances")
    }

    /// Get the root directory for an instance.
    pub fn instance_dir(&self, instance: &str) -> PathBuf {
        self.instances_dir().join(instance)
    }

    /// Get the in-tree path of one of an instance's directories.
    pub fn logical_path(&self, instance: &str, kind: DirKind) -> PathBuf {
        self.instance_dir(instance).join(kind.name())
    }

    /// Get the FHS location of one of an instance's directories.
    pub fn fhs_path(&self, instance: &str, kind: DirKind) -> PathBuf {
        kind.fhs_path(&self.fhs_root, APP_NAME, instance)
    }
}

/// Get the path to the defaults file.
pub fn defaults_file_path() -> PathBuf {
    env::var_os(DEFAULTS_FILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DEFAULTS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_paths_live_under_instances_dir() {
        let layout = Layout::new("/usr/share/redmine");
        assert_eq!(
            layout.logical_path("alpha", DirKind::Log),
            PathBuf::from("/usr/share/redmine/instances/alpha/log")
        );
        assert_eq!(
            layout.instances_dir(),
            PathBuf::from("/usr/share/redmine/instances")
        );
    }

    #[test]
    fn fhs_paths_follow_fhs_root() {
        let layout = Layout::new("/opt/app").with_fhs_root("/tmp/root");
        assert_eq!(
            layout.fhs_path("alpha", DirKind::Config),
            PathBuf::from("/tmp/root/etc/redmine/alpha")
        );
        assert_eq!(
            Layout::new("/opt/app").fhs_path("alpha", DirKind::Files),
            PathBuf::from("/var/lib/redmine/alpha/files")
        );
    }
}
