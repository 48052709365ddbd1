use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::platform::create_symlink;

/// Point `link_path` at `target`, replacing any symlink or file already
/// there. The new link is created beside the old one and renamed over it,
/// so readers never see the path missing.
pub fn replace_symlink(target: &Path, link_path: &Path) -> Result<()> {
    match fs::symlink_metadata(link_path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            if fs::read_link(link_path)?.as_path() == target {
                log::debug!("Symlink {:?} already points at {:?}", link_path, target);
                return Ok(());
            }
        }
        Ok(meta) if meta.is_dir() => {
            return Err(AppError::io(format!(
                "{:?} is a directory; move its contents to {:?} and remove it first",
                link_path, target
            )));
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(AppError::io(format!("failed to stat {:?}: {}", link_path, e)));
        }
    }

    let parent = link_path
        .parent()
        .ok_or_else(|| AppError::io("symlink path has no parent directory"))?;
    fs::create_dir_all(parent)
        .map_err(|e| AppError::io(format!("failed to create directory {parent:?}: {e}")))?;

    let staging = staging_path(link_path)?;
    if fs::symlink_metadata(&staging).is_ok() {
        fs::remove_file(&staging)?;
    }
    create_symlink(target, &staging)?;
    if let Err(e) = fs::rename(&staging, link_path) {
        let _ = fs::remove_file(&staging);
        return Err(AppError::io(format!(
            "failed to move symlink into place at {link_path:?}: {e}"
        )));
    }
    log::info!("Linked {:?} -> {:?}", link_path, target);
    Ok(())
}

fn staging_path(link_path: &Path) -> Result<PathBuf> {
    let name = link_path
        .file_name()
        .ok_or_else(|| AppError::io(format!("invalid symlink path {link_path:?}")))?;
    let mut staging = std::ffi::OsString::from(".");
    staging.push(name);
    staging.push(format!(".{}.tmp", std::process::id()));
    Ok(link_path.with_file_name(staging))
}
