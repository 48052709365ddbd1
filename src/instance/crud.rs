//! Instance create, list and remove operations.

use std::fs;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{AppError, Result};
use crate::links::replace_symlink;
use crate::ownership::chown_recursive;
use crate::paths::Layout;
use crate::validation::validate_instance_name;

use super::types::DirKind;

/// Where the `kind` directory of `instance` really lives.
pub fn physical_path(
    layout: &Layout,
    settings: &Settings,
    instance: &str,
    kind: DirKind,
) -> PathBuf {
    if settings.follow_fhs {
        layout.fhs_path(instance, kind)
    } else {
        layout.logical_path(instance, kind)
    }
}

/// Make the `kind` directory of `instance` exist with the configured owner,
/// linked into the instance tree when it lives elsewhere. Returns the
/// physical path.
pub fn ensure_directory(
    layout: &Layout,
    settings: &Settings,
    instance: &str,
    kind: DirKind,
) -> Result<PathBuf> {
    let logical = layout.logical_path(instance, kind);
    let physical = physical_path(layout, settings, instance, kind);

    fs::create_dir_all(&physical)
        .map_err(|e| AppError::io(format!("Failed to create directory {:?}: {}", physical, e)))?;
    chown_recursive(&physical, settings.owner)?;

    if physical != logical {
        replace_symlink(&physical, &logical)?;
    }
    Ok(physical)
}

/// Create an instance, or repair an existing one.
pub fn create_instance(layout: &Layout, settings: &Settings, instance: &str) -> Result<()> {
    validate_instance_name(instance)?;

    for kind in DirKind::ALL {
        let physical = ensure_directory(layout, settings, instance, kind)?;
        log::debug!("Instance {} {} at {:?}", instance, kind, physical);
    }
    log::info!("Instance {} is ready under {:?}", instance, layout.instance_dir(instance));
    Ok(())
}

/// Lazily enumerate instance names. A missing instances directory yields
/// nothing.
pub fn list_instances(layout: &Layout) -> Result<impl Iterator<Item = Result<String>>> {
    let dir = layout.instances_dir();
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => Some(entries),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            return Err(AppError::io(format!("Failed to read {:?}: {}", dir, e)));
        }
    };

    Ok(entries.into_iter().flatten().filter_map(|entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => return Some(Err(AppError::from(e))),
        };
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                log::warn!("Skipping instance with non UTF-8 name {:?}", raw);
                return None;
            }
        };
        (!name.starts_with('.') && entry.path().is_dir()).then_some(Ok(name))
    }))
}

/// Remove the instance tree. Directories relocated by FHS mode are not
/// touched. Returns whether anything was removed.
pub fn remove_instance(layout: &Layout, instance: &str) -> Result<bool> {
    validate_instance_name(instance)?;

    let instance_dir = layout.instance_dir(instance);
    match fs::symlink_metadata(&instance_dir) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("Instance directory {:?} does not exist", instance_dir);
            return Ok(false);
        }
        Err(e) => {
            return Err(AppError::io(format!("Failed to stat {:?}: {}", instance_dir, e)));
        }
    }

    fs::remove_dir_all(&instance_dir)
        .map_err(|e| AppError::io(format!("Failed to remove {:?}: {}", instance_dir, e)))?;
    log::info!("Removed {:?}", instance_dir);
    Ok(true)
}

/// FHS locations of `instance` that still exist and need manual cleanup.
pub fn fhs_leftovers(layout: &Layout, instance: &str) -> Vec<PathBuf> {
    DirKind::ALL
        .iter()
        .map(|&kind| layout.fhs_path(instance, kind))
        .filter(|path| path.exists())
        .collect()
}
