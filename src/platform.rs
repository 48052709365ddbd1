//! Platform primitives: file ownership, account lookup and symlinks.

use std::path::Path;

use crate::error::{AppError, Result};

#[cfg(unix)]
use nix::unistd::{Gid, Group, Uid, User};
#[cfg(unix)]
use std::os::unix::fs::MetadataExt as _;

/// Owner uid and gid of `path`, following symlinks.
#[cfg(unix)]
pub fn path_owner(path: &Path) -> Result<(u32, u32)> {
    let meta = std::fs::metadata(path)
        .map_err(|e| AppError::io(format!("failed to stat {:?}: {}", path, e)))?;
    Ok((meta.uid(), meta.gid()))
}

/// Uid and primary gid of the named user, or `None` if unknown.
#[cfg(unix)]
pub fn lookup_user(name: &str) -> Result<Option<(u32, u32)>> {
    Ok(User::from_name(name)?.map(|user| (user.uid.as_raw(), user.gid.as_raw())))
}

/// Primary gid of the user with `uid`, or `None` if unknown.
#[cfg(unix)]
pub fn primary_gid(uid: u32) -> Result<Option<u32>> {
    Ok(User::from_uid(Uid::from_raw(uid))?.map(|user| user.gid.as_raw()))
}

/// Gid of the named group, or `None` if unknown.
#[cfg(unix)]
pub fn lookup_group(name: &str) -> Result<Option<u32>> {
    Ok(Group::from_name(name)?.map(|group| group.gid.as_raw()))
}

/// Change ownership of `path` unless it already matches. Returns whether
/// a change was made. `path` must not be a symlink.
#[cfg(unix)]
pub fn chown_if_needed(path: &Path, uid: u32, gid: u32) -> Result<bool> {
    let meta = std::fs::symlink_metadata(path)
        .map_err(|e| AppError::io(format!("failed to stat {:?}: {}", path, e)))?;
    if meta.uid() == uid && meta.gid() == gid {
        return Ok(false);
    }
    nix::unistd::chown(path, Some(Uid::from_raw(uid)), Some(Gid::from_raw(gid))).map_err(|e| {
        AppError::ownership(format!(
            "failed to change owner of {:?} to {}:{}: {}",
            path, uid, gid, e
        ))
    })?;
    Ok(true)
}

#[cfg(unix)]
pub fn create_symlink(target: &Path, link_path: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link_path)
        .map_err(|e| AppError::io(format!("failed to create symlink at {link_path:?}: {e}")))
}

#[cfg(not(unix))]
pub fn path_owner(_path: &Path) -> Result<(u32, u32)> {
    Err(AppError::ownership("file ownership is not supported on this platform"))
}

#[cfg(not(unix))]
pub fn lookup_user(_name: &str) -> Result<Option<(u32, u32)>> {
    Err(AppError::ownership("user lookup is not supported on this platform"))
}

#[cfg(not(unix))]
pub fn primary_gid(_uid: u32) -> Result<Option<u32>> {
    Err(AppError::ownership("user lookup is not supported on this platform"))
}

#[cfg(not(unix))]
pub fn lookup_group(_name: &str) -> Result<Option<u32>> {
    Err(AppError::ownership("group lookup is not supported on this platform"))
}

#[cfg(not(unix))]
pub fn chown_if_needed(_path: &Path, _uid: u32, _gid: u32) -> Result<bool> {
    Err(AppError::ownership("file ownership is not supported on this platform"))
}

#[cfg(not(unix))]
pub fn create_symlink(_target: &Path, _link_path: &Path) -> Result<()> {
    Err(AppError::io("symlink creation not supported on this platform"))
}
