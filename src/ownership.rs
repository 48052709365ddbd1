//! Owner:group handling for instance directories.

use std::fmt;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{AppError, Result};
use crate::platform;

/// Numeric owner and group applied to every physical instance directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    uid: u32,
    gid: u32,
}

impl Ownership {
    pub fn new(uid: u32, gid: u32) -> Self {
        Self { uid, gid }
    }

    pub fn uid(&self) -> u32 {
        self.uid
    }

    pub fn gid(&self) -> u32 {
        self.gid
    }

    /// Current owner and group of `path`.
    pub fn of_path(path: &Path) -> Result<Self> {
        let (uid, gid) = platform::path_owner(path)?;
        Ok(Self::new(uid, gid))
    }

    /// Parse `user[:group]`. Each part is a name or a numeric id; a bare
    /// user takes that user's primary group.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        let (user, group) = match value.split_once(':') {
            Some((user, group)) => (user, Some(group)),
            None => (value, None),
        };
        if user.is_empty() {
            return Err(AppError::ownership(format!("missing user in {:?}", value)));
        }

        let (uid, primary_gid) = resolve_user(user)?;
        let gid = match group {
            Some(group) if !group.is_empty() => resolve_group(group)?,
            _ => primary_gid.ok_or_else(|| {
                AppError::ownership(format!("cannot determine primary group of {:?}", user))
            })?,
        };
        Ok(Self::new(uid, gid))
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.uid, self.gid)
    }
}

fn resolve_user(user: &str) -> Result<(u32, Option<u32>)> {
    if let Some((uid, gid)) = platform::lookup_user(user)? {
        return Ok((uid, Some(gid)));
    }
    let uid: u32 = user
        .parse()
        .map_err(|_| AppError::ownership(format!("unknown user {:?}", user)))?;
    Ok((uid, platform::primary_gid(uid)?))
}

fn resolve_group(group: &str) -> Result<u32> {
    if let Some(gid) = platform::lookup_group(group)? {
        return Ok(gid);
    }
    group
        .parse()
        .map_err(|_| AppError::ownership(format!("unknown group {:?}", group)))
}

/// Apply `owner` to `root` and everything below it. Symlinks are not
/// followed and keep their ownership.
pub fn chown_recursive(root: &Path, owner: Ownership) -> Result<()> {
    let mut changed = 0usize;
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.path_is_symlink() {
            log::debug!("Skipping symlink {:?}", entry.path());
        } else if platform::chown_if_needed(entry.path(), owner.uid, owner.gid)? {
            changed += 1;
        }
    }
    if changed > 0 {
        log::info!("Changed owner of {} entries under {:?} to {}", changed, root, owner);
    }
    Ok(())
}
