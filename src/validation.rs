use std::path::{Component, Path};

use crate::error::{AppError, Result};

/// Instance names become a single path component under the instances root.
pub fn validate_instance_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(AppError::usage("instance name must not be empty"));
    }

    let mut components = Path::new(name).components();
    let is_single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == name
    );
    if !is_single_normal {
        return Err(AppError::usage(format!("invalid instance name: {:?}", name)));
    }
    Ok(())
}
