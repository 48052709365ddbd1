//! Instance directory management.
//!
//! Layout:
//! - instances/{name}/config, log, files, tmp - real directories, or
//!   symlinks to their FHS locations when FHS mode is on
//! - FHS mode: /etc/redmine/{name}, /var/log/redmine/{name},
//!   /var/lib/redmine/{name}/files, /var/cache/redmine/{name}

mod crud;
mod types;

pub use types::DirKind;

pub use crud::{
    create_instance, ensure_directory, fhs_leftovers, list_instances, physical_path,
    remove_instance,
};
