use std::fmt;
use std::path::{Path, PathBuf};

/// One of the four directories every instance owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirKind {
    Config,
    Log,
    Files,
    Tmp,
}

impl DirKind {
    /// Creation order used by `create`.
    pub const ALL: [Self; 4] = [Self::Config, Self::Log, Self::Files, Self::Tmp];

    /// Directory name inside the instance tree.
    pub fn name(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Log => "log",
            Self::Files => "files",
            Self::Tmp => "tmp",
        }
    }

    /// FHS location of this directory for `instance`, relative to `root`.
    pub fn fhs_path(self, root: &Path, app: &str, instance: &str) -> PathBuf {
        match self {
            Self::Config => root.join("etc").join(app).join(instance),
            Self::Log => root.join("var/log").join(app).join(instance),
            Self::Files => root.join("var/lib").join(app).join(instance).join("files"),
            Self::Tmp => root.join("var/cache").join(app).join(instance),
        }
    }
}

impl fmt::Display for DirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fhs_table_matches_standard_locations() {
        let root = Path::new("/");
        let expected = [
            (DirKind::Config, "/etc/redmine/demo"),
            (DirKind::Log, "/var/log/redmine/demo"),
            (DirKind::Files, "/var/lib/redmine/demo/files"),
            (DirKind::Tmp, "/var/cache/redmine/demo"),
        ];
        for (kind, path) in expected {
            assert_eq!(kind.fhs_path(root, "redmine", "demo"), PathBuf::from(path));
        }
    }

    #[test]
    fn creation_order_is_fixed() {
        let names: Vec<_> = DirKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["config", "log", "files", "tmp"]);
    }
}
