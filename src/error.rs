//! Application error types.

use std::fmt;

/// Application error carrying a kind and a human readable detail.
#[derive(Debug)]
pub struct AppError {
    detail: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid command line arguments
    Usage,
    /// Defaults file could not be read or parsed
    Config,
    /// File system error
    Io,
    /// User/group lookup or ownership change failed
    Ownership,
    /// External program error
    Process,
}

impl ErrorKind {
    /// Process exit status used when an error of this kind ends the run.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage => 1,
            Self::Config | Self::Io | Self::Ownership | Self::Process => 2,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Usage => "usage error",
            Self::Config => "configuration error",
            Self::Io => "I/O error",
            Self::Ownership => "ownership error",
            Self::Process => "process error",
        }
    }
}

impl AppError {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            kind,
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn ownership(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Ownership, message)
    }

    pub fn process(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Process, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{}", self.kind.label())
        } else {
            write!(f, "{}: {}", self.kind.label(), self.detail)
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<walkdir::Error> for AppError {
    fn from(err: walkdir::Error) -> Self {
        Self::io(err.to_string())
    }
}

#[cfg(unix)]
impl From<nix::Error> for AppError {
    fn from(err: nix::Error) -> Self {
        Self::ownership(err.to_string())
    }
}

impl From<dotenvy::Error> for AppError {
    fn from(err: dotenvy::Error) -> Self {
        Self::config(err.to_string())
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
