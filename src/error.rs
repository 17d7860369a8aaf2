use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied ({}): {}", .op, .path.display())]
    PermissionDenied { path: PathBuf, op: &'static str },

    #[error("Invalid argument '{field}': {problem}")]
    InvalidArgument { field: &'static str, problem: String },

    #[error("IO error ({op}): {source}")]
    Io {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "file.not_found",
            Error::PermissionDenied { .. } => "file.permission_denied",
            Error::InvalidArgument { .. } => "validation.invalid_argument",
            Error::Io { .. } => "internal.io_error",
            Error::Json(_) => "internal.json_error",
        }
    }

    /// Classify an I/O failure against the path it happened on.
    pub(crate) fn from_io(op: &'static str, path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::PermissionDenied => Error::PermissionDenied {
                path: path.to_path_buf(),
                op,
            },
            _ => Error::Io { op, source: err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kind_maps_to_not_found() {
        let io = std::io::Error::new(ErrorKind::NotFound, "no such file");
        let err = Error::from_io("open source", Path::new("/tmp/missing.conf"), io);
        assert_eq!(err.code(), "file.not_found");
    }

    #[test]
    fn permission_denied_kind_maps_to_permission_denied() {
        let io = std::io::Error::new(ErrorKind::PermissionDenied, "denied");
        let err = Error::from_io("create temp file", Path::new("/etc/client.conf.tmp"), io);
        assert_eq!(err.code(), "file.permission_denied");
        assert!(err.to_string().contains("create temp file"));
    }

    #[test]
    fn other_kinds_map_to_io() {
        let io = std::io::Error::new(ErrorKind::Other, "disk full");
        let err = Error::from_io("write temp file", Path::new("/tmp/a.conf.tmp"), io);
        assert_eq!(err.code(), "internal.io_error");
    }
}
