/// Errors raised while classifying files or walking a corpus.
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist. Raised before any work is done.
    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A single file could not be opened, read, or stat'ed.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The scan was stopped through its cancel flag.
    #[error("scan cancelled")]
    Cancelled,
}

impl ScanError {
    /// Attach `path` to an I/O error.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathNotFound(p) => Some(p),
            Self::Io { path, .. } => Some(path),
            Self::Cancelled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_names_path_and_cause() {
        let err = ScanError::io(
            Path::new("/tmp/secret.bin"),
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/secret.bin"), "missing path: {msg}");
        assert!(msg.contains("permission denied"), "missing cause: {msg}");
        assert_eq!(err.path(), Some(Path::new("/tmp/secret.bin")));
    }

    #[test]
    fn path_not_found_message() {
        let err = ScanError::PathNotFound(PathBuf::from("/nope"));
        assert_eq!(err.to_string(), "path not found: /nope");
    }
}
