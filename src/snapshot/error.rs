use std::fmt;
use std::path::PathBuf;

use crate::tree::builder::TreeError;

/// Whole-snapshot load failures. Any of these abort the load as a unit;
/// no partial model is ever installed.
#[derive(Debug)]
pub enum SnapshotError {
    /// A snapshot file could not be read or written.
    Io { path: PathBuf, source: std::io::Error },

    /// The layout markup could not be parsed into a tree.
    UnparsableDocument { path: PathBuf, source: TreeError },

    /// The screenshot bytes could not be decoded.
    UnreadableImage { path: PathBuf, source: image::ImageError },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io { path, source } => {
                write!(f, "Snapshot I/O error at {}: {}", path.display(), source)
            }
            SnapshotError::UnparsableDocument { path, source } => {
                write!(f, "Unparsable layout document {}: {}", path.display(), source)
            }
            SnapshotError::UnreadableImage { path, source } => {
                write!(f, "Unreadable screenshot {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io { source, .. } => Some(source),
            SnapshotError::UnparsableDocument { source, .. } => Some(source),
            SnapshotError::UnreadableImage { source, .. } => Some(source),
        }
    }
}
