use std::path::{Path, PathBuf};

use crate::snapshot::error::SnapshotError;
use crate::snapshot::snapshot_model::{ScreenImage, Snapshot};
use crate::tree::builder::BuildConfig;

/// File names of the persisted snapshot pair inside a snapshot directory.
pub const LAYOUT_FILE: &str = "layout.xml";
pub const SCREEN_FILE: &str = "screen.png";

/// Load a snapshot pair from a directory. Either file being absent,
/// unreadable or unparsable fails the load as a whole; the caller's
/// current snapshot stays in place.
pub fn load_snapshot(dir: &Path, config: &BuildConfig) -> Result<Snapshot, SnapshotError> {
    let layout_path = dir.join(LAYOUT_FILE);
    let raw_dump = std::fs::read_to_string(&layout_path).map_err(|source| SnapshotError::Io {
        path: layout_path.clone(),
        source,
    })?;

    let screen_path = dir.join(SCREEN_FILE);
    let image_bytes = std::fs::read(&screen_path).map_err(|source| SnapshotError::Io {
        path: screen_path.clone(),
        source,
    })?;
    let image = ScreenImage::decode(image_bytes).map_err(|source| SnapshotError::UnreadableImage {
        path: screen_path,
        source,
    })?;

    Snapshot::build(&raw_dump, image, config).map_err(|source| SnapshotError::UnparsableDocument {
        path: layout_path,
        source,
    })
}

/// Write a snapshot pair into a directory, creating it if needed. The two
/// files are written together so the directory is always a usable pair.
pub fn save_snapshot(dir: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    std::fs::create_dir_all(dir).map_err(|source| SnapshotError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let layout_path = dir.join(LAYOUT_FILE);
    std::fs::write(&layout_path, &snapshot.markup).map_err(|source| SnapshotError::Io {
        path: layout_path,
        source,
    })?;

    let screen_path = dir.join(SCREEN_FILE);
    std::fs::write(&screen_path, &snapshot.image.data).map_err(|source| SnapshotError::Io {
        path: screen_path,
        source,
    })?;

    Ok(())
}

/// List snapshot directories under a root, sorted by name. Capture naming
/// is timestamp-based, so name order is capture order. A missing root is
/// simply an empty list, not an error.
pub fn scan_snapshots(root: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(root) else {
        return Vec::new();
    };

    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}
