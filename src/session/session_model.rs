use std::path::Path;

use crate::geometry::rect::{Point, Size};
use crate::snapshot::error::SnapshotError;
use crate::snapshot::snapshot_model::Snapshot;
use crate::snapshot::store::load_snapshot;
use crate::tree::builder::BuildConfig;
use crate::tree::node_model::{LayoutNode, NodePath, node_at, node_at_mut};
use crate::view::hit::hit_path;
use crate::view::mapper::map_display_point;
use crate::view::properties::{ProjectorConfig, PropertyEntry, apply_edit, project};

/// Owns the single current snapshot and the selection made against it.
///
/// Replacement is atomic: a new snapshot is fully constructed before the
/// old one is dropped, and installing it always clears the selection, so
/// a selection can never point into a discarded tree. A stale path that
/// somehow survives still resolves to `None` rather than panicking.
pub struct InspectorSession {
    snapshot: Option<Snapshot>,
    selection: Option<NodePath>,
    build_config: BuildConfig,
}

impl InspectorSession {
    pub fn new(build_config: BuildConfig) -> Self {
        InspectorSession {
            snapshot: None,
            selection: None,
            build_config,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn selection(&self) -> Option<&NodePath> {
        self.selection.as_ref()
    }

    /// Replace the current snapshot wholesale. Any prior selection is
    /// invalidated with it.
    pub fn install(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
        self.selection = None;
    }

    /// Load a snapshot pair from a directory and install it. On failure
    /// the prior snapshot and selection remain current.
    pub fn load(&mut self, dir: &Path) -> Result<(), SnapshotError> {
        let snapshot = load_snapshot(dir, &self.build_config)?;
        self.install(snapshot);
        Ok(())
    }

    /// Select a node by its child-index path from the tree root. Paths that
    /// do not resolve against the current tree are rejected.
    pub fn select(&mut self, path: NodePath) -> bool {
        let resolvable = self
            .snapshot
            .as_ref()
            .is_some_and(|s| node_at(&s.tree, &path).is_some());
        if resolvable {
            self.selection = Some(path);
        }
        resolvable
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The currently selected node, or `None` when nothing is selected or
    /// the stored path no longer resolves.
    pub fn selected_node(&self) -> Option<&LayoutNode> {
        let snapshot = self.snapshot.as_ref()?;
        let path = self.selection.as_ref()?;
        node_at(&snapshot.tree, path)
    }

    /// Resolve a click observed in display space: map it into raw-image
    /// pixels, hit-test the top-level nodes, and update the selection.
    /// A miss clears the selection and returns `None`.
    pub fn click(&mut self, p: Point, display: Size) -> Option<NodePath> {
        let snapshot = self.snapshot.as_ref()?;
        let raw = map_display_point(p, display, snapshot.native_size(), snapshot.is_landscape());
        self.selection = hit_path(raw, &snapshot.tree.children);
        self.selection.clone()
    }

    /// Property sheet of the selected node; empty when there is none.
    pub fn properties(&self, config: &ProjectorConfig) -> Vec<PropertyEntry> {
        match self.selected_node() {
            Some(node) => project(node, config),
            None => Vec::new(),
        }
    }

    /// Write an edited attribute value into the selected node of the
    /// in-memory tree. Nothing is persisted to disk.
    pub fn edit_selected(&mut self, entry_name: &str, value: &str) -> bool {
        let Some(path) = self.selection.clone() else {
            return false;
        };
        let Some(snapshot) = self.snapshot.as_mut() else {
            return false;
        };
        match node_at_mut(&mut snapshot.tree, &path) {
            Some(node) => apply_edit(node, entry_name, value),
            None => false,
        }
    }
}
