use crate::{
    geometry::rect::{Point, Size},
    snapshot::snapshot_model::Snapshot,
    tree::node_model::LayoutNode,
    view::{hit::hit_test, mapper::map_display_point},
};

pub mod cli;
pub mod geometry;
pub mod session;
pub mod snapshot;
pub mod trace;
pub mod tree;
pub mod view;

/// Resolve a display-space click against a snapshot in one step: map the
/// point into raw screenshot pixels, then hit-test the top-level nodes.
/// This is the click half of the selection flow; the session wraps the
/// same pipeline when it also needs to remember the selection.
pub fn resolve_click(snapshot: &Snapshot, p: Point, display: Size) -> Option<&LayoutNode> {
    let raw = map_display_point(p, display, snapshot.native_size(), snapshot.is_landscape());
    hit_test(raw, &snapshot.tree.children)
}
