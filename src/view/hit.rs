use crate::geometry::rect::Point;
use crate::tree::node_model::{LayoutNode, NodePath};

/// Resolve a raw-image point to the most specific node among `siblings`.
///
/// Siblings are scanned last to first: later-declared siblings draw on top
/// and win on overlap. When a sibling's bounds contain the point, its
/// children are tried first; a matching descendant is more specific and
/// wins over the parent. Nodes without bounds (or with degenerate bounds)
/// are transparent to hit-testing but their children are not reached
/// through them, mirroring how they never draw.
pub fn hit_test<'a>(p: Point, siblings: &'a [LayoutNode]) -> Option<&'a LayoutNode> {
    for node in siblings.iter().rev() {
        let contains = node.bounds.map_or(false, |b| b.contains(p));
        if !contains {
            continue;
        }
        if let Some(inner) = hit_test(p, &node.children) {
            return Some(inner);
        }
        return Some(node);
    }
    None
}

/// Like [`hit_test`], but returns the child-index path of the resolved node
/// so a selection can outlive the borrow of the tree.
pub fn hit_path(p: Point, siblings: &[LayoutNode]) -> Option<NodePath> {
    for (index, node) in siblings.iter().enumerate().rev() {
        let contains = node.bounds.map_or(false, |b| b.contains(p));
        if !contains {
            continue;
        }
        let mut path = vec![index];
        if let Some(inner) = hit_path(p, &node.children) {
            path.extend(inner);
        }
        return Some(path);
    }
    None
}
