mod common;

use common::utils::{NESTED_DUMP, tree_of};
use layout_inspector::geometry::rect::Rect;
use layout_inspector::tree::builder::{BuildConfig, TreeError, build_tree, trim_dump};
use layout_inspector::tree::node_model::NodeKind;

// =========================================================================
// Basic construction
// =========================================================================

#[test]
fn builds_nested_tree_with_bounds() {
    let root = tree_of(NESTED_DUMP);

    assert_eq!(root.tag, "hierarchy");
    assert_eq!(root.attribute("rotation"), Some("0"));
    assert_eq!(root.children.len(), 1);

    let a = &root.children[0];
    assert_eq!(a.tag, "a");
    assert_eq!(a.bounds, Some(Rect { x: 0, y: 0, width: 100, height: 200 }));

    let b = &a.children[0];
    assert_eq!(b.tag, "b");
    assert_eq!(b.bounds, Some(Rect { x: 10, y: 10, width: 40, height: 40 }));
}

#[test]
fn sibling_order_matches_document_order() {
    let root = tree_of(r#"<hierarchy><first/><second/><third/></hierarchy>"#);
    let tags: Vec<&str> = root.children.iter().map(|c| c.tag.as_str()).collect();
    assert_eq!(tags, ["first", "second", "third"]);
}

#[test]
fn attribute_order_matches_declaration_order() {
    let root = tree_of(r#"<hierarchy><node zeta="1" alpha="2" mid="3"/></hierarchy>"#);
    let names: Vec<&str> = root.children[0]
        .attributes
        .iter()
        .map(|(n, _)| n.as_str())
        .collect();
    assert_eq!(names, ["zeta", "alpha", "mid"], "no sorting, declaration order only");
}

#[test]
fn attribute_values_are_unescaped() {
    let root = tree_of(r#"<hierarchy><node text="a &amp; b &quot;c&quot;"/></hierarchy>"#);
    assert_eq!(root.children[0].attribute("text"), Some(r#"a & b "c""#));
}

// =========================================================================
// Bounds degradation
// =========================================================================

#[test]
fn malformed_bounds_keeps_node_without_bounds() {
    let root = tree_of(r#"<hierarchy><node bounds="garbage" class="Widget"/></hierarchy>"#);

    let node = &root.children[0];
    assert!(node.bounds.is_none(), "malformed bounds degrade to none");
    assert_eq!(node.attribute("bounds"), Some("garbage"), "raw attribute survives");
    assert_eq!(node.attribute("class"), Some("Widget"), "node itself is kept");
}

#[test]
fn missing_bounds_attribute_yields_none() {
    let root = tree_of(r#"<hierarchy><node class="Widget"/></hierarchy>"#);
    assert!(root.children[0].bounds.is_none());
}

// =========================================================================
// Structural nodes and pruning
// =========================================================================

#[test]
fn pruning_drops_empty_structural_nodes_by_default() {
    let root = tree_of("<hierarchy>\n  <a/>\n  <!-- -->\n  <b/>\n</hierarchy>");
    let tags: Vec<&str> = root.children.iter().map(|c| c.tag.as_str()).collect();
    assert_eq!(tags, ["a", "b"], "whitespace text and empty comments are pruned");
}

#[test]
fn non_empty_structural_nodes_survive_pruning_in_order() {
    let root = tree_of("<hierarchy><a/><!-- note -->text<b/></hierarchy>");
    let tags: Vec<&str> = root.children.iter().map(|c| c.tag.as_str()).collect();
    assert_eq!(
        tags,
        ["a", "#comment", "#text", "b"],
        "every informative child kept in document order"
    );

    assert_eq!(root.children[1].kind, NodeKind::Comment);
    assert_eq!(root.children[1].value.as_deref(), Some(" note "));
    assert_eq!(root.children[2].kind, NodeKind::Text);
    assert_eq!(root.children[2].value.as_deref(), Some("text"));
}

#[test]
fn pruning_off_keeps_formatting_text_nodes() {
    let config = BuildConfig {
        prune_empty_structural: false,
    };
    let root = build_tree("<hierarchy>\n  <a/>\n</hierarchy>", &config).unwrap();
    assert_eq!(root.children.len(), 3, "two whitespace runs around <a/>");
    assert_eq!(root.children[0].kind, NodeKind::Text);
    assert_eq!(root.children[1].tag, "a");
}

// =========================================================================
// Dump trimming and failure modes
// =========================================================================

#[test]
fn trim_dump_cuts_shell_noise_after_hierarchy() {
    let raw = "<hierarchy><a/></hierarchy>UI hierchary dumped to: /dev/tty\r\n";
    assert_eq!(trim_dump(raw), "<hierarchy><a/></hierarchy>");
}

#[test]
fn trim_dump_passes_through_without_end_token() {
    assert_eq!(trim_dump("<other/>"), "<other/>");
}

#[test]
fn unparsable_document_fails_as_a_unit() {
    assert!(matches!(
        build_tree("<hierarchy><a></hierarchy>", &BuildConfig::default()),
        Err(TreeError::Parse(_))
    ));
    assert!(matches!(
        build_tree("", &BuildConfig::default()),
        Err(TreeError::NoRootElement)
    ));
    assert!(matches!(
        build_tree("<!-- only a comment -->", &BuildConfig::default()),
        Err(TreeError::NoRootElement)
    ));
}

// =========================================================================
// Display labels
// =========================================================================

#[test]
fn display_label_combines_class_resource_id_and_text() {
    let root = tree_of(
        r#"<hierarchy><node class="android.widget.Button" resource-id="com.app:id/ok" text="OK"/></hierarchy>"#,
    );
    assert_eq!(
        root.children[0].display_label(),
        "android.widget.Button [com.app:id/ok] (OK)"
    );
}

#[test]
fn display_label_skips_empty_parts() {
    let root = tree_of(r#"<hierarchy><node class="android.view.View" resource-id="" text=""/></hierarchy>"#);
    assert_eq!(root.children[0].display_label(), "android.view.View");

    let bare = tree_of(r#"<hierarchy><node/></hierarchy>"#);
    assert_eq!(bare.children[0].display_label(), "node", "falls back to the tag");
}
