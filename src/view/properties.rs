use crate::tree::node_model::LayoutNode;

/// Property-sheet projection options.
#[derive(Debug, Clone, Default)]
pub struct ProjectorConfig {
    /// Also list child nodes as read-only navigation entries. Off by
    /// default to keep the sheet focused on leaf attributes.
    pub include_children: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Attribute,
    Child,
}

/// One row of a node's property sheet.
#[derive(Debug, Clone)]
pub struct PropertyEntry {
    /// Attribute entries carry an `@` prefix so an attribute named `text`
    /// never collides with a child element `<text>`.
    pub name: String,
    pub value: String,
    pub kind: EntryKind,
    pub editable: bool,
}

/// Project a node's attributes (and optionally children) as an ordered
/// property list. Entry order equals attribute declaration order, which
/// keeps the sheet deterministic across runs.
pub fn project(node: &LayoutNode, config: &ProjectorConfig) -> Vec<PropertyEntry> {
    let mut entries = Vec::with_capacity(node.attributes.len());

    for (name, value) in &node.attributes {
        entries.push(PropertyEntry {
            name: format!("@{}", name),
            value: value.clone(),
            kind: EntryKind::Attribute,
            editable: true,
        });
    }

    if config.include_children {
        for child in &node.children {
            entries.push(PropertyEntry {
                name: child.tag.clone(),
                value: child.summary(),
                kind: EntryKind::Child,
                editable: false,
            });
        }
    }

    entries
}

/// Write an edited attribute value back into the node. The entry name is
/// the sheet's `@`-prefixed form. Child entries and unknown names are
/// rejected; nothing is persisted to disk.
pub fn apply_edit(node: &mut LayoutNode, entry_name: &str, value: &str) -> bool {
    match entry_name.strip_prefix('@') {
        Some(attr) => node.set_attribute(attr, value),
        None => false,
    }
}
