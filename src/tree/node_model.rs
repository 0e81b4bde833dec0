use crate::geometry::rect::Rect;

/// The closed set of markup node kinds retained in a layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Comment,
}

/// One UI element (or structural node) from a hierarchy dump.
///
/// Children are stored in document order, which is also on-screen
/// back-to-front order: later siblings draw on top of earlier ones.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub kind: NodeKind,
    /// Element name; `#text` / `#comment` for structural nodes.
    pub tag: String,
    /// Attribute name/value pairs in declaration order. Names are unique
    /// per node, so a Vec keeps order without needing a map.
    pub attributes: Vec<(String, String)>,
    /// Text or comment content for structural nodes.
    pub value: Option<String>,
    /// On-screen extent in raw screenshot pixels, when the node carried a
    /// parseable `bounds` attribute.
    pub bounds: Option<Rect>,
    pub children: Vec<LayoutNode>,
}

/// Child-index path from a tree root down to a node. Stable only for the
/// snapshot it was resolved against.
pub type NodePath = Vec<usize>;

impl LayoutNode {
    pub fn element(tag: &str) -> Self {
        LayoutNode {
            kind: NodeKind::Element,
            tag: tag.to_string(),
            attributes: Vec::new(),
            value: None,
            bounds: None,
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Update an existing attribute's stored value, preserving declaration
    /// order. Returns false if the node has no attribute of that name.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        match self.attributes.iter_mut().find(|(n, _)| n.as_str() == name) {
            Some((_, v)) => {
                *v = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Tree-display label: `class [resource-id] (text)`, with the bracketed
    /// parts present only when those attributes are non-empty.
    pub fn display_label(&self) -> String {
        let mut label = self.attribute("class").unwrap_or(&self.tag).to_string();

        if let Some(resource_id) = self.attribute("resource-id") {
            if !resource_id.is_empty() {
                label.push_str(&format!(" [{}]", resource_id));
            }
        }
        if let Some(text) = self.attribute("text") {
            if !text.is_empty() {
                label.push_str(&format!(" ({})", text));
            }
        }

        label
    }

    /// One-line summary used when a node appears as a value inside another
    /// node's property list.
    pub fn summary(&self) -> String {
        match self.kind {
            NodeKind::Element => format!(
                "<{}> {} attrs, {} children",
                self.tag,
                self.attributes.len(),
                self.children.len()
            ),
            NodeKind::Text | NodeKind::Comment => {
                self.value.clone().unwrap_or_default()
            }
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::node_count).sum::<usize>()
    }
}

/// Resolve a child-index path against a tree. Any out-of-range index means
/// the path belongs to a different (replaced) tree and yields None.
pub fn node_at<'a>(root: &'a LayoutNode, path: &[usize]) -> Option<&'a LayoutNode> {
    let mut node = root;
    for &index in path {
        node = node.children.get(index)?;
    }
    Some(node)
}

pub fn node_at_mut<'a>(root: &'a mut LayoutNode, path: &[usize]) -> Option<&'a mut LayoutNode> {
    let mut node = root;
    for &index in path {
        node = node.children.get_mut(index)?;
    }
    Some(node)
}
