use std::fmt;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::geometry::bounds::parse_bounds;
use crate::tree::node_model::{LayoutNode, NodeKind};

/// Tree-construction options.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Drop text/comment nodes whose trimmed content is empty. Keeps the
    /// visual tree free of formatting-only nodes.
    pub prune_empty_structural: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            prune_empty_structural: true,
        }
    }
}

#[derive(Debug)]
pub enum TreeError {
    /// The markup could not be parsed as a well-formed document.
    Parse(String),
    /// The document ended without yielding a root element.
    NoRootElement,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Parse(detail) => write!(f, "Unparsable document: {}", detail),
            TreeError::NoRootElement => write!(f, "Document contains no root element"),
        }
    }
}

impl std::error::Error for TreeError {}

/// Cut a `uiautomator dump /dev/tty` payload at the closing hierarchy tag.
/// The shell echoes status noise after the XML; anything past the last
/// `</hierarchy>` is discarded. Payloads without the tag pass through as-is.
pub fn trim_dump(raw: &str) -> &str {
    const END_TOKEN: &str = "</hierarchy>";
    match raw.rfind(END_TOKEN) {
        Some(end) => &raw[..end + END_TOKEN.len()],
        None => raw,
    }
}

/// Build a layout tree from a markup string.
///
/// Single pass over the event stream, no I/O. The document's root element
/// becomes the returned node; its children are the top-level layout nodes.
/// Children of every kind are appended in document order so that the
/// sibling ordering hit-testing relies on is preserved. A `bounds`
/// attribute that fails to parse leaves the node in the tree with no
/// bounds rather than failing the build.
pub fn build_tree(markup: &str, config: &BuildConfig) -> Result<LayoutNode, TreeError> {
    let mut reader = Reader::from_str(markup);
    let mut stack: Vec<LayoutNode> = Vec::new();
    let mut root: Option<LayoutNode> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(element_node(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let node = element_node(&e)?;
                attach(node, &mut stack, &mut root, config);
            }
            Ok(Event::End(_)) => {
                let node = stack.pop().ok_or_else(|| {
                    TreeError::Parse("closing tag without matching open tag".to_string())
                })?;
                attach(node, &mut stack, &mut root, config);
            }
            Ok(Event::Text(e)) => {
                let content = e
                    .unescape()
                    .map_err(|err| TreeError::Parse(err.to_string()))?
                    .into_owned();
                attach(
                    structural_node(NodeKind::Text, "#text", content),
                    &mut stack,
                    &mut root,
                    config,
                );
            }
            Ok(Event::CData(e)) => {
                let content = String::from_utf8_lossy(&e).into_owned();
                attach(
                    structural_node(NodeKind::Text, "#text", content),
                    &mut stack,
                    &mut root,
                    config,
                );
            }
            Ok(Event::Comment(e)) => {
                let content = String::from_utf8_lossy(&e).into_owned();
                attach(
                    structural_node(NodeKind::Comment, "#comment", content),
                    &mut stack,
                    &mut root,
                    config,
                );
            }
            // Declarations, processing instructions and doctypes carry no
            // layout information.
            Ok(Event::Decl(_) | Event::PI(_) | Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
            Err(e) => return Err(TreeError::Parse(e.to_string())),
        }
    }

    if !stack.is_empty() {
        return Err(TreeError::Parse("unclosed element at end of document".to_string()));
    }

    root.ok_or(TreeError::NoRootElement)
}

fn element_node(start: &BytesStart<'_>) -> Result<LayoutNode, TreeError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut node = LayoutNode::element(&tag);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| TreeError::Parse(format!("attribute error: {}", e)))?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| TreeError::Parse(format!("attribute value error: {}", e)))?
            .into_owned();
        node.attributes.push((name, value));
    }

    // Malformed bounds degrade to "no bounds"; the node stays in the tree
    // and is simply never hit-testable.
    let bounds = node.attribute("bounds").and_then(|raw| parse_bounds(raw).ok());
    node.bounds = bounds;

    Ok(node)
}

fn structural_node(kind: NodeKind, tag: &str, content: String) -> LayoutNode {
    LayoutNode {
        kind,
        tag: tag.to_string(),
        attributes: Vec::new(),
        value: Some(content),
        bounds: None,
        children: Vec::new(),
    }
}

/// Append a completed node to its parent, or promote it to document root
/// when the stack is empty. Structural nodes with no content and no
/// children are dropped when pruning is on; top-level structural nodes
/// (whitespace around the root element) are always dropped.
fn attach(
    node: LayoutNode,
    stack: &mut Vec<LayoutNode>,
    root: &mut Option<LayoutNode>,
    config: &BuildConfig,
) {
    if node.kind != NodeKind::Element {
        let empty = node.value.as_deref().map_or(true, |v| v.trim().is_empty());
        if empty && (config.prune_empty_structural || stack.is_empty()) {
            return;
        }
    }

    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if node.kind == NodeKind::Element && root.is_none() {
                *root = Some(node);
            }
        }
    }
}
