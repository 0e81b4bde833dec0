use std::path::Path;

use crate::cli::config::{AppConfig, build_projector_config, build_tracer, build_tree_config};
use crate::geometry::rect::{Point, Size};
use crate::session::session_model::InspectorSession;
use crate::snapshot::store::scan_snapshots;
use crate::trace::trace::TraceKind;
use crate::tree::node_model::{LayoutNode, NodePath};
use crate::view::properties::{EntryKind, PropertyEntry};

// ============================================================================
// list subcommand
// ============================================================================

pub fn cmd_list(root: &str, verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let dirs = scan_snapshots(Path::new(root));

    if dirs.is_empty() {
        eprintln!("No snapshots found under: {}", root);
        return Ok(());
    }

    if verbose > 0 {
        eprintln!("{} snapshots under {}:", dirs.len(), root);
    }
    for dir in dirs {
        println!("{}", dir.display());
    }
    Ok(())
}

// ============================================================================
// show subcommand
// ============================================================================

pub fn cmd_show(
    snapshot_dir: &str,
    config: &AppConfig,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = load_session(snapshot_dir, config)?;
    let Some(snapshot) = session.snapshot() else {
        return Err(format!("no snapshot loaded from {}", snapshot_dir).into());
    };

    if verbose > 0 {
        eprintln!(
            "{}: {} nodes, {}x{}{}",
            snapshot_dir,
            snapshot.tree.node_count(),
            snapshot.image.width,
            snapshot.image.height,
            if snapshot.is_landscape() { " (landscape)" } else { "" }
        );
    }

    // Top level of the display tree is the root's children, like the
    // original hierarchy viewer.
    for child in &snapshot.tree.children {
        print_tree(child, 0, verbose);
    }
    Ok(())
}

fn print_tree(node: &LayoutNode, depth: usize, verbose: u8) {
    let indent = "  ".repeat(depth);
    if verbose > 0 {
        match node.bounds {
            Some(b) => println!(
                "{}{}  [{},{} {}x{}]",
                indent,
                node.display_label(),
                b.x,
                b.y,
                b.width,
                b.height
            ),
            None => println!("{}{}  [no bounds]", indent, node.display_label()),
        }
    } else {
        println!("{}{}", indent, node.display_label());
    }
    for child in &node.children {
        print_tree(child, depth + 1, verbose);
    }
}

// ============================================================================
// hit subcommand
// ============================================================================

/// Resolve a display click against a snapshot. Returns whether a node was hit.
pub fn cmd_hit(
    snapshot_dir: &str,
    x: i32,
    y: i32,
    display_width: Option<i32>,
    display_height: Option<i32>,
    config: &AppConfig,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let tracer = build_tracer(config);
    let mut session = load_session(snapshot_dir, config)?;
    let Some(snapshot) = session.snapshot() else {
        return Err(format!("no snapshot loaded from {}", snapshot_dir).into());
    };

    tracer.log(TraceKind::SnapshotLoaded {
        dir: snapshot_dir.to_string(),
        node_count: snapshot.tree.node_count(),
        is_landscape: snapshot.is_landscape(),
    });

    let display = display_size(snapshot_dir, &session, display_width, display_height)?;
    if verbose > 0 {
        eprintln!(
            "Mapping ({}, {}) from display {}x{}...",
            x, y, display.width, display.height
        );
    }

    let resolved = session.click(Point { x, y }, display);
    match resolved {
        Some(path) => {
            let label = session
                .selected_node()
                .map(LayoutNode::display_label)
                .unwrap_or_default();
            tracer.log(TraceKind::NodeResolved {
                path: path.clone(),
                label: label.clone(),
            });

            println!("{}  (path {})", label, format_path(&path));
            for entry in session.properties(&build_projector_config(config, false)) {
                print_entry(&entry);
            }
            Ok(true)
        }
        None => {
            tracer.log(TraceKind::NoNodeResolved { x, y });
            println!("No node at ({}, {})", x, y);
            Ok(false)
        }
    }
}

/// Explicit display size, or the displayed image's unscaled size: the raw
/// dimensions for portrait screenshots, axis-swapped for landscape ones
/// (they are rendered rotated 90 degrees).
fn display_size(
    snapshot_dir: &str,
    session: &InspectorSession,
    width: Option<i32>,
    height: Option<i32>,
) -> Result<Size, Box<dyn std::error::Error>> {
    let snapshot = session
        .snapshot()
        .ok_or_else(|| format!("no snapshot loaded from {}", snapshot_dir))?;
    let native = snapshot.native_size();
    let default = if snapshot.is_landscape() {
        Size {
            width: native.height,
            height: native.width,
        }
    } else {
        native
    };

    let size = Size {
        width: width.unwrap_or(default.width),
        height: height.unwrap_or(default.height),
    };
    if size.width <= 0 || size.height <= 0 {
        return Err(format!("display size must be positive, got {}x{}", size.width, size.height).into());
    }
    Ok(size)
}

// ============================================================================
// props subcommand
// ============================================================================

pub fn cmd_props(
    snapshot_dir: &str,
    path: &str,
    include_children: bool,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = load_session(snapshot_dir, config)?;

    let node_path = parse_path(path)?;
    if !session.select(node_path) {
        return Err(format!("path '{}' does not resolve in {}", path, snapshot_dir).into());
    }

    let Some(node) = session.selected_node() else {
        return Err(format!("path '{}' does not resolve in {}", path, snapshot_dir).into());
    };
    println!("{}", node.display_label());
    for entry in session.properties(&build_projector_config(config, include_children)) {
        print_entry(&entry);
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn load_session(
    snapshot_dir: &str,
    config: &AppConfig,
) -> Result<InspectorSession, Box<dyn std::error::Error>> {
    let mut session = InspectorSession::new(build_tree_config(config));
    session.load(Path::new(snapshot_dir))?;
    Ok(session)
}

/// Parse a dot-separated child-index path; empty means the root itself.
pub fn parse_path(path: &str) -> Result<NodePath, String> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    path.split('.')
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| format!("invalid path segment '{}'", part))
        })
        .collect()
}

pub fn format_path(path: &NodePath) -> String {
    path.iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

fn print_entry(entry: &PropertyEntry) {
    match entry.kind {
        EntryKind::Attribute => println!("  {} = {}", entry.name, entry.value),
        EntryKind::Child => println!("  {} -> {}", entry.name, entry.value),
    }
}
