use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::tree::builder::BuildConfig;
use crate::view::properties::ProjectorConfig;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "layout-inspector",
    version,
    about = "Inspect Android UI-hierarchy dumps alongside their screenshots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: layout-inspector.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Snapshots root directory (overrides config file)
    #[arg(long, global = true)]
    pub snapshots: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List snapshot directories under the snapshots root
    List,

    /// Print the layout tree of a snapshot
    Show {
        /// Snapshot directory (containing layout.xml and screen.png)
        #[arg(long)]
        snapshot: String,
    },

    /// Resolve a display-space click to the widget under it
    Hit {
        /// Snapshot directory
        #[arg(long)]
        snapshot: String,

        /// Click position in display space
        #[arg(short, long)]
        x: i32,

        /// Click position in display space
        #[arg(short, long)]
        y: i32,

        /// Rendered display width in pixels (default: the displayed image's
        /// own width, axis-swapped for landscape screenshots)
        #[arg(long)]
        display_width: Option<i32>,

        /// Rendered display height in pixels
        #[arg(long)]
        display_height: Option<i32>,
    },

    /// Print the property sheet of a node addressed by child-index path
    Props {
        /// Snapshot directory
        #[arg(long)]
        snapshot: String,

        /// Dot-separated child indices from the root, e.g. "0.2.1";
        /// empty selects the root node itself
        #[arg(long, default_value = "")]
        path: String,

        /// List child nodes as read-only entries too
        #[arg(long)]
        include_children: bool,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `layout-inspector.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub snapshots: SnapshotsConfig,
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub properties: PropertiesConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotsConfig {
    #[serde(default = "default_snapshots_root")]
    pub root: String,
}

impl Default for SnapshotsConfig {
    fn default() -> Self {
        Self {
            root: default_snapshots_root(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Drop empty text/comment nodes while building the tree.
    #[serde(default = "default_true")]
    pub prune_empty_structural: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            prune_empty_structural: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PropertiesConfig {
    #[serde(default)]
    pub include_children: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    /// JSONL file to append inspection events to. Tracing is off when unset.
    pub file: Option<String>,
}

// Serde default helpers
fn default_snapshots_root() -> String {
    "snapshots".to_string()
}
fn default_true() -> bool {
    true
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("layout-inspector.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

pub fn build_tree_config(config: &AppConfig) -> BuildConfig {
    BuildConfig {
        prune_empty_structural: config.tree.prune_empty_structural,
    }
}

pub fn build_projector_config(config: &AppConfig, include_children: bool) -> ProjectorConfig {
    ProjectorConfig {
        include_children: include_children || config.properties.include_children,
    }
}

pub fn build_tracer(config: &AppConfig) -> crate::trace::logger::TraceLogger {
    match config.trace.file.as_deref() {
        Some(path) => crate::trace::logger::TraceLogger::new(path),
        None => crate::trace::logger::TraceLogger::disabled(),
    }
}
