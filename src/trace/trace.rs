use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::tree::node_model::NodePath;

/// What happened during an inspection step.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum TraceKind {
    SnapshotLoaded {
        dir: String,
        node_count: usize,
        is_landscape: bool,
    },
    NodeResolved {
        path: NodePath,
        label: String,
    },
    NoNodeResolved {
        x: i32,
        y: i32,
    },
}

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    #[serde(flatten)]
    pub kind: TraceKind,
}

impl TraceEvent {
    pub fn now(kind: TraceKind) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            kind,
        }
    }
}
