//! Node-type configuration tables for the workflow editor.
//!
//! These are plain immutable configuration values. Components that need
//! them receive a [`NodePalette`] (or individual [`NodeKind`] values) as an
//! argument; there is no process-wide singleton.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The kinds of nodes the editor can place on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Entry point of a workflow.
    Start,
    /// Final node of a workflow.
    End,
    /// Intermediate endpoint that ends one branch without ending the flow.
    SemiEnd,
    /// Plain pass-through node.
    Normal,
    /// Image processing step (filter, resize, rotate).
    Process,
    /// Conditional branch.
    Decision,
    /// External input source.
    Input,
    /// Output sink.
    Output,
    /// Persistent data source.
    Database,
}

impl NodeKind {
    /// All known node kinds, in display order.
    pub const ALL: [NodeKind; 9] = [
        NodeKind::Start,
        NodeKind::End,
        NodeKind::SemiEnd,
        NodeKind::Normal,
        NodeKind::Process,
        NodeKind::Decision,
        NodeKind::Input,
        NodeKind::Output,
        NodeKind::Database,
    ];

    /// The identifier used on the wire and in saved workflows.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::End => "end",
            NodeKind::SemiEnd => "semi-end",
            NodeKind::Normal => "normal",
            NodeKind::Process => "process",
            NodeKind::Decision => "decision",
            NodeKind::Input => "input",
            NodeKind::Output => "output",
            NodeKind::Database => "database",
        }
    }
}

/// Display colors for node kinds, as CSS hex strings.
///
/// The default palette colors the flow-control kinds; kinds without an
/// entry fall back to whatever the rendering layer chooses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePalette {
    colors: HashMap<NodeKind, String>,
}

impl Default for NodePalette {
    fn default() -> Self {
        let mut colors = HashMap::new();
        colors.insert(NodeKind::Start, "#4CAF50".to_string());
        colors.insert(NodeKind::SemiEnd, "#673AB7".to_string());
        colors.insert(NodeKind::End, "#f44336".to_string());
        Self { colors }
    }
}

impl NodePalette {
    /// Create the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the configured color for a node kind, if any.
    pub fn color_for(&self, kind: NodeKind) -> Option<&str> {
        self.colors.get(&kind).map(String::as_str)
    }

    /// Override or add the color for a node kind.
    pub fn set_color(&mut self, kind: NodeKind, color: impl Into<String>) {
        self.colors.insert(kind, color.into());
    }
}
