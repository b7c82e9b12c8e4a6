use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// The closed set of node kinds a generated workflow can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedNodeKind {
    Start,
    Llm,
    Tool,
    Custom,
    Condition,
    Parallel,
    End,
}

impl fmt::Display for GeneratedNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedNodeKind::Start => write!(f, "start"),
            GeneratedNodeKind::Llm => write!(f, "llm"),
            GeneratedNodeKind::Tool => write!(f, "tool"),
            GeneratedNodeKind::Custom => write!(f, "custom"),
            GeneratedNodeKind::Condition => write!(f, "condition"),
            GeneratedNodeKind::Parallel => write!(f, "parallel"),
            GeneratedNodeKind::End => write!(f, "end"),
        }
    }
}

/// Master macro defining the fixed per-kind emission catalog: the Flowise
/// type tag, the category label, the horizontal base coordinate, and the
/// named input/output attachment points.
macro_rules! define_node_catalog {
    ( $( ($variant:ident, $tag:expr, $category:expr, $base_x:expr, [ $($input:expr),* ], [ $($output:expr),* ]) ),* $(,)? ) => {
        impl GeneratedNodeKind {
            /// The Flowise type tag emitted for this kind.
            pub fn kind_tag(&self) -> &'static str {
                match self { $( GeneratedNodeKind::$variant => $tag, )* }
            }

            /// The category label emitted for this kind.
            pub fn category(&self) -> &'static str {
                match self { $( GeneratedNodeKind::$variant => $category, )* }
            }

            /// Fixed horizontal base coordinate on the canvas.
            pub fn base_x(&self) -> f64 {
                match self { $( GeneratedNodeKind::$variant => $base_x, )* }
            }

            /// Named input attachment points exposed by this kind.
            pub fn input_ports(&self) -> &'static [&'static str] {
                match self { $( GeneratedNodeKind::$variant => &[$($input),*], )* }
            }

            /// Named output attachment points exposed by this kind.
            pub fn output_ports(&self) -> &'static [&'static str] {
                match self { $( GeneratedNodeKind::$variant => &[$($output),*], )* }
            }
        }
    };
}

define_node_catalog! {
    (Start, "startNode", "Input", 50.0, [], ["output"]),
    (Llm, "llmNode", "Chat Models", 150.0, ["prompt", "systemMessage", "temperature"], ["response", "tokens"]),
    (Tool, "toolNode", "Tools", 250.0, ["input", "toolConfig"], ["result"]),
    (Custom, "customNode", "Custom", 200.0, ["input"], ["output"]),
    (Condition, "conditionNode", "Logic", 300.0, ["condition"], ["true", "false"]),
    (Parallel, "parallelNode", "Logic", 350.0, ["branches"], ["merged"]),
    (End, "endNode", "Output", 450.0, ["input"], []),
}

impl GeneratedNodeKind {
    /// Default settings embedded into the emitted node's `inputs` map.
    pub fn default_settings(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut settings = serde_json::Map::new();
        match self {
            GeneratedNodeKind::Llm => {
                settings.insert("temperature".to_string(), json!(0.7));
                settings.insert("systemMessage".to_string(), json!(""));
            }
            GeneratedNodeKind::Tool => {
                settings.insert("toolConfig".to_string(), json!({}));
            }
            GeneratedNodeKind::Condition => {
                settings.insert("condition".to_string(), json!(""));
            }
            GeneratedNodeKind::Parallel => {
                settings.insert("waitForAll".to_string(), json!(true));
            }
            _ => {}
        }
        settings
    }
}
