use super::definition::Workflow;
use crate::error::ConversionError;

/// A trait for custom data models that can be converted into a canonical `Workflow`.
///
/// This is the primary extension point for making the engine format-agnostic. The
/// in-tree Flowise importer is one implementation of this translation layer; by
/// implementing this trait on your own structs you can feed any node/edge format
/// into the analysis and emission pipeline.
///
/// # Example
///
/// ```rust
/// use zanai_flow::prelude::*;
/// use zanai_flow::error::ConversionError;
///
/// struct MyNode { id: String, label: String }
/// struct MyGraph { nodes: Vec<MyNode> }
///
/// impl IntoWorkflow for MyGraph {
///     fn into_workflow(self) -> Result<Workflow, ConversionError> {
///         let nodes = self
///             .nodes
///             .into_iter()
///             .map(|node| FlowNode {
///                 id: node.id,
///                 name: node.label,
///                 category: "Unknown".to_string(),
///                 ..FlowNode::default()
///             })
///             .collect();
///
///         Ok(Workflow {
///             name: "my graph".to_string(),
///             nodes,
///             ..Workflow::default()
///         })
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a canonical workflow graph.
    fn into_workflow(self) -> Result<Workflow, ConversionError>;
}
