use crate::analysis::Analyzer;
use crate::flowise::import_flow;
use crate::mapping::ZanaiMapping;
use crate::workflow::Workflow;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

/// A workflow graph conversion and analysis pipeline.
///
/// This class normalizes a Flowise export upon initialization; the
/// `summary` and `mapping` methods can then be called to retrieve the
/// structural statistics and the suggested Zanai configuration.
#[pyclass(name = "FlowPipeline")]
struct FlowPipelinePy {
    workflow: Workflow,
}

#[pymethods]
impl FlowPipelinePy {
    /// Parses and normalizes a Flowise export.
    ///
    /// Args:
    ///     flow_json (str): A string containing the Flowise export JSON,
    ///         including top-level `nodes` and `edges` arrays.
    ///
    /// Returns:
    ///     FlowPipeline: An initialized pipeline over the normalized graph.
    ///
    /// Raises:
    ///     ValueError: If the JSON does not parse or `nodes`/`edges` are
    ///         not arrays at the top level.
    #[new]
    fn new(flow_json: &str) -> PyResult<Self> {
        let workflow = import_flow(flow_json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(FlowPipelinePy { workflow })
    }

    /// Computes the structural summary of the normalized graph.
    ///
    /// Returns:
    ///     dict: node_count, edge_count, complexity (str), complexity_score
    ///         (int) and patterns (list of str).
    fn summary<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let summary = Analyzer::new(&self.workflow).summarize();

        let dict = PyDict::new(py);
        dict.set_item("node_count", summary.node_count)?;
        dict.set_item("edge_count", summary.edge_count)?;
        dict.set_item("complexity", summary.complexity.to_string())?;
        dict.set_item("complexity_score", summary.complexity_score)?;
        dict.set_item("patterns", summary.patterns.clone())?;
        Ok(dict)
    }

    /// Derives the suggested Zanai agent configuration.
    ///
    /// Returns:
    ///     dict: suggested_agent_type, workflow_type, suggested_components
    ///         (list of dicts with node_id/node_name/kind), required_config
    ///         and suggested_tools.
    fn mapping<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let summary = Analyzer::new(&self.workflow).summarize();
        let mapping = ZanaiMapping::derive(&self.workflow, &summary);

        let dict = PyDict::new(py);
        dict.set_item(
            "suggested_agent_type",
            mapping.suggested_agent_type.to_string(),
        )?;
        dict.set_item("workflow_type", mapping.workflow_type.to_string())?;

        let components = PyList::empty(py);
        for component in &mapping.suggested_components {
            let entry = PyDict::new(py);
            entry.set_item("node_id", component.node_id.clone())?;
            entry.set_item("node_name", component.node_name.clone())?;
            entry.set_item("kind", component.kind.to_string())?;
            components.append(entry)?;
        }
        dict.set_item("suggested_components", components)?;

        dict.set_item("required_config", mapping.required_config.clone())?;
        dict.set_item("suggested_tools", mapping.suggested_tools.clone())?;
        Ok(dict)
    }
}

/// Python bindings for the zanai-flow conversion and analysis engine.
#[pymodule]
fn zanai_flow(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<FlowPipelinePy>()?;
    Ok(())
}
