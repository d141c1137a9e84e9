use std::path::Path;

use indexmap::IndexMap;
use log::info;
use serde::Deserialize;

use crate::diagram::{Diagram, Interaction};
use crate::error::LoadError;

/// Top level of a flow file: `{"flow": [ { "<label>": { ... }, ... } ]}`.
#[derive(Debug, Deserialize)]
pub struct FlowFile {
    pub flow: Vec<Flow>,
}

/// Calls keyed by label, in file order.
pub type Flow = IndexMap<String, FlowCall>;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FlowCall {
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub result: String,
    pub from_component: String,
    pub to_component: String,
}

pub fn load_file(path: &Path, flow_index: usize) -> Result<Diagram, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: FlowFile = serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Flow".to_string());
    let diagram = build(&name, file, flow_index)?;
    info!(
        path:? = path,
        entities = diagram.entity_count(),
        calls = diagram.interactions().len();
        "loaded flow file"
    );
    Ok(diagram)
}

pub fn parse_str(name: &str, json: &str, flow_index: usize) -> Result<Diagram, LoadError> {
    let file: FlowFile = serde_json::from_str(json).map_err(|source| LoadError::Json {
        path: name.into(),
        source,
    })?;
    build(name, file, flow_index)
}

fn build(name: &str, mut file: FlowFile, flow_index: usize) -> Result<Diagram, LoadError> {
    let available = file.flow.len();
    if flow_index >= available {
        return Err(LoadError::MissingFlow {
            index: flow_index,
            available,
        });
    }
    let flow = file.flow.swap_remove(flow_index);
    to_diagram(name, flow)
}

/// Entities are registered source first, then target, in call order.
pub fn to_diagram(name: &str, flow: Flow) -> Result<Diagram, LoadError> {
    let mut diagram = Diagram::new(name);
    for (label, call) in flow {
        if label.is_empty() {
            return Err(LoadError::EmptyLabel {
                from: call.from_component,
                to: call.to_component,
            });
        }
        diagram.add_entity(call.from_component.as_str());
        diagram.add_entity(call.to_component.as_str());
        diagram.add_interaction(
            Interaction::new(call.from_component, call.to_component, label)
                .with_note(call.note)
                .with_result(call.result),
        );
    }
    Ok(diagram)
}
