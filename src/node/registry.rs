use std::collections::BTreeMap;

use crate::{
    camera::resolve::resolve,
    foundation::{
        core::FrameIndex,
        error::{DeforumError, DeforumResult},
    },
    node::output::NodeOutput,
};

/// Input socket type as the host names it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputKind {
    /// Free-form string.
    String,
    /// Integer with optional bounds.
    Int,
}

/// Default value shown by the host for an input.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum InputDefault {
    /// String default.
    Str(&'static str),
    /// Integer default.
    Int(i64),
}

/// One required input of a node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct InputSpec {
    /// Input name, also the key in the host's input mapping.
    pub name: &'static str,
    /// Socket type.
    #[serde(rename = "type")]
    pub kind: InputKind,
    /// Value used when the host omits the input.
    pub default: InputDefault,
    /// Inclusive lower bound for integer inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// UI step for integer inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,
}

type NodeFn = fn(&NodeDescriptor, &serde_json::Value) -> DeforumResult<NodeOutput>;

/// Static description of a node, handed to the host's plugin loader.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct NodeDescriptor {
    /// Stable identifier the host registers the node under.
    pub id: &'static str,
    /// Human-readable label.
    pub display_name: &'static str,
    /// Menu category.
    pub category: &'static str,
    /// Name of the function the host calls.
    pub function: &'static str,
    /// Output socket types.
    pub return_types: &'static [&'static str],
    /// Required inputs, in display order.
    pub inputs: &'static [InputSpec],
    #[serde(skip)]
    run: NodeFn,
}

impl NodeDescriptor {
    /// Spec of the named input.
    pub fn input(&self, name: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|i| i.name == name)
    }

    /// Decode `inputs` against this descriptor and run the node.
    pub fn invoke(&self, inputs: &serde_json::Value) -> DeforumResult<NodeOutput> {
        (self.run)(self, inputs)
    }
}

const DEFAULT_PARSEQ_DATA: &str = "{}";
const DEFAULT_FRAME: i64 = 0;
const MIN_FRAME: i64 = 0;

/// Converts a Parseq keyframe payload into Deforum camera movement for one frame.
pub const PARSEQ_TO_DEFORUM: NodeDescriptor = NodeDescriptor {
    id: "ParseqToDeforum",
    display_name: "Parseq → Deforum Camera",
    category: "Custom",
    function: "convert_parseq_to_deforum",
    return_types: &["DICT"],
    inputs: &[
        InputSpec {
            name: "parseq_data",
            kind: InputKind::String,
            default: InputDefault::Str(DEFAULT_PARSEQ_DATA),
            min: None,
            step: None,
        },
        InputSpec {
            name: "frame",
            kind: InputKind::Int,
            default: InputDefault::Int(DEFAULT_FRAME),
            min: Some(MIN_FRAME),
            step: Some(1),
        },
    ],
    run: run_parseq_to_deforum,
};

/// Every node this crate provides.
pub const NODE_CLASS_MAPPINGS: &[NodeDescriptor] = &[PARSEQ_TO_DEFORUM];

/// Identifier → display label, as the host expects it.
pub const NODE_DISPLAY_NAME_MAPPINGS: &[(&str, &str)] =
    &[(PARSEQ_TO_DEFORUM.id, PARSEQ_TO_DEFORUM.display_name)];

/// Look a node up by identifier.
pub fn find_node(id: &str) -> Option<&'static NodeDescriptor> {
    NODE_CLASS_MAPPINGS.iter().find(|n| n.id == id)
}

/// Run the node registered as `id` with the host's input mapping.
///
/// `Err` means the host broke its side of the contract (unknown node, malformed inputs).
/// Problems with the keyframe payload itself come back as [`NodeOutput::Error`].
#[tracing::instrument(skip(inputs))]
pub fn invoke(id: &str, inputs: &serde_json::Value) -> DeforumResult<NodeOutput> {
    let node =
        find_node(id).ok_or_else(|| DeforumError::validation(format!("unknown node '{id}'")))?;
    node.invoke(inputs)
}

/// Registration tables keyed by node identifier, ready to serialize for the host.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RegistrationTable {
    /// Identifier → descriptor.
    pub node_class_mappings: BTreeMap<&'static str, NodeDescriptor>,
    /// Identifier → display label.
    pub node_display_name_mappings: BTreeMap<&'static str, &'static str>,
}

/// Build the registration tables from the constant node list.
pub fn registration_table() -> RegistrationTable {
    RegistrationTable {
        node_class_mappings: NODE_CLASS_MAPPINGS.iter().map(|n| (n.id, *n)).collect(),
        node_display_name_mappings: NODE_DISPLAY_NAME_MAPPINGS.iter().copied().collect(),
    }
}

#[derive(serde::Deserialize)]
struct ParseqToDeforumInputs {
    #[serde(default = "default_parseq_data")]
    parseq_data: String,
    #[serde(default = "default_frame")]
    frame: i64,
}

fn default_parseq_data() -> String {
    DEFAULT_PARSEQ_DATA.to_string()
}

fn default_frame() -> i64 {
    DEFAULT_FRAME
}

fn run_parseq_to_deforum(
    node: &NodeDescriptor,
    inputs: &serde_json::Value,
) -> DeforumResult<NodeOutput> {
    let inputs: ParseqToDeforumInputs = serde::Deserialize::deserialize(inputs)?;

    let min = node.input("frame").and_then(|i| i.min).unwrap_or(MIN_FRAME);
    let frame = u64::try_from(inputs.frame)
        .ok()
        .filter(|_| inputs.frame >= min)
        .ok_or_else(|| {
            DeforumError::validation(format!(
                "{}: frame must be >= {min}, got {}",
                node.id, inputs.frame
            ))
        })?;

    Ok(resolve(&inputs.parseq_data, FrameIndex(frame)))
}

#[cfg(test)]
#[path = "../../tests/unit/node/registry.rs"]
mod tests;
