use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The compiled, consumer-facing conversation script.
///
/// Wire shape: `{startNodeId, nodes: {<id>: {text, options?, inputType?,
/// next?, isFinal?}}}`. The node map is a `BTreeMap`, never a hash map:
/// compiling the same graph twice must serialize to byte-identical JSON,
/// which nondeterministic key ordering would break.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeScript {
    #[serde(rename = "startNodeId", default)]
    pub start_node_id: Option<String>,
    #[serde(default)]
    pub nodes: BTreeMap<String, RuntimeNode>,
}

/// One runtime conversation step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeNode {
    #[serde(default)]
    pub text: String,

    /// Discrete choices. Mutually exclusive with `input_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<RuntimeOption>>,

    /// Free-form input request. Mutually exclusive with `options`.
    #[serde(
        rename = "inputType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub input_type: Option<FreeInput>,

    /// Continuation for free-form nodes; unused when `options` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Terminal marker. The interpreter stops here.
    #[serde(
        rename = "isFinal",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub is_final: bool,
}

/// One discrete choice on a runtime step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Per-unit price adjustment attached by the script author.
    #[serde(
        rename = "priceMod",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub price_mod: Option<f64>,
}

/// The free-form input modes a runtime step can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreeInput {
    Number,
    File,
}

impl RuntimeScript {
    /// Looks up a runtime node by id.
    pub fn node(&self, id: &str) -> Option<&RuntimeNode> {
        self.nodes.get(id)
    }

    /// The entry node, when the script has a resolvable one.
    pub fn start_node(&self) -> Option<&RuntimeNode> {
        self.start_node_id.as_deref().and_then(|id| self.nodes.get(id))
    }

    /// Whether the script can actually drive a conversation: it has nodes
    /// and its start id resolves. Callers must substitute the default script
    /// when this is false; an unusable script is the expected outcome of
    /// compiling an incomplete graph, not an error.
    pub fn is_usable(&self) -> bool {
        !self.nodes.is_empty() && self.start_node().is_some()
    }
}

impl RuntimeNode {
    /// Whether this step requires a discrete choice.
    pub fn is_discrete(&self) -> bool {
        self.options.is_some()
    }
}
