use crate::error::{BuilderParseError, GraphConversionError};
use crate::graph::{
    GraphDefinition, GraphEdgeDefinition, GraphNodeDefinition, InputKind, IntoGraph, NodeKind,
    Position, QuestionData,
};
use serde::Deserialize;

/// The question configuration block of a builder node.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BuilderNodeData {
    pub question_text: Option<String>,
    pub input_type: Option<String>,
    pub answer_options: Option<Vec<String>>,
}

/// One node as the builder saves it.
#[derive(Debug, Deserialize, Clone)]
pub struct BuilderNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub data: BuilderNodeData,
}

/// A port-to-node connection as the builder saves it.
#[derive(Debug, Deserialize, Clone)]
pub struct BuilderConnection {
    pub source: String,
    #[serde(default, alias = "sourcePort")]
    pub source_port: String,
    pub target: String,
}

/// The complete saved builder document: `{nodes, connections}`.
///
/// This is the sole supported external source format. Extra saved state
/// (viewport, per-node port lists) is tolerated and ignored.
#[derive(Debug, Deserialize, Default)]
pub struct BuilderDocument {
    #[serde(default)]
    pub nodes: Vec<BuilderNode>,
    #[serde(default)]
    pub connections: Vec<BuilderConnection>,
}

impl BuilderDocument {
    /// Deserializes a saved builder document from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, BuilderParseError> {
        serde_json::from_str(json).map_err(|e| BuilderParseError::JsonParseError(e.to_string()))
    }
}

impl IntoGraph for BuilderDocument {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| {
                let position = Position { x: raw.x, y: raw.y };
                if raw.node_type == "start" {
                    return GraphNodeDefinition {
                        id: raw.id,
                        kind: NodeKind::Start,
                        position,
                        question: None,
                    };
                }

                // The builder only authors start and question steps; anything
                // else in a saved document degrades to a question step.
                let input_kind = raw.data.input_type.as_deref().and_then(InputKind::from_key);
                let options = match input_kind {
                    // A missing or unrecognized input type compiles to a plain
                    // informational step, so any stale answer options are dropped.
                    None => vec![],
                    Some(InputKind::MultipleChoice) => raw.data.answer_options.unwrap_or_default(),
                    Some(_) => vec![],
                };

                GraphNodeDefinition {
                    id: raw.id,
                    kind: NodeKind::Question,
                    position,
                    question: Some(QuestionData {
                        prompt_text: raw.data.question_text.unwrap_or_default(),
                        input_kind: input_kind.unwrap_or_default(),
                        options,
                    }),
                }
            })
            .collect();

        let edges = self
            .connections
            .into_iter()
            .map(|raw| GraphEdgeDefinition {
                source: raw.source,
                source_port: raw.source_port,
                target: raw.target,
            })
            .collect();

        Ok(GraphDefinition { nodes, edges })
    }
}
