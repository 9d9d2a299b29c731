use crate::graph::{GraphDefinition, GraphNodeDefinition, InputKind, NodeKind};
use crate::script::{FreeInput, RuntimeNode, RuntimeOption, RuntimeScript};
use ahash::AHashMap;

pub mod ports;

use ports::{PortBinding, PortResolver, register_default_resolvers};

/// Shared id of the synthetic terminal node, one per compilation at most.
pub const SYNTHETIC_TERMINAL_ID: &str = "generated_finish_node";

const DEFAULT_COMPLETION_TEXT: &str = "Thank you! Your request is ready to be placed.";
const GENERIC_TERMINAL_TEXT: &str = "Complete.";
const EMPTY_PROMPT_TEXT: &str = "...";

/// Compiles an authored `GraphDefinition` into a `RuntimeScript`.
///
/// Compilation is pure and idempotent: it never errors and never mutates the
/// graph, and the same graph always compiles to a byte-identical script. An
/// incomplete graph (no start edge, no nodes) compiles to an unusable
/// script; callers check `RuntimeScript::is_usable` and substitute the
/// default script, they do not handle compile failures.
pub struct ScriptCompiler {
    graph: GraphDefinition,
    resolvers: AHashMap<InputKind, Box<dyn PortResolver>>,
    completion_text: String,
}

pub struct ScriptCompilerBuilder {
    graph: GraphDefinition,
    resolvers: AHashMap<InputKind, Box<dyn PortResolver>>,
    completion_text: String,
}

impl ScriptCompilerBuilder {
    pub fn new(graph: GraphDefinition) -> Self {
        let mut resolvers: AHashMap<InputKind, Box<dyn PortResolver>> = AHashMap::new();
        register_default_resolvers(&mut resolvers);
        Self {
            graph,
            resolvers,
            completion_text: DEFAULT_COMPLETION_TEXT.to_string(),
        }
    }

    /// Overrides the message shown on the synthetic terminal node.
    pub fn with_completion_text(mut self, text: &str) -> Self {
        self.completion_text = text.to_string();
        self
    }

    /// Replaces the port resolver for the resolver's own input kind.
    pub fn with_resolver(mut self, resolver: Box<dyn PortResolver>) -> Self {
        self.resolvers.insert(resolver.input_kind(), resolver);
        self
    }

    pub fn build(self) -> ScriptCompiler {
        ScriptCompiler {
            graph: self.graph,
            resolvers: self.resolvers,
            completion_text: self.completion_text,
        }
    }
}

impl ScriptCompiler {
    pub fn builder(graph: GraphDefinition) -> ScriptCompilerBuilder {
        ScriptCompilerBuilder::new(graph)
    }

    /// Compiles with default settings.
    pub fn compile_graph(graph: GraphDefinition) -> RuntimeScript {
        Self::builder(graph).build().compile()
    }

    pub fn compile(&self) -> RuntimeScript {
        let mut script = RuntimeScript::default();

        self.materialize_nodes(&mut script);
        self.wire_edges(&mut script);
        self.complete_paths(&mut script);

        script
    }

    /// Step 1: create a runtime node for every question node. Start nodes
    /// never materialize; they only mark the entry edge.
    fn materialize_nodes(&self, script: &mut RuntimeScript) {
        for node in &self.graph.nodes {
            if node.kind != NodeKind::Question {
                continue;
            }
            let question = node.question.clone().unwrap_or_default();

            let mut runtime = RuntimeNode {
                text: if question.prompt_text.is_empty() {
                    EMPTY_PROMPT_TEXT.to_string()
                } else {
                    question.prompt_text.clone()
                },
                ..Default::default()
            };

            match question.input_kind {
                InputKind::MultipleChoice => {
                    // Zero options means there is nothing to choose; the node
                    // becomes a plain informational step instead.
                    if !question.options.is_empty() {
                        runtime.options = Some(
                            question
                                .options
                                .iter()
                                .map(|opt| RuntimeOption {
                                    label: opt.clone(),
                                    value: opt.clone(),
                                    next: None,
                                    price_mod: None,
                                })
                                .collect(),
                        );
                    }
                }
                InputKind::YesNo => {
                    runtime.options = Some(
                        ["Yes", "No"]
                            .iter()
                            .map(|opt| RuntimeOption {
                                label: opt.to_string(),
                                value: opt.to_string(),
                                next: None,
                                price_mod: None,
                            })
                            .collect(),
                    );
                }
                // text_area routes exactly like number: one output port,
                // free-form collection.
                InputKind::Number | InputKind::TextArea => {
                    runtime.input_type = Some(FreeInput::Number);
                }
                InputKind::FileUpload => {
                    runtime.input_type = Some(FreeInput::File);
                }
            }

            script.nodes.insert(node.id.clone(), runtime);
        }
    }

    /// Step 2: resolve every edge through the source node's port semantics.
    /// The start node's edge designates the entry point; duplicate edges from
    /// one port are a builder invariant violation and last-write-wins here.
    fn wire_edges(&self, script: &mut RuntimeScript) {
        let node_index: AHashMap<&str, &GraphNodeDefinition> = self
            .graph
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), n))
            .collect();

        for edge in &self.graph.edges {
            let Some(source) = node_index.get(edge.source.as_str()) else {
                continue;
            };

            if source.kind == NodeKind::Start {
                script.start_node_id = Some(edge.target.clone());
                continue;
            }

            let input_kind = source
                .question
                .as_ref()
                .map(|q| q.input_kind)
                .unwrap_or_default();
            let Some(resolver) = self.resolvers.get(&input_kind) else {
                continue;
            };
            let Some(runtime) = script.nodes.get_mut(&edge.source) else {
                continue;
            };

            let option_count = runtime.options.as_ref().map_or(0, |opts| opts.len());
            match resolver.resolve(&edge.source_port, option_count) {
                Some(PortBinding::OptionSlot(index)) => {
                    if let Some(slot) = runtime
                        .options
                        .as_mut()
                        .and_then(|opts| opts.get_mut(index))
                    {
                        slot.next = Some(edge.target.clone());
                    }
                }
                Some(PortBinding::Direct) => {
                    runtime.next = Some(edge.target.clone());
                }
                None => {}
            }
        }
    }

    /// Step 3: every dangling exit is redirected to one shared synthetic
    /// terminal node, created lazily and scoped to this compilation. A node
    /// with no exits at all is itself the end of its path.
    fn complete_paths(&self, script: &mut RuntimeScript) {
        let mut needs_terminal = false;

        for node in script.nodes.values_mut() {
            if let Some(options) = node.options.as_mut() {
                for option in options.iter_mut() {
                    if option.next.is_none() {
                        option.next = Some(SYNTHETIC_TERMINAL_ID.to_string());
                        needs_terminal = true;
                    }
                }
            } else if node.input_type.is_some() {
                if node.next.is_none() {
                    node.next = Some(SYNTHETIC_TERMINAL_ID.to_string());
                    needs_terminal = true;
                }
            } else if !node.is_final && node.next.is_none() {
                node.is_final = true;
                if node.text.is_empty() {
                    node.text = GENERIC_TERMINAL_TEXT.to_string();
                }
            }
        }

        if needs_terminal {
            script.nodes.insert(
                SYNTHETIC_TERMINAL_ID.to_string(),
                RuntimeNode {
                    text: self.completion_text.clone(),
                    is_final: true,
                    ..Default::default()
                },
            );
        }
    }
}
