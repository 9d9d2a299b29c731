/// The complete, canonical definition of an authored service script graph,
/// ready for compilation. This is the target structure for any custom source
/// format conversion.
///
/// No validation happens at this layer. A graph being edited in the builder
/// is transiently incomplete most of the time (no start edge yet, options
/// without connections); absent data simply means there is nothing to
/// compile.
#[derive(Debug, Clone, Default)]
pub struct GraphDefinition {
    pub nodes: Vec<GraphNodeDefinition>,
    pub edges: Vec<GraphEdgeDefinition>,
}

/// A single authored step in the graph.
#[derive(Debug, Clone)]
pub struct GraphNodeDefinition {
    pub id: String,
    pub kind: NodeKind,
    /// Canvas placement. Authoring-only; irrelevant to runtime semantics.
    pub position: Position,
    /// Present only for `NodeKind::Question`.
    pub question: Option<QuestionData>,
}

/// Authoring-time canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// The variant tag of an authored node. Exactly one node per graph carries
/// `Start`; it marks the entry edge and never becomes a runtime step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Start,
    Question,
}

/// The question configuration carried by a `Question` node.
#[derive(Debug, Clone, Default)]
pub struct QuestionData {
    pub prompt_text: String,
    pub input_kind: InputKind,
    /// Ordered answer options. Only meaningful for `MultipleChoice`.
    pub options: Vec<String>,
}

/// How a question step collects its answer, which also fixes the number of
/// logical output ports the node exposes in the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    #[default]
    MultipleChoice,
    YesNo,
    Number,
    TextArea,
    FileUpload,
}

impl InputKind {
    /// Parses the builder's `input_type` key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "multiple_choice" => Some(InputKind::MultipleChoice),
            "yes_no" => Some(InputKind::YesNo),
            "number" => Some(InputKind::Number),
            "text_area" => Some(InputKind::TextArea),
            "file_upload" => Some(InputKind::FileUpload),
            _ => None,
        }
    }

    /// Number of logical output ports a node of this kind exposes:
    /// one per option for `MultipleChoice`, two for `YesNo`, and a single
    /// generic continuation for every free-form kind.
    pub fn output_port_count(&self, option_count: usize) -> usize {
        match self {
            InputKind::MultipleChoice => option_count,
            InputKind::YesNo => 2,
            InputKind::Number | InputKind::TextArea | InputKind::FileUpload => 1,
        }
    }
}

/// A directed connection from one node's output port to another node's input.
#[derive(Debug, Clone)]
pub struct GraphEdgeDefinition {
    pub source: String,
    /// Which logical output of the source node this edge leaves from,
    /// e.g. `out_opt_0`, `out_yes`, `out_next`.
    pub source_port: String,
    pub target: String,
}

impl GraphDefinition {
    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&GraphNodeDefinition> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The designated entry node, if the graph has one yet.
    pub fn start_node(&self) -> Option<&GraphNodeDefinition> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Start)
    }

    /// All edges leaving the given node.
    pub fn outgoing_edges<'a>(
        &'a self,
        node_id: &'a str,
    ) -> impl Iterator<Item = &'a GraphEdgeDefinition> {
        self.edges.iter().filter(move |e| e.source == node_id)
    }
}
