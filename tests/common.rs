//! Common test utilities for building script graphs and walking compiled
//! scripts.
use kaiwa::prelude::*;

#[allow(dead_code)]
pub fn start_node(id: &str) -> GraphNodeDefinition {
    GraphNodeDefinition {
        id: id.to_string(),
        kind: NodeKind::Start,
        position: Position::default(),
        question: None,
    }
}

#[allow(dead_code)]
pub fn question_node(
    id: &str,
    prompt: &str,
    input_kind: InputKind,
    options: &[&str],
) -> GraphNodeDefinition {
    GraphNodeDefinition {
        id: id.to_string(),
        kind: NodeKind::Question,
        position: Position::default(),
        question: Some(QuestionData {
            prompt_text: prompt.to_string(),
            input_kind,
            options: options.iter().map(|o| o.to_string()).collect(),
        }),
    }
}

#[allow(dead_code)]
pub fn edge(source: &str, port: &str, target: &str) -> GraphEdgeDefinition {
    GraphEdgeDefinition {
        source: source.to_string(),
        source_port: port.to_string(),
        target: target.to_string(),
    }
}

/// The end-to-end print shop flow:
/// start -> category choice -> print type choice -> copies -> upload.
/// The Scanning/Binding category options and the upload step dangle, so the
/// compiler must route them to the synthetic terminal.
#[allow(dead_code)]
pub fn create_print_flow_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            start_node("node_1"),
            question_node(
                "category",
                "What specific service would you like today?",
                InputKind::MultipleChoice,
                &["Printing", "Scanning", "Binding"],
            ),
            question_node(
                "print_type",
                "What type of printing?",
                InputKind::MultipleChoice,
                &["Black & White", "Color"],
            ),
            question_node("copies", "How many copies?", InputKind::Number, &[]),
            question_node(
                "upload",
                "Please upload your document",
                InputKind::FileUpload,
                &[],
            ),
        ],
        edges: vec![
            edge("node_1", "out_start", "category"),
            edge("category", "out_opt_0", "print_type"),
            edge("print_type", "out_opt_0", "copies"),
            edge("print_type", "out_opt_1", "copies"),
            edge("copies", "out_next", "upload"),
        ],
    }
}

/// A yes/no branch: Yes continues to a number step, No dangles.
#[allow(dead_code)]
pub fn create_branching_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            start_node("node_1"),
            question_node(
                "laminate",
                "Laminate the pages?",
                InputKind::YesNo,
                &[],
            ),
            question_node("pages", "How many pages?", InputKind::Number, &[]),
        ],
        edges: vec![
            edge("node_1", "out_start", "laminate"),
            edge("laminate", "out_yes", "pages"),
        ],
    }
}

/// Options A/B/C with edges only from ports 0 and 2; port 1 is unconnected.
#[allow(dead_code)]
pub fn create_gapped_choice_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            start_node("node_1"),
            question_node(
                "pick",
                "Pick one",
                InputKind::MultipleChoice,
                &["A", "B", "C"],
            ),
            question_node("x", "Step X", InputKind::Number, &[]),
            question_node("z", "Step Z", InputKind::Number, &[]),
        ],
        edges: vec![
            edge("node_1", "out_start", "pick"),
            edge("pick", "out_opt_0", "x"),
            edge("pick", "out_opt_2", "z"),
        ],
    }
}

/// A builder document exactly as the UI saves it, including viewport state
/// and per-node port lists the compiler must tolerate and ignore.
#[allow(dead_code)]
pub const SAVED_BUILDER_DOCUMENT: &str = r#"{
    "nodes": [
        {
            "id": "node_1", "type": "start", "x": -40, "y": 0, "data": {},
            "inputs": [],
            "outputs": [{ "id": "out_start", "label": "Start", "type": "flow" }]
        },
        {
            "id": "node_2", "type": "question", "x": 160, "y": 40,
            "data": {
                "question_text": "Laminate the pages?",
                "input_type": "yes_no"
            },
            "inputs": [{ "id": "in_flow", "label": "In", "type": "flow" }],
            "outputs": []
        },
        {
            "id": "node_3", "type": "question", "x": 360, "y": 80,
            "data": {
                "question_text": "How many pages?",
                "input_type": "number"
            }
        }
    ],
    "connections": [
        { "source": "node_1", "sourcePort": "out_start", "target": "node_2", "targetPort": "in_flow" },
        { "source": "node_2", "sourcePort": "out_yes", "target": "node_3", "targetPort": "in_flow" }
    ],
    "viewport": { "x": 420, "y": 180, "scale": 1.25 }
}"#;

/// Walks every node reachable from the start and asserts the completeness
/// guarantee: each node is terminal, or every one of its exits resolves to
/// an existing node.
#[allow(dead_code)]
pub fn assert_fully_resolvable(script: &RuntimeScript) {
    let start_id = script
        .start_node_id
        .as_deref()
        .expect("script has no start node id");

    let mut pending = vec![start_id.to_string()];
    let mut visited = Vec::new();

    while let Some(id) = pending.pop() {
        if visited.contains(&id) {
            continue;
        }
        let node = script
            .node(&id)
            .unwrap_or_else(|| panic!("node '{}' is referenced but missing", id));
        visited.push(id.clone());

        if node.is_final {
            continue;
        }

        if let Some(options) = &node.options {
            assert!(!options.is_empty(), "non-final node '{}' has no exits", id);
            for option in options {
                let next = option
                    .next
                    .as_ref()
                    .unwrap_or_else(|| panic!("option '{}' on '{}' dangles", option.value, id));
                pending.push(next.clone());
            }
        } else {
            assert!(
                node.input_type.is_some(),
                "non-final node '{}' collects nothing",
                id
            );
            let next = node
                .next
                .as_ref()
                .unwrap_or_else(|| panic!("free-form node '{}' dangles", id));
            pending.push(next.clone());
        }
    }
}
