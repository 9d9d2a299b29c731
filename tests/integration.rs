//! End-to-end tests: builder document in, compiled script, full conversation,
//! extraction out, plus fallback resolution and artifact round-trips.
mod common;
use common::*;
use kaiwa::prelude::*;
use std::fs;

#[test]
fn test_full_conversation_from_authored_graph() {
    let script = ScriptCompiler::compile_graph(create_print_flow_graph());
    assert!(script.is_usable());

    let mut session = Session::open(&script).expect("open");

    session
        .submit(AnswerValue::Choice("Printing".to_string()))
        .expect("category");
    session
        .submit(AnswerValue::Choice("Color".to_string()))
        .expect("print type");
    session
        .submit(AnswerValue::Raw("5".to_string()))
        .expect("copies");
    let turn = session
        .submit(AnswerValue::Raw("document.pdf".to_string()))
        .expect("upload");

    assert!(matches!(turn, Turn::Complete(_)));
    assert!(session.is_complete());

    let transcript = session.into_transcript();
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript[0].answer, "Printing");
    assert_eq!(transcript[1].answer, "Color");
    assert_eq!(transcript[2].answer, "5");
    assert_eq!(transcript[3].answer, "document.pdf");

    let order = extract(&transcript);
    assert_eq!(order.quantity, 5);
    assert_eq!(
        order.details,
        "What specific service would you like today?: Printing; \
         What type of printing?: Color; \
         How many copies?: 5; \
         Please upload your document: document.pdf"
    );

    let item = order.line_item("Document Printing", 0.5);
    assert_eq!(item.name, format!("Document Printing ({})", order.details));
    assert_eq!(item.quantity, 5);
}

#[test]
fn test_empty_stored_script_parses_and_resolves_to_default() {
    // Services are seeded with `{}` until their owner authors a script.
    let stored = RuntimeScript::from_json("{}").expect("empty object parses");
    assert!(!stored.is_usable());

    let resolved = script_or_default(Some(stored), "Corner Print Co");
    assert!(resolved.is_usable());
    assert_fully_resolvable(&resolved);
}

#[test]
fn test_unusable_scripts_resolve_to_default() {
    // An empty stored script must never reach a respondent.
    let resolved = script_or_default(Some(RuntimeScript::default()), "Corner Print Co");
    assert!(resolved.is_usable());
    assert!(
        resolved
            .start_node()
            .expect("start node")
            .text
            .contains("Corner Print Co")
    );

    // Absent scripts resolve the same way.
    let resolved = script_or_default(None, "Corner Print Co");
    assert!(resolved.is_usable());

    // A usable stored script is kept as-is.
    let stored = ScriptCompiler::compile_graph(create_branching_graph());
    let resolved = script_or_default(Some(stored.clone()), "Corner Print Co");
    assert_eq!(resolved, stored);
}

#[test]
fn test_default_script_is_fully_resolvable() {
    let script = default_script("Corner Print Co");
    assert!(script.is_usable());
    assert_fully_resolvable(&script);
}

#[test]
fn test_default_script_drives_the_canned_flow() {
    let script = default_script("Corner Print Co");
    let session = Session::replay(
        &script,
        [
            AnswerValue::Choice("Printing".to_string()),
            AnswerValue::Choice("Color".to_string()),
            AnswerValue::Raw("5".to_string()),
            AnswerValue::Raw("upload-stub".to_string()),
        ],
    )
    .expect("replay");

    assert!(session.is_complete());
    assert_eq!(session.transcript().len(), 4);

    let order = extract(session.transcript());
    assert_eq!(order.quantity, 5);
}

#[test]
fn test_default_script_carries_price_modifiers() {
    let script = default_script("Corner Print Co");
    let printing = script.node("printing").expect("printing node");
    let options = printing.options.as_ref().expect("options");

    assert_eq!(options[0].price_mod, Some(0.10));
    assert_eq!(options[1].price_mod, Some(0.50));
}

#[test]
fn test_builder_document_end_to_end() {
    let document = BuilderDocument::from_json(SAVED_BUILDER_DOCUMENT).expect("parse");
    let graph = document.into_graph().expect("convert");
    let script = ScriptCompiler::compile_graph(graph);

    assert!(script.is_usable());
    assert_eq!(script.start_node_id.as_deref(), Some("node_2"));
    assert_fully_resolvable(&script);

    // Yes continues to the page-count step, No was left dangling.
    let session = Session::replay(
        &script,
        [
            AnswerValue::Choice("Yes".to_string()),
            AnswerValue::Raw("30".to_string()),
        ],
    )
    .expect("replay");
    assert!(session.is_complete());
    assert_eq!(extract(session.transcript()).quantity, 30);
}

#[test]
fn test_malformed_builder_json_is_rejected() {
    let err = BuilderDocument::from_json("{ invalid json }").expect_err("must fail");
    assert!(matches!(err, BuilderParseError::JsonParseError(_)));
}

#[test]
fn test_script_json_round_trip_is_stable() {
    let script = ScriptCompiler::compile_graph(create_print_flow_graph());

    let json = script.to_json().expect("serialize");
    let reloaded = RuntimeScript::from_json(&json).expect("deserialize");

    assert_eq!(reloaded, script);
    assert_eq!(reloaded.to_json().expect("serialize"), json);
}

#[test]
fn test_artifact_round_trip() {
    let script = ScriptCompiler::compile_graph(create_print_flow_graph());

    let path = std::env::temp_dir().join("kaiwa_artifact_roundtrip.bin");
    let path = path.to_str().expect("temp path").to_string();

    script.save(&path).expect("save");
    let reloaded = RuntimeScript::from_file(&path).expect("load");
    assert_eq!(reloaded, script);

    // Clean up
    let _ = fs::remove_file(&path);
}
