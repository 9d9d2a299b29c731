use super::runtime::{FreeInput, RuntimeNode, RuntimeOption, RuntimeScript};
use std::collections::BTreeMap;

fn option(label: &str, value: &str, next: &str, price_mod: Option<f64>) -> RuntimeOption {
    RuntimeOption {
        label: label.to_string(),
        value: value.to_string(),
        next: Some(next.to_string()),
        price_mod,
    }
}

/// Builds the canned script used whenever a service has no usable script of
/// its own: category choice, sub-options with price modifiers, a quantity
/// step, a file upload, and a final confirmation. Only the welcome text is
/// parameterized, with the business's display name.
///
/// Every path here resolves to a terminal node; the fallback must never
/// itself need falling back from.
pub fn default_script(business_name: &str) -> RuntimeScript {
    let mut nodes = BTreeMap::new();

    nodes.insert(
        "start".to_string(),
        RuntimeNode {
            text: format!(
                "Welcome to {}! What specific service would you like today?",
                business_name
            ),
            options: Some(vec![
                option("Printing", "Printing", "printing", None),
                option("Scanning", "Scanning", "scanning", None),
                option("Binding", "Binding", "binding", None),
            ]),
            ..Default::default()
        },
    );

    nodes.insert(
        "printing".to_string(),
        RuntimeNode {
            text: "What type of printing?".to_string(),
            options: Some(vec![
                option("Black & White ($0.10/page)", "BW", "copies", Some(0.10)),
                option("Color ($0.50/page)", "Color", "copies", Some(0.50)),
            ]),
            ..Default::default()
        },
    );

    nodes.insert(
        "scanning".to_string(),
        RuntimeNode {
            text: "How many pages to scan?".to_string(),
            input_type: Some(FreeInput::Number),
            next: Some("upload".to_string()),
            ..Default::default()
        },
    );

    nodes.insert(
        "binding".to_string(),
        RuntimeNode {
            text: "Select binding type".to_string(),
            options: Some(vec![
                option("Spiral", "Spiral", "finish", None),
                option("Hardcover", "Hardcover", "finish", None),
            ]),
            ..Default::default()
        },
    );

    nodes.insert(
        "copies".to_string(),
        RuntimeNode {
            text: "How many copies?".to_string(),
            input_type: Some(FreeInput::Number),
            next: Some("upload".to_string()),
            ..Default::default()
        },
    );

    nodes.insert(
        "upload".to_string(),
        RuntimeNode {
            text: "Please upload your document (Mock Upload)".to_string(),
            input_type: Some(FreeInput::File),
            next: Some("finish".to_string()),
            ..Default::default()
        },
    );

    nodes.insert(
        "finish".to_string(),
        RuntimeNode {
            text: "Great! We have your details. Place Order Now?".to_string(),
            is_final: true,
            ..Default::default()
        },
    );

    RuntimeScript {
        start_node_id: Some("start".to_string()),
        nodes,
    }
}

/// Resolves the script to actually run for a service: the stored one when it
/// is usable, the default script otherwise. Invalid or incomplete stored
/// scripts degrade here silently; the respondent never sees them.
pub fn script_or_default(stored: Option<RuntimeScript>, business_name: &str) -> RuntimeScript {
    match stored {
        Some(script) if script.is_usable() => script,
        _ => default_script(business_name),
    }
}
