use clap::Parser;
use kaiwa::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// A service script compilation and conversation engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the saved builder document JSON file
    document_path: String,

    /// Write the compiled runtime script JSON to this path
    #[arg(short, long)]
    output: Option<String>,

    /// Business display name used by the default script fallback
    #[arg(short, long, default_value = "Demo Business")]
    business: String,

    /// Service name used for the derived order line item
    #[arg(long, default_value = "Service")]
    service: String,

    /// Unit price used for the derived order line item
    #[arg(long, default_value_t = 1.0)]
    price: f64,

    /// Run an interactive conversation against the compiled script
    #[arg(short = 'i', long, help = "Run the script in interactive 'chat' mode")]
    simulate: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let document_json = fs::read_to_string(&cli.document_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read builder document '{}': {}",
            &cli.document_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let document = BuilderDocument::from_json(&document_json)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let graph = document
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert document: {}", e)));

    // --- 3. Compilation ---
    println!("\nCompiling service script...");
    let compile_start = Instant::now();
    let compiled = ScriptCompiler::builder(graph).build().compile();
    let compile_duration = compile_start.elapsed();

    if compiled.is_usable() {
        println!(
            "Compilation successful: {} runtime nodes in {:?}",
            compiled.nodes.len(),
            compile_duration
        );
    } else {
        println!("Document compiled to an unusable script; using the default script instead.");
    }
    let script = script_or_default(Some(compiled), &cli.business);

    if let Some(output_path) = &cli.output {
        let json = script
            .to_json()
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        fs::write(output_path, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", output_path, e))
        });
        println!("Runtime script written to {}", output_path);
    }

    if cli.simulate {
        run_simulation(&script, &cli.service, cli.price);
    }

    println!("\n--- Performance Summary ---");
    println!("File Loading:   {:?}", load_duration);
    println!("Compilation:    {:?}", compile_duration);
    println!("---------------------------");
    println!("Total:          {:?}", total_start.elapsed());
}

/// Walks the script turn by turn on stdin/stdout, then prints the extracted
/// order fields.
fn run_simulation(script: &RuntimeScript, service_name: &str, unit_price: f64) {
    println!("\n--- Interactive Conversation ---");

    let mut session =
        Session::open(script).unwrap_or_else(|e| exit_with_error(&e.to_string()));

    loop {
        let node = session.current_node();
        println!("\n[Bot]: {}", node.text);

        if session.is_complete() {
            break;
        }

        let answer = if let Some(options) = &node.options {
            for (index, option) in options.iter().enumerate() {
                println!("  {}. {}", index + 1, option.label);
            }
            let choice = prompt_for_input("Enter choice number");
            match choice.parse::<usize>() {
                Ok(number) if number >= 1 && number <= options.len() => {
                    AnswerValue::Index(number - 1)
                }
                _ => {
                    println!("Invalid choice. Please enter 1-{}.", options.len());
                    continue;
                }
            }
        } else {
            AnswerValue::Raw(prompt_for_input("Your answer"))
        };

        match session.submit(answer) {
            Ok(Turn::Complete(_)) | Ok(Turn::Prompt(_)) => {}
            Err(SessionError::OptionNotFound { .. }) => {
                println!("That option does not exist; try again.");
            }
            Err(e) => exit_with_error(&e.to_string()),
        }
    }

    let order = extract(session.transcript());
    let item = order.line_item(service_name, unit_price);

    println!("\n--- Extracted Order ---");
    println!("Quantity: {}", order.quantity);
    println!("Details:  {}", order.details);
    println!("Item:     {} x{} @ {}", item.name, item.quantity, item.price);
}

/// Prompts the user and reads one line of input.
fn prompt_for_input(prompt_text: &str) -> String {
    let mut line = String::new();

    print!("> {}: ", prompt_text);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    line.trim().to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
