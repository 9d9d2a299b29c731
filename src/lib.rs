//! # Kaiwa - Service Script Compilation and Conversation Engine
//!
//! **Kaiwa** turns visually-authored service scripts into chat-driven
//! order-collection flows. A business owner draws a node/edge graph in a
//! builder UI; kaiwa compiles that graph into a runtime conversation script,
//! steps a respondent through it turn by turn, and derives an order quantity
//! and detail string from the collected answers.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic at the edges. It operates on a canonical
//! `GraphDefinition`; the builder's saved JSON document is one supported
//! source (`BuilderDocument`), and anything else can implement `IntoGraph`.
//!
//! 1.  **Convert**: deserialize the builder document (or your own format) and
//!     convert it into a `GraphDefinition`.
//! 2.  **Compile**: `ScriptCompiler` transforms the graph into a
//!     `RuntimeScript`: a lookup-keyed conversation tree with a designated
//!     start and no dangling exits. Compilation never fails; an incomplete
//!     graph compiles to an unusable script.
//! 3.  **Resolve**: `script_or_default` substitutes the canned default script
//!     whenever the compiled script is unusable, so a respondent always gets
//!     a valid conversation.
//! 4.  **Interpret**: `Session` walks the script, collecting an ordered
//!     transcript of answers.
//! 5.  **Extract**: `extract` (or `extract_legacy` for free-text summaries)
//!     turns the transcript into `{quantity, details}` for order creation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kaiwa::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // A minimal authored graph: start -> "How many copies?" (number).
//!     let graph = GraphDefinition {
//!         nodes: vec![
//!             GraphNodeDefinition {
//!                 id: "node_1".to_string(),
//!                 kind: NodeKind::Start,
//!                 position: Position::default(),
//!                 question: None,
//!             },
//!             GraphNodeDefinition {
//!                 id: "node_2".to_string(),
//!                 kind: NodeKind::Question,
//!                 position: Position::default(),
//!                 question: Some(QuestionData {
//!                     prompt_text: "How many copies?".to_string(),
//!                     input_kind: InputKind::Number,
//!                     options: vec![],
//!                 }),
//!             },
//!         ],
//!         edges: vec![GraphEdgeDefinition {
//!             source: "node_1".to_string(),
//!             source_port: "out_start".to_string(),
//!             target: "node_2".to_string(),
//!         }],
//!     };
//!
//!     // Compile, degrading to the default script if the graph was unusable.
//!     let compiled = ScriptCompiler::builder(graph).build().compile();
//!     let script = script_or_default(Some(compiled), "Campus Copy Shop");
//!
//!     // Drive one conversation turn and extract the order fields.
//!     let mut session = Session::open(&script)?;
//!     session.submit(AnswerValue::Raw("5".to_string()))?;
//!
//!     let order = extract(session.transcript());
//!     assert_eq!(order.quantity, 5);
//!     println!("{}", order.details);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod compiler;
pub mod error;
pub mod extract;
pub mod graph;
pub mod interpreter;
pub mod prelude;
pub mod script;
