//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the kaiwa
//! crate, so callers can bring the whole engine surface into scope with a
//! single import.

// Authoring model and conversion
pub use crate::builder::{BuilderConnection, BuilderDocument, BuilderNode, BuilderNodeData};
pub use crate::graph::{
    GraphDefinition, GraphEdgeDefinition, GraphNodeDefinition, InputKind, IntoGraph, NodeKind,
    Position, QuestionData,
};

// Compilation
pub use crate::compiler::{ScriptCompiler, ScriptCompilerBuilder};

// Runtime script and fallback provider
pub use crate::script::{
    FreeInput, RuntimeNode, RuntimeOption, RuntimeScript, default_script, script_or_default,
};

// Conversation interpreter
pub use crate::interpreter::{AnswerKind, AnswerRecord, AnswerValue, Session, Turn};

// Answer extraction
pub use crate::extract::{LineItem, OrderDetails, extract, extract_legacy};

// Error types
pub use crate::error::{ArtifactError, BuilderParseError, GraphConversionError, SessionError};
