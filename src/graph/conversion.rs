use super::definition::GraphDefinition;
use crate::error::GraphConversionError;

/// A trait for custom data models that can be converted into a kaiwa
/// `GraphDefinition`.
///
/// This is the extension point that keeps the compiler format-agnostic. The
/// crate ships one implementation for the visual builder's saved document
/// (`BuilderDocument`); anything else that can describe a start node,
/// question nodes, and port-labelled connections can implement this trait
/// and feed the same compiler.
///
/// # Example
///
/// ```rust,no_run
/// use kaiwa::prelude::*;
/// use kaiwa::error::GraphConversionError;
///
/// struct MyStep { id: String, prompt: String }
/// struct MyFlow { steps: Vec<MyStep> }
///
/// impl IntoGraph for MyFlow {
///     fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| GraphNodeDefinition {
///                 id: step.id,
///                 kind: NodeKind::Question,
///                 position: Position::default(),
///                 question: Some(QuestionData {
///                     prompt_text: step.prompt,
///                     input_kind: InputKind::Number,
///                     options: vec![],
///                 }),
///             })
///             .collect();
///
///         Ok(GraphDefinition { nodes, edges: vec![] })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a compilable script graph.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}
