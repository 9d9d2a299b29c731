use thiserror::Error;

/// Errors that can occur when deserializing a builder-saved document.
#[derive(Error, Debug, Clone)]
pub enum BuilderParseError {
    #[error("Failed to parse builder document JSON: {0}")]
    JsonParseError(String),
}

/// Errors that can occur when converting a custom source format into a
/// `GraphDefinition`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid source data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while driving a conversation session.
///
/// These indicate a corrupt or unusable persisted script, never a bad answer
/// from the respondent: unparseable answer content is recovered locally by
/// the extraction layer and does not surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(
        "Script has no resolvable start node; substitute the default script before opening a session"
    )]
    MissingStart,

    #[error("Node '{0}' is referenced by the script but does not exist")]
    NodeNotFound(String),

    #[error("No option matching '{value}' on node '{node_id}'")]
    OptionNotFound { node_id: String, value: String },

    #[error(
        "Selected option '{value}' on node '{node_id}' has no continuation; the persisted script is corrupt"
    )]
    MissingContinuation { node_id: String, value: String },

    #[error("The conversation already ended at terminal node '{0}'")]
    AlreadyComplete(String),
}

/// Errors that can occur when saving or loading a compiled script artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact serialization failed: {0}")]
    Encode(String),

    #[error("Artifact deserialization failed: {0}")]
    Decode(String),

    #[error("Could not access artifact file '{path}': {message}")]
    Io { path: String, message: String },
}
