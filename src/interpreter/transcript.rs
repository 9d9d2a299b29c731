use serde::{Deserialize, Serialize};

/// One collected question/answer pair.
///
/// Wire shape: `{question, answer, type}`. Entries keep exact traversal
/// order; the interpreter never reorders or deduplicates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: String,
    #[serde(rename = "type", default)]
    pub kind: AnswerKind,
}

/// How an answer was collected. Client-supplied transcripts may omit the
/// `type` field entirely; it defaults to `Text`, which the extraction layer
/// treats as non-numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKind {
    Choice,
    Number,
    File,
    #[default]
    Text,
}
