use crate::error::SessionError;
use crate::script::{FreeInput, RuntimeNode, RuntimeScript};

mod transcript;

pub use transcript::{AnswerKind, AnswerRecord};

/// A single submitted answer for the current conversation step.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// Selects a discrete option by its `value` string.
    Choice(String),
    /// Selects a discrete option by position, for clients that submit the
    /// option index instead of its value.
    Index(usize),
    /// Free-form input (number or file handle), recorded verbatim.
    Raw(String),
}

impl AnswerValue {
    fn describe(&self) -> String {
        match self {
            AnswerValue::Choice(value) | AnswerValue::Raw(value) => value.clone(),
            AnswerValue::Index(index) => index.to_string(),
        }
    }

    fn into_raw(self) -> String {
        match self {
            AnswerValue::Choice(value) | AnswerValue::Raw(value) => value,
            AnswerValue::Index(index) => index.to_string(),
        }
    }
}

/// Where the session rests after a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Turn<'a> {
    /// Present this node and collect another answer.
    Prompt(&'a RuntimeNode),
    /// The conversation reached a terminal node; hand the transcript to
    /// answer extraction.
    Complete(&'a RuntimeNode),
}

/// One respondent's traversal of an immutable `RuntimeScript`.
///
/// The session owns nothing but its cursor and transcript, so any number of
/// sessions can run concurrently against the same compiled script. The
/// engine is stateless between turns: `replay` rebuilds a session from the
/// prior answer sequence, and the same answers always reproduce the same
/// current node.
#[derive(Debug)]
pub struct Session<'a> {
    script: &'a RuntimeScript,
    current_id: String,
    current: &'a RuntimeNode,
    transcript: Vec<AnswerRecord>,
}

impl<'a> Session<'a> {
    /// Opens a session at the script's start node.
    ///
    /// Fails with `MissingStart` when the script is unusable; callers are
    /// expected to have substituted the default script before getting here.
    pub fn open(script: &'a RuntimeScript) -> Result<Self, SessionError> {
        let start_id = script
            .start_node_id
            .clone()
            .ok_or(SessionError::MissingStart)?;
        let start = script.node(&start_id).ok_or(SessionError::MissingStart)?;
        Ok(Self {
            script,
            current_id: start_id,
            current: start,
            transcript: Vec::new(),
        })
    }

    /// Rebuilds a session by replaying a prior answer sequence from the
    /// start node. Deterministic: equal answer sequences always land on the
    /// same node with the same transcript.
    pub fn replay(
        script: &'a RuntimeScript,
        answers: impl IntoIterator<Item = AnswerValue>,
    ) -> Result<Self, SessionError> {
        let mut session = Self::open(script)?;
        for answer in answers {
            session.submit(answer)?;
        }
        Ok(session)
    }

    /// Rebuilds a session from a transcript previously handed out by this
    /// engine (or supplied by the chat client). Discrete steps are re-matched
    /// by the recorded answer value; free-form steps take the recorded answer
    /// verbatim.
    ///
    /// This is the per-turn entry point for servers that keep no session
    /// state: feed in the prior transcript, present `current_node`, and on
    /// the next request feed the extended transcript back in. A transcript
    /// that no longer matches the script (an option renamed or removed since
    /// it was recorded) surfaces the same errors a live submission would.
    pub fn resume(
        script: &'a RuntimeScript,
        transcript: &[AnswerRecord],
    ) -> Result<Self, SessionError> {
        let mut session = Self::open(script)?;
        for entry in transcript {
            let answer = if session.current.is_discrete() {
                AnswerValue::Choice(entry.answer.clone())
            } else {
                AnswerValue::Raw(entry.answer.clone())
            };
            session.submit(answer)?;
        }
        Ok(session)
    }

    /// The node currently presented to the respondent.
    pub fn current_node(&self) -> &'a RuntimeNode {
        self.current
    }

    /// Id of the node currently presented to the respondent.
    pub fn current_node_id(&self) -> &str {
        &self.current_id
    }

    /// The answers collected so far, in exact traversal order.
    pub fn transcript(&self) -> &[AnswerRecord] {
        &self.transcript
    }

    /// Consumes the session, yielding the transcript for answer extraction.
    pub fn into_transcript(self) -> Vec<AnswerRecord> {
        self.transcript
    }

    /// Whether the session rests on a terminal node.
    pub fn is_complete(&self) -> bool {
        self.current.is_final
    }

    /// Applies one answer to the current node and advances the cursor.
    ///
    /// A chosen option without a continuation is a compiler invariant
    /// violation in the persisted script and surfaces as
    /// `MissingContinuation`; the session must never silently end as if it
    /// were complete.
    pub fn submit(&mut self, answer: AnswerValue) -> Result<Turn<'a>, SessionError> {
        if self.current.is_final {
            return Err(SessionError::AlreadyComplete(self.current_id.clone()));
        }

        let script = self.script;
        let node = self.current;

        let (record, next_id) = if let Some(options) = &node.options {
            let chosen = match &answer {
                AnswerValue::Index(index) => options.get(*index),
                AnswerValue::Choice(value) | AnswerValue::Raw(value) => {
                    options.iter().find(|opt| opt.value == *value)
                }
            }
            .ok_or_else(|| SessionError::OptionNotFound {
                node_id: self.current_id.clone(),
                value: answer.describe(),
            })?;

            let next = chosen
                .next
                .clone()
                .ok_or_else(|| SessionError::MissingContinuation {
                    node_id: self.current_id.clone(),
                    value: chosen.value.clone(),
                })?;

            (
                AnswerRecord {
                    question: node.text.clone(),
                    answer: chosen.value.clone(),
                    kind: AnswerKind::Choice,
                },
                next,
            )
        } else {
            // Free-form step: the raw value is recorded verbatim against the
            // node's text. Non-final nodes without an input type can appear in
            // hand-authored scripts; they collect plain text.
            let kind = match node.input_type {
                Some(FreeInput::Number) => AnswerKind::Number,
                Some(FreeInput::File) => AnswerKind::File,
                None => AnswerKind::Text,
            };
            let raw = answer.into_raw();

            let next = node
                .next
                .clone()
                .ok_or_else(|| SessionError::MissingContinuation {
                    node_id: self.current_id.clone(),
                    value: raw.clone(),
                })?;

            (
                AnswerRecord {
                    question: node.text.clone(),
                    answer: raw,
                    kind,
                },
                next,
            )
        };

        let next_node = script
            .node(&next_id)
            .ok_or_else(|| SessionError::NodeNotFound(next_id.clone()))?;

        self.transcript.push(record);
        self.current_id = next_id;
        self.current = next_node;

        Ok(if next_node.is_final {
            Turn::Complete(next_node)
        } else {
            Turn::Prompt(next_node)
        })
    }
}
