use crate::interpreter::{AnswerKind, AnswerRecord};
use itertools::Itertools;

/// Detail string used when a legacy summary is empty.
pub const FALLBACK_DETAILS: &str = "Custom Request";

const FALLBACK_QUESTION: &str = "Question";

/// The order fields derived from a completed conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    /// Always at least 1, no matter how garbled the answers were.
    pub quantity: u32,
    pub details: String,
}

/// A line item for the downstream order, derived from extracted details.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderDetails {
    /// Shapes the extracted fields into the order line item contract:
    /// `name = "{service} ({details})"` at the service's unit price.
    pub fn line_item(&self, service_name: &str, unit_price: f64) -> LineItem {
        LineItem {
            name: format!("{} ({})", service_name, self.details),
            quantity: self.quantity,
            price: unit_price,
        }
    }
}

/// Derives the order quantity and a human-readable detail string from a
/// structured transcript.
///
/// Quantity starts at 1 and is overwritten by every entry that parses as a
/// positive integer and either was collected as a number or has a question
/// asking "how many"/"copies", so the last qualifying answer wins. Parses
/// that fail, or yield zero or a negative, are simply ignored.
pub fn extract(answers: &[AnswerRecord]) -> OrderDetails {
    let details = answers
        .iter()
        .map(|entry| {
            let question = entry.question.trim();
            let question = if question.is_empty() {
                FALLBACK_QUESTION
            } else {
                question
            };
            format!("{}: {}", question, entry.answer)
        })
        .join("; ");

    let mut quantity = 1u32;
    for entry in answers {
        let question = entry.question.to_lowercase();
        let asks_for_count = entry.kind == AnswerKind::Number
            || question.contains("how many")
            || question.contains("copies");
        if !asks_for_count {
            continue;
        }
        if let Some(parsed) = leading_int(entry.answer.trim())
            && let Ok(value) = u32::try_from(parsed)
            && value > 0
        {
            quantity = value;
        }
    }

    OrderDetails { quantity, details }
}

/// Legacy path: derives quantity and details from a free-form summary
/// string. Used only when no structured transcript is available.
pub fn extract_legacy(summary: &str) -> OrderDetails {
    let mut quantity = 1u32;
    for part in summary.split(',') {
        if let Some(parsed) = leading_int(part.trim())
            && let Ok(value) = u32::try_from(parsed)
            && value > 0
        {
            quantity = value;
        }
    }

    let details = if summary.is_empty() {
        FALLBACK_DETAILS.to_string()
    } else {
        summary.to_string()
    };

    OrderDetails { quantity, details }
}

/// Loose integer parse for conversational input: optional sign, then a run
/// of leading digits; trailing text is ignored, so "4 copies" yields 4.
fn leading_int(text: &str) -> Option<i64> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}
