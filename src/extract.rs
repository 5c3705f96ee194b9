//! Pulls a JSON report out of a free-form model reply.
//!
//! The model is asked for bare JSON but often wraps it in prose or a markdown
//! fence. The widest `{`..`}` span covers those cases; anything the span does
//! not parse as a single JSON document is a failure value for the caller to
//! act on, never an error.

use serde_json::Value;

/// Outcome of scanning one model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Parsed { report: Value },
    Failed { raw: String, error: String },
}

impl Extraction {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Extraction::Parsed { .. })
    }
}

/// First-`{` to last-`}` span, parsed strictly. `Failed` keeps the complete
/// raw reply for the debug email.
pub fn extract_report(text: &str) -> Extraction {
    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Extraction::Failed {
            raw: text.to_string(),
            error: "No JSON detected".to_string(),
        };
    };

    // The last `}` can precede the first `{` ("} {"); the span is then empty
    // and the strict parse below reports it.
    let span = if start <= end { &text[start..=end] } else { "" };

    match serde_json::from_str::<Value>(span) {
        Ok(report) => Extraction::Parsed { report },
        Err(e) => Extraction::Failed {
            raw: text.to_string(),
            error: format!("JSON parse failed: {e}"),
        },
    }
}
