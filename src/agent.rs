//! One run of the agent: build the prompt, generate, extract, retry once
//! with the strict prefix, then deliver either the report or the debug email.

use serde_json::Value;

use crate::error::AgentError;
use crate::extract::{extract_report, Extraction};
use crate::feeds::FeedItem;
use crate::generate::TextGenerator;
use crate::notify::Mailer;
use crate::prompt::{build_prompt, STRICT_JSON_PREFIX};

pub const DEFAULT_REPORT_SUBJECT: &str = "Weekly Sri Lanka Trend Report";
pub const DEBUG_SUBJECT: &str = "Weekly Trend Agent ERROR (JSON parsing failed)";

/// Cap on the raw model output quoted in the debug email (chars, not bytes).
const RAW_PREVIEW_MAX_CHARS: usize = 8000;

/// How a run ended when it did not error out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The model produced a parseable report and it was emailed.
    ReportSent,
    /// Both attempts failed extraction; the debug email went out instead.
    DebugSent,
}

/// Drive one full run over already-collected signals.
///
/// Generation happens at most twice: once with the plain prompt, once with
/// [`STRICT_JSON_PREFIX`] prepended to it. A transport error on either
/// attempt aborts before any email. Two failed extractions in a row fall
/// back to the debug email, so a broken Monday still produces mail.
pub async fn run_once(
    date: &str,
    trends_daily: &[FeedItem],
    news: &[FeedItem],
    generator: &dyn TextGenerator,
    mailer: &dyn Mailer,
) -> Result<RunOutcome, AgentError> {
    let prompt = build_prompt(date, trends_daily, news);
    tracing::info!(
        date,
        trends = trends_daily.len(),
        news = news.len(),
        "starting run"
    );

    let raw = generator.generate(&prompt).await?;
    let mut extraction = extract_report(&raw);

    if let Extraction::Failed { error, .. } = &extraction {
        tracing::warn!(reason = %error, "reply had no usable JSON, retrying strictly");
        let strict_prompt = format!("{STRICT_JSON_PREFIX}{prompt}");
        let raw = generator.generate(&strict_prompt).await?;
        extraction = extract_report(&raw);
    }

    match extraction {
        Extraction::Parsed { report } => {
            let subject = report
                .get("email_subject")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_REPORT_SUBJECT);
            let body = match report.get("email_body").and_then(Value::as_str) {
                Some(s) => s.to_string(),
                None => serde_json::to_string_pretty(&report)
                    .unwrap_or_else(|_| report.to_string()),
            };
            mailer.send(subject, &body).await?;
            tracing::info!("report delivered");
            Ok(RunOutcome::ReportSent)
        }
        Extraction::Failed { raw, error } => {
            let preview: String = raw.chars().take(RAW_PREVIEW_MAX_CHARS).collect();
            let body = format!("Error: {error}\n\nRaw output:\n{preview}");
            mailer.send(DEBUG_SUBJECT, &body).await?;
            tracing::warn!(reason = %error, "debug email delivered instead of a report");
            Ok(RunOutcome::DebugSent)
        }
    }
}
