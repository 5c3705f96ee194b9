// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod agent;
pub mod config;
pub mod error;
pub mod extract;
pub mod feeds;
pub mod generate;
pub mod notify;
pub mod prompt;

// ---- Re-exports for stable public API ----
pub use agent::{run_once, RunOutcome, DEBUG_SUBJECT, DEFAULT_REPORT_SUBJECT};
pub use config::AgentConfig;
pub use error::AgentError;
pub use extract::{extract_report, Extraction};
pub use feeds::{FeedCollector, FeedItem, FeedSpec, GOOGLE_NEWS_LK, GOOGLE_TRENDS_DAILY_LK};
pub use generate::{GeminiClient, TextGenerator};
pub use notify::{Mailer, SmtpMailer};
