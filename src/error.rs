//! Error taxonomy for a single agent run.
//!
//! A model reply without usable JSON is deliberately *not* an error: it is a
//! data value (`extract::Extraction::Failed`) that drives the strict retry
//! and, after that, the debug email. Everything here aborts the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// A required environment variable is missing (or set to an empty string).
    #[error("missing required env var {0}")]
    Config(&'static str),

    /// An environment variable is present but unusable.
    #[error("invalid value in {0}: {1}")]
    ConfigValue(&'static str, String),

    /// HTTP transport failure, non-2xx status, or an undecodable body on the
    /// generation call. Feed transport failures never reach this type; the
    /// collector swallows them.
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The generation endpoint answered 2xx but carried no candidate text.
    #[error("generation returned no candidate text")]
    EmptyGeneration,

    /// Email could not be built or handed to the SMTP relay. Nothing catches
    /// this; it is the terminal failure of the run.
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

impl From<lettre::error::Error> for AgentError {
    fn from(e: lettre::error::Error) -> Self {
        AgentError::Delivery(e.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for AgentError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        AgentError::Delivery(e.to_string())
    }
}
