//! Typed run configuration, resolved from the environment in one place.
//!
//! Components receive this struct (or fields of it) from the entrypoint and
//! never read the environment themselves, so a misconfigured run fails before
//! the first network call instead of halfway through.

use crate::error::AgentError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub to_email: String,
    pub from_email: String,
}

impl AgentConfig {
    /// Read the whole configuration surface. Defaults: `GEMINI_MODEL` falls
    /// back to [`DEFAULT_GEMINI_MODEL`], `SMTP_PORT` to 587 and `FROM_EMAIL`
    /// to `SMTP_USER`. A variable set to whitespace counts as missing.
    pub fn from_env() -> Result<Self, AgentError> {
        let gemini_api_key = required("GEMINI_API_KEY")?;
        let gemini_model =
            optional("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let smtp_host = required("SMTP_HOST")?;
        let smtp_port = match optional("SMTP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AgentError::ConfigValue("SMTP_PORT", e.to_string()))?,
            None => DEFAULT_SMTP_PORT,
        };
        let smtp_user = required("SMTP_USER")?;
        let smtp_pass = required("SMTP_PASS")?;

        let to_email = required("TO_EMAIL")?;
        let from_email = optional("FROM_EMAIL").unwrap_or_else(|| smtp_user.clone());

        Ok(Self {
            gemini_api_key,
            gemini_model,
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_pass,
            to_email,
            from_email,
        })
    }
}

fn required(name: &'static str) -> Result<String, AgentError> {
    optional(name).ok_or(AgentError::Config(name))
}

fn optional(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}
