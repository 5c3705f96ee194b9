//! Report generation behind a trait seam so the orchestrator can run against
//! a scripted stand-in in tests.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AgentConfig;
use crate::error::AgentError;

const GENERATE_TIMEOUT: Duration = Duration::from_secs(60);
const TEMPERATURE: f32 = 0.6;
const MAX_OUTPUT_TOKENS: u32 = 2500;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// One generation call. No retry at this level; the orchestrator owns
    /// the retry policy.
    async fn generate(&self, prompt: &str) -> Result<String, AgentError>;
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, config: &AgentConfig) -> Self {
        Self {
            http,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AgentError> {
        #[derive(Serialize)]
        struct Part<'a> {
            text: &'a str,
        }
        #[derive(Serialize)]
        struct Content<'a> {
            parts: Vec<Part<'a>>,
        }
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct GenerationConfig {
            temperature: f32,
            max_output_tokens: u32,
        }
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Req<'a> {
            contents: Vec<Content<'a>>,
            generation_config: GenerationConfig,
        }
        #[derive(Deserialize)]
        struct Resp {
            #[serde(default)]
            candidates: Vec<RespCandidate>,
        }
        #[derive(Deserialize)]
        struct RespCandidate {
            content: RespContent,
        }
        #[derive(Deserialize)]
        struct RespContent {
            #[serde(default)]
            parts: Vec<RespPart>,
        }
        #[derive(Deserialize)]
        struct RespPart {
            text: String,
        }

        let req = Req {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        // The endpoint authenticates via the key query parameter, so the URL
        // must stay out of logs.
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        tracing::info!(model = %self.model, prompt_bytes = prompt.len(), "requesting generation");

        let resp = self
            .http
            .post(&url)
            .json(&req)
            .timeout(GENERATE_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        let body: Resp = resp.json().await?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(AgentError::EmptyGeneration)
    }
}
