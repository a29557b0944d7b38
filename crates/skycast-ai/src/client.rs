//! Chat-completions client producing the weather summary.
//!
//! The call is atomic request/response: no streaming, no retry. Every
//! failure mode (transport, error status, unparseable content, schema
//! mismatch) collapses into `Error::Generation`.

use std::time::Duration;

use serde::Deserialize;
use skycast_core::{Error, SummaryConfig};
use tracing::instrument;

use crate::prompt;
use crate::types::SummaryInput;

const REQUEST_TIMEOUT_SECS: u64 = 30;

const SYSTEM_PROMPT: &str = "Respond with a JSON object containing a single \
string field \"summary\" holding a short summary of the weather conditions.";

#[derive(Debug, Clone)]
pub struct SummaryClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl SummaryClient {
    /// Create a client against the configured completion endpoint.
    ///
    /// # Errors
    /// Returns [`Error::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &SummaryConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Generate a short natural-language summary for the given snapshot.
    ///
    /// # Errors
    /// [`Error::Generation`] when the model call fails or its response
    /// does not validate against the `{summary: string}` schema.
    #[instrument(skip(self, input), fields(location = %input.location), level = "info")]
    pub async fn summarize(&self, input: &SummaryInput) -> Result<String, Error> {
        let url = format!("{}/chat/completions", self.base_url);

        let request_body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt::render(input)},
            ],
            "response_format": {"type": "json_object"},
            "temperature": 0.3,
        });

        let mut request = self.client.post(&url).json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Generation(format!("completion request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Generation(format!(
                "completion service returned {}: {}",
                status, text
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Generation(format!("invalid completion response: {}", e)))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::Generation("completion response had no choices".to_string()))?;

        // Required-field schema: a single string "summary".
        let output: SummaryOutput = serde_json::from_str(&content).map_err(|e| {
            Error::Generation(format!("summary did not match expected schema: {}", e))
        })?;

        tracing::info!("Generated weather summary ({} chars)", output.summary.len());
        Ok(output.summary)
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct SummaryOutput {
    summary: String,
}
