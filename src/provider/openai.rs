use async_trait::async_trait;
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::wire::GenerationRequest;

/// OpenAI chat completions: the instruction becomes one system and one user
/// message.
pub struct OpenAIProvider {
    model: String,
    api_key: String,
    api_base: String,
    client: Client,
    timeout: Duration,
}

impl OpenAIProvider {
    pub fn new(model: String, api_key: String, api_base: String, timeout: Duration) -> Self {
        Self {
            model,
            api_key,
            api_base,
            client: Client::new(),
            timeout,
        }
    }
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[async_trait]
impl super::Provider for OpenAIProvider {
    async fn complete(&self, req: &GenerationRequest) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.api_base.trim_end_matches('/'));
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": req.instruction.system },
                { "role": "user", "content": req.instruction.user }
            ],
            "temperature": req.temperature,
        });

        tracing::debug!(%url, model = %self.model, "openai: POST");
        tracing::trace!(body = %body, "openai: request body");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .context("openai request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("openai read body failed")?;
        tracing::trace!(%status, raw = %text, "openai: response");

        if !status.is_success() {
            return Err(anyhow!("OpenAI API error ({}): {}", status, text));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse OpenAI response: {e}"))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        super::non_empty("openai", content)
    }
}
