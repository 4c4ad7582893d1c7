use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::wire::GenerationRequest;
use super::Provider;

pub struct Anthropic {
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
    pub api_base: String,
    pub api_version: String,
}

#[derive(Serialize)]
struct MsgRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    system: &'a str,
    messages: Vec<Msg<'a>>,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MsgResponse {
    content: Vec<Block>,
}

#[derive(Deserialize)]
struct Block {
    #[serde(default)]
    text: String,
    #[serde(default)]
    r#type: String,
}

#[async_trait]
impl Provider for Anthropic {
    async fn complete(&self, req: &GenerationRequest) -> Result<String> {
        let url = format!("{}/v1/messages", self.api_base.trim_end_matches('/'));
        let client = Client::builder().timeout(self.timeout).build()?;
        let body = MsgRequest {
            model: &self.model,
            max_tokens: 2048,
            temperature: req.temperature,
            system: &req.instruction.system,
            messages: vec![Msg { role: "user", content: &req.instruction.user }],
        };

        tracing::debug!(%url, model = %self.model, "anthropic: POST");

        let resp = client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&body)
            .send()
            .await
            .context("anthropic request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("anthropic read body failed")?;
        tracing::trace!(%status, raw = %text, "anthropic: response");

        if !status.is_success() {
            return Err(anyhow!("Anthropic API error ({}): {}", status, text));
        }

        let parsed: MsgResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("anthropic response parse error: {}", e))?;

        let content = parsed
            .content
            .into_iter()
            .find(|b| b.r#type == "text" && !b.text.is_empty())
            .map(|b| b.text)
            .ok_or_else(|| anyhow!("anthropic: empty content"))?;

        super::non_empty("anthropic", content)
    }
}
