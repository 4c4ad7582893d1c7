use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::wire::{GenerationRequest, Instruction};
use super::Provider;

pub struct Ollama {
    pub model: String,
    pub url: String,
    pub timeout: Duration,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Msg<'a>>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f64,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: MsgOut,
}

#[derive(Deserialize)]
struct MsgOut {
    #[serde(default)]
    content: String,
}

fn to_messages(ins: &Instruction) -> Vec<Msg<'_>> {
    vec![
        Msg { role: "system", content: &ins.system },
        Msg { role: "user", content: &ins.user },
    ]
}

#[async_trait]
impl Provider for Ollama {
    async fn complete(&self, req: &GenerationRequest) -> Result<String> {
        let url = format!("{}/api/chat", self.url.trim_end_matches('/'));
        let client = Client::builder().timeout(self.timeout).build()?;
        let body = ChatRequest {
            model: &self.model,
            messages: to_messages(&req.instruction),
            stream: false,
            options: OllamaOptions { temperature: req.temperature },
        };

        tracing::debug!(%url, model = %self.model, "ollama: POST");

        let resp = client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("ollama request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("ollama read body failed")?;
        tracing::trace!(%status, raw = %text, "ollama: response");

        if !status.is_success() {
            return Err(anyhow!("ollama error ({}): {}", status, text));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("ollama response parse error: {}", e))?;

        super::non_empty("ollama", parsed.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn provider(url: String) -> Ollama {
        Ollama { model: "llama3".into(), url, timeout: Duration::from_secs(2) }
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            instruction: Instruction { system: "sys".into(), user: "data".into() },
            temperature: 0.7,
        }
    }

    #[tokio::test]
    async fn posts_non_streaming_chat_with_temperature() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .match_body(Matcher::PartialJson(json!({
                "model": "llama3",
                "stream": false,
                "options": { "temperature": 0.7 }
            })))
            .with_status(200)
            .with_body(r#"{"message":{"role":"assistant","content":"Prompt siap"},"done":true}"#)
            .create_async()
            .await;

        assert_eq!(provider(server.url()).complete(&request()).await.unwrap(), "Prompt siap");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_message_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_body(r#"{"message":{"role":"assistant","content":""},"done":true}"#)
            .create_async()
            .await;

        assert!(provider(server.url()).complete(&request()).await.is_err());
    }
}
