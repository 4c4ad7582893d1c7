use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::ProviderKind;
use crate::config::Config;
use crate::errors::PromptError;
use crate::wire::GenerationRequest;

pub mod openai;
pub mod anthropic;
pub mod ollama;

/// A remote model that turns one instruction into text.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn complete(&self, req: &GenerationRequest) -> Result<String>;
}

pub type DynProvider = Arc<dyn Provider + Send + Sync>;

fn api_key(var: &str) -> Result<String> {
    std::env::var(var)
        .map_err(|_| PromptError::Provider(format!("{var} env var is not set")).into())
}

pub fn make_provider(cfg: &Config) -> Result<DynProvider> {
    let timeout = Duration::from_secs(cfg.timeout_secs);
    match cfg.provider {
        ProviderKind::OpenAI => Ok(Arc::new(openai::OpenAIProvider::new(
            cfg.model.clone(),
            api_key("OPENAI_API_KEY")?,
            cfg.openai_base.clone(),
            timeout,
        ))),
        ProviderKind::Anthropic => Ok(Arc::new(anthropic::Anthropic {
            model: cfg.model.clone(),
            api_key: api_key("ANTHROPIC_API_KEY")?,
            timeout,
            api_base: cfg.anthropic_base.clone(),
            api_version: cfg.anthropic_version.clone(),
        })),
        ProviderKind::Ollama => Ok(Arc::new(ollama::Ollama {
            model: cfg.model.clone(),
            url: cfg.ollama_url.clone(),
            timeout,
        })),
    }
}

/// Rejects completions that carry no text.
pub(crate) fn non_empty(provider: &str, text: String) -> Result<String> {
    if text.trim().is_empty() {
        return Err(anyhow!("{provider}: empty content"));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ollama_needs_no_key() {
        let cfg = Config { provider: ProviderKind::Ollama, ..Config::default() };
        assert!(make_provider(&cfg).is_ok());
    }

    #[test]
    fn blank_completion_is_rejected() {
        assert!(non_empty("openai", " \n".into()).is_err());
        assert_eq!(non_empty("openai", "ok".into()).unwrap(), "ok");
    }
}
