use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::{Locale, ProviderKind};
use crate::errors::PromptError;
use crate::wire::ParameterRecord;

/// Temperature sent with every generation request.
pub const GENERATION_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderKind,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f64,
    pub locale: Locale,
    pub openai_base: String,
    pub anthropic_base: String,
    pub anthropic_version: String,
    pub ollama_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::OpenAI,
            model: "gpt-4.1-mini".into(),
            timeout_secs: 60,
            temperature: GENERATION_TEMPERATURE,
            locale: Locale::Id,
            openai_base: "https://api.openai.com".into(),
            anthropic_base: "https://api.anthropic.com".into(),
            anthropic_version: "2023-06-01".into(),
            ollama_url: "http://localhost:11434".into(),
        }
    }
}

impl Config {
    /// Load a config file; the format follows the extension and missing keys
    /// keep their defaults.
    pub fn load(path: &Path) -> Result<Self, PromptError> {
        let text = fs::read_to_string(path)
            .map_err(|e| PromptError::Config(e.to_string()))?;
        parse_by_extension(path, &text).map_err(PromptError::Config)
    }
}

/// Read a form-shaped params file (same formats as the config).
pub fn load_params(path: &Path) -> Result<ParameterRecord, PromptError> {
    let text = fs::read_to_string(path)
        .map_err(|e| PromptError::Input(e.to_string()))?;
    parse_by_extension(path, &text).map_err(PromptError::Input)
}

fn parse_by_extension<T: serde::de::DeserializeOwned>(path: &Path, text: &str) -> Result<T, String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let shown = path.display();
    match ext.as_str() {
        "toml" => toml::from_str(text).map_err(|e| format!("{shown}: {e}")),
        "yaml" | "yml" => serde_yaml::from_str(text).map_err(|e| format!("{shown}: {e}")),
        "json" => serde_json::from_str(text).map_err(|e| format!("{shown}: {e}")),
        other => Err(format!(
            "{shown}: unsupported extension {other:?} (expected toml, yaml, yml or json)"
        )),
    }
}
