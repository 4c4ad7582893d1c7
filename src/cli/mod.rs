use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "openai")]
    OpenAI,
    Anthropic,
    Ollama,
}

/// Output language of the assembled prompt.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[value(alias = "indonesian")]
    Id,
    #[value(alias = "english")]
    En,
}

#[derive(Parser, Debug)]
#[command(name = "headline_prompt", version, about = "Assemble a headline-copywriting prompt for ChatGPT")]
pub struct Args {
    /// Parameter file (TOML, YAML or JSON) shaped like the form.
    #[arg(long)]
    pub params: Option<String>,

    #[arg(long)]
    pub product_type: Option<String>,

    #[arg(long)]
    pub audience: Option<String>,

    /// One pain point per flag; joined with newlines.
    #[arg(long = "pain-point")]
    pub pain_points: Vec<String>,

    #[arg(long)]
    pub title_style: Option<String>,

    #[arg(long)]
    pub tone: Option<String>,

    #[arg(long)]
    pub title_count: Option<String>,

    #[arg(long)]
    pub char_limit: Option<String>,

    #[arg(long)]
    pub forbidden_words: Option<String>,

    /// Benefit angle; repeat to check several, in priority order.
    #[arg(long = "angle")]
    pub angles: Vec<String>,

    /// Let the configured provider write the prompt instead of the local template.
    #[arg(long, default_value_t = false)]
    pub generate: bool,

    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    #[arg(long)]
    pub config: Option<String>,

    /// Print the style, tone and angle catalogs and exit.
    #[arg(long, default_value_t = false)]
    pub catalog: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
