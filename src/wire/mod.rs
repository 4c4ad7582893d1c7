use serde::{Deserialize, Serialize};

/// ========================================
/// Parameter snapshot and generation payload
/// ========================================

/// Snapshot of every form field, captured once per trigger.
///
/// Only `form::FormState::capture` builds one for assembly; params files
/// deserialize into the same shape before being replayed as field changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterRecord {
    pub product_type: String,
    pub target_audience: String,
    #[serde(alias = "problemList")]
    pub pain_points: String,
    pub title_style: String,
    pub tone: String,
    pub title_count: String,
    pub char_limit: String,
    pub forbidden_words: String,
    pub benefit_angles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub system: String,
    pub user: String,
}

/// What a provider receives for one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub instruction: Instruction,
    pub temperature: f64,
}
