use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("config error: {0}")] Config(String),
    #[error("provider error: {0}")] Provider(String),
    #[error("input error: {0}")] Input(String),
}

/// Outcome of a remote generation that did not produce text.
///
/// Transport failures, error statuses and empty completions all collapse into
/// `Failed`; the UI shows one retry-prompting message for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("generation failed, try again")] Failed,
    #[error("generation cancelled")] Cancelled,
}
