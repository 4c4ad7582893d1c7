//! headline_prompt: turn structured copywriting parameters into a ChatGPT
//! prompt for product headlines, or have a remote model write that prompt.

pub mod cli;
pub mod config;
pub mod errors;
pub mod form;
pub mod generate;
pub mod log;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod ux;
pub mod wire;

pub use errors::{GenerationError, PromptError};
pub use form::{FieldChange, FormState, Readiness};
pub use prompt::{assemble, Template};
pub use session::Session;
pub use wire::ParameterRecord;
