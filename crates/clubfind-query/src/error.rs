use thiserror::Error;

use clubfind_llm::LlmError;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("filter inference failed: {0}")]
    Inference(#[from] LlmError),

    #[error("filter inference returned a non-URL response: {0:?}")]
    NotAUrl(String),
}
