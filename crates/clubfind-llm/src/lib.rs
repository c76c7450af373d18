//! Text-generation collaborator for clubfind.
//!
//! Wraps an OpenAI-style chat-completions endpoint behind two small trait
//! seams so the generative backend stays swappable (or replaceable by a
//! rule-based parser):
//!
//! - [`ChatBackend`] — one deterministic completion call (temperature 0,
//!   output-length cap). Used by the classifier and the model resolver.
//! - [`FilterInferer`] — the single fuzzy step of URL compilation: free
//!   text + an instruction document in, a partial filter URL out. Every
//!   deterministic fact (model names, pagination) stays outside this call.

pub mod client;
pub mod error;

use std::future::Future;

pub use client::ChatClient;
pub use error::LlmError;

/// A deterministic single-turn completion backend.
pub trait ChatBackend {
    /// Sends one system+user exchange and returns the raw completion text.
    fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// Infers catalog filter parameters from free text.
///
/// Implementations must emit a single URL (or URL fragment) and nothing
/// else; they must never emit model-filter parameters — the compiler
/// appends those deterministically.
pub trait FilterInferer {
    fn infer(
        &self,
        raw_query: &str,
        instructions: &str,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}
