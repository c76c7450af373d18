//! Query resolution: free text + club category in, compiled filter URL and
//! extracted catalog records out.
//!
//! The pipeline keeps a hard boundary between fuzzy and deterministic
//! work. Only natural-language-to-filter inference (brand, flex, loft,
//! dexterity, price, condition) is delegated to the generative backend;
//! every deterministic fact — canonical model names, their encoding, the
//! model-filter group — is computed here and appended after the fact.
//! No failure escapes the pipeline: each stage degrades to its documented
//! empty/negative value.

pub mod compiler;
pub mod error;
pub mod mismatch;
pub mod pipeline;
pub mod resolver;

pub use compiler::{append_model_filters, compile};
pub use error::CompileError;
pub use mismatch::detect;
pub use pipeline::{run_search, SearchOutcome};
pub use resolver::{classify_is_model_specific, extract_and_map};
