//! Catalog extractor: fetches a listing page and normalizes its
//! heterogeneous product markup into stable [`ProductRecord`] values.
//!
//! The catalog's markup is a de facto wire format with no version
//! negotiation; every selector lives in [`selectors`] so a site change is
//! a one-file fix. Extraction never fails past its own boundary: fetch or
//! parse trouble degrades to an empty [`ExtractionResult`] whose
//! `total_count` of `None` means "unknown", which callers must keep
//! distinct from the confirmed-empty `no_results` flag.

pub mod batch;
pub mod client;
pub mod error;
pub mod extract;
pub mod pagination;
pub mod types;

mod selectors;

pub use batch::extract_batch;
pub use client::CatalogClient;
pub use error::CatalogError;
pub use extract::parse_listing;
pub use types::{AppliedFilter, ExtractionResult, ProductRecord};
