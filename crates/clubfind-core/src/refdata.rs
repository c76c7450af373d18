//! Flat-file reference data: brand names, per-category canonical model
//! lists, per-category filter-building instruction documents, and
//! per-category UI placeholder phrase banks.
//!
//! Layout under the configured root:
//!
//! ```text
//! data/
//!   brandlist.txt            one brand per line
//!   models/<slug>.txt        one canonical model name per line
//!   prompts/<slug>.txt       one instruction document per file
//!   placeholders/<slug>.txt  one placeholder phrase per line
//! ```
//!
//! Loading never fails: a missing or unreadable file degrades to an empty
//! set (logged at `warn`), which downstream turns model resolution into a
//! no-op rather than an error.

use std::collections::HashMap;
use std::path::Path;

use crate::types::ClubCategory;

/// Read-only reference data, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct RefData {
    brands: Vec<String>,
    models: HashMap<ClubCategory, Vec<String>>,
    prompts: HashMap<ClubCategory, String>,
    placeholders: HashMap<ClubCategory, Vec<String>>,
}

impl RefData {
    /// Loads all reference files under `root`. Missing files degrade to
    /// empty sets; this function always returns a usable value.
    #[must_use]
    pub fn load(root: &Path) -> Self {
        let brands = read_lines(&root.join("brandlist.txt"));

        let mut models = HashMap::new();
        let mut prompts = HashMap::new();
        let mut placeholders = HashMap::new();

        for category in ClubCategory::ALL {
            let slug = category.slug();
            models.insert(
                category,
                read_lines(&root.join("models").join(format!("{slug}.txt"))),
            );
            let prompt = read_document(&root.join("prompts").join(format!("{slug}.txt")));
            if !prompt.is_empty() {
                prompts.insert(category, prompt);
            }
            placeholders.insert(
                category,
                read_lines(&root.join("placeholders").join(format!("{slug}.txt"))),
            );
        }

        Self {
            brands,
            models,
            prompts,
            placeholders,
        }
    }

    /// Known brand names, one per entry.
    #[must_use]
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Brand names joined one-per-line for prompt embedding.
    #[must_use]
    pub fn brand_block(&self) -> String {
        self.brands.join("\n")
    }

    /// Canonical model names for a category. Empty slice when the category's
    /// file was missing.
    #[must_use]
    pub fn models(&self, category: ClubCategory) -> &[String] {
        self.models.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Canonical model names joined one-per-line for prompt embedding.
    #[must_use]
    pub fn model_block(&self, category: ClubCategory) -> String {
        self.models(category).join("\n")
    }

    /// The category's filter-building instruction document, if present.
    #[must_use]
    pub fn filter_instructions(&self, category: ClubCategory) -> Option<&str> {
        self.prompts.get(&category).map(String::as_str)
    }

    /// UI placeholder phrases for a category.
    #[must_use]
    pub fn placeholders(&self, category: ClubCategory) -> &[String] {
        self.placeholders.get(&category).map_or(&[], Vec::as_slice)
    }

    /// First placeholder phrase for a category, used as the form hint.
    #[must_use]
    pub fn placeholder_hint(&self, category: ClubCategory) -> Option<&str> {
        self.placeholders(category).first().map(String::as_str)
    }
}

/// Reads a file as non-empty trimmed lines. Missing file → empty vec.
fn read_lines(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "reference file unavailable, using empty set");
            Vec::new()
        }
    }
}

/// Reads a whole instruction document, trimmed. Missing file → empty string.
fn read_document(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content.trim().to_string(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "instruction document unavailable");
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "refdata_test.rs"]
mod tests;
