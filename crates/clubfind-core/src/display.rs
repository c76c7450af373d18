//! Per-category presentation config.
//!
//! Extraction captures every labeled attribute into a dynamic bag; which
//! attributes are worth showing varies by club category and is a pure
//! presentation concern, configured externally in YAML:
//!
//! ```yaml
//! categories:
//!   - category: driver
//!     visible_attributes: [dexterity, loft, flex, shaft]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::config::ConfigError;
use crate::types::ClubCategory;

#[derive(Debug, Deserialize)]
struct DisplayFile {
    categories: Vec<CategoryDisplay>,
}

#[derive(Debug, Deserialize)]
struct CategoryDisplay {
    category: String,
    visible_attributes: Vec<String>,
}

/// Visible-attribute allowlists keyed by category.
#[derive(Debug, Clone, Default)]
pub struct DisplayConfig {
    visible: HashMap<ClubCategory, Vec<String>>,
}

impl DisplayConfig {
    /// Attribute keys (lowercased extraction labels) to show for a category,
    /// in configured order. Empty slice when the category is unconfigured,
    /// which callers should treat as "show everything".
    #[must_use]
    pub fn visible_attributes(&self, category: ClubCategory) -> &[String] {
        self.visible.get(&category).map_or(&[], Vec::as_slice)
    }
}

/// Load and validate the presentation config from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or names an
/// unknown category slug.
pub fn load_display_config(path: &Path) -> Result<DisplayConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: DisplayFile = serde_yaml::from_str(&content)?;

    let mut visible = HashMap::new();
    for entry in file.categories {
        let category = ClubCategory::from_slug(&entry.category).ok_or_else(|| {
            ConfigError::DisplayConfigInvalid(format!("unknown category slug: {}", entry.category))
        })?;
        if visible
            .insert(
                category,
                entry
                    .visible_attributes
                    .iter()
                    .map(|a| a.to_lowercase())
                    .collect(),
            )
            .is_some()
        {
            return Err(ConfigError::DisplayConfigInvalid(format!(
                "duplicate category: {}",
                entry.category
            )));
        }
    }

    Ok(DisplayConfig { visible })
}
