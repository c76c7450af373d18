use serde::{Deserialize, Serialize};

/// The club categories the catalog exposes as top-level departments.
///
/// The selected category drives which reference data (model list, filter
/// instructions, placeholder bank) and which filter grammar apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubCategory {
    Driver,
    FairwayWood,
    Hybrid,
    IronSet,
    SingleIron,
    Wedge,
    Putter,
    UtilityIron,
}

impl ClubCategory {
    /// All categories in declaration order.
    pub const ALL: [ClubCategory; 8] = [
        ClubCategory::Driver,
        ClubCategory::FairwayWood,
        ClubCategory::Hybrid,
        ClubCategory::IronSet,
        ClubCategory::SingleIron,
        ClubCategory::Wedge,
        ClubCategory::Putter,
        ClubCategory::UtilityIron,
    ];

    /// File-name stem for the category's reference files
    /// (e.g. `models/fairway.txt`, `prompts/fairway.txt`).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            ClubCategory::Driver => "driver",
            ClubCategory::FairwayWood => "fairway",
            ClubCategory::Hybrid => "hybrid",
            ClubCategory::IronSet => "ironset",
            ClubCategory::SingleIron => "singleiron",
            ClubCategory::Wedge => "wedge",
            ClubCategory::Putter => "putter",
            ClubCategory::UtilityIron => "utilityiron",
        }
    }

    /// Parses a slug back into a category. Case-insensitive.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        let lower = slug.to_lowercase();
        Self::ALL.into_iter().find(|c| c.slug() == lower)
    }
}

impl std::fmt::Display for ClubCategory {
    /// The catalog's human label for the category.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ClubCategory::Driver => "Driver",
            ClubCategory::FairwayWood => "Fairway Woods",
            ClubCategory::Hybrid => "Hybrids",
            ClubCategory::IronSet => "Iron Sets",
            ClubCategory::SingleIron => "Single Irons",
            ClubCategory::Wedge => "Wedges",
            ClubCategory::Putter => "Putters",
            ClubCategory::UtilityIron => "Utility Irons",
        };
        write!(f, "{label}")
    }
}

/// Immutable input to the search pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub raw_query: String,
    pub category: ClubCategory,
}

/// Ordered mapping from a user's written reference (e.g. `"g430"`) to the
/// catalog's canonical model name (e.g. `"G430 Max"`).
///
/// References are unique, insertion order is preserved, and the mapping is
/// capped at [`ModelMapping::MAX_MODELS`] unique canonical names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMapping {
    pairs: Vec<(String, String)>,
}

impl ModelMapping {
    /// Maximum number of unique canonical names carried per query.
    pub const MAX_MODELS: usize = 7;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair, skipping duplicates of `reference`. The cap counts
    /// unique canonical names, so a pair mapping onto an already-stored
    /// name is always accepted. Returns `true` if the pair was stored.
    pub fn insert(&mut self, reference: impl Into<String>, canonical: impl Into<String>) -> bool {
        let reference = reference.into();
        if self.pairs.iter().any(|(r, _)| r == &reference) {
            return false;
        }
        let canonical = canonical.into();
        let known_name = self.pairs.iter().any(|(_, c)| c == &canonical);
        if !known_name && self.canonical_names().len() >= Self::MAX_MODELS {
            return false;
        }
        self.pairs.push((reference, canonical));
        true
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Canonical names in insertion order, deduplicated.
    ///
    /// Distinct references may map to the same canonical name; the compiled
    /// URL must carry each name once.
    #[must_use]
    pub fn canonical_names(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.pairs.len());
        for (_, canonical) in &self.pairs {
            if !seen.contains(&canonical.as_str()) {
                seen.push(canonical.as_str());
            }
        }
        seen
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(r, c)| (r.as_str(), c.as_str()))
    }
}

/// Outcome of the pure keyword check comparing the query's vocabulary
/// against the selected category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMismatch {
    pub has_mismatch: bool,
    pub implied_category: Option<ClubCategory>,
}

impl CategoryMismatch {
    /// The "nothing suspicious" value.
    #[must_use]
    pub fn none() -> Self {
        Self {
            has_mismatch: false,
            implied_category: None,
        }
    }
}

/// Combined pre-compilation signal: the classifier's model-specific verdict
/// plus the keyword mismatch check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchSignal {
    pub is_model_specific: bool,
    pub has_mismatch: bool,
    pub implied_category: Option<ClubCategory>,
}

impl MismatchSignal {
    #[must_use]
    pub fn new(is_model_specific: bool, mismatch: CategoryMismatch) -> Self {
        Self {
            is_model_specific,
            has_mismatch: mismatch.has_mismatch,
            implied_category: mismatch.implied_category,
        }
    }
}
