//! Category mismatch detection: pure keyword matching, no external calls.

use clubfind_core::{CategoryMismatch, ClubCategory};

/// Trigger vocabulary per category, in priority order: the first matching
/// category that differs from the selection wins. More specific
/// vocabularies come first so "3 wood" never resolves to Driver and
/// "single iron" never resolves to IronSet. UtilityIron is deliberately
/// absent and is never flagged.
const CATEGORY_TRIGGERS: &[(ClubCategory, &[&str])] = &[
    (
        ClubCategory::Wedge,
        &[
            "wedge",
            "wedges",
            "gw",
            "pw",
            "aw",
            "lw",
            "sw",
            "gap wedge",
            "pitching wedge",
            "approach wedge",
            "lob wedge",
            "sand wedge",
        ],
    ),
    (
        ClubCategory::Putter,
        &["putter", "putters", "mallet", "blade putter"],
    ),
    (
        ClubCategory::Hybrid,
        &["hybrid", "hybrids", "rescue", "rescues"],
    ),
    (
        ClubCategory::FairwayWood,
        &[
            "fairway",
            "fairways",
            "fairway wood",
            "fairway woods",
            "3 wood",
            "5 wood",
            "7 wood",
            "3-wood",
            "5-wood",
            "7-wood",
        ],
    ),
    (
        ClubCategory::SingleIron,
        &[
            "single iron",
            "single irons",
            "driving iron",
            "1 iron",
            "2 iron",
            "3 iron",
        ],
    ),
    (ClubCategory::IronSet, &["irons", "iron set", "iron sets"]),
    (ClubCategory::Driver, &["driver", "drivers"]),
];

/// Flags a query whose vocabulary implies a different category than the
/// one selected.
///
/// Lowercases the query, tests every category's triggers, and reports the
/// first matching category (in [`CATEGORY_TRIGGERS`] order) that differs
/// from `selected`. Always returns a value; there are no failure modes.
#[must_use]
pub fn detect(raw_query: &str, selected: ClubCategory) -> CategoryMismatch {
    let lower = raw_query.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let mut implied = None;
    for (category, triggers) in CATEGORY_TRIGGERS {
        if *category == selected {
            continue;
        }
        if triggers
            .iter()
            .any(|trigger| trigger_matches(trigger, &lower, &tokens))
        {
            implied = Some(*category);
            break;
        }
    }

    match implied {
        Some(category) => CategoryMismatch {
            has_mismatch: true,
            implied_category: Some(category),
        },
        None => CategoryMismatch::none(),
    }
}

/// Multi-word triggers match as substrings; single-word triggers match
/// whole tokens only, so "aw" never fires inside "fairway".
fn trigger_matches(trigger: &str, lower_query: &str, tokens: &[&str]) -> bool {
    if trigger.contains(char::is_whitespace) {
        lower_query.contains(trigger)
    } else {
        tokens.contains(&trigger)
    }
}
