//! Bullet guidance and measurable-impact detection.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ats::vocabulary::ActionVerbs;

pub const HINT_ACTION_VERB: &str = "Start with a strong action verb.";
pub const HINT_NUMBERS: &str = "Add measurable impact (numbers).";

/// Percentages, multipliers, thousands, "N+" counts and dollar amounts.
/// Digits are ASCII only.
fn metric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[0-9]+%|[0-9]+[xX]|[0-9]+k|[0-9]+\+|\$[0-9]+").expect("metric pattern is valid")
    })
}

/// The metric pattern plus any standalone number with two or more digits,
/// bounded by ASCII non-word characters.
fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"[0-9]+%|[0-9]+[xX]|[0-9]+k|[0-9]+\+|\$[0-9]+|(?:^|[^0-9A-Za-z_])[0-9]{2,}(?:[^0-9A-Za-z_]|$)",
        )
        .expect("numeric pattern is valid")
    })
}

/// True when `text` states an outcome as a percentage, multiplier, count or amount.
pub fn has_measurable_impact(text: &str) -> bool {
    metric_pattern().is_match(text)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulletGuidance {
    pub hints: Vec<String>,
}

/// Inline hints for a single experience or project bullet.
/// Blank text gets no hints.
pub fn bullet_guidance(text: &str, lead_verbs: &ActionVerbs) -> BulletGuidance {
    if text.trim().is_empty() {
        return BulletGuidance::default();
    }

    let mut hints = Vec::new();
    if !lead_verbs.leads(text) {
        hints.push(HINT_ACTION_VERB.to_string());
    }
    if !numeric_pattern().is_match(text) {
        hints.push(HINT_NUMBERS.to_string());
    }
    BulletGuidance { hints }
}
