//! ATS Scoring — evaluates the rule table against a resume and ranks what is missing.
//!
//! `ScoringEngine` is immutable after construction and holds only its
//! action-verb vocabulary. `AppState` carries it as `Arc<ScoringEngine>`.

use serde::{Deserialize, Serialize};

use crate::ats::rules::{Rule, RULES};
use crate::ats::vocabulary::ActionVerbs;
use crate::models::resume::ResumeRecord;

pub const MAX_SCORE: u32 = 100;
pub const MAX_SUGGESTIONS: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    #[serde(rename = "Needs Work")]
    NeedsWork,
    #[serde(rename = "Getting There")]
    GettingThere,
    #[serde(rename = "Strong Resume")]
    StrongResume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Red,
    Amber,
    Green,
}

impl ScoreLabel {
    /// ≥71 strong, 41–70 getting there, ≤40 needs work.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 71 => ScoreLabel::StrongResume,
            s if s >= 41 => ScoreLabel::GettingThere,
            _ => ScoreLabel::NeedsWork,
        }
    }

    pub fn color(self) -> ScoreColor {
        match self {
            ScoreLabel::StrongResume => ScoreColor::Green,
            ScoreLabel::GettingThere => ScoreColor::Amber,
            ScoreLabel::NeedsWork => ScoreColor::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub rule: String,
    pub text: String, // already carries "(+N points)"
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ATSResult {
    pub score: u32,
    pub label: ScoreLabel,
    pub color: ScoreColor,
    pub suggestions: Vec<Suggestion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

/// Pure, deterministic scorer. Never fails: missing data just leaves a rule unmet.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    verbs: ActionVerbs,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ActionVerbs::scoring_default())
    }
}

impl ScoringEngine {
    pub fn new(verbs: ActionVerbs) -> Self {
        Self { verbs }
    }

    pub fn vocabulary(&self) -> &ActionVerbs {
        &self.verbs
    }

    pub fn compute_score(&self, record: &ResumeRecord) -> ATSResult {
        evaluate(RULES, record, &self.verbs)
    }
}

fn evaluate(rules: &[Rule], record: &ResumeRecord, verbs: &ActionVerbs) -> ATSResult {
    let mut total = 0_u32;
    let mut suggestions = Vec::new();

    for rule in rules {
        if (rule.check)(record, verbs) {
            total += rule.points;
        } else {
            suggestions.push(Suggestion {
                rule: rule.key.to_string(),
                text: rule.suggestion_text(),
                points: rule.points,
            });
        }
    }

    let score = total.min(MAX_SCORE);
    let label = ScoreLabel::from_score(score);

    // sort_by is stable: equal points keep rule-table order
    suggestions.sort_by(|a, b| b.points.cmp(&a.points));
    suggestions.truncate(MAX_SUGGESTIONS);

    ATSResult {
        score,
        label,
        color: label.color(),
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
