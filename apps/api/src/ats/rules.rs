//! The ATS rule table.
//!
//! Each rule is independent: it either contributes its points or, when unmet,
//! becomes a candidate suggestion. Reweighting or adding a rule is a change to
//! `RULES` only; the engine evaluates the table uniformly.

use crate::ats::vocabulary::ActionVerbs;
use crate::models::resume::ResumeRecord;

pub const MIN_SUMMARY_CHARS: usize = 50;
pub const MIN_SKILLS: usize = 5;

/// A named predicate over a resume worth a fixed number of points.
#[derive(Clone, Copy)]
pub struct Rule {
    pub key: &'static str,
    pub points: u32,
    /// Action shown to the user when the rule is unmet, without the point suffix.
    pub suggestion: &'static str,
    pub check: fn(&ResumeRecord, &ActionVerbs) -> bool,
}

impl Rule {
    /// Suggestion text with its own point value embedded.
    pub fn suggestion_text(&self) -> String {
        format!("{} (+{} points)", self.suggestion, self.points)
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        key: "name",
        points: 10,
        suggestion: "Add your full name",
        check: |r, _| present(&r.name),
    },
    Rule {
        key: "email",
        points: 10,
        suggestion: "Add your email address",
        check: |r, _| present(&r.email),
    },
    Rule {
        key: "summary",
        points: 10,
        suggestion: "Write a professional summary (50+ chars)",
        check: |r, _| r.summary.trim().chars().count() > MIN_SUMMARY_CHARS,
    },
    Rule {
        key: "experience",
        points: 15,
        suggestion: "Add at least 1 work experience with bullet points",
        check: |r, _| r.experience.iter().any(|e| present(&e.description)),
    },
    Rule {
        key: "education",
        points: 10,
        suggestion: "Add your education details",
        check: |r, _| !r.education.is_empty(),
    },
    Rule {
        key: "skills",
        points: 10,
        suggestion: "Add at least 5 skills",
        check: |r, _| r.skill_count() >= MIN_SKILLS,
    },
    Rule {
        key: "projects",
        points: 10,
        suggestion: "Add at least 1 project",
        check: |r, _| !r.projects.is_empty(),
    },
    Rule {
        key: "phone",
        points: 5,
        suggestion: "Add your phone number",
        check: |r, _| present(&r.phone),
    },
    Rule {
        key: "linkedin",
        points: 5,
        suggestion: "Add your LinkedIn URL",
        check: |r, _| present(&r.linkedin),
    },
    Rule {
        key: "github",
        points: 5,
        suggestion: "Add your GitHub URL",
        check: |r, _| present(&r.github),
    },
    Rule {
        key: "action_verbs",
        points: 10,
        suggestion: "Use action verbs in summary/experience (built, led, designed…)",
        check: uses_action_verbs,
    },
];

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Summary and experience descriptions only; project text does not count here.
fn uses_action_verbs(record: &ResumeRecord, verbs: &ActionVerbs) -> bool {
    verbs.appears_in(&record.summary)
        || record
            .experience
            .iter()
            .any(|e| verbs.appears_in(&e.description))
}
