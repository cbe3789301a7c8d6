use crate::ats::engine::ATSResult;
use crate::ats::guidance::has_measurable_impact;
use crate::models::resume::ResumeRecord;

pub const MAX_IMPROVEMENTS: usize = 3;
pub const READY_SCORE: u32 = 70;

const MIN_PROJECTS: usize = 2;
const MIN_SUMMARY_WORDS: usize = 40;
const MIN_LISTED_SKILLS: usize = 8;

/// Depth checks that go beyond the scored rules, in display order, capped at three.
pub fn top_improvements(record: &ResumeRecord) -> Vec<String> {
    let mut improvements = Vec::new();

    if record.projects.len() < MIN_PROJECTS {
        improvements.push("Add more projects to showcase your skills.");
    }

    let quantified = record
        .experience
        .iter()
        .map(|e| e.description.as_str())
        .chain(record.projects.iter().map(|p| p.description.as_str()))
        .any(has_measurable_impact);
    if !quantified {
        improvements.push("Include measurable impact with numbers in your bullets.");
    }

    if record.summary.split_whitespace().count() < MIN_SUMMARY_WORDS {
        improvements.push("Expand your summary to at least 40 words.");
    }

    if record.skill_count() < MIN_LISTED_SKILLS {
        improvements.push("List at least 8 skills to pass ATS filters.");
    }

    if record.experience.is_empty() {
        improvements.push("Add an internship or work experience entry.");
    }

    improvements
        .into_iter()
        .take(MAX_IMPROVEMENTS)
        .map(str::to_string)
        .collect()
}

/// Nothing left to fix: high score, no unmet rules, no open improvements.
pub fn is_ats_ready(result: &ATSResult, improvements: &[String]) -> bool {
    result.score >= READY_SCORE && result.suggestions.is_empty() && improvements.is_empty()
}
