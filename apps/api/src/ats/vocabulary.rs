//! Action-verb vocabularies used by the scorer and the bullet guidance.

use std::collections::HashSet;

/// Verbs that satisfy the scoring engine's action-verb rule.
pub const SCORING_ACTION_VERBS: &[&str] = &[
    "built",
    "led",
    "designed",
    "improved",
    "developed",
    "created",
    "managed",
    "launched",
    "implemented",
    "delivered",
    "optimized",
    "reduced",
    "increased",
    "achieved",
    "drove",
    "architected",
    "scaled",
    "automated",
    "deployed",
    "shipped",
    "spearheaded",
    "established",
    "collaborated",
    "mentored",
    "executed",
    "streamlined",
    "engineered",
    "migrated",
];

/// Verbs accepted as the opening word of a single bullet.
pub const BULLET_LEAD_VERBS: &[&str] = &[
    "built",
    "developed",
    "designed",
    "implemented",
    "led",
    "improved",
    "created",
    "optimized",
    "automated",
    "managed",
    "launched",
    "deployed",
    "integrated",
    "reduced",
    "increased",
    "architected",
    "engineered",
    "delivered",
    "established",
    "maintained",
    "migrated",
    "refactored",
    "scaled",
    "shipped",
    "streamlined",
    "tested",
    "wrote",
];

/// An immutable, case-insensitive set of single-word verbs.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionVerbs {
    verbs: HashSet<String>,
}

impl ActionVerbs {
    pub fn new<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let verbs = verbs
            .into_iter()
            .map(|v| v.as_ref().trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect();
        Self { verbs }
    }

    pub fn scoring_default() -> Self {
        Self::new(SCORING_ACTION_VERBS)
    }

    pub fn bullet_lead_default() -> Self {
        Self::new(BULLET_LEAD_VERBS)
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.verbs.contains(&word.to_lowercase())
    }

    /// True if any whole word of `text` is in the vocabulary.
    /// Word characters are ASCII alphanumerics and `_`, so "led-based" yields "led".
    pub fn appears_in(&self, text: &str) -> bool {
        words(text).any(|w| self.contains(w))
    }

    /// True if the first whitespace-separated word of `text`, with surrounding
    /// punctuation stripped, is in the vocabulary. "Built-in" stays one word.
    pub fn leads(&self, text: &str) -> bool {
        text.split_whitespace()
            .next()
            .map(|w| w.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
            .is_some_and(|w| self.contains(w))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_match_is_case_insensitive() {
        let verbs = ActionVerbs::scoring_default();
        assert!(verbs.appears_in("LED the platform rewrite"));
        assert!(verbs.appears_in("Team that shipped, weekly."));
    }

    #[test]
    fn test_substrings_do_not_match() {
        let verbs = ActionVerbs::scoring_default();
        // "ledger" and "rebuilt" only contain vocabulary words
        assert!(!verbs.appears_in("Kept the ledger and rebuilt nothing"));
        assert!(!verbs.appears_in("Worked on stuff"));
    }

    #[test]
    fn test_punctuation_splits_words() {
        let verbs = ActionVerbs::scoring_default();
        assert!(verbs.appears_in("co-led/designed"));
    }

    #[test]
    fn test_leads_checks_only_first_word() {
        let verbs = ActionVerbs::bullet_lead_default();
        assert!(verbs.leads("  Refactored the billing service"));
        assert!(verbs.leads("Wrote, tested and shipped"));
        assert!(verbs.leads("\"Shipped\" the beta"));
        assert!(!verbs.leads("The service was refactored"));
        assert!(!verbs.leads(""));
    }

    #[test]
    fn test_leads_keeps_hyphenated_and_slashed_words_whole() {
        let verbs = ActionVerbs::bullet_lead_default();
        assert!(!verbs.leads("Built-in caching for 40% faster loads"));
        assert!(!verbs.leads("Led/managed 12 people"));
    }

    #[test]
    fn test_word_characters_are_ascii_only() {
        let verbs = ActionVerbs::scoring_default();
        // a non-ASCII letter ends the word, so "led" is whole here
        assert!(verbs.appears_in("ledé the team"));
        assert!(verbs.appears_in("éled"));
    }

    #[test]
    fn test_empty_vocabulary() {
        assert!(ActionVerbs::new(["", "  "]).is_empty());
        assert!(!ActionVerbs::scoring_default().is_empty());
    }

    #[test]
    fn test_custom_vocabulary_is_normalized() {
        let verbs = ActionVerbs::new([" Orchestrated ", "", "PIVOTED"]);
        assert_eq!(verbs.len(), 2);
        assert!(verbs.appears_in("orchestrated the launch"));
        assert!(!verbs.appears_in("led the launch"));
    }

    #[test]
    fn test_default_vocabularies_have_no_duplicates() {
        assert_eq!(ActionVerbs::scoring_default().len(), SCORING_ACTION_VERBS.len());
        assert_eq!(ActionVerbs::bullet_lead_default().len(), BULLET_LEAD_VERBS.len());
    }
}
