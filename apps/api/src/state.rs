use std::sync::Arc;

use tracing::warn;

use crate::ats::{ActionVerbs, ScoringEngine};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable scorer; concurrent requests share it without locking.
    pub engine: Arc<ScoringEngine>,
    /// Opening verbs accepted by bullet guidance.
    pub bullet_verbs: Arc<ActionVerbs>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let engine = match config.action_verbs.as_deref().map(ActionVerbs::new) {
            Some(verbs) if !verbs.is_empty() => ScoringEngine::new(verbs),
            Some(_) => {
                warn!("Configured action-verb list is empty; using the built-in list");
                ScoringEngine::default()
            }
            None => ScoringEngine::default(),
        };

        AppState {
            engine: Arc::new(engine),
            bullet_verbs: Arc::new(ActionVerbs::bullet_lead_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_verb_override_falls_back_to_builtin_list() {
        let config = Config {
            port: 0,
            rust_log: "info".to_string(),
            action_verbs: Some(vec!["  ".to_string()]),
        };
        let state = AppState::new(&config);
        assert_eq!(
            state.engine.vocabulary(),
            &ActionVerbs::scoring_default()
        );
    }
}
