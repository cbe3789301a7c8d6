// ATS readiness scoring
// Rule table evaluation, bullet guidance and depth improvements for a resume draft.
// Everything here is pure; handlers are the only entry point that touches AppState.

pub mod engine;
pub mod guidance;
pub mod handlers;
pub mod improvements;
pub mod rules;
pub mod vocabulary;

pub use engine::ScoringEngine;
pub use vocabulary::ActionVerbs;
