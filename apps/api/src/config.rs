use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Override for the scoring action-verb vocabulary (`ATS_ACTION_VERBS`).
    /// `None` keeps the built-in list.
    pub action_verbs: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let action_verbs = match std::env::var("ATS_ACTION_VERBS") {
            Ok(raw) => Some(
                parse_verb_list(&raw).context("ATS_ACTION_VERBS is not a valid verb list")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            action_verbs,
        })
    }
}

/// Parses a comma-separated verb list. Entries are trimmed and lower-cased,
/// blanks are dropped. Each verb must be a single word.
pub fn parse_verb_list(raw: &str) -> Result<Vec<String>> {
    let mut verbs = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if token.chars().any(char::is_whitespace) {
            bail!("'{token}' is not a single word");
        }
        verbs.push(token.to_lowercase());
    }
    if verbs.is_empty() {
        bail!("verb list is empty");
    }
    Ok(verbs)
}
