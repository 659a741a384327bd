use std::env;

use crate::error::TrackerError;

/// Configuration for the tracker client, supplied at construction time.
///
/// Labels and milestone are attached only on create, only when set, and are
/// passed through verbatim; the remote service validates them.
#[derive(Debug, Clone, Default)]
pub struct TrackerConfig {
    token: Option<String>,
    pub label_ids: Option<Vec<String>>,
    pub milestone_id: Option<String>,
}

impl TrackerConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            label_ids: None,
            milestone_id: None,
        }
    }

    /// Read configuration from the process environment.
    ///
    /// `GITHUB_TOKEN` supplies the bearer credential; its absence is not an
    /// error here, but every operation fails before making a network call
    /// until one is set. `LABEL_IDS` (comma-separated) and `MILESTONE_ID`
    /// take effect whenever the variable is present, even when empty.
    pub fn from_env() -> Self {
        Self {
            token: env::var("GITHUB_TOKEN").ok(),
            label_ids: env::var("LABEL_IDS").ok().map(|raw| split_label_ids(&raw)),
            milestone_id: env::var("MILESTONE_ID").ok(),
        }
    }

    pub fn with_label_ids(mut self, label_ids: Vec<String>) -> Self {
        self.label_ids = Some(label_ids);
        self
    }

    pub fn with_milestone_id(mut self, milestone_id: impl Into<String>) -> Self {
        self.milestone_id = Some(milestone_id.into());
        self
    }

    /// The bearer token, or `MissingCredential` when unset or empty.
    pub fn bearer_token(&self) -> Result<&str, TrackerError> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(TrackerError::MissingCredential),
        }
    }
}

/// Split a `LABEL_IDS` value on commas. An empty string yields a single
/// empty entry, matching the historical behavior automation workflows
/// may depend on.
pub(crate) fn split_label_ids(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_present() {
        let config = TrackerConfig::new("ghp_secret");
        assert_eq!(config.bearer_token().unwrap(), "ghp_secret");
    }

    #[test]
    fn bearer_token_missing() {
        let config = TrackerConfig::default();
        assert!(matches!(
            config.bearer_token(),
            Err(TrackerError::MissingCredential)
        ));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let config = TrackerConfig::new("");
        assert!(matches!(
            config.bearer_token(),
            Err(TrackerError::MissingCredential)
        ));
    }

    #[test]
    fn split_labels_on_commas() {
        assert_eq!(split_label_ids("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_label_ids_yields_single_empty_entry() {
        assert_eq!(split_label_ids(""), vec![String::new()]);
    }
}
