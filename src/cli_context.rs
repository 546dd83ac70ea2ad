use std::sync::Arc;

use crate::client::GitHubClient;
use crate::config::{get_token, load_config, save_config};
use crate::error::{TriageError, TriageResult};

/// Central context for CLI operations, managing configuration and the API
/// client instance.
pub struct CliContext {
    token: Option<String>,
    client: Option<Arc<GitHubClient>>,
}

impl CliContext {
    /// Load context from saved configuration
    pub fn load() -> TriageResult<Self> {
        Ok(Self {
            token: get_token().ok(),
            client: None,
        })
    }

    /// Get or create a client (requires a token)
    pub fn verified_client(&mut self) -> TriageResult<Arc<GitHubClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let token = self.token()?.clone();
        let client = Arc::new(GitHubClient::new(token)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Get the token, loading from config if necessary
    pub fn token(&mut self) -> TriageResult<&String> {
        if self.token.is_none() {
            self.token = Some(get_token().map_err(|_| TriageError::TokenNotFound)?);
        }

        self.token.as_ref().ok_or(TriageError::TokenNotFound)
    }

    /// Set and save a new token
    pub fn set_token(&mut self, token: String) -> TriageResult<()> {
        let mut config = load_config();
        config.token = Some(token.clone());
        save_config(&config).map_err(|e| TriageError::ConfigError(e.to_string()))?;
        self.client = Some(Arc::new(GitHubClient::new(token.clone())?));
        self.token = Some(token);
        Ok(())
    }

    /// Check if context has a token available
    pub fn has_token(&self) -> bool {
        self.token.is_some() || get_token().is_ok()
    }
}
