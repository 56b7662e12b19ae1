//! Multi-host GitHub client manager
//!
//! Manages GitHub API clients for different hosts (github.com, GitHub
//! Enterprise). Clients are lazily initialized and kept per host, so a
//! single invocation that touches only one host builds exactly one client.

use crate::{OctocrabClient, DEFAULT_HOST};
use anyhow::{Context, Result};
use log::{debug, info};
use octocrab::Octocrab;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves GitHub tokens for different hosts
///
/// Tries multiple sources in order:
/// 1. Host-specific env var (e.g., `GITHUB_TOKEN_GHE_EXAMPLE_COM`)
/// 2. `gh auth token --hostname {host}` command
/// 3. Generic `GITHUB_TOKEN` or `GH_TOKEN` (github.com only)
#[derive(Debug, Clone)]
pub struct TokenResolver {
    /// Cached default token from GITHUB_TOKEN/GH_TOKEN
    default_token: Option<String>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    /// Create a new token resolver
    pub fn new() -> Self {
        let default_token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok();

        Self { default_token }
    }

    /// Get a token for the given host
    ///
    /// # Arguments
    ///
    /// * `host` - The GitHub host (None = github.com)
    ///
    /// # Token Resolution Order
    ///
    /// 1. `GITHUB_TOKEN_{HOST}` env var (e.g., `GITHUB_TOKEN_GHE_EXAMPLE_COM`)
    /// 2. `gh auth token --hostname {host}` command
    /// 3. `GITHUB_TOKEN` or `GH_TOKEN` (github.com only)
    pub async fn get_token(&self, host: Option<&str>) -> Result<String> {
        let host = host.unwrap_or(DEFAULT_HOST);

        // Try host-specific env var
        let env_key = format!(
            "GITHUB_TOKEN_{}",
            host.replace(['.', '-'], "_").to_uppercase()
        );
        if let Ok(token) = std::env::var(&env_key) {
            debug!("Using token from env var {} for host {}", env_key, host);
            return Ok(token);
        }

        // Try gh CLI with hostname
        debug!("Trying gh auth token for host {}", host);
        let output = tokio::process::Command::new("gh")
            .args(["auth", "token", "--hostname", host])
            .output()
            .await;

        if let Ok(output) = output {
            if output.status.success() {
                let token = String::from_utf8(output.stdout)
                    .context("Invalid UTF-8 in gh auth token output")?
                    .trim()
                    .to_string();
                if !token.is_empty() {
                    debug!("Using token from gh CLI for host {}", host);
                    return Ok(token);
                }
            }
        }

        // Fallback to default token (for github.com only)
        if host == DEFAULT_HOST {
            if let Some(ref token) = self.default_token {
                debug!("Using default token (GITHUB_TOKEN/GH_TOKEN) for github.com");
                return Ok(token.clone());
            }
        }

        Err(anyhow::anyhow!(
            "No token found for host '{}'. \
             Set {} or run 'gh auth login --hostname {}'",
            host,
            env_key,
            host
        ))
    }
}

/// Manages GitHub API clients for multiple hosts
///
/// Lazily creates clients per host. Each client is configured with the
/// appropriate base URL and authentication token.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::ClientManager;
///
/// let mut manager = ClientManager::new();
///
/// // Client for github.com
/// let client = manager.get_client(None).await?;
///
/// // Client for an enterprise host
/// let ghe_client = manager.get_client(Some("ghe.example.com")).await?;
/// ```
#[derive(Default)]
pub struct ClientManager {
    /// Cached clients per host
    clients: HashMap<String, OctocrabClient>,
    /// Token resolver
    tokens: TokenResolver,
}

impl ClientManager {
    /// Create a new client manager
    pub fn new() -> Self {
        Self {
            clients: HashMap::new(),
            tokens: TokenResolver::new(),
        }
    }

    /// Get or create a client for the given host
    ///
    /// # Arguments
    ///
    /// * `host` - The GitHub host (None = github.com)
    pub async fn get_client(&mut self, host: Option<&str>) -> Result<&OctocrabClient> {
        let key = host.unwrap_or(DEFAULT_HOST).to_string();

        if !self.clients.contains_key(&key) {
            let client = self.create_client(host).await?;
            self.clients.insert(key.clone(), client);
        }

        Ok(self.clients.get(&key).expect("client inserted above"))
    }

    /// Check if a client exists for the given host (without creating one)
    pub fn has_client(&self, host: Option<&str>) -> bool {
        let key = host.unwrap_or(DEFAULT_HOST);
        self.clients.contains_key(key)
    }

    /// Get the default token (github.com) if available
    pub fn default_token(&self) -> Option<&str> {
        self.tokens.default_token.as_deref()
    }

    /// Create a new client for the given host
    async fn create_client(&self, host: Option<&str>) -> Result<OctocrabClient> {
        let effective_host = host.unwrap_or(DEFAULT_HOST);
        info!("Creating GitHub client for host: {}", effective_host);

        // Get token for this host
        let token = self.tokens.get_token(host).await?;

        // Build octocrab with appropriate base URI
        let mut builder = Octocrab::builder().personal_token(token);

        if let Some(h) = host {
            if h != DEFAULT_HOST {
                let uri = format!("https://{}/api/v3", h);
                builder = builder.base_uri(&uri).context("Failed to set base URI")?;
            }
        }

        let octocrab = builder.build().context("Failed to build Octocrab client")?;
        Ok(OctocrabClient::new(Arc::new(octocrab)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_resolver_env_key_generation() {
        // Host names are converted to env var format
        let hosts = [
            ("github.com", "GITHUB_TOKEN_GITHUB_COM"),
            ("ghe.example.com", "GITHUB_TOKEN_GHE_EXAMPLE_COM"),
            (
                "github-enterprise.corp.com",
                "GITHUB_TOKEN_GITHUB_ENTERPRISE_CORP_COM",
            ),
        ];

        for (host, expected_key) in hosts {
            let env_key = format!(
                "GITHUB_TOKEN_{}",
                host.replace(['.', '-'], "_").to_uppercase()
            );
            assert_eq!(
                env_key, expected_key,
                "Host '{}' should produce key '{}'",
                host, expected_key
            );
        }
    }

    #[test]
    fn test_client_manager_new() {
        let manager = ClientManager::new();

        assert!(!manager.has_client(None));
        assert!(!manager.has_client(Some(DEFAULT_HOST)));
        assert!(!manager.has_client(Some("ghe.example.com")));
    }
}
