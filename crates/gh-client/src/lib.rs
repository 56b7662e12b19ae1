//! GitHub API client for `gh-pr`
//!
//! This crate provides a trait-based GitHub API client scoped to the
//! operations the `gh-pr` command line tool needs: looking up pull requests
//! and fetching their unified diff bodies.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_pull_request()                          │
//! │  - fetch_pull_requests_by_head()                 │
//! │  - fetch_pull_request_diff()                     │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! `ClientManager` builds one client per GitHub host (github.com or a
//! GitHub Enterprise instance) and resolves authentication tokens lazily.
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let octocrab = octocrab::Octocrab::builder()
//!     .personal_token("token".to_string())
//!     .build()?;
//!
//! let client = OctocrabClient::new(Arc::new(octocrab));
//! let diff = client.fetch_pull_request_diff("rust-lang", "rust", 123).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod client_manager;
pub mod octocrab_client;
pub mod types;

/// Default GitHub host (public GitHub)
pub const DEFAULT_HOST: &str = "github.com";

pub use client::GitHubClient;
pub use client_manager::{ClientManager, TokenResolver};
pub use octocrab_client::OctocrabClient;
pub use types::{PullRequest, PullRequestState};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
