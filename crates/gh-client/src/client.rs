//! GitHub client trait definition
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy. The `gh-pr` binary only ever talks to
//! this trait, which keeps command logic testable with in-memory fakes.

use crate::types::PullRequest;
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the interface for interacting with the GitHub API.
/// Implementations can be direct (hitting the API) or test doubles.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch a single pull request by number
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    ///
    /// # Returns
    ///
    /// The pull request details, or an error if not found.
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequest>;

    /// Fetch open pull requests whose head matches a branch
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `head` - Head filter in `owner:branch` form
    ///
    /// # Returns
    ///
    /// Open pull requests with that head branch, newest first. An empty
    /// list means no open PR exists for the branch.
    async fn fetch_pull_requests_by_head(
        &self,
        owner: &str,
        repo: &str,
        head: &str,
    ) -> anyhow::Result<Vec<PullRequest>>;

    /// Fetch the unified diff body for a pull request
    ///
    /// The returned string is the raw `application/vnd.github.diff`
    /// representation, exactly as the API serves it.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    async fn fetch_pull_request_diff(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<String>;
}
