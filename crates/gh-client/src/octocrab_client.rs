//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab
//! library. This client makes real API calls.

use crate::client::GitHubClient;
use crate::types::{PullRequest, PullRequestState};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequest> {
        debug!("Fetching PR {}/{}#{}", owner, repo, pr_number);

        let pr = self.octocrab.pulls(owner, repo).get(pr_number).await?;
        Ok(convert_pull_request(&pr))
    }

    async fn fetch_pull_requests_by_head(
        &self,
        owner: &str,
        repo: &str,
        head: &str,
    ) -> anyhow::Result<Vec<PullRequest>> {
        debug!("Fetching PRs for {}/{} with head {}", owner, repo, head);

        let mut prs = Vec::new();
        let mut page_num = 1u32;
        const MAX_PRS: usize = 50;
        const PER_PAGE: u8 = 30;

        loop {
            let page = self
                .octocrab
                .pulls(owner, repo)
                .list()
                .state(octocrab::params::State::Open)
                .head(head)
                .per_page(PER_PAGE)
                .page(page_num)
                .send()
                .await?;
            let page_is_empty = page.items.is_empty();

            for pr in page.items {
                if prs.len() >= MAX_PRS {
                    break;
                }
                prs.push(convert_pull_request(&pr));
            }

            if prs.len() >= MAX_PRS || page_is_empty {
                break;
            }

            page_num += 1;
        }

        // Sort by PR number (descending) for stable ordering
        prs.sort_by(|a, b| b.number.cmp(&a.number));

        debug!("Found {} PRs for head {}", prs.len(), head);
        Ok(prs)
    }

    async fn fetch_pull_request_diff(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<String> {
        debug!("Fetching diff for {}/{}#{}", owner, repo, pr_number);

        let diff = self.octocrab.pulls(owner, repo).get_diff(pr_number).await?;
        debug!("Fetched {} bytes of diff", diff.len());
        Ok(diff)
    }
}

/// Convert octocrab PullRequest to our PullRequest type
fn convert_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.clone().unwrap_or_default(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        state: convert_state(pr),
        head_sha: pr.head.sha.clone(),
        base_branch: pr.base.ref_field.clone(),
        head_branch: pr.head.ref_field.clone(),
        created_at: pr.created_at.unwrap_or_else(chrono::Utc::now),
        updated_at: pr.updated_at.unwrap_or_else(chrono::Utc::now),
        html_url: pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
    }
}

/// Convert octocrab state fields to our enum
///
/// GitHub reports merged PRs as closed with a merge timestamp set.
fn convert_state(pr: &octocrab::models::pulls::PullRequest) -> PullRequestState {
    if pr.merged_at.is_some() {
        return PullRequestState::Merged;
    }
    match pr.state {
        Some(octocrab::models::IssueState::Open) => PullRequestState::Open,
        Some(octocrab::models::IssueState::Closed) => PullRequestState::Closed,
        _ => PullRequestState::Open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_roundtrip_serde() {
        let json = serde_json::to_string(&PullRequestState::Merged).unwrap();
        assert_eq!(json, "\"merged\"");
        let back: PullRequestState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PullRequestState::Merged);
    }

    #[test]
    fn test_state_default_is_open() {
        assert_eq!(PullRequestState::default(), PullRequestState::Open);
    }
}
