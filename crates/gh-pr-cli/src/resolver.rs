//! Resolve a user-supplied selector to a concrete pull request.
//!
//! A selector can be a bare number, a pull request URL, a branch name
//! (optionally `owner:branch` for cross-fork heads), or absent — in which
//! case the current branch stands in.

use crate::git::RepoRef;
use anyhow::{bail, Result};
use gh_client::{GitHubClient, PullRequest};
use log::debug;
use regex::Regex;

/// A parsed pull request selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrSelector {
    /// A pull request number (`123` or `#123`)
    Number(u64),
    /// A full pull request URL; carries its own repository identity
    Url { repo: RepoRef, number: u64 },
    /// A head branch, optionally qualified with the fork owner
    Branch {
        owner: Option<String>,
        branch: String,
    },
    /// No selector given; use the current branch
    CurrentBranch,
}

impl PrSelector {
    /// Classify the raw argument. Never fails: anything that is not a
    /// number or a pull request URL is a branch name.
    pub fn parse(arg: Option<&str>) -> PrSelector {
        let Some(arg) = arg.map(str::trim).filter(|s| !s.is_empty()) else {
            return PrSelector::CurrentBranch;
        };

        if let Some(number) = parse_number(arg) {
            return PrSelector::Number(number);
        }

        if let Some(selector) = parse_url(arg) {
            return selector;
        }

        match arg.split_once(':') {
            Some((owner, branch)) if !owner.is_empty() && !branch.is_empty() => {
                PrSelector::Branch {
                    owner: Some(owner.to_string()),
                    branch: branch.to_string(),
                }
            }
            _ => PrSelector::Branch {
                owner: None,
                branch: arg.to_string(),
            },
        }
    }

    /// The repository named by the selector itself, if any (URLs only).
    pub fn repo(&self) -> Option<&RepoRef> {
        match self {
            PrSelector::Url { repo, .. } => Some(repo),
            _ => None,
        }
    }
}

fn parse_number(arg: &str) -> Option<u64> {
    arg.strip_prefix('#').unwrap_or(arg).parse().ok()
}

fn parse_url(arg: &str) -> Option<PrSelector> {
    let re = Regex::new(r"^https?://([^/]+)/([^/]+)/([^/]+)/pull/(\d+)(?:[/?#].*)?$")
        .expect("pull request url regex should be valid");
    let caps = re.captures(arg)?;
    let number = caps[4].parse().ok()?;
    Some(PrSelector::Url {
        repo: RepoRef::with_host(&caps[1], &caps[2], &caps[3]),
        number,
    })
}

/// Resolve a selector against the API into a pull request and its
/// owning repository.
///
/// `base` is the repository resolution falls back to when the selector
/// does not name one. Branch selectors must already be concrete — the
/// caller substitutes the current branch for `CurrentBranch` before
/// calling.
pub async fn resolve(
    client: &dyn GitHubClient,
    base: &RepoRef,
    selector: &PrSelector,
) -> Result<(PullRequest, RepoRef)> {
    match selector {
        PrSelector::Number(number) => {
            debug!("Resolving PR #{} in {}", number, base.slug());
            let pr = client
                .fetch_pull_request(&base.owner, &base.name, *number)
                .await?;
            Ok((pr, base.clone()))
        }
        PrSelector::Url { repo, number } => {
            debug!("Resolving PR #{} from URL in {}", number, repo.slug());
            let pr = client
                .fetch_pull_request(&repo.owner, &repo.name, *number)
                .await?;
            Ok((pr, repo.clone()))
        }
        PrSelector::Branch { owner, branch } => {
            let head = format!("{}:{}", owner.as_deref().unwrap_or(&base.owner), branch);
            debug!("Resolving PR for head {} in {}", head, base.slug());
            let prs = client
                .fetch_pull_requests_by_head(&base.owner, &base.name, &head)
                .await?;
            match prs.into_iter().next() {
                Some(pr) => Ok((pr, base.clone())),
                None => bail!("no open pull request found for branch {:?}", head),
            }
        }
        PrSelector::CurrentBranch => {
            bail!("selector not resolved against the current branch")
        }
    }
}
