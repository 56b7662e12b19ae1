//! Local git context: repository references, remotes, and the current
//! branch.
//!
//! The base repository for a command is discovered from the working
//! directory's git remotes unless `--repo` overrides it. Remote URLs are
//! parsed in both HTTPS and SSH forms.

use anyhow::{bail, Context, Result};
use gh_client::DEFAULT_HOST;
use log::debug;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A repository identity: optional host (None = github.com), owner, name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// GitHub host; `None` means github.com
    pub host: Option<String>,
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoRef {
    /// Repository on github.com.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: None,
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Repository on a specific host; github.com normalizes to `None`.
    pub fn with_host(
        host: impl Into<String>,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            host: normalize_host(host.into()),
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// The `owner/name` form used in API routes and messages.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Some(host) => write!(f, "{}/{}/{}", host, self.owner, self.name),
            None => write!(f, "{}/{}", self.owner, self.name),
        }
    }
}

/// Error for a repository argument outside the `[HOST/]OWNER/REPO` format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected the \"[HOST/]OWNER/REPO\" format, got {value:?}")]
pub struct InvalidRepoRef {
    /// The rejected input value
    pub value: String,
}

impl FromStr for RepoRef {
    type Err = InvalidRepoRef;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        let invalid = || InvalidRepoRef {
            value: s.to_string(),
        };

        match parts.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => {
                Ok(RepoRef::new(*owner, *name))
            }
            [host, owner, name]
                if !host.is_empty() && !owner.is_empty() && !name.is_empty() =>
            {
                Ok(RepoRef::with_host(*host, *owner, *name))
            }
            _ => Err(invalid()),
        }
    }
}

/// github.com collapses to `None` so all default-host representations
/// compare equal.
fn normalize_host(host: String) -> Option<String> {
    if host.eq_ignore_ascii_case(DEFAULT_HOST) {
        None
    } else {
        Some(host)
    }
}

/// A configured git remote pointing at a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    /// Remote name (e.g., "origin")
    pub name: String,
    /// The repository the remote points at
    pub repo: RepoRef,
}

/// Parse a git remote URL into a repository reference.
///
/// Supports `https://host/owner/repo[.git]`, `git@host:owner/repo[.git]`,
/// and `ssh://git@host/owner/repo[.git]`. Returns `None` for anything
/// else (local paths, unrelated hosts are still parsed — filtering is the
/// caller's concern).
pub fn parse_remote_url(url: &str) -> Option<RepoRef> {
    let https = Regex::new(r"^https?://(?:[^@/]+@)?([^/]+)/([^/]+)/([^/]+?)(?:\.git)?/?$")
        .expect("https remote regex should be valid");
    let scp = Regex::new(r"^[\w.-]+@([^:/]+):([^/]+)/([^/]+?)(?:\.git)?$")
        .expect("scp remote regex should be valid");
    let ssh = Regex::new(r"^ssh://(?:[^@/]+@)?([^/:]+)(?::\d+)?/([^/]+)/([^/]+?)(?:\.git)?/?$")
        .expect("ssh remote regex should be valid");

    for re in [&https, &scp, &ssh] {
        if let Some(caps) = re.captures(url) {
            return Some(RepoRef::with_host(&caps[1], &caps[2], &caps[3]));
        }
    }
    None
}

/// Pick the base repository from the configured remotes.
///
/// `upstream` wins over `origin`, which wins over whatever is first.
pub fn base_remote(remotes: &[Remote]) -> Option<&Remote> {
    remotes
        .iter()
        .find(|r| r.name == "upstream")
        .or_else(|| remotes.iter().find(|r| r.name == "origin"))
        .or_else(|| remotes.first())
}

/// List the GitHub remotes of the working directory's repository.
pub async fn remotes() -> Result<Vec<Remote>> {
    let output = tokio::process::Command::new("git")
        .args(["remote", "-v"])
        .output()
        .await
        .context("Failed to run 'git remote'")?;

    if !output.status.success() {
        bail!("not a git repository (or git is not installed)");
    }

    let stdout =
        String::from_utf8(output.stdout).context("Invalid UTF-8 in git remote output")?;
    Ok(parse_remotes(&stdout))
}

/// Parse `git remote -v` output, keeping one entry per remote (fetch URLs).
fn parse_remotes(output: &str) -> Vec<Remote> {
    let mut remotes = Vec::new();
    for line in output.lines() {
        let mut fields = line.split_whitespace();
        let (Some(name), Some(url)) = (fields.next(), fields.next()) else {
            continue;
        };
        if fields.next() == Some("(push)") {
            continue;
        }
        match parse_remote_url(url) {
            Some(repo) => remotes.push(Remote {
                name: name.to_string(),
                repo,
            }),
            None => debug!("Skipping unparseable remote {}: {}", name, url),
        }
    }
    remotes
}

/// The currently checked-out branch name.
pub async fn current_branch() -> Result<String> {
    let output = tokio::process::Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .output()
        .await
        .context("Failed to run 'git rev-parse'")?;

    if !output.status.success() {
        bail!("could not determine the current branch");
    }

    let branch = String::from_utf8(output.stdout)
        .context("Invalid UTF-8 in git rev-parse output")?
        .trim()
        .to_string();

    if branch.is_empty() || branch == "HEAD" {
        bail!("not currently on any branch");
    }

    Ok(branch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_repo_ref_from_str() {
        let repo: RepoRef = "rust-lang/rust".parse().unwrap();
        assert_eq!(repo, RepoRef::new("rust-lang", "rust"));

        let repo: RepoRef = "ghe.example.com/acme/widgets".parse().unwrap();
        assert_eq!(repo.host.as_deref(), Some("ghe.example.com"));
        assert_eq!(repo.slug(), "acme/widgets");
    }

    #[test]
    fn test_repo_ref_from_str_rejects_bad_shapes() {
        assert!("rust".parse::<RepoRef>().is_err());
        assert!("a/b/c/d".parse::<RepoRef>().is_err());
        assert!("/rust".parse::<RepoRef>().is_err());
        assert!("rust/".parse::<RepoRef>().is_err());
    }

    #[test]
    fn test_repo_ref_normalizes_default_host() {
        let repo: RepoRef = "github.com/rust-lang/rust".parse().unwrap();
        assert!(repo.host.is_none());
        assert_eq!(repo, RepoRef::new("rust-lang", "rust"));
    }

    #[test]
    fn test_parse_remote_url_https() {
        let repo = parse_remote_url("https://github.com/rust-lang/rust.git").unwrap();
        assert_eq!(repo, RepoRef::new("rust-lang", "rust"));

        let repo = parse_remote_url("https://ghe.example.com/acme/widgets").unwrap();
        assert_eq!(repo.host.as_deref(), Some("ghe.example.com"));
    }

    #[test]
    fn test_parse_remote_url_ssh() {
        let repo = parse_remote_url("git@github.com:rust-lang/rust.git").unwrap();
        assert_eq!(repo, RepoRef::new("rust-lang", "rust"));

        let repo = parse_remote_url("ssh://git@ghe.example.com/acme/widgets.git").unwrap();
        assert_eq!(repo.host.as_deref(), Some("ghe.example.com"));
        assert_eq!(repo.slug(), "acme/widgets");
    }

    #[test]
    fn test_parse_remote_url_rejects_local_paths() {
        assert!(parse_remote_url("/home/user/repos/thing").is_none());
        assert!(parse_remote_url("../relative/path").is_none());
    }

    #[test]
    fn test_parse_remotes_keeps_fetch_entries() {
        let output = "\
origin\thttps://github.com/octocat/hello.git (fetch)
origin\thttps://github.com/octocat/hello.git (push)
upstream\tgit@github.com:github/hello.git (fetch)
upstream\tgit@github.com:github/hello.git (push)
";
        let remotes = parse_remotes(output);
        assert_eq!(remotes.len(), 2);
        assert_eq!(remotes[0].name, "origin");
        assert_eq!(remotes[0].repo, RepoRef::new("octocat", "hello"));
        assert_eq!(remotes[1].name, "upstream");
        assert_eq!(remotes[1].repo, RepoRef::new("github", "hello"));
    }

    #[test]
    fn test_base_remote_prefers_upstream_then_origin() {
        let remotes = vec![
            Remote {
                name: "fork".to_string(),
                repo: RepoRef::new("me", "hello"),
            },
            Remote {
                name: "origin".to_string(),
                repo: RepoRef::new("octocat", "hello"),
            },
            Remote {
                name: "upstream".to_string(),
                repo: RepoRef::new("github", "hello"),
            },
        ];

        assert_eq!(base_remote(&remotes).unwrap().name, "upstream");
        assert_eq!(base_remote(&remotes[..2]).unwrap().name, "origin");
        assert_eq!(base_remote(&remotes[..1]).unwrap().name, "fork");
        assert!(base_remote(&[]).is_none());
    }
}
