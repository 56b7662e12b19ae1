//! The `gh-pr diff` subcommand.
//!
//! Resolves the selected pull request, fetches its unified diff from the
//! API, and hands the stream to the rendering pipeline. All environment
//! inputs (config file, PAGER, terminal-ness) are gathered up front into
//! [`DiffOptions`]; everything downstream is explicit.

use crate::cli::DiffArgs;
use crate::config::AppConfig;
use crate::git::{self, RepoRef};
use crate::resolver::{self, PrSelector};
use anyhow::{anyhow, Context, Result};
use gh_client::{ClientManager, GitHubClient};
use gh_diff_render::{render, select_mode, ColorMode, CommandPager, DiffStream};
use log::debug;
use std::io::{self, IsTerminal};

/// Resolved inputs for one diff invocation.
#[derive(Debug)]
pub struct DiffOptions {
    /// Raw selector argument (number, URL, or branch), if any
    pub selector: Option<String>,
    /// Color mode after flag/config precedence (still unresolved for TTY)
    pub color: ColorMode,
    /// Base repository override from `--repo`
    pub repo_override: Option<RepoRef>,
    /// Pager command string, already merged from PAGER and config
    pub pager: Option<String>,
    /// Whether stdout is an interactive terminal
    pub stdout_is_tty: bool,
}

impl DiffOptions {
    /// Gather inputs at the process boundary: flags, config file,
    /// environment, and the terminal probe.
    pub fn from_args(args: DiffArgs) -> Result<Self> {
        let config = AppConfig::load();
        Ok(Self {
            selector: args.selector,
            color: config.effective_color(args.color)?,
            repo_override: args.repo,
            pager: config.effective_pager(std::env::var("PAGER").ok()),
            stdout_is_tty: io::stdout().is_terminal(),
        })
    }
}

/// Entry point for `gh-pr diff`.
pub async fn run(args: DiffArgs) -> Result<()> {
    let opts = DiffOptions::from_args(args)?;
    execute(opts).await
}

async fn execute(opts: DiffOptions) -> Result<()> {
    let mut selector = PrSelector::parse(opts.selector.as_deref());
    debug!("Parsed selector: {:?}", selector);

    let base = base_repo(&opts, &selector).await?;

    if selector == PrSelector::CurrentBranch {
        let branch = git::current_branch().await?;
        debug!("Using current branch {:?}", branch);
        selector = PrSelector::Branch {
            owner: None,
            branch,
        };
    }

    let mut clients = ClientManager::new();
    let client = clients.get_client(base.host.as_deref()).await?;

    let (pr, repo) = resolver::resolve(client, &base, &selector).await?;
    debug!("Resolved {}#{} ({})", repo.slug(), pr.number, pr.title);

    let diff = fetch_diff(client, &repo, pr.number).await?;

    let mode = select_mode(opts.color, opts.stdout_is_tty, opts.pager.as_deref())?;
    let mut stdout = io::stdout().lock();
    render(DiffStream::from_text(diff), &mut stdout, mode, &CommandPager)?;
    Ok(())
}

/// Determine the base repository: `--repo` wins, then a URL selector's
/// own repository, then the working directory's git remotes.
async fn base_repo(opts: &DiffOptions, selector: &PrSelector) -> Result<RepoRef> {
    if let Some(repo) = &opts.repo_override {
        return Ok(repo.clone());
    }
    if let Some(repo) = selector.repo() {
        return Ok(repo.clone());
    }

    let remotes = git::remotes().await?;
    git::base_remote(&remotes)
        .map(|r| r.repo.clone())
        .ok_or_else(|| {
            anyhow!("no GitHub remotes found; pass --repo or run inside a cloned repository")
        })
}

/// Fetch the unified diff body for a pull request.
async fn fetch_diff(client: &dyn GitHubClient, repo: &RepoRef, number: u64) -> Result<String> {
    client
        .fetch_pull_request_diff(&repo.owner, &repo.name, number)
        .await
        .context("could not find pull request diff")
}
