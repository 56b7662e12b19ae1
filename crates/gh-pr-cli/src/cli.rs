//! Command line interface definition.

use crate::git::RepoRef;
use clap::{Args, Parser, Subcommand};
use gh_diff_render::{ColorMode, InvalidColorMode};

/// Work with GitHub pull requests from the command line.
#[derive(Debug, Parser)]
#[command(name = "gh-pr", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// View changes in a pull request
    Diff(DiffArgs),
}

/// Arguments for `gh-pr diff`.
#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Pull request to view: a number, a URL, or a branch name.
    /// Defaults to the pull request for the current branch.
    #[arg(value_name = "number | url | branch")]
    pub selector: Option<String>,

    /// Use color in diff output: {always|never|auto}
    #[arg(long, value_name = "mode", value_parser = parse_color_mode)]
    pub color: Option<ColorMode>,

    /// Select another repository using the [HOST/]OWNER/REPO format
    #[arg(short = 'R', long, value_name = "repo")]
    pub repo: Option<RepoRef>,
}

/// Validate `--color` before anything else runs; the error carries the
/// canonical message for unknown values.
fn parse_color_mode(value: &str) -> Result<ColorMode, InvalidColorMode> {
    value.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_accepts_selector_and_flags() {
        let cli = Cli::parse_from(["gh-pr", "diff", "123", "--color", "never"]);
        let Command::Diff(args) = cli.command;
        assert_eq!(args.selector.as_deref(), Some("123"));
        assert_eq!(args.color, Some(ColorMode::Never));
        assert!(args.repo.is_none());
    }

    #[test]
    fn test_diff_selector_is_optional() {
        let cli = Cli::parse_from(["gh-pr", "diff"]);
        let Command::Diff(args) = cli.command;
        assert!(args.selector.is_none());
        assert!(args.color.is_none());
    }

    #[test]
    fn test_color_rejects_unknown_value() {
        let err = Cli::try_parse_from(["gh-pr", "diff", "--color", "bogus"]).unwrap_err();
        let rendered = err.to_string();
        assert!(
            rendered.contains(
                "did not understand color: \"bogus\". Expected one of always, never, or auto"
            ),
            "unexpected error output: {rendered}"
        );
    }

    #[test]
    fn test_repo_override() {
        let cli = Cli::parse_from(["gh-pr", "diff", "-R", "rust-lang/rust"]);
        let Command::Diff(args) = cli.command;
        let repo = args.repo.unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "rust");
        assert!(repo.host.is_none());
    }

    #[test]
    fn test_repo_override_with_host() {
        let cli = Cli::parse_from(["gh-pr", "diff", "--repo", "ghe.example.com/acme/widgets"]);
        let Command::Diff(args) = cli.command;
        let repo = args.repo.unwrap();
        assert_eq!(repo.host.as_deref(), Some("ghe.example.com"));
        assert_eq!(repo.owner, "acme");
        assert_eq!(repo.name, "widgets");
    }
}
