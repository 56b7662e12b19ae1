//! Color mode handling and ANSI output for classified diff lines.

use crate::line::DiffLineKind;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

/// ANSI escape for header lines (bold/bright).
const ANSI_HEADER: &str = "\x1b[1;38m";
/// ANSI escape for added lines (green).
const ANSI_ADDITION: &str = "\x1b[32m";
/// ANSI escape for removed lines (red).
const ANSI_REMOVAL: &str = "\x1b[31m";
/// ANSI reset escape.
const ANSI_RESET: &str = "\x1b[m";

/// When to colorize diff output.
///
/// Only `always`, `never`, and `auto` are valid; anything else is a
/// validation error raised before any network activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colorize unconditionally, even when piped
    Always,
    /// Never colorize
    Never,
    /// Colorize only when stdout is an interactive terminal
    #[default]
    Auto,
}

/// Error for a `--color` value outside {always, never, auto}.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("did not understand color: {value:?}. Expected one of always, never, or auto")]
pub struct InvalidColorMode {
    /// The rejected input value
    pub value: String,
}

impl FromStr for ColorMode {
    type Err = InvalidColorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            "auto" => Ok(ColorMode::Auto),
            other => Err(InvalidColorMode {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorMode::Always => "always",
            ColorMode::Never => "never",
            ColorMode::Auto => "auto",
        };
        f.write_str(s)
    }
}

impl ColorMode {
    /// Resolve `Auto` against the output destination.
    ///
    /// `Auto` degrades to `Never` when stdout is not an interactive
    /// terminal; `Always` and `Never` are unaffected. Resolution happens
    /// once per invocation.
    pub fn resolve(self, stdout_is_tty: bool) -> ColorMode {
        match self {
            ColorMode::Auto if stdout_is_tty => ColorMode::Always,
            ColorMode::Auto => ColorMode::Never,
            other => other,
        }
    }
}

/// Write one classified line to the sink, wrapped in the ANSI escape for
/// its category and followed by a reset and a newline. Context lines are
/// written unmodified.
pub fn write_colored_line(
    out: &mut dyn Write,
    kind: DiffLineKind,
    line: &str,
) -> io::Result<()> {
    match kind {
        DiffLineKind::Header => writeln!(out, "{ANSI_HEADER}{line}{ANSI_RESET}"),
        DiffLineKind::Addition => writeln!(out, "{ANSI_ADDITION}{line}{ANSI_RESET}"),
        DiffLineKind::Removal => writeln!(out, "{ANSI_REMOVAL}{line}{ANSI_RESET}"),
        DiffLineKind::Context => writeln!(out, "{line}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_str_accepts_exactly_three_values() {
        assert_eq!("always".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);

        assert!("bogus".parse::<ColorMode>().is_err());
        assert!("".parse::<ColorMode>().is_err());
        assert!("Always".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_from_str_error_message() {
        let err = "bogus".parse::<ColorMode>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "did not understand color: \"bogus\". Expected one of always, never, or auto"
        );
    }

    #[test]
    fn test_resolve() {
        assert_eq!(ColorMode::Auto.resolve(true), ColorMode::Always);
        assert_eq!(ColorMode::Auto.resolve(false), ColorMode::Never);
        assert_eq!(ColorMode::Always.resolve(false), ColorMode::Always);
        assert_eq!(ColorMode::Never.resolve(true), ColorMode::Never);
    }

    #[test]
    fn test_write_colored_line() {
        let cases = [
            (DiffLineKind::Header, "diff --git a/x b/x", "\x1b[1;38mdiff --git a/x b/x\x1b[m\n"),
            (DiffLineKind::Addition, "+hello", "\x1b[32m+hello\x1b[m\n"),
            (DiffLineKind::Removal, "-world", "\x1b[31m-world\x1b[m\n"),
            (DiffLineKind::Context, " context", " context\n"),
        ];

        for (kind, line, expected) in cases {
            let mut out = Vec::new();
            write_colored_line(&mut out, kind, line).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), expected);
        }
    }
}
