//! Rendering pipeline errors.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while rendering a diff stream.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Raw byte-for-byte copy failed. Returned unwrapped so callers see
    /// the plain I/O error, matching the no-color fast path.
    #[error(transparent)]
    Copy(io::Error),

    /// Reading or writing during the line scan failed.
    #[error("error reading pull request diff")]
    Stream(#[source] io::Error),

    /// The pager command string could not be split into words.
    #[error("invalid pager command {command:?}")]
    PagerParse {
        command: String,
        #[source]
        source: shell_words::ParseError,
    },

    /// The pager command string contained no program name.
    #[error("pager command is empty")]
    PagerEmpty,

    /// The pager process could not be started.
    #[error("failed to start pager {program:?}")]
    PagerSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Writing the diff to the pager's stdin failed.
    #[error("failed to write diff to pager {program:?}")]
    PagerWrite {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The pager exited with a non-zero status.
    #[error("pager {program:?} exited with {status}")]
    PagerExit {
        program: String,
        status: ExitStatus,
    },
}
