//! External pager dispatch.
//!
//! Splits a pager command string (typically the `PAGER` environment
//! variable) into a program and arguments, then runs it with the diff
//! stream on its stdin. The spawning side lives behind [`PagerSpawner`]
//! so tests can capture the stream without running real processes.

use crate::error::RenderError;
use log::debug;
use std::io::{self, Read, Write};
use std::process::{Command, Stdio};

/// A pager invocation: program name plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerCommand {
    program: String,
    args: Vec<String>,
}

impl PagerCommand {
    /// Split a pager command string with shell-word rules.
    ///
    /// Quoting and escaping are respected as in a shell; unbalanced
    /// quotes are a parse error, and an empty string has no program.
    pub fn parse(command: &str) -> Result<Self, RenderError> {
        let words = shell_words::split(command).map_err(|source| RenderError::PagerParse {
            command: command.to_string(),
            source,
        })?;

        let mut words = words.into_iter();
        let program = words.next().ok_or(RenderError::PagerEmpty)?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    /// The program to execute.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Capability to run an external pager over a diff stream.
pub trait PagerSpawner {
    /// Run the pager with `diff` wired to its stdin, returning once the
    /// process exits. A spawn failure or non-zero exit is an error.
    fn run(&self, command: &PagerCommand, diff: &mut dyn Read) -> Result<(), RenderError>;
}

/// Real pager spawner backed by `std::process::Command`.
///
/// The child inherits stdout and stderr: the pager branch is only taken
/// when stdout is an interactive terminal, so the terminal is the sink.
pub struct CommandPager;

impl PagerSpawner for CommandPager {
    fn run(&self, command: &PagerCommand, diff: &mut dyn Read) -> Result<(), RenderError> {
        debug!("Spawning pager {:?} {:?}", command.program(), command.args());

        let mut child = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| RenderError::PagerSpawn {
                program: command.program().to_string(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            match io::copy(diff, &mut stdin) {
                Ok(_) => {}
                // The pager may exit before consuming the whole stream
                // (user quits early); its exit status is still checked.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                Err(source) => {
                    return Err(RenderError::PagerWrite {
                        program: command.program().to_string(),
                        source,
                    });
                }
            }
            // Flush and close the pipe so the pager sees EOF
            let _ = stdin.flush();
            drop(stdin);
        }

        let status = child.wait().map_err(|source| RenderError::PagerSpawn {
            program: command.program().to_string(),
            source,
        })?;

        if !status.success() {
            return Err(RenderError::PagerExit {
                program: command.program().to_string(),
                status,
            });
        }

        Ok(())
    }
}
