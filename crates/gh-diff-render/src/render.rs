//! Rendering-mode selection and execution.
//!
//! The decision of *how* to render (raw copy, pager, or color scan) is a
//! pure function over the resolved color mode, terminal-ness, and pager
//! configuration. Execution is separate and owns the diff stream for its
//! full lifetime.

use crate::color::{write_colored_line, ColorMode};
use crate::error::RenderError;
use crate::line::classify;
use crate::pager::{PagerCommand, PagerSpawner};
use crate::stream::DiffStream;
use log::debug;
use std::io::{self, Write};

/// How a diff stream is delivered to the output sink.
///
/// Exactly one mode applies per invocation; the variants are terminal
/// with no fallthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Byte-for-byte copy, no inspection
    RawCopy,
    /// Hand the raw stream to an external pager process
    Pager(PagerCommand),
    /// Line-by-line classification and ANSI coloring
    ColorScan,
}

/// Decide how to render, evaluated in order:
///
/// 1. Color resolves to `Never` → [`RenderMode::RawCopy`].
/// 2. Stdout is a terminal and a non-empty pager is configured →
///    [`RenderMode::Pager`] (the command string is parsed here, so a
///    malformed pager surfaces before any stream I/O).
/// 3. Otherwise → [`RenderMode::ColorScan`].
///
/// An empty or whitespace-only pager value counts as unconfigured.
pub fn select_mode(
    color: ColorMode,
    stdout_is_tty: bool,
    pager: Option<&str>,
) -> Result<RenderMode, RenderError> {
    if color.resolve(stdout_is_tty) == ColorMode::Never {
        return Ok(RenderMode::RawCopy);
    }

    if stdout_is_tty {
        if let Some(command) = pager.map(str::trim).filter(|p| !p.is_empty()) {
            return Ok(RenderMode::Pager(PagerCommand::parse(command)?));
        }
    }

    Ok(RenderMode::ColorScan)
}

/// Execute the chosen mode over the diff stream.
///
/// Takes the stream by value: it is released exactly once when this
/// function returns, on success and on every error path.
pub fn render(
    stream: DiffStream,
    out: &mut dyn Write,
    mode: RenderMode,
    pager: &dyn PagerSpawner,
) -> Result<(), RenderError> {
    debug!("Rendering diff with mode {:?}", mode_name(&mode));

    let mut reader = stream.into_reader();
    match mode {
        RenderMode::RawCopy => {
            io::copy(&mut reader, out).map_err(RenderError::Copy)?;
            Ok(())
        }
        RenderMode::Pager(command) => pager.run(&command, &mut reader),
        RenderMode::ColorScan => color_scan(&mut reader, out),
    }
}

fn mode_name(mode: &RenderMode) -> &'static str {
    match mode {
        RenderMode::RawCopy => "raw-copy",
        RenderMode::Pager(_) => "pager",
        RenderMode::ColorScan => "color-scan",
    }
}

/// Read the stream line by line, classify each line, and write it colored.
fn color_scan(
    reader: &mut dyn io::BufRead,
    out: &mut dyn Write,
) -> Result<(), RenderError> {
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader.read_line(&mut line).map_err(RenderError::Stream)?;
        if n == 0 {
            break;
        }

        // Strip the trailing newline; the writer adds its own
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        write_colored_line(out, classify(&line), &line).map_err(RenderError::Stream)?;
    }
    Ok(())
}
