//! # gh-diff-render
//!
//! The terminal rendering pipeline for pull request diffs: classify each
//! line of a unified diff, colorize it with ANSI escapes, and write it to
//! the output sink — or hand the whole stream to an external pager, or
//! copy it through untouched when color is off.
//!
//! ## Design Principles
//!
//! This crate is **instrumented** — it receives an already-fetched diff
//! stream plus resolved settings and performs only local I/O. This enables:
//!
//! - Testability without mocking HTTP clients
//! - Swapping the pager subprocess for a fake via the [`PagerSpawner`] trait
//! - A pure, unit-testable rendering-mode decision ([`select_mode`])
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gh_diff_render::{select_mode, render, ColorMode, CommandPager, DiffStream};
//!
//! # fn example(diff_text: String) -> Result<(), gh_diff_render::RenderError> {
//! let mode = select_mode(ColorMode::Auto, /* stdout_is_tty */ true, Some("less -R"))?;
//! let stream = DiffStream::from_text(diff_text);
//! render(stream, &mut std::io::stdout().lock(), mode, &CommandPager)?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod error;
pub mod line;
pub mod pager;
pub mod render;
pub mod stream;

pub use color::{ColorMode, InvalidColorMode};
pub use error::RenderError;
pub use line::{classify, DiffLineKind};
pub use pager::{CommandPager, PagerCommand, PagerSpawner};
pub use render::{render, select_mode, RenderMode};
pub use stream::DiffStream;
