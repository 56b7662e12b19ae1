//! Ownership wrapper for a fetched diff body.

use std::io::{BufRead, BufReader, Cursor, Read};

/// An open, sequential source of unified diff text.
///
/// The stream is owned exclusively by whoever holds it and is released
/// when dropped. [`crate::render`] consumes it by value, so every exit
/// path — success, read failure, pager failure — releases it exactly once.
pub struct DiffStream {
    inner: Box<dyn BufRead + Send>,
}

impl DiffStream {
    /// Wrap an already-fetched diff body.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            inner: Box::new(Cursor::new(text.into())),
        }
    }

    /// Wrap an arbitrary reader (buffered internally).
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Self {
            inner: Box::new(BufReader::new(reader)),
        }
    }

    /// Consume the stream, yielding the underlying reader.
    pub(crate) fn into_reader(self) -> Box<dyn BufRead + Send> {
        self.inner
    }
}

impl std::fmt::Debug for DiffStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffStream").finish_non_exhaustive()
    }
}
