//! Header scanning for Matrix Market coordinate files.
//!
//! Skips `%` comments (banner included) and anything else that is not a
//! dimension triple, then yields `rows cols entries`.  The stream is left
//! positioned right after the dimension line.

use crate::error::{MtxError, Result};
use std::io::{self, BufRead, Read};
use tracing::debug;

/*────────── bounded line reader ──────────*/

/// One physical line, terminator stripped.
#[derive(Clone, Copy, Debug)]
pub struct Line<'a> {
    pub bytes:    &'a [u8],
    /// Longer than the configured limit; `bytes` then holds only the
    /// first `max_len` bytes.
    pub overlong: bool,
}

impl<'a> Line<'a> {
    #[inline]
    pub fn is_comment(&self) -> bool {
        self.bytes.first() == Some(&b'%')
    }

    /// Empty, or starting with `\r` / NUL.
    #[inline]
    pub fn is_blank(&self) -> bool {
        matches!(self.bytes.first(), None | Some(b'\r') | Some(b'\0'))
    }

    /// Whitespace-separated tokens; `None` for non-UTF-8 lines.
    pub fn tokens(&self) -> Option<std::str::SplitAsciiWhitespace<'a>> {
        std::str::from_utf8(self.bytes)
            .ok()
            .map(str::split_ascii_whitespace)
    }
}

/// Line reader over any [`BufRead`] that holds at most `max_len + 1` bytes
/// of a line.  Longer lines come back truncated to `max_len` and flagged;
/// their remainder is discarded unread.
pub struct LineReader<R> {
    inner:   R,
    buf:     Vec<u8>,
    max_len: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, max_len: usize) -> Self {
        Self { inner, buf: Vec::with_capacity(128), max_len }
    }

    /// Next line, or `None` at end of stream.
    pub fn next_line(&mut self) -> io::Result<Option<Line<'_>>> {
        self.buf.clear();
        let limit = self.max_len as u64 + 1;
        if (&mut self.inner).take(limit).read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        let mut overlong = false;
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        } else if self.buf.len() > self.max_len {
            overlong = true;
            self.inner.skip_until(b'\n')?;
            self.buf.truncate(self.max_len);
        }
        Ok(Some(Line { bytes: &self.buf, overlong }))
    }
}

/*────────── dimension triple ──────────*/

/// `rows cols entries` from the first dimension line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub rows:             u64,
    pub cols:             u64,
    pub declared_entries: u64,
}

impl Header {
    /// N = max(rows, cols); the graph is always square.
    #[inline]
    pub fn num_vertices(&self) -> u64 {
        self.rows.max(self.cols)
    }
}

fn parse_triple(line: &Line<'_>) -> Option<Header> {
    let mut it = line.tokens()?;
    let rows = it.next()?.parse().ok()?;
    let cols = it.next()?.parse().ok()?;
    let declared_entries = it.next()?.parse().ok()?;
    Some(Header { rows, cols, declared_entries })
}

/// Advance `lines` past comments and junk up to and including the first
/// valid dimension line.
///
/// Fails with [`MtxError::BadHeader`] when the stream ends first.
pub fn scan_header<R: BufRead>(lines: &mut LineReader<R>) -> Result<Header> {
    let mut skipped = 0usize;
    while let Some(line) = lines.next_line()? {
        if line.is_comment() {
            continue;
        }
        if line.overlong {
            debug!(len = line.bytes.len(), "overlong line before header, skipping");
            skipped += 1;
            continue;
        }
        if let Some(h) = parse_triple(&line) {
            if skipped > 0 {
                debug!(skipped, "non-comment lines ignored before dimension line");
            }
            return Ok(h);
        }
        skipped += 1;
    }
    Err(MtxError::BadHeader)
}

/*────────────────── tests ──────────────────*/
