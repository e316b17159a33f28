// src/params.rs
//! Loader settings.
//!
//! - `max_line_len` = 1024 bytes (longest line the reader buffers; longer
//!   non-comment lines are skipped)
//! - `dump_size`    = 20 (edge of the submatrix shown by `dump_matrix`)

/// All tunable controls for loading and printing.
#[derive(Clone, Debug)]
pub struct Params {
    /// Longest accepted line in bytes, terminator excluded.  At most this
    /// many bytes of a line are buffered; the rest of a longer line is
    /// discarded.  Comment lines are exempt; any other overlong line is
    /// dropped without touching the matrix.
    pub max_line_len: usize,

    /// Rows/columns shown by the matrix dump.
    pub dump_size:    usize,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            max_line_len: 1024,
            dump_size:    20,
        }
    }
}
