//! Fatal load errors.
//!
//! Per-record problems (out-of-bounds coordinates, unparseable lines, a read
//! error after the header) are not errors: they end up in [`LoadReport`]
//! and the graph is still handed back.
//!
//! [`LoadReport`]: crate::report::LoadReport

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MtxError {
    /// The input file could not be opened.
    #[error("cannot open file {}: {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// End of stream reached before a `rows cols entries` line.
    #[error("could not read dimensions from file")]
    BadHeader,

    /// Read failure while still looking for the dimension line.
    #[error("I/O error while reading header: {0}")]
    Io(#[from] io::Error),

    /// The matrix implied by the header cannot be allocated.
    #[error("cannot allocate a {vertices}x{vertices} adjacency matrix")]
    Alloc { vertices: u64 },
}

pub type Result<T> = std::result::Result<T, MtxError>;
