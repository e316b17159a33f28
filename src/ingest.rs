//! Edge ingestion: one streaming pass from MTX text to a finished [`Graph`].
//!
//! The header is scanned first (see [`crate::header`]), the matrix is
//! allocated and pre-filled, then every remaining line is read as a 1-based
//! `r c [w]` record.  Bad records are skipped, never fatal.

use crate::{
    error::{MtxError, Result},
    graph::Graph,
    header::{scan_header, Line, LineReader},
    params::Params,
    report::LoadReport,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Outcome of one line after the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Record {
    /// New undirected edge installed.
    Installed,
    /// Already present, reversed repeat or self-loop.
    Duplicate,
    /// 1-based coordinates outside `1..=N`.
    OutOfBounds(u64, u64),
    /// Overlong, non-UTF-8 or fewer than two integers.
    Unparseable,
    Blank,
}

/// Out-of-bounds coordinates kept in [`LoadReport::out_of_bounds_samples`].
pub const OUT_OF_BOUNDS_SAMPLES: usize = 8;

/// First two tokens as unsigned integers; the rest (a weight) is ignored.
///
/// Each of the two tokens must be a whole decimal integer: `1 2.0` or
/// `1 2x` is unparseable and skipped, where a `%lu %lu` scanf would stop at
/// the first non-digit and accept `(1, 2)`.
fn parse_pair(line: &Line<'_>) -> Option<(u64, u64)> {
    let mut it = line.tokens()?;
    let r = it.next()?.parse().ok()?;
    let c = it.next()?.parse().ok()?;
    Some((r, c))
}

/// Writer side of the pipeline: owns the graph until ingestion finishes.
#[derive(Debug)]
pub struct EdgeIngestor {
    graph:         Graph,
    edges_read:    u64,
    skipped_lines: u64,
    out_of_bounds: u64,
    oob_samples:   Vec<(u64, u64)>,
}

impl EdgeIngestor {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            edges_read:    0,
            skipped_lines: 0,
            out_of_bounds: 0,
            oob_samples:   Vec::new(),
        }
    }

    #[inline] pub fn graph(&self) -> &Graph { &self.graph }
    #[inline] pub fn edges_read(&self) -> u64 { self.edges_read }

    /// Classify and apply one raw line.
    pub fn ingest_line(&mut self, line: &Line<'_>) -> Record {
        if line.is_blank() {
            return Record::Blank;
        }
        if line.overlong {
            debug!(len = line.bytes.len(), "overlong edge line, skipping");
            self.skipped_lines += 1;
            return Record::Unparseable;
        }
        match parse_pair(line) {
            Some((r, c)) => self.ingest_edge(r, c),
            None => {
                self.skipped_lines += 1;
                Record::Unparseable
            }
        }
    }

    /// Apply one record given in 1-based file coordinates.
    pub fn ingest_edge(&mut self, row: u64, col: u64) -> Record {
        let n = self.graph.num_vertices();
        match (row.checked_sub(1), col.checked_sub(1)) {
            (Some(r), Some(c)) if r < n && c < n => {
                self.edges_read += 1;
                if self.graph.connect(r as usize, c as usize) {
                    Record::Installed
                } else {
                    Record::Duplicate
                }
            }
            _ => {
                warn!("edge ({row}, {col}) out of bounds, skipping");
                self.out_of_bounds += 1;
                if self.oob_samples.len() < OUT_OF_BOUNDS_SAMPLES {
                    self.oob_samples.push((row, col));
                }
                Record::OutOfBounds(row, col)
            }
        }
    }

    /// Freeze the graph and hand back the counters.
    pub fn finish(self) -> (Graph, LoadReport) {
        let report = LoadReport {
            num_vertices:   self.graph.num_vertices(),
            edges_read:     self.edges_read,
            num_edges:      self.graph.num_edges(),
            chunks_per_row: self.graph.chunks_per_row(),
            out_of_bounds:  self.out_of_bounds,
            out_of_bounds_samples: self.oob_samples,
            skipped_lines:  self.skipped_lines,
            ..Default::default()
        };
        (self.graph, report)
    }
}

/// Build a graph from any buffered MTX stream.
///
/// A read error after the header ends ingestion early; the edges installed
/// so far are kept and the error text lands in [`LoadReport::io_error`].
pub fn read_mtx<R: BufRead>(reader: R, p: &Params) -> Result<(Graph, LoadReport)> {
    let start = Instant::now();
    let mut lines = LineReader::new(reader, p.max_line_len);

    let header = scan_header(&mut lines)?;
    let graph = Graph::allocate(header.num_vertices())?;
    let mut ingestor = EdgeIngestor::new(graph);

    let io_error = loop {
        match lines.next_line() {
            Ok(Some(line)) => {
                ingestor.ingest_line(&line);
            }
            Ok(None) => break None,
            Err(e) => {
                warn!(error = %e, edges_read = ingestor.edges_read(), "read error, keeping edges ingested so far");
                break Some(e.to_string());
            }
        }
    };

    let (graph, mut report) = ingestor.finish();
    report.header = Some(header);
    report.io_error = io_error;
    report.elapsed = start.elapsed();

    if !report.entries_match() {
        warn!(
            edges_read = report.edges_read,
            declared = header.declared_entries,
            "edge count differs from header"
        );
    }
    info!(
        vertices = report.num_vertices,
        edges_read = report.edges_read,
        unique_edges = report.num_edges,
        chunks_per_row = report.chunks_per_row,
        "adjacency matrix built"
    );
    Ok((graph, report))
}

/// Open `path`, build the graph and print the load summary to stdout.
pub fn build_from_file<P: AsRef<Path>>(path: P, p: &Params) -> Result<(Graph, LoadReport)> {
    let path = path.as_ref();
    let start = Instant::now();

    let file = File::open(path).map_err(|source| {
        error!(path = %path.display(), "cannot open file");
        MtxError::OpenFailed { path: path.to_path_buf(), source }
    })?;

    let (graph, mut report) = read_mtx(BufReader::new(file), p).inspect_err(|e| {
        error!(path = %path.display(), "{e}");
    })?;
    report.path = Some(path.display().to_string());
    report.elapsed = start.elapsed();

    println!("{report}");
    Ok((graph, report))
}

/*────────────────── tests ──────────────────*/
