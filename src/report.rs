//! Human-readable output: load summary, graph info and matrix dump.
//!
//! Nothing here touches the matrix; every function reads a finished
//! [`Graph`] or [`LoadReport`] and writes to any [`Write`] sink.

use crate::{graph::Graph, header::Header};
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

/// What happened while loading one file.
#[derive(Clone, Debug, Default)]
pub struct LoadReport {
    /// Source path, when loaded from disk.
    pub path:           Option<String>,
    pub header:         Option<Header>,
    pub num_vertices:   u64,
    /// Parsed in-bounds records, duplicates and self-loops included.
    pub edges_read:     u64,
    /// Unique undirected edges in the graph.
    pub num_edges:      u64,
    pub chunks_per_row: usize,
    /// Records rejected for coordinates outside `1..=N`.
    pub out_of_bounds:  u64,
    /// The first few of those, 1-based as written in the file.
    pub out_of_bounds_samples: Vec<(u64, u64)>,
    /// Lines after the header that were not a coordinate record.
    pub skipped_lines:  u64,
    /// Read error that cut ingestion short.
    pub io_error:       Option<String>,
    pub elapsed:        Duration,
}

impl LoadReport {
    /// Third number of the dimension line (0 without a header).
    #[inline]
    pub fn declared_entries(&self) -> u64 {
        self.header.map_or(0, |h| h.declared_entries)
    }

    /// `edges_read` matches the declared entry count.
    #[inline]
    pub fn entries_match(&self) -> bool {
        self.edges_read == self.declared_entries()
    }

    #[inline]
    pub fn truncated(&self) -> bool {
        self.io_error.is_some()
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.num_vertices;
        let us = self.elapsed.as_micros();
        if let Some(path) = &self.path {
            writeln!(f, "File: {path}")?;
        }
        writeln!(f, "Vertices: {n}")?;
        writeln!(f, "Edges in file: {} (expected {})", self.edges_read, self.declared_entries())?;
        writeln!(f, "Unique edges in graph: {}", self.num_edges)?;
        writeln!(
            f,
            "Adjacency matrix created: {n}x{n} (using {} bitset chunks per row)",
            self.chunks_per_row
        )?;
        write!(f, "File reading time: {us} microseconds ({:.3} milliseconds)", us as f64 / 1000.0)
    }
}

/// Vertex and edge counts.
pub fn describe<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Graph Information ===")?;
    writeln!(out, "Number of vertices: {}", graph.num_vertices())?;
    writeln!(out, "Number of edges: {}", graph.num_edges())?;
    writeln!(out)
}

/// Top-left `min(N, max_size)` square of the raw matrix:
/// `1` = unconnected, `0` = connected or diagonal.
pub fn dump_matrix<W: Write>(graph: &Graph, max_size: usize, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== Adjacency Matrix ===")?;

    let size = graph.n().min(max_size);
    if graph.n() > max_size {
        writeln!(out, "(Showing first {max_size}x{max_size} submatrix)")?;
        writeln!(out)?;
    }

    write!(out, "    ")?;
    for j in 0..size {
        write!(out, "{j:3} ")?;
    }
    writeln!(out)?;

    for i in 0..size {
        write!(out, "{i:3} ")?;
        for bit in graph.row(i)[..size].iter() {
            write!(out, "{:3} ", u8::from(*bit))?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/*────────────────── tests ──────────────────*/
#[cfg(test)]
mod tests {
    use super::*;

    fn render(graph: &Graph, max: usize) -> String {
        let mut buf = Vec::new();
        dump_matrix(graph, max, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn dump_small_path() {
        let g = Graph::from_edge_list(3, &[(0, 1)]);
        let text = render(&g, 20);
        let expected = "=== Adjacency Matrix ===\n\
                        \x20     0   1   2 \n\
                        \x20 0   0   0   1 \n\
                        \x20 1   0   0   1 \n\
                        \x20 2   1   1   0 \n\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn dump_truncates_large_graph() {
        let g = Graph::with_vertices(5);
        let text = render(&g, 2);
        assert!(text.contains("(Showing first 2x2 submatrix)"));
        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("  ")).collect();
        // column header + two rows
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], "  1   1   0 ");
    }

    #[test]
    fn describe_counts() {
        let g = Graph::from_edge_list(4, &[(0, 1), (1, 2)]);
        let mut buf = Vec::new();
        describe(&g, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("=== Graph Information ==="));
        assert!(text.contains("Number of vertices: 4"));
        assert!(text.contains("Number of edges: 2"));
    }

    #[test]
    fn summary_lines() {
        let r = LoadReport {
            path: Some("g.mtx".into()),
            header: Some(Header { rows: 3, cols: 3, declared_entries: 4 }),
            num_vertices: 3,
            edges_read: 4,
            num_edges: 2,
            chunks_per_row: 1,
            elapsed: Duration::from_micros(1500),
            ..Default::default()
        };
        let text = r.to_string();
        assert!(text.starts_with("File: g.mtx\n"));
        assert!(text.contains("Edges in file: 4 (expected 4)"));
        assert!(text.contains("Unique edges in graph: 2"));
        assert!(text.contains("3x3 (using 1 bitset chunks per row)"));
        assert!(text.ends_with("1500 microseconds (1.500 milliseconds)"));
        assert!(r.entries_match());
        assert!(!r.truncated());
    }
}
