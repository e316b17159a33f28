//! Undirected graph stored as a dense, *inverted* adjacency BitVec per row.
//!
//! Bit `(i, j)` is **0** when `i == j` or the edge `{i, j}` exists and **1**
//! when the pair is unconnected.  Every row occupies `C = ⌈N/64⌉` whole
//! `u64` words, least-significant bit first; bits at columns `≥ N` are 0.

use crate::error::{MtxError, Result};
use bitvec::prelude::*;

/// Bits per storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// One adjacency row, `C · 64` bits long.
pub type Row = BitVec<u64, Lsb0>;

/// Words per row for `n` vertices.
#[inline]
pub fn chunks_for(n: usize) -> usize {
    n.div_ceil(WORD_BITS)
}

/// Mask of the logical columns held by the last word of a row.
#[inline]
fn tail_mask(n: usize) -> u64 {
    match n % WORD_BITS {
        0 => u64::MAX,
        r => (1u64 << r) - 1,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    n:         usize,
    num_edges: u64,
    /// Row-major; `adj[i][j]` is 0 ⇔ `i == j` or edge `{i, j}` installed.
    adj:       Vec<Row>,
}

impl Graph {
    /*────────── constructors ──────────*/

    /// Pre-filled matrix for `num_vertices` vertices and no edges:
    /// all ones, except the diagonal and the tail padding of each row.
    ///
    /// Fails with [`MtxError::Alloc`] when `N · C` words exceed the
    /// address space (`isize::MAX` bytes) or the allocator refuses a
    /// reservation; nothing partial is returned.  Under memory overcommit
    /// (the Linux default) a matrix that passes these checks but exceeds
    /// physical memory is still reserved successfully and the process can
    /// be OOM-killed while the rows are filled.
    pub fn allocate(num_vertices: u64) -> Result<Self> {
        let too_big = || MtxError::Alloc { vertices: num_vertices };
        let n = usize::try_from(num_vertices).map_err(|_| too_big())?;
        let chunks = chunks_for(n);
        let tail = tail_mask(n);

        let bytes = n
            .checked_mul(chunks)
            .and_then(|words| words.checked_mul(size_of::<u64>()))
            .ok_or_else(too_big)?;
        if bytes > isize::MAX as usize {
            return Err(too_big());
        }

        let mut adj: Vec<Row> = Vec::new();
        adj.try_reserve_exact(n).map_err(|_| too_big())?;

        for i in 0..n {
            let mut words: Vec<u64> = Vec::new();
            words.try_reserve_exact(chunks).map_err(|_| too_big())?;
            words.resize(chunks, u64::MAX);
            words[chunks - 1] &= tail;
            words[i / WORD_BITS] &= !(1u64 << (i % WORD_BITS));
            adj.push(Row::from_vec(words));
        }

        Ok(Self { n, num_edges: 0, adj })
    }

    /// Edgeless graph with `n` vertices.
    ///
    /// # Panics
    /// If the matrix cannot be allocated.
    pub fn with_vertices(n: usize) -> Self {
        Self::allocate(n as u64).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Build from an explicit edge list (0-based, undirected).
    /// Repeats, reversed pairs and self-loops are absorbed.
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::with_vertices(n);
        for &(u, v) in edges {
            assert!(u < n && v < n, "edge ({u}, {v}) outside 0..{n}");
            g.connect(u, v);
        }
        g
    }

    /*────────── getters ──────────*/

    #[inline] pub fn n(&self) -> usize { self.n }
    #[inline] pub fn num_vertices(&self) -> u64 { self.n as u64 }

    /// Unique undirected edges installed.
    #[inline] pub fn num_edges(&self) -> u64 { self.num_edges }

    /// `C`, the number of 64-bit words per row.
    #[inline] pub fn chunks_per_row(&self) -> usize { chunks_for(self.n) }

    /// Raw bit `(i, j)`: `true` means unconnected.
    #[inline]
    pub fn bit(&self, i: usize, j: usize) -> bool {
        self.adj[i][j]
    }

    /// `true` when `i == j` or the edge `{i, j}` exists.
    #[inline]
    pub fn is_connected(&self, i: usize, j: usize) -> bool {
        !self.bit(i, j)
    }

    /// Logical row `i` (first `N` bits).
    #[inline]
    pub fn row(&self, i: usize) -> &BitSlice<u64, Lsb0> {
        &self.adj[i][..self.n]
    }

    /// Physical row `i`, all `C` words including padding.
    #[inline]
    pub fn row_words(&self, i: usize) -> &[u64] {
        self.adj[i].as_raw_slice()
    }

    /// Number of neighbours of `v`, itself excluded.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.row(v).count_zeros() - 1
    }

    /// All edges as `(u, v)` with `u < v`.
    pub fn edge_list(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.num_edges as usize);
        for i in 0..self.n {
            edges.extend(self.row(i)[i + 1..].iter_zeros().map(|k| (i, i + 1 + k)));
        }
        edges
    }

    /// Edge count recomputed from the upper triangle of the matrix.
    pub fn count_edges_from_bits(&self) -> u64 {
        (0..self.n)
            .map(|i| self.row(i)[i + 1..].count_zeros() as u64)
            .sum()
    }

    /// Drop the graph and all row storage.
    pub fn release(self) {}

    /*────────── mutators ──────────*/

    /// Install `{r, c}` (0-based, both `< n`).  Returns `true` when the
    /// edge was new; repeats and self-loops change nothing.
    pub(crate) fn connect(&mut self, r: usize, c: usize) -> bool {
        debug_assert!(r < self.n && c < self.n);
        if !self.adj[r][c] {
            return false;
        }
        self.adj[r].set(c, false);
        self.num_edges += 1;
        if r != c && self.adj[c][r] {
            self.adj[c].set(r, false);
        }
        true
    }
}

/*────────────────── unit checks ──────────────────*/
