//! Matrix invariants over randomly generated MTX files.

use mtxbit::{read_mtx, Graph, Params};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt::Write;
use std::io::Cursor;

/// Random 1-based edge records for `n` vertices.
fn random_edges<R: Rng>(n: u64, density: f64, rng: &mut R) -> Vec<(u64, u64)> {
    let mut edges = Vec::new();
    for i in 1..=n {
        for j in i + 1..=n {
            if rng.gen_bool(density) {
                edges.push((i, j));
            }
        }
    }
    edges
}

fn mtx_text(rows: u64, cols: u64, edges: &[(u64, u64)]) -> String {
    let mut s = String::from("%%MatrixMarket matrix coordinate pattern symmetric\n");
    writeln!(s, "{rows} {cols} {}", edges.len()).unwrap();
    for (r, c) in edges {
        writeln!(s, "{r} {c}").unwrap();
    }
    s
}

fn load(text: &str) -> Graph {
    read_mtx(Cursor::new(text.as_bytes()), &Params::default()).unwrap().0
}

fn check_invariants(g: &Graph) {
    let n = g.n();
    let c = g.chunks_per_row();
    for i in 0..n {
        assert!(!g.bit(i, i), "diagonal ({i}, {i})");
        for j in 0..n {
            assert_eq!(g.bit(i, j), g.bit(j, i), "symmetry ({i}, {j})");
        }
        let words = g.row_words(i);
        assert_eq!(words.len(), c);
        let used = n - (c - 1) * 64;
        if used < 64 {
            assert_eq!(words[c - 1] >> used, 0, "padding row {i}");
        }
    }
    assert_eq!(g.num_edges(), g.count_edges_from_bits());
}

#[test]
fn invariants_hold_for_random_graphs() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for n in [1u64, 2, 5, 63, 64, 65, 129] {
        let edges = random_edges(n, 0.3, &mut rng);
        let g = load(&mtx_text(n, n, &edges));
        assert_eq!(g.num_edges(), edges.len() as u64);
        check_invariants(&g);
        for &(r, c) in &edges {
            assert!(g.is_connected(r as usize - 1, c as usize - 1));
        }
    }
}

#[test]
fn duplicates_and_reverses_are_idempotent() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for n in [3u64, 40, 70] {
        let edges = random_edges(n, 0.2, &mut rng);
        let clean = load(&mtx_text(n, n, &edges));

        let mut noisy = Vec::new();
        for &(r, c) in &edges {
            for _ in 0..rng.gen_range(1..4) {
                noisy.push(if rng.gen_bool(0.5) { (r, c) } else { (c, r) });
            }
        }
        for _ in 0..n / 2 {
            let v = rng.gen_range(1..=n);
            noisy.push((v, v));
        }
        noisy.shuffle(&mut rng);

        let messy = load(&mtx_text(n, n, &noisy));
        assert_eq!(clean, messy);
        assert_eq!(clean.num_edges(), messy.num_edges());
        check_invariants(&messy);
    }
}

#[test]
fn adding_records_only_clears_bits() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let n = 30u64;
    let mut edges = random_edges(n, 0.25, &mut rng);
    edges.shuffle(&mut rng);

    let mut prev = load(&mtx_text(n, n, &[]));
    for k in 1..=edges.len() {
        let next = load(&mtx_text(n, n, &edges[..k]));
        assert!(next.num_edges() >= prev.num_edges());
        for i in 0..n as usize {
            for j in 0..n as usize {
                assert!(!(next.bit(i, j) && !prev.bit(i, j)), "bit ({i}, {j}) went 0 -> 1");
            }
        }
        prev = next;
    }
}

#[test]
fn vertex_count_is_max_of_dimensions() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..20 {
        let rows = rng.gen_range(0..100u64);
        let cols = rng.gen_range(0..100u64);
        let g = load(&mtx_text(rows, cols, &[]));
        assert_eq!(g.num_vertices(), rows.max(cols));
        check_invariants(&g);
    }
}
