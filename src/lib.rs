//! mtxbit – Matrix Market loader into an inverted bit-packed adjacency
//! matrix (0 = connected, 1 = unconnected), with optional PyO3 bindings.

/*───────── internal modules ─────────*/
pub mod error;
pub mod graph;
pub mod header;
pub mod ingest;
pub mod params;
pub mod report;

/*───────── re-exports for Rust users ─────────*/
pub use error::MtxError;
pub use graph::Graph;
pub use header::Header;
pub use ingest::{build_from_file, read_mtx, EdgeIngestor, Record};
pub use params::Params;
pub use report::{describe, dump_matrix, LoadReport};

/*======================================================================
│  Python functions (feature `python`)
└=====================================================================*/

#[cfg(feature = "python")]
mod python {
    use super::*;
    use pyo3::prelude::*;
    use pyo3::types::PyModule;
    use pyo3::wrap_pyfunction;
    use std::fs::File;
    use std::io::BufReader;

    fn load(path: &str) -> PyResult<Graph> {
        let file = File::open(path)
            .map_err(|e| pyo3::exceptions::PyIOError::new_err(e.to_string()))?;
        read_mtx(BufReader::new(file), &Params::default())
            .map(|(graph, _)| graph)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    /// Parse an MTX file, return (n, unique edges).
    #[pyfunction]
    #[pyo3(text_signature = "(graph_path)")]
    fn read_mtx_py(graph_path: String) -> PyResult<(u64, u64)> {
        let graph = load(&graph_path)?;
        Ok((graph.num_vertices(), graph.num_edges()))
    }

    /// Parse an MTX file, return the top-left matrix dump as text.
    #[pyfunction]
    #[pyo3(text_signature = "(graph_path, max_size)")]
    fn dump_matrix_py(graph_path: String, max_size: usize) -> PyResult<String> {
        let graph = load(&graph_path)?;
        let mut buf = Vec::new();
        dump_matrix(&graph, max_size, &mut buf)
            .map_err(|e| pyo3::exceptions::PyIOError::new_err(e.to_string()))?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// ***Important***: name `_native` must match `pyproject.toml -> module-name`.
    #[pymodule]
    fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(read_mtx_py, m)?)?;
        m.add_function(wrap_pyfunction!(dump_matrix_py, m)?)?;
        Ok(())
    }
}
