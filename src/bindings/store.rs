// PySymbolStore - PyO3 wrapper for a project extraction
//
// Holds the ordered symbols plus the files that were skipped.

use super::PySymbol;
use crate::project::ProjectExtraction;
use crate::views::{self, View};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python-accessible result of `extract_project`
#[pyclass(name = "SymbolStore")]
pub struct PySymbolStore {
    inner: ProjectExtraction,
}

impl PySymbolStore {
    pub fn from_extraction(extraction: ProjectExtraction) -> Self {
        PySymbolStore { inner: extraction }
    }
}

#[pymethods]
impl PySymbolStore {
    /// Symbols in emission order
    #[getter]
    fn symbols(&self) -> Vec<PySymbol> {
        self.inner
            .symbols
            .iter()
            .map(|s| PySymbol::from_symbol(s.clone()))
            .collect()
    }

    /// (path, reason) for every file that could not be extracted
    #[getter]
    fn skipped(&self) -> Vec<(String, String)> {
        self.inner
            .skipped
            .iter()
            .map(|s| (s.path.to_string_lossy().into_owned(), s.reason.clone()))
            .collect()
    }

    /// Attach a summary to the symbol with `id`. Returns False if there is none.
    fn attach_summary(&mut self, id: &str, summary: String) -> bool {
        self.inner.symbols.attach_summary(id, summary)
    }

    /// Render a view ("symbols", "docs", "classes" or "index") as JSON
    #[pyo3(signature = (view = "symbols"))]
    fn to_json(&self, view: &str) -> PyResult<String> {
        let view: View = view.parse().map_err(PyValueError::new_err)?;
        views::to_json(&self.inner.symbols, view).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __len__(&self) -> usize {
        self.inner.symbols.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SymbolStore(symbols={}, skipped={})",
            self.inner.symbols.len(),
            self.inner.skipped.len()
        )
    }
}
