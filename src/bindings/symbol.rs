// PySymbol - PyO3 wrapper for Symbol
//
// A detached copy: setting `summary` here does not reach the store it came
// from. Use `SymbolStore.attach_summary` for that.

use crate::extractors::Symbol;
use pyo3::prelude::*;

/// Python-accessible Symbol wrapper
///
/// A class or method declaration. All fields except `summary` are read-only.
#[pyclass(name = "Symbol")]
pub struct PySymbol {
    inner: Symbol,
}

impl PySymbol {
    pub fn from_symbol(symbol: Symbol) -> Self {
        PySymbol { inner: symbol }
    }
}

#[pymethods]
impl PySymbol {
    #[getter]
    fn id(&self) -> String {
        self.inner.id.clone()
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    #[getter]
    fn kind(&self) -> String {
        self.inner.kind.to_string()
    }

    #[getter]
    fn file_path(&self) -> String {
        self.inner.file_path.clone()
    }

    #[getter]
    fn source_text(&self) -> String {
        self.inner.source_text.clone()
    }

    #[getter]
    fn start_line(&self) -> u32 {
        self.inner.start_line
    }

    #[getter]
    fn end_line(&self) -> u32 {
        self.inner.end_line
    }

    #[getter]
    fn indent_column(&self) -> u32 {
        self.inner.indent_column
    }

    #[getter]
    fn parent_class(&self) -> Option<String> {
        self.inner.parent_class.clone()
    }

    #[getter]
    fn extends(&self) -> Vec<String> {
        self.inner.extends.clone()
    }

    #[getter]
    fn implements(&self) -> Vec<String> {
        self.inner.implements.clone()
    }

    #[getter]
    fn methods(&self) -> Vec<String> {
        self.inner.methods.clone()
    }

    #[getter]
    fn calls(&self) -> Vec<String> {
        self.inner.calls.clone()
    }

    #[getter]
    fn summary(&self) -> Option<String> {
        self.inner.summary.clone()
    }

    #[setter]
    fn set_summary(&mut self, summary: Option<String>) {
        self.inner.summary = summary;
    }

    /// The record with the field names the collaborators consume, as JSON
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "Symbol(name='{}', kind='{}', file_path='{}', line={})",
            self.inner.name, self.inner.kind, self.inner.file_path, self.inner.start_line
        )
    }
}
