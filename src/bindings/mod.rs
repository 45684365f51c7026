// PyO3 Bindings Module
//
// Python surface for the downstream collaborators (documentation writer,
// diagram generator, vector indexer). Wraps Symbol and the project result.

mod api;
mod store;
mod symbol;

use crate::error::ExtractError;
use pyo3::exceptions::{PyFileNotFoundError, PyValueError};
use pyo3::PyErr;

// Re-export for lib.rs
pub use api::{check_syntax, detect_language, extract_project, extract_source, source_hash};
pub use store::PySymbolStore;
pub use symbol::PySymbol;

impl From<ExtractError> for PyErr {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::RootNotFound(_) => PyFileNotFoundError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}
