// Comprehender Core - tree-sitter structural extraction for Java codebases
//
// Turns a directory of Java sources into an ordered set of class and method
// symbols with their relationships (extends, implements, methods, calls).
// The library is used from the `comprehend` binary and, with the `python`
// feature, as a PyO3 extension module.

pub mod docs;
pub mod error;
pub mod extractors;
pub mod language;
pub mod logging;
pub mod project;
pub mod store;
pub mod summaries;
pub mod utils;
pub mod views;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use error::{ExtractError, Result};
pub use extractors::{ExtractorManager, Symbol, SymbolKind, SyntaxReport};
pub use project::{ProjectConfig, ProjectExtraction, ProjectExtractor, SkippedFile};
pub use store::SymbolStore;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Comprehender Core Python module
///
/// Provides Java class and method extraction for the documentation,
/// diagram and indexing stages.
#[cfg(feature = "python")]
#[pymodule]
fn comprehender_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::extract_project, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::extract_source, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::check_syntax, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::detect_language, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::source_hash, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PySymbol>()?;
    m.add_class::<bindings::PySymbolStore>()?;

    Ok(())
}
