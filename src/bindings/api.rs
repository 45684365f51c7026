// API Functions - PyO3-exposed functions for Python
//
// These functions provide the public API for the extraction stage.

use super::{PySymbol, PySymbolStore};
use crate::extractors::ExtractorManager;
use crate::language::detect_language_from_extension;
use crate::project::{ProjectConfig, ProjectExtractor};
use crate::views;
use pyo3::prelude::*;
use std::path::Path;

/// Extract every Java file under a project root
///
/// Releases the GIL for the whole walk; files are extracted on the rayon
/// pool unless `parallel` is False. Output order is the same either way.
///
/// Args:
///     root (str): Project root directory
///     parallel (bool): Extract files concurrently (default True)
///
/// Returns:
///     SymbolStore: Ordered symbols plus any skipped files
///
/// Raises:
///     FileNotFoundError: If the root does not exist
///     ValueError: If the root is not a directory or the configuration is invalid
#[pyfunction]
#[pyo3(signature = (root, parallel = true))]
pub fn extract_project(py: Python<'_>, root: String, parallel: bool) -> PyResult<PySymbolStore> {
    let config = ProjectConfig {
        parallel,
        ..ProjectConfig::default()
    };

    let extraction = py.detach(move || ProjectExtractor::with_config(root, config).extract())?;
    Ok(PySymbolStore::from_extraction(extraction))
}

/// Extract class and method symbols from one source text
///
/// Args:
///     content (str): Java source code
///     file_path (str): Path stored on every symbol and used in ids
///
/// Returns:
///     list[Symbol]: Symbols in emission order
#[pyfunction]
#[pyo3(signature = (content, file_path))]
pub fn extract_source(content: &str, file_path: &str) -> PyResult<Vec<PySymbol>> {
    let symbols = ExtractorManager::new().extract_symbols(file_path, content)?;
    Ok(symbols.into_iter().map(PySymbol::from_symbol).collect())
}

/// Re-parse source text and report syntax errors
///
/// Returns:
///     tuple[bool, list[int]]: (has_errors, 1-based error lines)
#[pyfunction]
pub fn check_syntax(content: &str) -> PyResult<(bool, Vec<u32>)> {
    let report = ExtractorManager::new().check_syntax(content)?;
    Ok((report.has_errors, report.error_lines))
}

/// Detect language from a file path's extension
///
/// Returns:
///     str | None: "java", or None for anything else
#[pyfunction]
#[pyo3(signature = (file_path))]
pub fn detect_language(file_path: &str) -> Option<String> {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    detect_language_from_extension(extension).map(|lang| lang.to_string())
}

/// blake3 hex digest of a symbol's source text
///
/// Matches `source_hash` in index records, so a persisted index can skip
/// unchanged chunks.
#[pyfunction]
pub fn source_hash(code: &str) -> String {
    views::source_hash(code)
}
