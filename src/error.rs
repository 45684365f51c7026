//! Error taxonomy for extraction
//!
//! Whole-run failures (`RootNotFound`, `RootNotDirectory`, `Pattern`) abort a
//! project walk. Per-file failures (`Read`, `Decode`, `NonUtf8Path`, `NoTree`, `Walk`) only
//! skip the offending file; the project walk records them and moves on.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("project root '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("project root '{}' is not a directory", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },

    #[error("path '{}' is not valid UTF-8", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("parser produced no syntax tree for '{path}'")]
    NoTree { path: String },

    #[error("failed to load tree-sitter grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("unsupported language: '{0}'. Supported languages: java")]
    UnsupportedLanguage(String),

    #[error("failed to scan '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid exclusion pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("source has syntax errors on line(s) {lines:?}")]
    SyntaxErrors { lines: Vec<u32> },
}

impl ExtractError {
    /// True for errors that should abort the whole project walk rather than
    /// skip a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExtractError::RootNotFound(_)
                | ExtractError::RootNotDirectory(_)
                | ExtractError::Pattern { .. }
                | ExtractError::Grammar(_)
                | ExtractError::UnsupportedLanguage(_)
        )
    }
}
