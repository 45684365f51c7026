//! Language Extractors Module
//!
//! Tree-sitter based structural extraction. The Java extractor walks one
//! file's syntax tree and emits class and method symbols with their
//! inheritance and call relationships.
//!
//! # Architecture
//!
//! - `base` - Symbol record, per-file extractor state and tree helpers
//! - `manager` - ExtractorManager public API (parse + extract, syntax checks)
//! - `java` - Java extractor

pub mod base;
pub mod java;
pub mod manager;

// Re-export the public API
pub use base::{Symbol, SymbolKind};
pub use manager::{ExtractorManager, SyntaxReport};
