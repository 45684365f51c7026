// Base Extractor Types and Helpers
//
// - types.rs: Symbol record and options
// - extractor.rs: BaseExtractor (per-file state, node text, id generation)
// - creation_methods.rs: Symbol construction from a declaration node
// - tree_methods.rs: Subtree search helpers

pub mod creation_methods;
pub mod extractor;
pub mod tree_methods;
pub mod types;

pub use extractor::BaseExtractor;
pub use types::{Symbol, SymbolKind, SymbolOptions};
