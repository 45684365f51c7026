// BaseExtractor implementation
//
// Per-file state shared by the Java extractor: the file's path and text, and
// the ids already handed out in this file.

use std::collections::HashMap;
use tree_sitter::Node;

/// Base implementation for the Java extractor
pub struct BaseExtractor {
    pub file_path: String,
    pub content: String,
    id_counts: HashMap<String, usize>,
}

impl BaseExtractor {
    /// `file_path` is stored as given; it is what downstream writers open.
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            file_path,
            content,
            id_counts: HashMap::new(),
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Generate the id for a symbol
    ///
    /// `{file_path}::{qualified}`; a repeat within the same file (overloads)
    /// gets `#2`, `#3`, ... so ids stay unique and stable across runs.
    pub fn generate_id(&mut self, qualified: &str) -> String {
        let base = format!("{}::{}", self.file_path, qualified);
        let count = self.id_counts.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{}#{}", base, count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_path_qualified() {
        let mut base = BaseExtractor::new("src/A.java".to_string(), String::new());
        assert_eq!(base.generate_id("A"), "src/A.java::A");
        assert_eq!(base.generate_id("A.run"), "src/A.java::A.run");
    }

    #[test]
    fn test_generate_id_disambiguates_repeats() {
        let mut base = BaseExtractor::new("A.java".to_string(), String::new());
        assert_eq!(base.generate_id("A.add"), "A.java::A.add");
        assert_eq!(base.generate_id("A.add"), "A.java::A.add#2");
        assert_eq!(base.generate_id("A.add"), "A.java::A.add#3");
        assert_eq!(base.generate_id("A.sub"), "A.java::A.sub");
    }
}
