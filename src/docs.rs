//! Support for writing documented copies of source files
//!
//! Generated comments are cleaned, indented to their symbol's column and
//! inserted above the symbol's first line. The result is re-parsed so a
//! writer never emits a file with syntax errors. Nothing here touches disk.

use crate::error::{ExtractError, Result};
use crate::extractors::ExtractorManager;
use crate::views::DocTarget;
use regex::Regex;
use std::cmp::Reverse;
use std::sync::LazyLock;

/// Markdown code fences, with or without a language tag
static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```(?:java)?").unwrap());

/// A line holding nothing but a `java` language tag
static LANGUAGE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*java[ \t]*(?:\n|$)").unwrap());

/// A comment to insert before a 1-based line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    pub line: u32,
    pub indent: u32,
    pub text: String,
}

impl DocBlock {
    pub fn for_target(target: &DocTarget, text: impl Into<String>) -> Self {
        Self {
            line: target.start_line,
            indent: target.indent,
            text: text.into(),
        }
    }
}

/// Strip Markdown code fences and bare `java` language-tag lines from model output
pub fn sanitize_generated_comment(raw: &str) -> String {
    let without_fences = CODE_FENCE_RE.replace_all(raw, "");
    LANGUAGE_TAG_RE
        .replace_all(&without_fences, "")
        .trim()
        .to_string()
}

/// Re-indent a comment: every line trimmed, then padded with `indent` spaces
pub fn format_comment_block(comment: &str, indent: u32) -> Vec<String> {
    let padding = " ".repeat(indent as usize);
    comment
        .trim()
        .split('\n')
        .map(|line| format!("{}{}\n", padding, line.trim()))
        .collect()
}

/// Insert each block before its line
///
/// Blocks are applied from the highest line down so earlier insertions never
/// shift later targets. A block past the end of the file is appended.
pub fn insert_doc_blocks(source: &str, blocks: &[DocBlock]) -> String {
    let mut lines: Vec<String> = source.split_inclusive('\n').map(str::to_string).collect();

    let mut ordered: Vec<&DocBlock> = blocks.iter().collect();
    ordered.sort_by_key(|block| Reverse(block.line));

    for block in ordered {
        let index = (block.line.saturating_sub(1) as usize).min(lines.len());
        if index == lines.len() {
            if let Some(last) = lines.last_mut() {
                if !last.ends_with('\n') {
                    last.push('\n');
                }
            }
        }
        let formatted = format_comment_block(&block.text, block.indent);
        lines.splice(index..index, formatted);
    }

    lines.concat()
}

/// Insert the blocks and verify the result still parses cleanly
pub fn render_commented_source(
    manager: &ExtractorManager,
    source: &str,
    blocks: &[DocBlock],
) -> Result<String> {
    let rendered = insert_doc_blocks(source, blocks);
    let report = manager.check_syntax(&rendered)?;
    if report.has_errors {
        return Err(ExtractError::SyntaxErrors {
            lines: report.error_lines,
        });
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "public class Car {\n    public void drive() {\n        go();\n    }\n}\n";

    #[test]
    fn test_sanitize_strips_fences_and_language_tag() {
        let raw = "```java\n/**\n * Drives the car.\n */\n```";
        assert_eq!(sanitize_generated_comment(raw), "/**\n * Drives the car.\n */");

        let tagged = "java\n/** Stops. */";
        assert_eq!(sanitize_generated_comment(tagged), "/** Stops. */");
    }

    #[test]
    fn test_sanitize_keeps_java_inside_text() {
        let raw = "/** Wraps java.util.List. */";
        assert_eq!(sanitize_generated_comment(raw), raw);
    }

    #[test]
    fn test_format_comment_block_indents_every_line() {
        let block = format_comment_block("/**\n   * Drives.\n */\n", 4);
        assert_eq!(block, vec!["    /**\n", "    * Drives.\n", "    */\n"]);
    }

    #[test]
    fn test_insert_in_reverse_line_order() {
        let blocks = vec![
            DocBlock {
                line: 1,
                indent: 0,
                text: "/** Car. */".to_string(),
            },
            DocBlock {
                line: 2,
                indent: 4,
                text: "/** Drive. */".to_string(),
            },
        ];
        let rendered = insert_doc_blocks(SOURCE, &blocks);
        assert_eq!(
            rendered,
            "/** Car. */\npublic class Car {\n    /** Drive. */\n    public void drive() {\n        go();\n    }\n}\n"
        );
    }

    #[test]
    fn test_block_past_end_is_appended() {
        let blocks = vec![DocBlock {
            line: 99,
            indent: 0,
            text: "// end".to_string(),
        }];
        let rendered = insert_doc_blocks("class A {}", &blocks);
        assert_eq!(rendered, "class A {}\n// end\n");
    }

    #[test]
    fn test_render_rejects_broken_output() {
        let manager = ExtractorManager::new();
        let blocks = vec![DocBlock {
            line: 2,
            indent: 4,
            text: "Drives the car without comment markers".to_string(),
        }];
        let err = render_commented_source(&manager, SOURCE, &blocks).unwrap_err();
        assert!(matches!(err, ExtractError::SyntaxErrors { ref lines } if !lines.is_empty()));
    }

    #[test]
    fn test_render_accepts_valid_comments() {
        let manager = ExtractorManager::new();
        let symbols = manager.extract_symbols("Car.java", SOURCE).unwrap();
        let blocks: Vec<DocBlock> = symbols
            .iter()
            .map(|s| DocBlock::for_target(&DocTarget::from(s), format!("/** {} */", s.name)))
            .collect();

        let rendered = render_commented_source(&manager, SOURCE, &blocks).unwrap();
        assert!(rendered.starts_with("/** Car */\npublic class Car {\n    /** drive */\n"));
        assert_eq!(manager.extract_symbols("Car.java", &rendered).unwrap().len(), 2);
    }
}
