//! Utilities for handling exclusion patterns and the .comprehenderignore file
//!
//! Patterns are globs matched against a file's path relative to the project
//! root, with `/` separators. `*` may cross directory boundaries, so
//! `*_commented.java` excludes generated copies at any depth. A pattern
//! ending in `/` excludes everything under a directory of that name.

use crate::error::{ExtractError, Result};
use glob::Pattern;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the per-project ignore file, read from the project root
pub const IGNORE_FILE_NAME: &str = ".comprehenderignore";

/// Load custom exclusion patterns from the ignore file in the project root
///
/// Empty lines and comments (lines starting with #) are skipped. A missing
/// file yields no patterns.
///
/// ```text
/// # .comprehenderignore
/// generated/
/// *Test.java
/// ```
pub fn load_ignore_file(root: &Path) -> Result<Vec<String>> {
    let ignore_file = root.join(IGNORE_FILE_NAME);

    if !ignore_file.is_file() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&ignore_file).map_err(|source| ExtractError::Read {
        path: ignore_file.clone(),
        source,
    })?;

    let patterns: Vec<String> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect();

    if !patterns.is_empty() {
        debug!(
            "Loaded {} exclusion patterns from {}",
            patterns.len(),
            IGNORE_FILE_NAME
        );
    }

    Ok(patterns)
}

/// Compiled set of exclusion patterns
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    patterns: Vec<Pattern>,
}

impl ExclusionSet {
    /// Compile patterns; an invalid glob is a configuration error
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for raw in patterns {
            for expanded in expand_pattern(raw) {
                let pattern = Pattern::new(&expanded).map_err(|source| ExtractError::Pattern {
                    pattern: raw.clone(),
                    source,
                })?;
                compiled.push(pattern);
            }
        }
        Ok(Self { patterns: compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check a relative Unix-style path against every pattern
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(relative_path))
    }
}

/// Directory patterns match the directory at the root or below any parent;
/// `*/name/*` keeps the `/` boundary so `my-name/` is not caught.
fn expand_pattern(raw: &str) -> Vec<String> {
    match raw.strip_suffix('/') {
        Some(dir) => vec![format!("{}/*", dir), format!("*/{}/*", dir)],
        None => vec![raw.to_string()],
    }
}
