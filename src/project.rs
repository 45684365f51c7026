//! Project walk
//!
//! Discovers every Java source under a root directory and extracts each one
//! into a single ordered `SymbolStore`. Files that cannot be read or parsed
//! are skipped and reported; only a bad root or bad configuration aborts.

use crate::error::{ExtractError, Result};
use crate::extractors::{ExtractorManager, Symbol};
use crate::language::JAVA_EXTENSION;
use crate::store::SymbolStore;
use crate::utils::file_utils::{has_extension, read_file_content};
use crate::utils::ignore::{load_ignore_file, ExclusionSet};
use crate::utils::paths::{to_relative_unix_style, COMMENTED_SUFFIX};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Settings for one project walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Extension of source files, without the dot
    pub extension: String,
    /// Glob patterns matched against root-relative unix paths
    pub exclude: Vec<String>,
    /// Also read patterns from `.comprehenderignore` in the root
    pub use_ignore_file: bool,
    /// Extract files on the rayon pool
    pub parallel: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            extension: JAVA_EXTENSION.to_string(),
            exclude: vec![format!("*{}.{}", COMMENTED_SUFFIX, JAVA_EXTENSION)],
            use_ignore_file: true,
            parallel: true,
        }
    }
}

/// A file left out of the result, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of a project walk
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectExtraction {
    pub symbols: SymbolStore,
    pub skipped: Vec<SkippedFile>,
}

pub struct ProjectExtractor {
    root: PathBuf,
    config: ProjectConfig,
    manager: ExtractorManager,
}

impl ProjectExtractor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, ProjectConfig::default())
    }

    pub fn with_config(root: impl Into<PathBuf>, config: ProjectConfig) -> Self {
        Self {
            root: root.into(),
            config,
            manager: ExtractorManager::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Source files under the root, in walk order (sorted by name at every level)
    pub fn discover_files(&self) -> Result<Vec<PathBuf>> {
        let (files, _) = self.discover()?;
        Ok(files)
    }

    /// Extract every discovered file into one ordered store
    pub fn extract(&self) -> Result<ProjectExtraction> {
        let (files, mut skipped) = self.discover()?;
        info!(
            "Extracting {} files under {}",
            files.len(),
            self.root.display()
        );

        let results: Vec<Result<Vec<Symbol>>> = if self.config.parallel {
            files.par_iter().map(|path| self.extract_file(path)).collect()
        } else {
            files.iter().map(|path| self.extract_file(path)).collect()
        };

        let mut store = SymbolStore::new();
        for (path, result) in files.into_iter().zip(results) {
            match result {
                Ok(symbols) => store.extend(symbols),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Extracted {} symbols ({} classes, {} methods), skipped {} files",
            store.len(),
            store.classes().count(),
            store.methods().count(),
            skipped.len()
        );

        Ok(ProjectExtraction {
            symbols: store,
            skipped,
        })
    }

    fn extract_file(&self, path: &Path) -> Result<Vec<Symbol>> {
        // Recorded paths must reopen the file, so they cannot be lossy
        let file_path = path.to_str().ok_or_else(|| ExtractError::NonUtf8Path {
            path: path.to_path_buf(),
        })?;
        let content = read_file_content(path)?;
        self.manager.extract_symbols(file_path, &content)
    }

    fn discover(&self) -> Result<(Vec<PathBuf>, Vec<SkippedFile>)> {
        if !self.root.exists() {
            return Err(ExtractError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ExtractError::RootNotDirectory(self.root.clone()));
        }

        let exclusions = self.exclusions()?;
        let mut files = Vec::new();
        let mut skipped = Vec::new();

        // Symlinked sources count as files; link loops surface as walk errors
        let walker = WalkDir::new(&self.root).follow_links(true).sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    let path = source
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    let error = ExtractError::Walk {
                        path: path.clone(),
                        source,
                    };
                    warn!("{}", error);
                    skipped.push(SkippedFile {
                        path,
                        reason: error.to_string(),
                    });
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !has_extension(path, &self.config.extension) {
                continue;
            }

            if !exclusions.is_empty() {
                match to_relative_unix_style(path, &self.root) {
                    Ok(relative) if exclusions.is_excluded(&relative) => {
                        debug!("Excluded {}", relative);
                        continue;
                    }
                    Ok(_) => {}
                    Err(e) => debug!("Cannot match exclusions for {}: {}", path.display(), e),
                }
            }

            files.push(path.to_path_buf());
        }

        debug!("Discovered {} files under {}", files.len(), self.root.display());
        Ok((files, skipped))
    }

    fn exclusions(&self) -> Result<ExclusionSet> {
        let mut patterns = self.config.exclude.clone();
        if self.config.use_ignore_file {
            patterns.extend(load_ignore_file(&self.root)?);
        }
        ExclusionSet::new(&patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert_eq!(config.extension, "java");
        assert_eq!(config.exclude, vec!["*_commented.java"]);
        assert!(config.use_ignore_file);
        assert!(config.parallel);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let extractor = ProjectExtractor::new("/definitely/not/a/real/root");
        let err = extractor.extract().unwrap_err();
        assert!(matches!(err, ExtractError::RootNotFound(_)));
        assert!(err.is_fatal());
    }
}
