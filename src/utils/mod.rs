// Utilities Module
//
// Helpers shared by the project walk, the CLI and the bindings.

/// File utilities
pub mod file_utils {
    use crate::error::{ExtractError, Result};
    use crate::language::JAVA_EXTENSION;
    use std::fs;
    use std::path::Path;

    /// Check if a file has the given extension (without the leading dot)
    pub fn has_extension(path: &Path, extension: &str) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext == extension)
    }

    /// Check if a file is a Java source
    pub fn is_supported_file(path: &Path) -> bool {
        has_extension(path, JAVA_EXTENSION)
    }

    /// Read a source file as UTF-8 text
    ///
    /// I/O failures and non-UTF-8 content are reported separately so the
    /// project walk can say why a file was skipped.
    pub fn read_file_content(path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        String::from_utf8(bytes).map_err(|_| ExtractError::Decode {
            path: path.to_path_buf(),
        })
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use tempfile::TempDir;

        #[test]
        fn test_is_supported_file() {
            assert!(is_supported_file(Path::new("src/Main.java")));
            assert!(!is_supported_file(Path::new("src/Main.kt")));
            assert!(!is_supported_file(Path::new("src/java")));
            assert!(!is_supported_file(Path::new("Main.JAVA")));
        }

        #[test]
        fn test_read_file_content_reports_decode_errors() {
            let dir = TempDir::new().unwrap();
            let good = dir.path().join("Good.java");
            let bad = dir.path().join("Bad.java");
            fs::write(&good, "class Good {}").unwrap();
            fs::write(&bad, [0xff, 0xfe, 0x00, 0x63]).unwrap();

            assert_eq!(read_file_content(&good).unwrap(), "class Good {}");
            assert!(matches!(
                read_file_content(&bad),
                Err(ExtractError::Decode { .. })
            ));
            assert!(matches!(
                read_file_content(&dir.path().join("Missing.java")),
                Err(ExtractError::Read { .. })
            ));
        }
    }
}

/// Path conversion utilities (relative Unix-style paths, derived names)
pub mod paths;

/// Exclusion pattern utilities (.comprehenderignore support)
pub mod ignore;
