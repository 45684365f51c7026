// Path Utilities
//
// Relative Unix-style paths for pattern matching, and the names derived from
// paths: the project namespace and the commented-copy output file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Suffix appended to a file stem for the documented copy of a source file
pub const COMMENTED_SUFFIX: &str = "_commented";

/// Convert a path under `root` to a relative Unix-style path (with `/` separators)
///
/// Paths produced by the project walk are always `root` joined with a
/// relative part, so no canonicalization is needed.
///
/// ```text
/// to_relative_unix_style("/home/dev/project/src/Main.java", "/home/dev/project")
/// // => "src/Main.java"
/// ```
pub fn to_relative_unix_style(path: &Path, root: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).with_context(|| {
        format!(
            "File path '{}' is not within root '{}'",
            path.display(),
            root.display()
        )
    })?;

    let path_str = relative.to_str().context("Path contains invalid UTF-8")?;

    // On Unix, MAIN_SEPARATOR is already '/'
    let unix_style = if MAIN_SEPARATOR == '\\' {
        path_str.replace('\\', "/")
    } else {
        path_str.to_string()
    };

    Ok(unix_style)
}

/// Default namespace for a project: the final component of its resolved root
///
/// Falls back to the path as given when it cannot be resolved.
pub fn generate_namespace(root: &Path) -> Option<String> {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
}

/// Sibling path of the documented copy: `Foo.java` becomes `Foo_commented.java`
pub fn commented_output_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, COMMENTED_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, COMMENTED_SUFFIX),
    };
    path.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_to_relative_unix_style() {
        let root = Path::new("/project");
        let path = root.join("src").join("main").join("Main.java");
        assert_eq!(
            to_relative_unix_style(&path, root).unwrap(),
            "src/main/Main.java"
        );
    }

    #[test]
    fn test_to_relative_unix_style_outside_root() {
        let result = to_relative_unix_style(Path::new("/elsewhere/A.java"), Path::new("/project"));
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_namespace_uses_directory_name() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("vehicle-management");
        std::fs::create_dir(&project).unwrap();
        assert_eq!(
            generate_namespace(&project).as_deref(),
            Some("vehicle-management")
        );
    }

    #[test]
    fn test_generate_namespace_unresolvable_path() {
        assert_eq!(
            generate_namespace(Path::new("does/not/exist/app")).as_deref(),
            Some("app")
        );
    }

    #[test]
    fn test_commented_output_path() {
        assert_eq!(
            commented_output_path(Path::new("src/Car.java")),
            PathBuf::from("src/Car_commented.java")
        );
        assert_eq!(
            commented_output_path(Path::new("Makefile")),
            PathBuf::from("Makefile_commented")
        );
    }
}
