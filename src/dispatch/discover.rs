//! Subproject discovery.
//!
//! A subproject is an immediate child directory of the tree root. The output
//! directory's own name is always excluded so the dispatcher never recurses
//! into its artifact tree, and hidden directories (`.git` and friends) are
//! skipped. The set is computed fresh on every invocation.

use anyhow::{Context, Result};
use std::path::Path;

/// Enumerate subproject names under `root`, sorted for stable dispatch order.
pub fn subprojects(root: &Path, build_dir: &Path) -> Result<Vec<String>> {
    let excluded = build_dir.file_name();

    let mut names = Vec::new();
    let entries = std::fs::read_dir(root)
        .with_context(|| format!("Failed to read {}", root.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if excluded.is_some_and(|e| e == name.as_os_str()) {
            continue;
        }
        // Hidden check happens on the raw bytes: a dot-directory with a
        // non-UTF-8 name is skipped, not an error.
        if name.as_encoded_bytes().first() == Some(&b'.') {
            continue;
        }
        let name = name
            .to_str()
            .context("Subdirectory name contains invalid UTF-8")?;
        names.push(name.to_string());
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn excludes_default_build_dir_and_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        for name in ["drivers", "init", "build"] {
            std::fs::create_dir(root.join(name)).unwrap();
        }
        std::fs::write(root.join("Makefile"), "").unwrap();

        let subs = subprojects(root, &root.join("build")).unwrap();
        assert_eq!(subs, vec!["drivers", "init"]);
    }

    #[test]
    fn exclusion_follows_override_name() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        for name in ["artifacts", "build", "init"] {
            std::fs::create_dir(root.join(name)).unwrap();
        }

        // With the output dir overridden, "build" is an ordinary subproject
        // and the override's name is the one filtered out.
        let subs = subprojects(root, &root.join("artifacts")).unwrap();
        assert_eq!(subs, vec!["build", "init"]);
    }

    #[test]
    fn skips_hidden_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        std::fs::create_dir(root.join(".git")).unwrap();
        std::fs::create_dir(root.join("shell")).unwrap();

        let subs = subprojects(root, &root.join("build")).unwrap();
        assert_eq!(subs, vec!["shell"]);
    }

    #[cfg(unix)]
    #[test]
    fn skips_hidden_directories_with_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        std::fs::create_dir(root.join(std::ffi::OsStr::from_bytes(b".cache-\xff"))).unwrap();
        std::fs::create_dir(root.join("shell")).unwrap();

        let subs = subprojects(root, &root.join("build")).unwrap();
        assert_eq!(subs, vec!["shell"]);
    }

    #[test]
    fn empty_tree_yields_empty_set() {
        let tmp = TempDir::new().unwrap();
        let subs = subprojects(tmp.path(), &tmp.path().join("build")).unwrap();
        assert!(subs.is_empty());
    }
}
