use crate::{error::Result, ioutils::path_to_str};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, info};
use std::{fs::read_to_string, path::Path};

/// Default patterns to always ignore while walking a site tree
const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git/**",
    ".git",
    ".hg/**",
    ".hg",
    ".svn/**",
    ".svn",
    "**/.DS_Store",
    ".lightboxignore",
];

/// Ignore file name
pub const IGNORE_FILE: &str = ".lightboxignore";

/// Reads and processes the .lightboxignore file to create a set of glob patterns.
pub fn parse_ignore_file<P: AsRef<Path>>(site_root: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let site_root = site_root.as_ref();
    let ignore_path = site_root.join(IGNORE_FILE);

    // Add default patterns first
    let mut patterns: Vec<String> = Vec::new();
    for pattern in DEFAULT_IGNORE_PATTERNS {
        let path_to_ignored_pattern = site_root.join(pattern);
        patterns.push(path_to_str(&path_to_ignored_pattern)?.to_string());
    }

    // Then add patterns from .lightboxignore if it exists
    if let Ok(contents) = read_to_string(ignore_path) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let path_to_ignored_pattern = site_root.join(line);
            patterns.push(path_to_str(&path_to_ignored_pattern)?.to_string());
        }
    } else {
        debug!("No .lightboxignore file found, using default patterns.");
    }

    for pattern in &patterns {
        debug!("Adding ignore pattern: {} to globset", pattern);
        builder.add(Glob::new(pattern)?);
    }
    info!("Loaded the following ignore patterns: {:?}", patterns);
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patterns_ignore_vcs_internals() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let ignored = parse_ignore_file(tmp_dir.path()).unwrap();

        assert!(ignored.is_match(tmp_dir.path().join(".git")));
        assert!(ignored.is_match(tmp_dir.path().join(".git/config")));
        assert!(ignored.is_match(tmp_dir.path().join("photos/.DS_Store")));
        assert!(!ignored.is_match(tmp_dir.path().join("index.html.j2")));
    }

    #[test]
    fn ignore_file_patterns_extend_the_defaults() {
        let tmp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp_dir.path().join(IGNORE_FILE),
            "# drafts are not published\ndrafts\ndrafts/**\n",
        )
        .unwrap();
        let ignored = parse_ignore_file(tmp_dir.path()).unwrap();

        assert!(ignored.is_match(tmp_dir.path().join("drafts/note.html.j2")));
        assert!(ignored.is_match(tmp_dir.path().join(IGNORE_FILE)));
        assert!(!ignored.is_match(tmp_dir.path().join("index.html.j2")));
    }
}
