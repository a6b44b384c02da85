use globset::GlobSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ioutils::path_to_str;
use crate::renderer::TemplateRenderer;

use super::operation::TemplateOperation;

/// Suffix marking files that are rendered instead of copied verbatim.
const TEMPLATE_SUFFIX: &str = ".j2";

pub struct TemplateProcessor<'a, P: AsRef<Path>> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    ignored: &'a GlobSet,

    /// Other
    site_root: P,
    output_root: P,
    context: &'a serde_json::Value,
}

impl<'a, P: AsRef<Path>> TemplateProcessor<'a, P> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        site_root: P,
        output_root: P,
        context: &'a serde_json::Value,
        ignored: &'a GlobSet,
    ) -> Self {
        Self { engine, site_root, output_root, context, ignored }
    }

    /// Checks if the provided path is a template file (with .j2 extension)
    ///
    /// # Arguments
    /// * `path` - A path to the file
    ///
    /// # Returns
    /// * `true` - if the file has a .j2 extension
    /// * `false` - if the path is not a template file
    ///
    fn is_template_file<T: AsRef<Path>>(&self, path: T) -> bool {
        path.as_ref().file_name().and_then(|n| n.to_str()).is_some_and(|file_name| {
            file_name.ends_with(TEMPLATE_SUFFIX)
                && file_name.len() > TEMPLATE_SUFFIX.len()
        })
    }

    /// Removes the `.j2` suffix from a template file path.
    ///
    /// # Arguments
    /// * `target_path` - Path with possible template suffix
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path with suffix removed
    ///
    fn remove_template_suffix(&self, target_path: &Path) -> Result<PathBuf> {
        let target_path_str = path_to_str(target_path)?;
        let target =
            target_path_str.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(target_path_str);

        Ok(PathBuf::from(target))
    }

    /// Constructs the target path for a walked entry, mirroring the site
    /// tree under the output root.
    fn get_target_path(&self, source_entry: &Path) -> Result<PathBuf> {
        let relative =
            source_entry.strip_prefix(self.site_root.as_ref()).map_err(|e| {
                Error::ProcessError {
                    source_path: source_entry.display().to_string(),
                    e: e.to_string(),
                }
            })?;

        Ok(self.output_root.as_ref().join(relative))
    }

    /// Decides what to do with one walked entry.
    ///
    /// Ignored paths yield `Ignore`, directories `CreateDirectory`,
    /// template files a `Write` with their rendered content and the suffix
    /// stripped, everything else a verbatim `Copy`.
    pub fn process(&self, source_entry: &Path) -> Result<TemplateOperation> {
        if self.ignored.is_match(source_entry) {
            return Ok(TemplateOperation::Ignore {
                source: source_entry.to_path_buf(),
            });
        }

        let target = self.get_target_path(source_entry)?;

        if source_entry.is_dir() {
            return Ok(TemplateOperation::CreateDirectory {
                target_exists: target.exists(),
                target,
            });
        }

        if self.is_template_file(source_entry) {
            let content =
                fs::read_to_string(source_entry).map_err(|e| Error::ProcessError {
                    source_path: source_entry.display().to_string(),
                    e: e.to_string(),
                })?;
            let template_name =
                source_entry.file_name().and_then(|name| name.to_str());
            let rendered = self.engine.render(&content, self.context, template_name)?;
            let target = self.remove_template_suffix(&target)?;

            return Ok(TemplateOperation::Write {
                target_exists: target.exists(),
                target,
                content: rendered,
            });
        }

        Ok(TemplateOperation::Copy {
            source: source_entry.to_path_buf(),
            target_exists: target.exists(),
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ignore::parse_ignore_file;
    use crate::renderer::MiniJinjaRenderer;
    use serde_json::json;

    fn write(path: &Path, content: &str) {
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn template_files_are_rendered_and_renamed() {
        let site = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write(
            &site.path().join("index.html.j2"),
            "{% lightbox cat.jpg, A cat %}\n",
        );

        let engine = MiniJinjaRenderer::default();
        let ignored = parse_ignore_file(site.path()).unwrap();
        let context = json!({});
        let processor = TemplateProcessor::new(
            &engine,
            site.path(),
            out.path(),
            &context,
            &ignored,
        );

        let op = processor.process(&site.path().join("index.html.j2")).unwrap();
        match op {
            TemplateOperation::Write { target, content, target_exists } => {
                assert_eq!(target, out.path().join("index.html"));
                assert_eq!(
                    content,
                    "<a href=\"/img/cat.jpg\" rel=\"lightbox\" title=\"A cat\"><img src=\"/img/cat.jpg\" alt=\"A cat\" /></a>\n"
                );
                assert!(!target_exists);
            }
            other => panic!("expected Write, got {:?}", other),
        }
    }

    #[test]
    fn static_files_are_copied() {
        let site = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write(&site.path().join("style.css"), "body {}\n");

        let engine = MiniJinjaRenderer::default();
        let ignored = parse_ignore_file(site.path()).unwrap();
        let context = json!({});
        let processor = TemplateProcessor::new(
            &engine,
            site.path(),
            out.path(),
            &context,
            &ignored,
        );

        let op = processor.process(&site.path().join("style.css")).unwrap();
        match op {
            TemplateOperation::Copy { source, target, .. } => {
                assert_eq!(source, site.path().join("style.css"));
                assert_eq!(target, out.path().join("style.css"));
            }
            other => panic!("expected Copy, got {:?}", other),
        }
    }

    #[test]
    fn directories_map_to_create_directory() {
        let site = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::create_dir(site.path().join("photos")).unwrap();

        let engine = MiniJinjaRenderer::default();
        let ignored = parse_ignore_file(site.path()).unwrap();
        let context = json!({});
        let processor = TemplateProcessor::new(
            &engine,
            site.path(),
            out.path(),
            &context,
            &ignored,
        );

        let op = processor.process(&site.path().join("photos")).unwrap();
        match op {
            TemplateOperation::CreateDirectory { target, target_exists } => {
                assert_eq!(target, out.path().join("photos"));
                assert!(!target_exists);
            }
            other => panic!("expected CreateDirectory, got {:?}", other),
        }
    }

    #[test]
    fn ignored_entries_are_reported_as_ignored() {
        let site = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::create_dir(site.path().join(".git")).unwrap();

        let engine = MiniJinjaRenderer::default();
        let ignored = parse_ignore_file(site.path()).unwrap();
        let context = json!({});
        let processor = TemplateProcessor::new(
            &engine,
            site.path(),
            out.path(),
            &context,
            &ignored,
        );

        let op = processor.process(&site.path().join(".git")).unwrap();
        assert!(matches!(op, TemplateOperation::Ignore { .. }));
    }
}
