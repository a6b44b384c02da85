use std::path::PathBuf;

#[derive(Debug)]
pub enum TemplateOperation {
    Copy { source: PathBuf, target: PathBuf, target_exists: bool },
    Write { target: PathBuf, content: String, target_exists: bool },
    CreateDirectory { target: PathBuf, target_exists: bool },
    Ignore { source: PathBuf },
}

impl TemplateOperation {
    /// Gets a message describing the operation and its status.
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self) -> String {
        match self {
            TemplateOperation::Copy { source, target, target_exists } => {
                if *target_exists {
                    format!(
                        "Copying '{}' to '{}' (overwriting existing file)",
                        source.display(),
                        target.display()
                    )
                } else {
                    format!("Copying '{}' to '{}'", source.display(), target.display())
                }
            }

            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "Skipping directory creation '{}' (already exists)",
                        target.display()
                    )
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }

            TemplateOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    format!(
                        "Writing to '{}' (overwriting existing file)",
                        target.display()
                    )
                } else {
                    format!("Writing to '{}'", target.display())
                }
            }

            TemplateOperation::Ignore { source } => {
                format!("Ignoring '{}' (matches ignore pattern)", source.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_operation_logs_overwrite_message() {
        let source = PathBuf::from("/tmp/site/cat.jpg");
        let target = PathBuf::from("/tmp/out/cat.jpg");
        let expected = format!(
            "Copying '{}' to '{}' (overwriting existing file)",
            &source.display(),
            &target.display()
        );

        let copy = TemplateOperation::Copy { source, target, target_exists: true };
        assert_eq!(copy.get_message(), expected);
    }

    #[test]
    fn copy_operation_logs_basic_message() {
        let source = PathBuf::from("/tmp/site/cat.jpg");
        let target = PathBuf::from("/tmp/out/cat.jpg");
        let expected =
            format!("Copying '{}' to '{}'", &source.display(), &target.display());

        let copy = TemplateOperation::Copy { source, target, target_exists: false };
        assert_eq!(copy.get_message(), expected);
    }

    #[test]
    fn create_directory_skips_when_exists() {
        let target = PathBuf::from("/tmp/out/photos");
        let expected = format!(
            "Skipping directory creation '{}' (already exists)",
            &target.display()
        );

        let op = TemplateOperation::CreateDirectory { target, target_exists: true };
        assert_eq!(op.get_message(), expected);
    }

    #[test]
    fn write_operation_overwrite_message() {
        let target = PathBuf::from("/tmp/out/index.html");
        let expected =
            format!("Writing to '{}' (overwriting existing file)", &target.display());

        let op = TemplateOperation::Write {
            target,
            target_exists: true,
            content: "".to_string(),
        };
        assert_eq!(op.get_message(), expected);
    }

    #[test]
    fn ignore_operation_logs_message() {
        let source = PathBuf::from("/tmp/site/.git");
        let expected =
            format!("Ignoring '{}' (matches ignore pattern)", &source.display());

        let op = TemplateOperation::Ignore { source };
        assert_eq!(op.get_message(), expected);
    }
}
