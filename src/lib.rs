/// Handles argument parsing.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Processes .lightboxignore files to exclude specific paths.
pub mod ignore;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Tag handlers and directive expansion.
pub mod tag;

/// Core template processing orchestration.
pub mod template;
