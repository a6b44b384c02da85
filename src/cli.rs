use crate::{
    error::{Error, Result},
    ignore::parse_ignore_file,
    ioutils::{
        copy_file, create_dir_all, get_output_dir, parse_string_to_json, read_from,
        write_file,
    },
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    tag::builtin_tags,
    template::{TemplateOperation, TemplateProcessor},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Command-line arguments structure for the lightbox renderer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the site directory holding templates and static assets
    #[arg(value_name = "SITE_DIR")]
    pub site_dir: PathBuf,

    /// Directory where the rendered site will be created
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Force overwrite of existing output directory
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Specifies the context used when rendering templates.
    ///
    /// Accepts either a JSON string or "-" to read from stdin.
    ///
    /// Format
    ///
    /// The input should be a JSON object with key-value pairs where:
    ///
    /// - keys are variable names used in the templates
    ///
    /// - values are the corresponding context values
    ///
    /// Example
    ///
    /// Provide the context directly
    ///
    /// > lightbox site_dir output_dir --context='{"site_title": "Photos"}'
    ///
    /// Read the context from stdin
    ///
    /// > echo '{"site_title": "Photos"}' | lightbox site_dir output_dir --context=-
    ///
    #[arg(short, long)]
    pub context: Option<String>,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

/// Maps the `--verbose` flag to a log level filter.
pub fn get_log_level_from_verbose(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

pub fn run(args: Args) -> Result<()> {
    let engine: Box<dyn TemplateRenderer> =
        Box::new(MiniJinjaRenderer::new(builtin_tags()));

    let output_root = get_output_dir(&args.output_dir, args.force)?;

    let site_root = args.site_dir;
    if !site_root.is_dir() {
        return Err(Error::SiteDoesNotExistError {
            site_dir: site_root.display().to_string(),
        });
    }

    // Retrieves the context from `--context` or stdin
    let buf = if let Some(context) = args.context {
        Some(if context == "-" { read_from(std::io::stdin())? } else { context })
    } else {
        None
    };

    // Parses the retrieved context to JSON or falls back to the empty map
    let context = if let Some(buf) = buf {
        parse_string_to_json(buf)?
    } else {
        serde_json::Map::new()
    };
    let context = serde_json::Value::Object(context);

    // Process ignore patterns
    let ignored = parse_ignore_file(&site_root)?;

    let processor = TemplateProcessor::new(
        engine.as_ref(),
        &site_root,
        &output_root,
        &context,
        &ignored,
    );

    // Process site files
    for dir_entry in WalkDir::new(&site_root) {
        let raw_entry = dir_entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        let source_entry = raw_entry.path().to_path_buf();
        match processor.process(&source_entry) {
            Ok(file_operation) => {
                match &file_operation {
                    TemplateOperation::Write { target, content, .. } => {
                        write_file(content, target)?;
                    }
                    TemplateOperation::Copy { source, target, .. } => {
                        copy_file(source, target)?;
                    }
                    TemplateOperation::CreateDirectory { target, target_exists } => {
                        if !target_exists {
                            create_dir_all(target)?;
                        }
                    }
                    TemplateOperation::Ignore { .. } => {}
                }

                log::info!("{}", file_operation.get_message());
            }
            Err(e) => match e {
                Error::ProcessError { .. } => log::warn!("{}", e),
                _ => log::error!("{}", e),
            },
        }
    }

    println!("Site rendered successfully in {}.", output_root.display());
    Ok(())
}
