//! CLI entry point for filelister

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use filelister::error::EXIT_FAILURE;
use filelister::{BuildConfig, ListError, LogLevel, OutputFormat, build_tree, init_logging};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "filelister")]
#[command(about = "List a file or directory tree as text, JSON, or YAML")]
#[command(version)]
struct Args {
    /// Path to the file or directory to list (required)
    // OsString: clap's PathBuf parser rejects an empty value before `resolve` sees it.
    #[arg(long, value_name = "PATH")]
    path: Option<OsString>,

    /// List subdirectories recursively
    #[arg(
        long,
        num_args = 0..=1,
        value_name = "BOOL",
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    recursive: bool,

    /// Output format: text, json, or yaml
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: String,

    /// Diagnostic log level (written to stderr)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

/// Validate arguments before touching the filesystem.
///
/// A missing path is reported before an invalid output format.
fn resolve(args: &Args) -> Result<(BuildConfig, OutputFormat), ListError> {
    let path = args
        .path
        .clone()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .ok_or(ListError::MissingArgument("--path"))?;
    let format: OutputFormat = args.output.parse()?;
    Ok((BuildConfig::new(path, args.recursive), format))
}

fn fail(err: ListError) -> ! {
    eprintln!("filelister: {}", err);
    process::exit(err.exit_code());
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level);
    debug!("Parsed CLI arguments: {args:?}");

    let (config, format) = resolve(&args).unwrap_or_else(|e| fail(e));
    let tree = build_tree(&config).unwrap_or_else(|e| fail(e));
    debug!(nodes = tree.node_count(), depth = tree.depth(), %format, "built tree");

    let rendered = format.render(&tree);
    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", rendered).and_then(|_| stdout.flush()) {
        eprintln!("filelister: error writing output: {}", e);
        process::exit(EXIT_FAILURE);
    }
}
