//! CLI entry point for sarifkit.
//!
//! Argument parsing, logging setup, output and exit codes only. Loading and
//! validation live in the library crates.

mod report;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use sarifkit::{LoadOptions, Loader, SarifLog};
use tracing::{Level, info};

use crate::report::FileReport;

#[derive(Parser, Debug)]
#[command(name = "sarifkit", version, about = "Validate SARIF 2.1.0 logs")]
struct Cli {
    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load each file and report whether it is a valid SARIF log.
    Validate {
        /// Output format for the per-file report.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Reject inputs larger than this many bytes.
        #[arg(long)]
        max_bytes: Option<u64>,

        /// SARIF files to validate.
        #[arg(required = true)]
        paths: Vec<Utf8PathBuf>,
    },

    /// Print the JSON Schema of the SarifLog document model.
    Schema,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    /// One JSON object per line.
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.cmd {
        Commands::Validate {
            format,
            max_bytes,
            paths,
        } => cmd_validate(format, max_bytes, &paths),
        Commands::Schema => cmd_schema(),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_validate(
    format: OutputFormat,
    max_bytes: Option<u64>,
    paths: &[Utf8PathBuf],
) -> anyhow::Result<()> {
    let mut options = LoadOptions::default();
    if let Some(limit) = max_bytes {
        options = options.with_max_input_bytes(limit);
    }
    let loader = Loader::new(options);

    let mut failures = 0usize;
    for path in paths {
        let outcome = loader.load_path(path);
        if let Err(err) = &outcome {
            failures += 1;
            info!(%path, kind = err.kind(), "rejected");
        }
        let report = FileReport::new(path, &outcome);
        match format {
            OutputFormat::Text => println!("{}", report.render_text()),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string(&report).context("serialize report")?
            ),
        }
    }

    info!(files = paths.len(), failures, "validation finished");
    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(SarifLog);
    let text = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{text}");
    Ok(())
}
