use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ldm_transformer::{transform, TransformOption, DEFAULT_PRECISION};

const DEFAULT_INPUT: &str = "leveldata.json";
const OUTPUT_INFIX: &str = "min";

#[derive(Parser, Debug)]
#[command(name = "ldm")]
#[command(about = "Shrinks level-data JSON by aliasing identifiers and truncating decimals")]
#[command(version)]
struct Cli {
    /// Source document (same as --input)
    file: Option<PathBuf>,

    /// Source document path
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Destination path (default: input with a ".min" infix)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Skip identifier renaming entirely
    #[arg(long)]
    no_rename: bool,

    /// Skip decimal precision reduction
    #[arg(long)]
    no_precision: bool,

    /// Decimal places to keep, 1-15 (invalid values fall back to 6)
    #[arg(long)]
    precision: Option<String>,

    /// Indent the output with 4 spaces instead of compact form
    #[arg(long, visible_alias = "pretty")]
    formatted: bool,

    /// Print every original -> alias pair after the run
    #[arg(long)]
    show_mappings: bool,
}

fn init_log() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("LOG"))
        .init();
}

fn resolve_precision(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_PRECISION;
    };

    match raw.parse::<usize>() {
        Ok(n) if (1..=15).contains(&n) => n,
        _ => {
            warn!(
                value = raw,
                default = DEFAULT_PRECISION,
                "--precision expects a number between 1 and 15, keeping default"
            );
            DEFAULT_PRECISION
        }
    }
}

fn derive_output_path(input: &Path) -> PathBuf {
    match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => input.with_extension(format!("{}.{}", OUTPUT_INFIX, ext)),
        None => input.with_extension(OUTPUT_INFIX),
    }
}

fn run(cli: Cli) -> Result<()> {
    let input = cli
        .input
        .or(cli.file)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let out = cli.out.unwrap_or_else(|| derive_output_path(&input));

    let options = TransformOption {
        rename: !cli.no_rename,
        precision: (!cli.no_precision).then(|| resolve_precision(cli.precision.as_deref())),
        formatted: cli.formatted,
    };

    let content = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let output = transform(&content, &options)?;

    // the output file is only touched once every stage has succeeded
    fs::write(&out, &output.content)
        .with_context(|| format!("failed to write {}", out.display()))?;

    let before = content.len();
    let after = output.content.len();
    let saved = 100.0 - (after as f64 / before as f64) * 100.0;

    println!(
        "{} -> {}: {} -> {} bytes ({:.1}% saved)",
        input.display(),
        out.display(),
        before,
        after,
        saved
    );

    if cli.show_mappings {
        for (original, alias) in &output.mappings {
            println!("{} -> {}", original, alias);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_log();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            let _ = err.print();
            return code;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
