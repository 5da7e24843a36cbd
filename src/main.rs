use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use figma_tokens_css::{convert_all, Config};
use log::LevelFilter;

/// Converts Figma variable exports into CSS custom-property stylesheets, one class per mode.
#[derive(Parser)]
#[command(name = "figma_tokens_css", version)]
struct Cli {
    /// Directory containing the exported `.json` files
    #[arg(short, long, default_value = "./figma")]
    source: PathBuf,

    /// Directory the stylesheets are written to
    #[arg(short, long, default_value = "./css")]
    output: PathBuf,

    /// Stop at the first export that fails to convert
    #[arg(long)]
    fail_fast: bool,

    /// More logging, repeat for trace output
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = match (cli.quiet, cli.verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = Config {
        source_dir: cli.source,
        output_dir: cli.output,
        fail_fast: cli.fail_fast,
        ..Config::default()
    };
    let report = convert_all(&config).with_context(|| {
        format!(
            "Converting {} into {}",
            config.source_dir.display(),
            config.output_dir.display()
        )
    })?;

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
