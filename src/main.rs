//! Main binary entry point for the palette-scheme-converter.
//!
//! With no arguments both conversions run in the current directory.

use clap::Parser;
use colored::Colorize;
use palette_scheme_converter::errors::ConverterError;
use palette_scheme_converter::{Config, ConversionKind, ConversionSummary};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, value_name = "DIR", default_value = ".")]
    input_dir: PathBuf,

    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    #[arg(long, value_enum, help = "Run only one of the two conversions")]
    only: Option<ConversionKind>,

    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter_level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter(None, filter_level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn print_summary(summary: &ConversionSummary) {
    println!(
        "{} {} -> {} ({} entries, {})",
        "✓".green().bold(),
        summary.input.display(),
        summary.output.display().to_string().bold(),
        summary.records,
        format!(
            "skipped {} comment, {} blank lines",
            summary.stats.comments, summary.stats.blank
        )
        .dimmed()
    );
}

fn run_app() -> Result<(), ConverterError> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = Config {
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        only: cli.only,
    };

    for summary in palette_scheme_converter::run(&config)? {
        print_summary(&summary);
    }
    Ok(())
}

fn main() -> ExitCode {
    match run_app() {
        Ok(_) => {
            log::info!("Conversion completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("A fatal error occurred:");
            log::error!("{}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(s) = source {
                log::error!("  Caused by: {}", s);
                source = std::error::Error::source(s);
            }
            ExitCode::FAILURE
        }
    }
}
