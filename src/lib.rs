//! Main library for the palette scheme converter.
//!
//! Turns the two colon-delimited color scheme configuration files into XML:
//! the scheme list (`color_palette_schemes.txt`) and the scheme defaults
//! lookup table (`color_palette_scheme_defaults.txt`). Both conversions read
//! the whole input, build the document in memory and write it in one go.

pub mod converter_lut;
pub mod converter_schemes;
pub mod errors;
pub mod lines;
pub mod models_lut;
pub mod models_scheme;
pub mod stats;
pub mod xml_writer;

use clap::ValueEnum;
use errors::ConverterError;
use log::info;
use stats::LineStats;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// The two independent conversions this crate performs.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionKind {
    /// color_palette_schemes.txt -> color_palette_schemes.xml
    Schemes,
    /// color_palette_scheme_defaults.txt -> color_palette_scheme_defaults.xml
    Lut,
}

impl ConversionKind {
    pub fn input_file_name(&self) -> &'static str {
        match self {
            ConversionKind::Schemes => converter_schemes::INPUT_FILE_NAME,
            ConversionKind::Lut => converter_lut::INPUT_FILE_NAME,
        }
    }

    pub fn output_file_name(&self) -> &'static str {
        match self {
            ConversionKind::Schemes => converter_schemes::OUTPUT_FILE_NAME,
            ConversionKind::Lut => converter_lut::OUTPUT_FILE_NAME,
        }
    }

    fn convert(&self, input: &Path, output: &Path) -> Result<ConversionSummary, ConverterError> {
        match self {
            ConversionKind::Schemes => converter_schemes::convert_schemes(input, output),
            ConversionKind::Lut => converter_lut::convert_lut(input, output),
        }
    }
}

/// Top-level configuration for a conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Run a single conversion instead of both.
    pub only: Option<ConversionKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            only: None,
        }
    }
}

impl Config {
    /// Conversions to run, in order.
    pub fn kinds(&self) -> Vec<ConversionKind> {
        match self.only {
            Some(kind) => vec![kind],
            None => vec![ConversionKind::Schemes, ConversionKind::Lut],
        }
    }
}

/// Outcome of one successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub kind: ConversionKind,
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub stats: LineStats,
}

/// The main entry point for the conversion logic.
///
/// Runs the selected conversions in order and stops at the first failure;
/// outputs of conversions that already finished are kept.
pub fn run(config: &Config) -> Result<Vec<ConversionSummary>, ConverterError> {
    let start_time = Instant::now();

    if !config.output_dir.is_dir() {
        return Err(ConverterError::Config(format!(
            "Output directory does not exist: {}",
            config.output_dir.display()
        )));
    }

    let mut summaries = Vec::new();
    for kind in config.kinds() {
        let input = config.input_dir.join(kind.input_file_name());
        let output = config.output_dir.join(kind.output_file_name());
        summaries.push(kind.convert(&input, &output)?);
    }

    info!("Total execution time: {:.2?}", start_time.elapsed());
    Ok(summaries)
}

/// Read a whole input file, mapping a missing file to
/// [`ConverterError::MissingInput`].
pub(crate) fn read_input(path: &Path) -> Result<String, ConverterError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConverterError::MissingInput(path.to_path_buf()),
        _ => ConverterError::Io(e, format!("Failed to read {}", path.display())),
    })
}
