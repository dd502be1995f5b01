//! Scheme lookup table conversion: `color_palette_scheme_defaults.txt` to
//! `colorSchemeLut` XML.
//!
//! Each data line is `KEY_REGEX : SCHEME_ID`; trailing fields are ignored.

use crate::errors::{ConverterError, FieldCount};
use crate::lines::{self, split_fields};
use crate::models_lut::{ColorSchemeLut, LutKey};
use crate::stats::LineStats;
use crate::{ConversionKind, ConversionSummary, read_input, xml_writer};
use log::info;
use std::path::Path;
use std::time::Instant;

pub const INPUT_FILE_NAME: &str = "color_palette_scheme_defaults.txt";
pub const OUTPUT_FILE_NAME: &str = "color_palette_scheme_defaults.xml";

/// Parse the full text of a lookup table file.
pub fn parse_lut(
    content: &str,
    source: &Path,
) -> Result<(ColorSchemeLut, LineStats), ConverterError> {
    let (data, stats) = lines::scan(content);
    let expected = FieldCount::AtLeast(LutKey::MIN_FIELD_COUNT);

    let mut keys = Vec::with_capacity(data.len());
    for line in data {
        let fields = split_fields(line.text);
        let key = LutKey::from_fields(&fields).ok_or_else(|| ConverterError::MalformedLine {
            path: source.to_path_buf(),
            line: line.number,
            expected,
            found: fields.len(),
        })?;
        keys.push(key);
    }

    Ok((ColorSchemeLut { keys }, stats))
}

pub fn convert_lut(input: &Path, output: &Path) -> Result<ConversionSummary, ConverterError> {
    let start = Instant::now();
    info!("Converting scheme lookup table");
    info!("  Input: {}", input.display());
    info!("  Output: {}", output.display());

    let content = read_input(input)?;
    let (lut, stats) = parse_lut(&content, input)?;
    xml_writer::write_file(output, &lut)?;

    stats.finish("Scheme lookup table", start);
    Ok(ConversionSummary {
        kind: ConversionKind::Lut,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records: lut.keys.len(),
        stats,
    })
}
