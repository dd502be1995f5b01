//! Palette scheme conversion: `color_palette_schemes.txt` to `schemeList` XML.
//!
//! Each data line carries nine colon-separated fields:
//!
//! ```text
//! ID : MIN : MAX : LOG_SCALE : CPD_FILENAME : CPD_FILENAME_COLORBLIND : COLORBAR_TITLE : COLORBAR_LABELS : DESCRIPTION
//! ```
//!
//! Any other field count aborts the whole conversion.

use crate::errors::{ConverterError, FieldCount};
use crate::lines::{self, split_fields};
use crate::models_scheme::{Scheme, SchemeList};
use crate::stats::LineStats;
use crate::{ConversionKind, ConversionSummary, read_input, xml_writer};
use log::info;
use std::path::Path;
use std::time::Instant;

pub const INPUT_FILE_NAME: &str = "color_palette_schemes.txt";
pub const OUTPUT_FILE_NAME: &str = "color_palette_schemes.xml";

/// Parse the full text of a scheme file.
///
/// `source` is only used to label errors.
pub fn parse_schemes(
    content: &str,
    source: &Path,
) -> Result<(SchemeList, LineStats), ConverterError> {
    let (data, stats) = lines::scan(content);
    let expected = FieldCount::Exactly(Scheme::FIELD_COUNT);

    let schemes = data
        .into_iter()
        .map(|line| {
            let fields = split_fields(line.text);
            Scheme::from_fields(&fields).ok_or_else(|| ConverterError::MalformedLine {
                path: source.to_path_buf(),
                line: line.number,
                expected,
                found: fields.len(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((SchemeList { schemes }, stats))
}

/// Convert the scheme file at `input` and write the XML document to `output`.
///
/// Nothing is written unless every line parses.
pub fn convert_schemes(input: &Path, output: &Path) -> Result<ConversionSummary, ConverterError> {
    let start = Instant::now();
    info!("Converting palette schemes");
    info!("  Input: {}", input.display());
    info!("  Output: {}", output.display());

    let content = read_input(input)?;
    let (list, stats) = parse_schemes(&content, input)?;
    xml_writer::write_file(output, &list)?;

    stats.finish("Palette schemes", start);
    Ok(ConversionSummary {
        kind: ConversionKind::Schemes,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records: list.schemes.len(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
# ID : MIN : MAX : LOG_SCALE : CPD : CPD_CB : TITLE : LABELS : DESCRIPTION

foo : 0 : 100 : false : a.cpd : b.cpd : Title : L1,L2 : Desc

chlor_a:0.01:20:true:chlor.cpd:chlor_cb.cpd:Chlorophyll:0.01,0.1,1,10:OCI chlorophyll
";

    #[test]
    fn test_parse_schemes() {
        let (list, stats) = parse_schemes(SAMPLE, Path::new(INPUT_FILE_NAME)).unwrap();

        assert_eq!(list.schemes.len(), 2);
        assert_eq!(
            list.schemes[0],
            Scheme {
                id: "foo".to_string(),
                display_name: String::new(),
                min: "0".to_string(),
                max: "100".to_string(),
                log_scale: "false".to_string(),
                cpd_file_name: "a.cpd".to_string(),
                cpd_file_name_color_blind: "b.cpd".to_string(),
                color_bar_title: "Title".to_string(),
                color_bar_labels: "L1,L2".to_string(),
                description: "Desc".to_string(),
            }
        );
        assert_eq!(list.schemes[1].id, "chlor_a");
        assert_eq!(list.schemes[1].color_bar_labels, "0.01,0.1,1,10");

        assert_eq!(stats.data, 2);
        assert_eq!(stats.comments, 1);
        assert_eq!(stats.blank, 2);
    }

    #[test]
    fn test_parse_schemes_values_pass_through() {
        let line = "x : null : -3.5e2 : YES : : missing.cpd : : : ";
        let (list, _) = parse_schemes(line, Path::new("in.txt")).unwrap();

        let scheme = &list.schemes[0];
        assert_eq!(scheme.min, "null");
        assert_eq!(scheme.max, "-3.5e2");
        assert_eq!(scheme.log_scale, "YES");
        assert_eq!(scheme.cpd_file_name, "");
        assert_eq!(scheme.description, "");
    }

    #[test]
    fn test_parse_schemes_eight_fields_fails() {
        let content = "ok:0:1:false:a:b:c:d:e\nbad:0:1:false:a:b:c:d\n";
        let err = parse_schemes(content, Path::new("in.txt")).unwrap_err();

        match err {
            ConverterError::MalformedLine {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, FieldCount::Exactly(9));
                assert_eq!(found, 8);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_schemes_ten_fields_fails() {
        let content = "bad:0:1:false:a:b:c:d:e:f";
        assert!(matches!(
            parse_schemes(content, Path::new("in.txt")),
            Err(ConverterError::MalformedLine { found: 10, .. })
        ));
    }

    #[test]
    fn test_convert_schemes_writes_document() {
        let dir = tempdir().unwrap();
        let input = dir.path().join(INPUT_FILE_NAME);
        let output = dir.path().join(OUTPUT_FILE_NAME);
        fs::write(&input, SAMPLE).unwrap();

        let summary = convert_schemes(&input, &output).unwrap();
        assert_eq!(summary.records, 2);
        assert_eq!(summary.kind, ConversionKind::Schemes);

        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.starts_with(xml_writer::XML_DECLARATION));
        assert!(xml.contains("<Scheme name=\"foo\">"));

        let body = xml.trim_start_matches(xml_writer::XML_DECLARATION);
        let parsed: SchemeList = quick_xml::de::from_str(body).unwrap();
        let ids: Vec<&str> = parsed.schemes.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["foo", "chlor_a"]);
        assert_eq!(parsed.schemes[0].display_name, "");
    }

    #[test]
    fn test_convert_schemes_malformed_keeps_previous_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join(INPUT_FILE_NAME);
        let output = dir.path().join(OUTPUT_FILE_NAME);
        fs::write(&input, "only:three:fields\n").unwrap();
        fs::write(&output, "previous").unwrap();

        assert!(convert_schemes(&input, &output).is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_convert_schemes_missing_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join(INPUT_FILE_NAME);
        let output = dir.path().join(OUTPUT_FILE_NAME);

        let err = convert_schemes(&input, &output).unwrap_err();
        assert!(matches!(err, ConverterError::MissingInput(ref p) if *p == input));
        assert!(!output.exists());
    }
}
