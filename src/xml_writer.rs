//! XML serialization and output file handling.
//!
//! Documents are rendered in memory first, then written to a temp file next
//! to the target and renamed into place.

use crate::errors::ConverterError;
use log::debug;
use quick_xml::se::Serializer;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const INDENT_CHAR: char = ' ';
const INDENT_SIZE: usize = 4;

/// Render a document as pretty-printed XML, declaration included.
pub fn to_pretty_string<T: Serialize>(doc: &T) -> Result<String, ConverterError> {
    let mut buffer = String::from(XML_DECLARATION);

    let mut serializer = Serializer::new(&mut buffer);
    serializer.indent(INDENT_CHAR, INDENT_SIZE);
    doc.serialize(serializer).map_err(|e| {
        ConverterError::SerializationError(format!("Failed to serialize XML document: {}", e))
    })?;

    buffer.push('\n');
    Ok(buffer)
}

/// Write a document as XML
pub fn write<W: Write, T: Serialize>(mut writer: W, doc: &T) -> Result<(), ConverterError> {
    let xml = to_pretty_string(doc)?;
    writer
        .write_all(xml.as_bytes())
        .map_err(|e| ConverterError::Io(e, "Failed to write XML content".to_string()))?;
    writer
        .flush()
        .map_err(|e| ConverterError::Io(e, "Failed to flush XML content".to_string()))?;
    Ok(())
}

/// Write a document to `path`, replacing whatever is there.
///
/// The target is only replaced once the complete document has been written;
/// on failure the temp file is removed and the previous output is untouched.
pub fn write_file<T: Serialize>(path: &Path, doc: &T) -> Result<(), ConverterError> {
    let temp_path = temp_path_for(path);
    debug!("Writing XML to temp file {}", temp_path.display());

    let result = write_then_rename(&temp_path, path, doc);
    if result.is_err() && temp_path.exists() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_then_rename<T: Serialize>(
    temp_path: &Path,
    path: &Path,
    doc: &T,
) -> Result<(), ConverterError> {
    let file = File::create(temp_path)
        .map_err(|e| ConverterError::Io(e, format!("Failed to create {}", temp_path.display())))?;
    write(BufWriter::new(file), doc)?;

    fs::rename(temp_path, path)
        .map_err(|e| ConverterError::Io(e, format!("Failed to replace {}", path.display())))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.xml".to_string());
    path.with_file_name(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()))
}
