//! Serde models for the scheme lookup table (`color_palette_scheme_defaults.xml`).

use serde::{Deserialize, Serialize};

/// Root element: `<colorSchemeLut>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "colorSchemeLut")]
pub struct ColorSchemeLut {
    #[serde(rename = "KEY", default)]
    pub keys: Vec<LutKey>,
}

/// One `<KEY REGEX="...">` entry mapping a pattern to a scheme id.
///
/// The regex is stored as written; it is matched by whoever consumes the
/// table, never here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LutKey {
    #[serde(rename = "@REGEX")]
    pub key_regex: String,

    #[serde(rename = "SCHEME_ID", default)]
    pub scheme_id: String,

    /// Never populated from input; always written empty.
    #[serde(rename = "DESCRIPTION", default)]
    pub description: String,
}

impl LutKey {
    /// Minimum number of colon-separated fields a lookup line must contain.
    pub const MIN_FIELD_COUNT: usize = 2;

    /// Builds a key from the first two fields; anything after them is ignored.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        let [key_regex, scheme_id, ..] = fields else {
            return None;
        };

        Some(Self {
            key_regex: key_regex.to_string(),
            scheme_id: scheme_id.to_string(),
            description: String::new(),
        })
    }
}
