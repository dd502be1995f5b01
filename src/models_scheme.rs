//! Serde models for the palette scheme document (`color_palette_schemes.xml`).
//!
//! Field names map one-to-one onto the XML element names; the `@` prefix
//! marks an attribute for `quick-xml`.

use serde::{Deserialize, Serialize};

/// Root element: `<schemeList>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "schemeList")]
pub struct SchemeList {
    #[serde(rename = "Scheme", default)]
    pub schemes: Vec<Scheme>,
}

/// One `<Scheme name="...">` element, built from one input line.
///
/// Numeric and flag fields are kept as the text that appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    #[serde(rename = "@name")]
    pub id: String,

    /// Never populated from input; always written empty.
    #[serde(rename = "DISPLAY_NAME", default)]
    pub display_name: String,

    #[serde(rename = "MIN", default)]
    pub min: String,

    #[serde(rename = "MAX", default)]
    pub max: String,

    #[serde(rename = "LOG_SCALE", default)]
    pub log_scale: String,

    #[serde(rename = "CPD_FILENAME", default)]
    pub cpd_file_name: String,

    #[serde(rename = "CPD_FILENAME_COLORBLIND", default)]
    pub cpd_file_name_color_blind: String,

    #[serde(rename = "COLORBAR_TITLE", default)]
    pub color_bar_title: String,

    #[serde(rename = "COLORBAR_LABELS", default)]
    pub color_bar_labels: String,

    #[serde(rename = "DESCRIPTION", default)]
    pub description: String,
}

impl Scheme {
    /// Number of colon-separated fields a scheme line must contain.
    pub const FIELD_COUNT: usize = 9;

    /// Builds a scheme from exactly [`Scheme::FIELD_COUNT`] trimmed fields,
    /// in input order. Returns `None` on any other count.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        let [id, min, max, log_scale, cpd, cpd_cb, title, labels, description] = fields else {
            return None;
        };

        Some(Self {
            id: id.to_string(),
            display_name: String::new(),
            min: min.to_string(),
            max: max.to_string(),
            log_scale: log_scale.to_string(),
            cpd_file_name: cpd.to_string(),
            cpd_file_name_color_blind: cpd_cb.to_string(),
            color_bar_title: title.to_string(),
            color_bar_labels: labels.to_string(),
            description: description.to_string(),
        })
    }
}
