// src/models/field.rs

use serde::{Deserialize, Serialize};

/// One entry of the survey field map: everything needed to derive a display
/// label and a machine code for a form field.
///
/// Records come from the surrounding application and may carry any subset of
/// keys, so every field is optional; missing keys deserialize to `None`.
/// The formatters never mutate a record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRecord {
    /// Unique column name of the field (e.g. "12345X7X42").
    pub fieldname: Option<String>,

    /// Question text, possibly containing HTML markup.
    pub question: Option<String>,

    /// Subquestion text.
    pub subquestion: Option<String>,

    /// Subquestion text, first axis of dual-axis questions.
    pub subquestion1: Option<String>,

    /// Subquestion text, second axis of dual-axis questions.
    pub subquestion2: Option<String>,

    /// Scale heading text.
    pub scale: Option<String>,

    /// Zero-based scale index, kept as a string like the rest of the map.
    pub scale_id: Option<String>,

    /// Question code (short title).
    pub title: Option<String>,

    /// Answer code. A non-empty value marks the field as a subquestion row.
    pub aid: Option<String>,
}

impl FieldRecord {
    /// The field belongs to a subquestion row iff `aid` is present and non-empty.
    pub fn has_subquestion(&self) -> bool {
        self.aid.as_deref().is_some_and(|aid| !aid.is_empty())
    }

    /// Scale index as a number; missing or unparsable values count as 0.
    pub fn scale_number(&self) -> i64 {
        self.scale_id
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }
}
