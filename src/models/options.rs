// src/models/options.rs

/// How a label or code part is joined to what came before it.
///
/// Only these two shapes exist; anything else was a caller contract
/// violation in the old option-map form and is simply unrepresentable now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Separator {
    /// Wrap the part between a prefix and a suffix, e.g. `(part)`.
    Wrap(String, String),
    /// Prepend a single string, e.g. `_part`.
    Prefix(String),
}

impl Separator {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Separator::Wrap(before, after) => format!("{before}{text}{after}"),
            Separator::Prefix(prefix) => format!("{prefix}{text}"),
        }
    }
}

/// Options for [`crate::render::text::field_label`].
#[derive(Debug, Clone)]
pub struct LabelOptions {
    /// Strip markup from every part before joining. Defaults to `true`.
    pub flatten: bool,

    /// Wrapper put around subquestion and scale parts. Defaults to `("(", ")")`.
    pub separator: Separator,

    /// Maximum characters per part; `None` disables abbreviation.
    /// Abbreviation is meant for exports, HTML display usually keeps full text.
    pub abbreviate: Option<usize>,

    /// Marker inserted at the cut point when abbreviating. Defaults to `"..."`.
    pub ellipsis: String,

    /// Text appended directly after the question part. Defaults to one space.
    pub after_question: String,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            flatten: true,
            separator: Separator::Wrap("(".to_string(), ")".to_string()),
            abbreviate: None,
            ellipsis: "...".to_string(),
            after_question: " ".to_string(),
        }
    }
}

/// Options for [`crate::render::text::field_code`].
#[derive(Debug, Clone)]
pub struct CodeOptions {
    /// Produce the legacy expression-engine form of the code: a single `_`
    /// separator and the raw zero-based scale index.
    pub legacy_compat: bool,

    /// Wrapper put around answer code and scale number. Defaults to `("[", "]")`.
    pub separator: Separator,
}

impl Default for CodeOptions {
    fn default() -> Self {
        Self {
            legacy_compat: false,
            separator: Separator::Wrap("[".to_string(), "]".to_string()),
        }
    }
}

impl CodeOptions {
    /// Separator actually in effect: legacy mode forces the `_` prefix no
    /// matter what the caller configured.
    pub(crate) fn effective_separator(&self) -> Separator {
        if self.legacy_compat {
            Separator::Prefix("_".to_string())
        } else {
            self.separator.clone()
        }
    }
}
