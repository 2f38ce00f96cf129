// src/render/text.rs

use crate::models::field::FieldRecord;
use crate::models::options::{CodeOptions, LabelOptions};
use crate::utils::text::flatten_ellipsize;

/// String truthiness as the field map uses it: the empty string and `"0"`
/// are falsy, everything else is truthy.
fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty() && v != "0")
}

/// Complete display text for one field map entry.
///
/// Question text first, then the subquestion parts (gated on a non-empty
/// `aid`), then the scale heading, each flattened/abbreviated on its own and
/// wrapped in the configured separator. Downstream exports key on the part
/// order, it never changes.
pub fn field_label(field: &FieldRecord, opts: &LabelOptions) -> String {
    if field.fieldname.is_none() {
        return String::new();
    }

    let part =
        |text: &str| flatten_ellipsize(text, opts.flatten, opts.abbreviate, &opts.ellipsis, 1.0);

    let mut label = part(field.question.as_deref().unwrap_or_default());
    label.push_str(&opts.after_question);

    if field.has_subquestion() {
        for sub in [&field.subquestion, &field.subquestion1, &field.subquestion2] {
            if let Some(text) = sub {
                label.push_str(&opts.separator.apply(&part(text)));
            }
        }
    }
    // Scale is appended regardless of the subquestion gate.
    if is_truthy(field.scale.as_deref()) {
        let scale = field.scale.as_deref().unwrap_or_default();
        label.push_str(&opts.separator.apply(&part(scale)));
    }

    label
}

/// Complete machine code for one field map entry.
///
/// The question title, then the answer code, then the one-based scale number.
/// `legacy_compat` switches to the expression-engine form: `_` separators and
/// the raw zero-based scale index. Entries without a title fall back to the
/// raw fieldname.
pub fn field_code(field: &FieldRecord, opts: &CodeOptions) -> String {
    let Some(fieldname) = field.fieldname.as_deref() else {
        return String::new();
    };

    if !is_truthy(field.title.as_deref()) {
        return fieldname.to_string();
    }

    let separator = opts.effective_separator();

    let mut code = field.title.clone().unwrap_or_default();
    if field.has_subquestion() {
        code.push_str(&separator.apply(field.aid.as_deref().unwrap_or_default()));
    }
    if is_truthy(field.scale.as_deref()) {
        let scale_num = if opts.legacy_compat {
            field.scale_number()
        } else {
            field.scale_number() + 1
        };
        code.push_str(&separator.apply(&scale_num.to_string()));
    }

    code
}
