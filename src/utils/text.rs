// src/utils/text.rs

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern"));

/// Reduce markup to plain readable text: tags stripped, the basic HTML
/// entities decoded, whitespace runs collapsed to single spaces, ends trimmed.
pub fn flatten_text(text: &str) -> String {
    let stripped = TAG.replace_all(text, " ");
    let decoded = decode_basic_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Only the entities editors put into question text; a full entity table
/// belongs to the sanitizer, not here. `&amp;` goes last.
fn decode_basic_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Truncate to at most `max_chars` visible characters.
///
/// Keeps `floor(budget * position)` characters from the start and the rest of
/// the budget from the end, with `marker` at the cut point. The marker counts
/// toward the budget, so the result never exceeds `max_chars`. Counting is by
/// `char`, a cut never lands inside a multi-byte code point.
pub fn ellipsize(text: &str, max_chars: usize, position: f64, marker: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return text.to_string();
    }

    let marker_len = marker.chars().count();
    if marker_len >= max_chars {
        return marker.chars().take(max_chars).collect();
    }

    let position = position.clamp(0.0, 1.0);
    let budget = max_chars - marker_len;
    let head = (budget as f64 * position).floor() as usize;
    let tail = budget - head;

    let mut out = String::with_capacity(max_chars * 4);
    out.extend(chars[..head].iter());
    out.push_str(marker);
    out.extend(chars[chars.len() - tail..].iter());
    out
}

/// Apply the flatten/abbreviate options to one text part.
///
/// Abbreviating implies flattening first; cutting through markup would leave
/// dangling fragments. With both options off the input passes through
/// untouched. `position` is the fraction of the budget kept at the front,
/// 1.0 meaning a plain end cut.
pub fn flatten_ellipsize(
    text: &str,
    flatten: bool,
    abbreviate: Option<usize>,
    ellipsis: &str,
    position: f64,
) -> String {
    let abbreviate = abbreviate.filter(|n| *n > 0);
    if !flatten && abbreviate.is_none() {
        return text.to_string();
    }

    let flat = flatten_text(text);
    match abbreviate {
        Some(max) => ellipsize(&flat, max, position, ellipsis),
        None => flat,
    }
}
