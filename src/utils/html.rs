// src/utils/html.rs

use ammonia::Builder;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// CSS classes the expression engine decorates its rendered output with.
/// Only these survive [`sanitize_expression_markup`].
pub const EXPRESSION_CLASSES: [&str; 11] = [
    "em-expression",
    "em-haveerror",
    "em-var-string",
    "em-function",
    "em-var-static",
    "em-var-before",
    "em-var-after",
    "em-var-inpage",
    "em-var-error",
    "em-assign",
    "em-error",
];

/// Allow-list policy for expression markup: `<span>` and `<a>` only, `title`
/// and `href` attributes, `em-*` classes, http/https URLs.
///
/// `class` must stay out of the attribute allow-list here; ammonia expresses
/// class filtering exclusively through `allowed_classes`.
static EXPRESSION_POLICY: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let tags: HashSet<&str> = ["span", "a"].into_iter().collect();

    let mut tag_attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    tag_attributes.insert("span", ["title"].into_iter().collect());
    tag_attributes.insert("a", ["title", "href"].into_iter().collect());

    let mut allowed_classes: HashMap<&str, HashSet<&str>> = HashMap::new();
    allowed_classes.insert("span", EXPRESSION_CLASSES.into_iter().collect());
    allowed_classes.insert("a", EXPRESSION_CLASSES.into_iter().collect());

    let url_schemes: HashSet<&str> = ["http", "https"].into_iter().collect();

    let mut builder = Builder::default();
    builder
        .tags(tags)
        .tag_attributes(tag_attributes)
        .generic_attributes(HashSet::new())
        .allowed_classes(allowed_classes)
        .url_schemes(url_schemes)
        .link_rel(None);
    builder
});

static SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script(.*?)>(.*?)</script>").expect("script pattern"));

/// Clean HTML with the default allow-list.
///
/// Preserves safe formatting tags (like `<b>`, `<p>`) while stripping
/// dangerous tags (like `<script>`, `<iframe>`) and malicious attributes
/// (like `onclick`). Cleaning is idempotent: already-clean HTML comes back
/// unchanged.
pub fn sanitize_html(input: &str) -> String {
    ammonia::clean(input)
}

/// Clean HTML down to the markup the expression engine emits.
///
/// Only `<span title>` and `<a title href>` survive, with classes limited to
/// [`EXPRESSION_CLASSES`] and URLs to http/https. Everything else is removed,
/// script/style content included.
pub fn sanitize_expression_markup(input: &str) -> String {
    EXPRESSION_POLICY.clean(input).to_string()
}

/// Defuse script elements while keeping them readable for debugging: each
/// `<script>...</script>` is replaced by a `<pre>` block showing the original
/// body as literal text. Matching is case-insensitive and non-greedy, and
/// only the script tag itself is touched.
pub fn filter_script(input: &str) -> String {
    SCRIPT
        .replace_all(input, "<pre>&lt;script&gt;${2}&lt;/script&gt;</pre>")
        .to_string()
}
