// src/render/link.rs

use url::Url;

use crate::error::ViewError;

/// Resolves a logical `controller/action` route to an href.
///
/// The routing layer lives outside this crate; rendering code only needs this
/// one capability, so it is the whole contract.
pub trait UrlResolver {
    fn resolve(&self, route: &str) -> String;
}

/// [`UrlResolver`] joining routes onto a fixed base URL.
#[derive(Debug, Clone)]
pub struct RouteTable {
    base: Url,
}

impl RouteTable {
    pub fn new(base: &str) -> Result<Self, ViewError> {
        let base = Url::parse(base)?;
        Ok(Self { base })
    }
}

impl UrlResolver for RouteTable {
    fn resolve(&self, route: &str) -> String {
        self.base
            .join(route)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| route.to_string())
    }
}

/// Optional attributes for [`image_link`].
#[derive(Debug, Clone)]
pub struct ImageLinkOptions {
    /// `target` attribute, emitted when non-empty.
    pub target: Option<String>,

    /// `class` attribute, emitted when non-empty. Defaults to `"imagelink"`.
    pub class: String,

    /// Extra attributes, emitted in order. Double quotes in values are
    /// escaped to `&quot;`; any further escaping is the caller's job.
    pub attributes: Vec<(String, String)>,
}

impl Default for ImageLinkOptions {
    fn default() -> Self {
        Self {
            target: None,
            class: "imagelink".to_string(),
            attributes: Vec::new(),
        }
    }
}

/// Build the HTML for a link that consists of only an image with alt text.
///
/// `image_name` is appended to `image_base_url`. A `link_url` of `None` or
/// `"#"` produces a no-op link; anything else is resolved through `resolver`.
/// `link_text` lands in the image's `alt` and `title` verbatim, callers
/// sanitize it beforehand.
pub fn image_link(
    resolver: &dyn UrlResolver,
    image_base_url: &str,
    image_name: &str,
    link_url: Option<&str>,
    link_text: &str,
    opts: &ImageLinkOptions,
) -> String {
    let href = match link_url {
        Some(route) if route != "#" => resolver.resolve(route),
        _ => "#".to_string(),
    };

    let mut output = format!("<a href=\"{}\"", href);
    if !opts.class.is_empty() {
        output.push_str(&format!(" class=\"{}\"", opts.class));
    }
    if let Some(target) = opts.target.as_deref().filter(|t| !t.is_empty()) {
        output.push_str(&format!(" target=\"{}\"", target));
    }
    for (name, value) in &opts.attributes {
        output.push_str(&format!(" {}=\"{}\"", name, value.replace('"', "&quot;")));
    }
    output.push_str(&format!(
        "><img src=\"{}{}\" alt=\"{}\" title=\"{}\"></a>",
        image_base_url, image_name, link_text, link_text
    ));

    output
}
