use super::interface::TagRenderer;

/// Name the lightbox handler is registered under.
pub const TAG_NAME: &str = "lightbox";

/// Directory all lightbox image paths are served from.
const IMG_PREFIX: &str = "/img/";

/// Arguments of one `{% lightbox path, title, alt %}` invocation.
///
/// Produced by splitting the raw directive text on commas and trimming each
/// segment. A missing `path` or `title` segment becomes the empty string; a
/// missing `alt` falls back to `title` at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxArgs {
    pub path: String,
    pub title: String,
    pub alt: Option<String>,
}

impl LightboxArgs {
    /// Parses raw argument text into its segments.
    ///
    /// # Arguments
    /// * `raw` - The unparsed text following the tag name
    ///
    /// # Returns
    /// * `LightboxArgs` - The bound segments; never fails
    pub fn parse(raw: &str) -> Self {
        let mut segments = raw.split(',').map(str::trim);
        let path = segments.next().unwrap_or("").to_string();
        let title = segments.next().unwrap_or("").to_string();
        let alt = segments.next().map(str::to_string);
        Self { path, title, alt }
    }

    /// The effective `alt` text: the third segment when present, `title`
    /// otherwise.
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or(&self.title)
    }
}

/// Renders `{% lightbox path, title, alt %}` into an anchor-wrapped image.
///
/// Values are interpolated verbatim, without HTML escaping, keeping the
/// output byte-compatible with existing site content.
pub struct LightboxTag;

impl TagRenderer for LightboxTag {
    fn render(&self, args: &str) -> String {
        let args = LightboxArgs::parse(args);
        format!(
            r#"<a href="{prefix}{path}" rel="lightbox" title="{title}"><img src="{prefix}{path}" alt="{alt}" /></a>"#,
            prefix = IMG_PREFIX,
            path = args.path,
            title = args.title,
            alt = args.alt_text(),
        )
    }
}
