use super::interface::TagRenderer;
use regex::Regex;
use std::collections::HashMap;

/// Matches one `{% name args %}` directive. Directives are single-line; the
/// argument text is captured verbatim up to the closing delimiter.
const DIRECTIVE_PATTERN: &str = r"\{%\s*([A-Za-z_][A-Za-z0-9_]*)\s*(.*?)\s*%\}";

/// An explicit mapping from tag names to their handlers.
///
/// Built once at startup (see [`crate::tag::builtin_tags`]) and handed to the
/// rendering engine; there is no global registration side effect.
pub struct TagRegistry {
    tags: HashMap<String, Box<dyn TagRenderer>>,
    directive_re: Regex,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
            directive_re: Regex::new(DIRECTIVE_PATTERN)
                .expect("directive pattern is a valid regex"),
        }
    }

    /// Associates `name` with a handler. Registering the same name again
    /// replaces the earlier handler.
    pub fn register<S: Into<String>>(&mut self, name: S, renderer: Box<dyn TagRenderer>) {
        self.tags.insert(name.into(), renderer);
    }

    /// Looks up the handler registered under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn TagRenderer> {
        self.tags.get(name).map(|renderer| renderer.as_ref())
    }

    /// Expands every registered directive in `source`.
    ///
    /// Directives whose name has no registered handler are left untouched,
    /// so the engine's own control tags pass through to it unchanged.
    pub fn expand(&self, source: &str) -> String {
        self.directive_re
            .replace_all(source, |caps: &regex::Captures| {
                let name = &caps[1];
                match self.tags.get(name) {
                    Some(renderer) => {
                        renderer.render(caps.get(2).map_or("", |m| m.as_str()))
                    }
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new()
    }
}
