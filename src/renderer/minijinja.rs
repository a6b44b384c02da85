use crate::{
    error::Result, renderer::interface::TemplateRenderer, tag::TagRegistry,
};
use minijinja::Environment;
use serde_json::json;

/// MiniJinja-based template rendering engine.
///
/// Tag directives are expanded before the engine evaluates the template, so
/// handlers always see the raw argument text from the source.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
    /// Tag handlers applied ahead of engine evaluation
    tags: TagRegistry,
    /// Default context that will be merged with any provided context
    default_context: serde_json::Value,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer around an explicit tag registry.
    pub fn new(tags: TagRegistry) -> Self {
        let mut env = Environment::new();
        // Rendered pages are files; their final newline must survive.
        env.set_keep_trailing_newline(true);
        let default_context = json!({
            "generator": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            }
        });

        Self { env, tags, default_context }
    }

    /// Internal helper to render templates with context merging
    fn render_internal(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let expanded = self.tags.expand(template);

        let mut env = self.env.clone();
        let name = template_name.unwrap_or("temp");
        env.add_template_owned(name.to_string(), expanded)?;

        // Merge the default context with the provided context
        let merged_context = if let (Some(default_obj), Some(context_obj)) =
            (self.default_context.as_object(), context.as_object())
        {
            let mut result = default_obj.clone();
            for (key, value) in context_obj {
                result.insert(key.clone(), value.clone());
            }
            json!(result)
        } else {
            // If either isn't an object, just use the provided context
            context.clone()
        };

        let tmpl = env.get_template(name)?;
        Ok(tmpl.render(merged_context)?)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new(crate::tag::builtin_tags())
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        self.render_internal(template, context, template_name)
    }
}
