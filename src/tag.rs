pub mod interface;
pub mod lightbox;
pub mod registry;

pub use interface::TagRenderer;
pub use lightbox::LightboxTag;
pub use registry::TagRegistry;

/// Builds the registry of built-in tags.
///
/// This is the one place tag handlers are wired up; the returned registry is
/// passed explicitly into the rendering engine instead of living in a
/// process-wide table.
pub fn builtin_tags() -> TagRegistry {
    let mut tags = TagRegistry::new();
    tags.register(lightbox::TAG_NAME, Box::new(LightboxTag));
    tags
}
