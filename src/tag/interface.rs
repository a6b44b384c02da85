/// Trait for tag handlers invoked during directive expansion.
pub trait TagRenderer {
    /// Renders a tag from its raw argument text.
    ///
    /// # Arguments
    /// * `args` - The unparsed text between the tag name and the closing
    ///   delimiter, captured before any engine evaluation
    ///
    /// # Returns
    /// * `String` - The replacement text for the directive
    ///
    /// Handlers have no error path: malformed argument text produces
    /// whatever output falls out of it, never a failure.
    fn render(&self, args: &str) -> String;
}
