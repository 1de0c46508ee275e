//! Template renderer used by the generator.
//! Wraps the placeholder engine behind a trait so generation does not
//! depend on a concrete substitution strategy.
use crate::template::{render, scan, Model};
use log::debug;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given model.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `model` - Values for the placeholders in `template`
    ///
    /// # Returns
    /// * `String` - Rendered template string
    fn render(&self, template: &str, model: &Model) -> String;
}

/// Renderer backed by the `{{name}}` placeholder engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, model: &Model) -> String {
        let placeholders = scan(template);
        debug!("Found {} placeholders.", placeholders.len());
        render(template, &placeholders, model)
    }
}
