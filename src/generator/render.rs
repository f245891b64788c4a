use super::context::RenderContext;
use super::error::GenerateError;
use super::registry::TemplateRegistry;

/// Render one template with the run's context, producing unformatted
/// candidate source text.
///
/// Rendering is deterministic: identical template plus identical context
/// always produce byte-identical text. Templates see only the context, no
/// hidden global state.
///
/// # Errors
///
/// [`GenerateError::UnknownTemplate`] when no asset is registered at
/// `template_path`; [`GenerateError::Template`] when the template references
/// an undefined context field.
pub fn render_template(
    registry: &TemplateRegistry,
    template_path: &str,
    context: &RenderContext,
) -> Result<String, GenerateError> {
    let template = registry.template(template_path)?;
    template
        .render(context)
        .map_err(|source| GenerateError::Template {
            path: template_path.to_string(),
            source,
        })
}
