use minijinja::{Environment, UndefinedBehavior};
use tracing::debug;

use super::error::GenerateError;
use super::paths::is_renderable;

/// Template assets bundled with the generator.
const BUNDLED: &[(&str, &str)] = &[
    (
        "partials/header.inc",
        include_str!("../../templates/partials/header.inc"),
    ),
    (
        "NAME-service/main.rstemplate",
        include_str!("../../templates/NAME-service/main.rstemplate"),
    ),
    (
        "NAME-service/generated/endpoints.rstemplate",
        include_str!("../../templates/NAME-service/generated/endpoints.rstemplate"),
    ),
    (
        "NAME-service/generated/routes.rstemplate",
        include_str!("../../templates/NAME-service/generated/routes.rstemplate"),
    ),
    (
        "NAME-service/handlers/server/server_handler.rstemplate",
        include_str!("../../templates/NAME-service/handlers/server/server_handler.rstemplate"),
    ),
];

/// Read-only inventory of template assets, keyed by logical path.
///
/// Constructed once and passed explicitly to the components that render;
/// there is no process-global template lookup. Only entries carrying the
/// `.rstemplate` suffix are renderable output files; the rest are partials
/// referenced via `{% include %}`.
pub struct TemplateRegistry {
    env: Environment<'static>,
    entries: Vec<&'static str>,
}

impl TemplateRegistry {
    /// The registry of templates bundled with the tool.
    ///
    /// # Errors
    ///
    /// [`GenerateError::Template`] if a bundled template has a syntax
    /// defect (a packaging bug, surfaced at construction rather than at
    /// first render).
    pub fn bundled() -> Result<Self, GenerateError> {
        Self::from_entries(BUNDLED)
    }

    /// Build a registry from explicit `(logical path, body)` pairs.
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Result<Self, GenerateError> {
        let mut env = Environment::new();
        // Referencing an undefined context field is a template defect, not
        // something to render as empty text.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        let mut paths = Vec::with_capacity(entries.len());
        for &(path, body) in entries {
            env.add_template(path, body)
                .map_err(|source| GenerateError::Template {
                    path: path.to_string(),
                    source,
                })?;
            paths.push(path);
        }
        debug!(templates = paths.len(), "template registry loaded");
        Ok(TemplateRegistry { env, entries: paths })
    }

    /// Logical paths of all registered assets, in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().copied()
    }

    /// Logical paths of renderable templates (partials excluded).
    pub fn renderable(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().copied().filter(|p| is_renderable(p))
    }

    pub(crate) fn template(
        &self,
        template_path: &str,
    ) -> Result<minijinja::Template<'_, '_>, GenerateError> {
        self.env
            .get_template(template_path)
            .map_err(|_| GenerateError::UnknownTemplate {
                path: template_path.to_string(),
            })
    }
}
