use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use super::context::RenderContext;
use super::error::GenerateError;
use super::format::canonicalize;
use super::merge::merge;
use super::paths::template_path_to_output;
use super::registry::TemplateRegistry;
use super::render::render_template;

/// Prior-generation output, keyed by resolved output path.
///
/// Supplied fresh by the caller for every run; the core never persists or
/// caches it, so concurrent runs for different services cannot interfere.
pub type Snapshot = HashMap<String, String>;

/// Generate the output text for one template.
///
/// Resolves the output path, renders the candidate, and, when the snapshot
/// carries an entry for that path, merges the candidate against it so prior
/// operation bodies are preserved. Without a snapshot entry the candidate is
/// returned as-is (first-time generation of that path).
///
/// The result is **not** canonicalized; callers apply [`canonicalize`]
/// before persisting or comparing.
pub fn generate_response_file(
    template_path: &str,
    context: &RenderContext,
    registry: &TemplateRegistry,
    snapshot: &Snapshot,
) -> Result<String, GenerateError> {
    let output_path = template_path_to_output(template_path, &context.package_name);
    let candidate = render_template(registry, template_path, context)?;
    match snapshot.get(&output_path) {
        Some(prior) => {
            debug!(template = template_path, output = %output_path, "merging against prior generation");
            merge(&candidate, prior)
        }
        None => {
            debug!(template = template_path, output = %output_path, "first generation");
            Ok(candidate)
        }
    }
}

/// Generate (or regenerate) every renderable template under `output_dir`.
///
/// For each template the prior output is read back from disk if present and
/// canonicalized before being offered as the snapshot entry, so hand-edited
/// files merge cleanly. With `force` set, prior output is ignored and every
/// file is reset to freshly rendered scaffolding.
///
/// A failing file aborts with context naming it; files already written stay
/// written, the failing one is never partially written.
pub fn generate_project(
    registry: &TemplateRegistry,
    context: &RenderContext,
    output_dir: &Path,
    force: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for template_path in registry.renderable() {
        let output_rel = template_path_to_output(template_path, &context.package_name);
        let target = output_dir.join(&output_rel);

        let mut snapshot = Snapshot::new();
        if !force && target.is_file() {
            let prior = fs::read_to_string(&target)
                .with_context(|| format!("failed to read prior output {target:?}"))?;
            let prior = canonicalize(&prior)
                .with_context(|| format!("prior output {target:?} is not valid source"))?;
            snapshot.insert(output_rel.clone(), prior);
        }

        let merged = generate_response_file(template_path, context, registry, &snapshot)
            .with_context(|| format!("failed to generate {output_rel}"))?;
        let formatted = canonicalize(&merged)
            .with_context(|| format!("generated output for {output_rel} failed to canonicalize"))?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, formatted)
            .with_context(|| format!("failed to write {target:?}"))?;
        println!("✅ Generated {output_rel}");
        written.push(target);
    }
    Ok(written)
}
