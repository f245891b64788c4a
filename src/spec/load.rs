use super::Definition;
use std::path::Path;

/// Load an interface-definition document from disk.
///
/// The format is picked by extension: `.yaml`/`.yml` parse as YAML, anything
/// else as JSON.
pub fn load_definition(file_path: &Path) -> anyhow::Result<Definition> {
    let content = std::fs::read_to_string(file_path)?;
    let is_yaml = matches!(
        file_path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let def: Definition = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(def)
}

/// Parse an interface-definition document from an in-memory string.
///
/// Always parses as YAML; JSON documents parse too since YAML is a superset.
pub fn load_definition_str(content: &str) -> anyhow::Result<Definition> {
    Ok(serde_yaml::from_str(content)?)
}
