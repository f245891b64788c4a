use super::error::GenerateError;

/// Canonicalize Rust source text.
///
/// Parses with `syn` and re-prints with `prettyplease`, producing a
/// deterministic normal form: `canonicalize(canonicalize(t)) ==
/// canonicalize(t)`. Generated output is canonicalized before it is
/// persisted or compared, which is what makes byte equality a meaningful
/// idempotence check.
///
/// Note that ordinary `//` comments do not survive (doc comments do); within
/// the generate/merge loop every input has already been through this
/// normalization, so nothing is lost across runs.
///
/// # Errors
///
/// [`GenerateError::Syntax`] when the text is not valid Rust source.
pub fn canonicalize(source: &str) -> Result<String, GenerateError> {
    let file = syn::parse_file(source).map_err(|source| GenerateError::Syntax { source })?;
    Ok(prettyplease::unparse(&file))
}
