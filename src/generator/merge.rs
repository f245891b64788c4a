//! Body-preserving merge of freshly rendered scaffolding against the
//! previous generation of the same file.

use std::collections::HashMap;

use syn::{Block, ImplItem, Item};
use tracing::debug;

use super::error::{GenerateError, MergeSide};

/// Merge newly rendered candidate source against the prior generation.
///
/// Both inputs are parsed into their top-level declarations. The candidate's
/// declaration list drives the walk, so definition ordering (including
/// newly added operations) is preserved, and operations the candidate no
/// longer renders simply vanish. For each candidate operation whose name
/// matches a prior one, the candidate's signature is kept and the **body**
/// is substituted from the prior file; candidate operations with no prior
/// counterpart keep their rendered stub verbatim. Everything that is not an
/// operation (imports, type declarations, file-level boilerplate) always
/// comes from the candidate.
///
/// Operations are free functions and inherent-impl methods, keyed by name
/// (`Type::method` for impl methods). Name uniqueness within one file is
/// assumed, not validated.
///
/// Merging a file against itself never changes it, up to canonical
/// formatting.
///
/// # Errors
///
/// [`GenerateError::Parse`] when either input is not valid Rust source; the
/// [`MergeSide`] in the error says which.
pub fn merge(candidate: &str, prior: &str) -> Result<String, GenerateError> {
    let mut merged = parse(candidate, MergeSide::Candidate)?;
    let prior = parse(prior, MergeSide::Prior)?;

    let bodies = collect_bodies(&prior);
    debug!(prior_operations = bodies.len(), "merging generated source");

    for item in &mut merged.items {
        graft_prior_body(item, &bodies);
    }

    Ok(prettyplease::unparse(&merged))
}

fn parse(source: &str, side: MergeSide) -> Result<syn::File, GenerateError> {
    syn::parse_file(source).map_err(|source| GenerateError::Parse { side, source })
}

/// Self type of an inherent impl, used to namespace its method keys.
fn impl_type_name(item: &syn::ItemImpl) -> Option<String> {
    match &*item.self_ty {
        syn::Type::Path(p) => p.path.segments.last().map(|s| s.ident.to_string()),
        _ => None,
    }
}

/// Index every operation body in the prior file by declaration name.
fn collect_bodies(file: &syn::File) -> HashMap<String, Block> {
    let mut bodies = HashMap::new();
    for item in &file.items {
        match item {
            Item::Fn(f) => {
                bodies.insert(f.sig.ident.to_string(), (*f.block).clone());
            }
            Item::Impl(imp) if imp.trait_.is_none() => {
                let Some(ty) = impl_type_name(imp) else {
                    continue;
                };
                for impl_item in &imp.items {
                    if let ImplItem::Fn(method) = impl_item {
                        bodies.insert(format!("{ty}::{}", method.sig.ident), method.block.clone());
                    }
                }
            }
            _ => {}
        }
    }
    bodies
}

/// Swap in the prior body for a candidate operation of the same name, if one
/// exists. Signature, attributes, and visibility stay the candidate's.
fn graft_prior_body(item: &mut Item, bodies: &HashMap<String, Block>) {
    match item {
        Item::Fn(f) => {
            if let Some(block) = bodies.get(&f.sig.ident.to_string()) {
                f.block = Box::new(block.clone());
            }
        }
        Item::Impl(imp) if imp.trait_.is_none() => {
            let Some(ty) = impl_type_name(imp) else {
                return;
            };
            for impl_item in &mut imp.items {
                if let ImplItem::Fn(method) = impl_item {
                    if let Some(block) = bodies.get(&format!("{ty}::{}", method.sig.ident)) {
                        method.block = block.clone();
                    }
                }
            }
        }
        _ => {}
    }
}
