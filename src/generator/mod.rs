//! # Generator Module
//!
//! The regeneration-safe code generation core. From a parsed interface
//! definition it renders a family of Rust source files, and on later runs it
//! merges freshly rendered scaffolding against the previous generation so
//! hand-written method bodies survive.
//!
//! ## Pipeline
//!
//! ```text
//! Definition → RenderContext → render (minijinja) → merge (syn) → canonicalize (prettyplease)
//! ```
//!
//! 1. **Context** - [`RenderContext::build`] derives the package name, import
//!    path, and per-method render metadata from the definition; exactly one
//!    service must be present.
//! 2. **Rendering** - the bundled [`TemplateRegistry`] holds template assets
//!    keyed by logical path (`NAME` placeholders, `.rstemplate` suffix) and
//!    renders them with strict undefined-variable checking.
//! 3. **Merging** - [`merge`] keeps the candidate's structure (imports, type
//!    declarations, signatures, added/removed operations) and substitutes
//!    operation bodies from the prior generation where names match.
//! 4. **Canonicalization** - [`canonicalize`] normalizes output so that byte
//!    equality is a meaningful idempotence check.
//!
//! ## Regeneration contract
//!
//! - Regenerating twice from an unchanged definition is a no-op.
//! - A method added to the definition renders its stub; existing edited
//!   bodies are preserved byte-identically.
//! - A method removed from the definition disappears, silently; suppressing
//!   an operation is a valid definition edit.
//!
//! The "previous generation" is always an explicit input (a [`Snapshot`] map
//! keyed by resolved output path); the core never caches prior output.

mod context;
mod error;
mod format;
mod merge;
mod naming;
mod paths;
mod project;
mod registry;
mod render;

pub use context::{MethodContext, RenderContext, ServiceContext};
pub use error::{GenerateError, MergeSide};
pub use format::canonicalize;
pub use merge::merge;
pub use naming::{sanitize_identifier, to_camel_case, to_snake_case};
pub use paths::{is_renderable, template_path_to_output};
pub use project::{generate_project, generate_response_file, Snapshot};
pub use registry::TemplateRegistry;
pub use render::render_template;
