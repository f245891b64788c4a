//! # scaffgen
//!
//! **scaffgen** is a regeneration-safe scaffolding generator for RPC/REST
//! microservices. It consumes a service interface definition (a small YAML or
//! JSON document listing a package, a service, and its methods with their HTTP
//! bindings), renders a family of Rust source files from bundled templates,
//! and, on later runs against the same logical service, regenerates those
//! files without destroying hand-written logic inside previously generated
//! method bodies.
//!
//! ## Architecture
//!
//! The library is organized into two modules:
//!
//! - **[`spec`]** - interface-definition document types and loading
//! - **[`generator`]** - path resolution, template registry and rendering,
//!   the body-preserving merge engine, canonicalization, and orchestration
//!
//! ## Generation Flow
//!
//! ```text
//! Definition → RenderContext → Template Rendering → Merge (prior output) → Canonicalize
//! ```
//!
//! Each run is stateless: the "previous generation" is supplied explicitly as
//! a snapshot map keyed by output path, so independent runs (and independent
//! output files within a run) never interfere with each other.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scaffgen::generator::{
//!     canonicalize, generate_response_file, RenderContext, Snapshot, TemplateRegistry,
//! };
//! use scaffgen::spec::load_definition;
//!
//! # fn main() -> anyhow::Result<()> {
//! let def = load_definition("service.yaml".as_ref())?;
//! let registry = TemplateRegistry::bundled()?;
//! let ctx = RenderContext::build(&def, "github.com/acme/services")?;
//! let snapshot = Snapshot::new(); // first generation: no prior output
//! for template_path in registry.renderable() {
//!     let code = generate_response_file(template_path, &ctx, &registry, &snapshot)?;
//!     let code = canonicalize(&code)?;
//!     // persist `code` at the resolved output path
//! }
//! # Ok(())
//! # }
//! ```

pub mod generator;
pub mod spec;
