//! # Spec Module
//!
//! Interface-definition document parsing and types. A definition document
//! describes one package with its services; each service lists its methods
//! with input/output message names and an HTTP transport binding. This module
//! owns the narrow IR contract: everything downstream consumes only the
//! parsed [`Definition`] value.

mod load;
mod types;

pub use load::{load_definition, load_definition_str};
pub use types::{Definition, HttpBinding, MethodDef, ServiceDef};
