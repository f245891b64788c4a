use http::Method;
use serde::{Deserialize, Deserializer};

/// Root of a parsed interface-definition document.
///
/// A document declares one package and the services defined in it. The
/// generator targets exactly one service per run; that invariant is enforced
/// when the render context is built, not here, so a multi-service document
/// still parses.
#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    /// Package name, used for output paths and the generated import path
    pub package: String,
    /// Services declared in the document, in declaration order
    #[serde(default)]
    pub services: Vec<ServiceDef>,
}

/// One service: a named, ordered collection of methods.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDef {
    /// Exported service name (e.g. `ProtoService`)
    pub name: String,
    /// Methods in declaration order; order determines generation order
    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

/// One RPC method with its message shapes and transport binding.
///
/// Every field is required: a method without a name, shapes, or binding
/// cannot be rendered, so absence is a load-time error rather than something
/// to recover from later.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodDef {
    /// Exported method name (e.g. `ProtoMethod`)
    pub name: String,
    /// Input message name
    pub input: String,
    /// Output message name
    pub output: String,
    /// HTTP transport binding
    pub http: HttpBinding,
}

/// HTTP binding for a method: verb, path template, optional body field.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpBinding {
    /// HTTP verb, case-insensitive in the document
    #[serde(deserialize_with = "de_method")]
    pub method: Method,
    /// Path template (e.g. `/route`, `/users/{id}`)
    pub path: String,
    /// Request field carried in the HTTP body, if any
    #[serde(default)]
    pub body_field: Option<String>,
}

fn de_method<'de, D>(deserializer: D) -> Result<Method, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Method::from_bytes(raw.to_ascii_uppercase().as_bytes()).map_err(serde::de::Error::custom)
}
