use serde::Serialize;

use super::error::GenerateError;
use super::naming::{sanitize_identifier, to_camel_case, to_snake_case};
use crate::spec::Definition;

/// Immutable rendering context shared read-only by every template in one
/// generation run. Built once from the definition, discarded at the end of
/// the run.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    /// Import path of the generated service: `<module_root>/<package>-service`
    pub import_path: String,
    /// Package name from the definition document
    pub package_name: String,
    /// The single service being generated
    pub service: ServiceContext,
}

/// Service metadata exposed to templates.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceContext {
    /// Exported service name
    pub name: String,
    /// Struct name for the generated endpoint set (e.g. `ProtoServiceEndpoints`)
    pub endpoints_struct: String,
    /// Methods in definition order
    pub methods: Vec<MethodContext>,
    /// Message type names referenced by method signatures, de-duplicated in
    /// first-use order; templates derive their import lists from this
    pub message_types: Vec<String>,
}

/// Per-method metadata exposed to templates.
#[derive(Debug, Clone, Serialize)]
pub struct MethodContext {
    /// Exported method name (e.g. `ProtoMethod`)
    pub name: String,
    /// snake_case handler function name (e.g. `proto_method`)
    pub handler_name: String,
    /// Input message type name
    pub request: String,
    /// Output message type name
    pub response: String,
    /// HTTP verb, uppercase
    pub http_method: String,
    /// HTTP path template
    pub http_path: String,
    /// Request field carried in the HTTP body, if any
    pub body_field: Option<String>,
}

impl RenderContext {
    /// Build the context for one generation run.
    ///
    /// # Errors
    ///
    /// [`GenerateError::NoServiceFound`] when the definition declares no
    /// service, [`GenerateError::MultipleServicesFound`] when it declares
    /// more than one; the generator targets exactly one service per run.
    pub fn build(def: &Definition, module_root: &str) -> Result<Self, GenerateError> {
        let service = match def.services.as_slice() {
            [] => return Err(GenerateError::NoServiceFound),
            [svc] => svc,
            more => {
                return Err(GenerateError::MultipleServicesFound { count: more.len() });
            }
        };

        let mut message_types: Vec<String> = Vec::new();
        let mut methods = Vec::new();
        for method in &service.methods {
            for ty in [&method.input, &method.output] {
                if !message_types.contains(ty) {
                    message_types.push(ty.clone());
                }
            }
            methods.push(MethodContext {
                name: method.name.clone(),
                handler_name: sanitize_identifier(&to_snake_case(&method.name)),
                request: method.input.clone(),
                response: method.output.clone(),
                http_method: method.http.method.as_str().to_string(),
                http_path: method.http.path.clone(),
                body_field: method.http.body_field.clone(),
            });
        }

        Ok(RenderContext {
            import_path: format!(
                "{}/{}-service",
                module_root.trim_end_matches('/'),
                def.package
            ),
            package_name: def.package.clone(),
            service: ServiceContext {
                name: service.name.clone(),
                endpoints_struct: format!(
                    "{}Endpoints",
                    to_camel_case(&to_snake_case(&service.name))
                ),
                methods,
                message_types,
            },
        })
    }
}
