use std::fs;

use scaffgen::generator::{generate_project, RenderContext, TemplateRegistry};
use scaffgen::spec::load_definition_str;

const DEF: &str = r#"
package: general
services:
  - name: ProtoService
    methods:
      - name: ProtoMethod
        input: RequestMessage
        output: ResponseMessage
        http:
          method: GET
          path: /route
"#;

fn context() -> RenderContext {
    let def = load_definition_str(DEF).expect("definition parses");
    RenderContext::build(&def, "github.com/acme/services").expect("context builds")
}

#[test]
fn test_generate_project_writes_expected_tree() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = TemplateRegistry::bundled().expect("bundled templates load");
    let written = generate_project(&registry, &context(), dir.path(), false).expect("generation");

    assert_eq!(written.len(), 4);
    for expected in [
        "general-service/main.rs",
        "general-service/generated/endpoints.rs",
        "general-service/generated/routes.rs",
        "general-service/handlers/server/server_handler.rs",
    ] {
        assert!(
            dir.path().join(expected).is_file(),
            "missing output file {expected}"
        );
    }
}

#[test]
fn test_generate_project_rerun_is_noop() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = TemplateRegistry::bundled().expect("bundled templates load");
    let ctx = context();

    let written = generate_project(&registry, &ctx, dir.path(), false).expect("first run");
    let before: Vec<String> = written
        .iter()
        .map(|p| fs::read_to_string(p).expect("read generated file"))
        .collect();

    let rewritten = generate_project(&registry, &ctx, dir.path(), false).expect("second run");
    let after: Vec<String> = rewritten
        .iter()
        .map(|p| fs::read_to_string(p).expect("read regenerated file"))
        .collect();

    assert_eq!(before, after);
}

#[test]
fn test_generate_project_preserves_hand_edit_on_rerun() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = TemplateRegistry::bundled().expect("bundled templates load");
    let ctx = context();

    generate_project(&registry, &ctx, dir.path(), false).expect("first run");

    let handler = dir
        .path()
        .join("general-service/handlers/server/server_handler.rs");
    let original = fs::read_to_string(&handler).expect("read handler");
    let edited = original.replace(
        "Err(Unimplemented)",
        "Ok(ResponseMessage { output: req.input })",
    );
    assert_ne!(original, edited);
    fs::write(&handler, edited).expect("write hand edit");

    generate_project(&registry, &ctx, dir.path(), false).expect("second run");
    let regenerated = fs::read_to_string(&handler).expect("read regenerated handler");
    assert!(regenerated.contains("Ok(ResponseMessage { output: req.input })"));
    assert!(!regenerated.contains("Err(Unimplemented)"));
}

#[test]
fn test_generate_project_force_resets_hand_edit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = TemplateRegistry::bundled().expect("bundled templates load");
    let ctx = context();

    generate_project(&registry, &ctx, dir.path(), false).expect("first run");

    let handler = dir
        .path()
        .join("general-service/handlers/server/server_handler.rs");
    let original = fs::read_to_string(&handler).expect("read handler");
    let edited = original.replace(
        "Err(Unimplemented)",
        "Ok(ResponseMessage { output: req.input })",
    );
    fs::write(&handler, edited).expect("write hand edit");

    generate_project(&registry, &ctx, dir.path(), true).expect("forced run");
    let regenerated = fs::read_to_string(&handler).expect("read regenerated handler");
    assert_eq!(original, regenerated);
}

#[test]
fn test_generate_project_rejects_corrupt_prior_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = TemplateRegistry::bundled().expect("bundled templates load");
    let ctx = context();

    generate_project(&registry, &ctx, dir.path(), false).expect("first run");

    let handler = dir
        .path()
        .join("general-service/handlers/server/server_handler.rs");
    fs::write(&handler, "pub fn broken( {").expect("corrupt prior output");

    let err = generate_project(&registry, &ctx, dir.path(), false).unwrap_err();
    assert!(err.to_string().contains("not valid source"));
}
