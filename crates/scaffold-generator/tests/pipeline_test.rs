//! End-to-end tests for the generation pipeline.

use scaffold_codegen::TemplateStore;
use scaffold_files::{ArtifactWriter, CollectingPreview, FileStatus, WriteOptions};
use scaffold_generator::{
    ApiFramework, ApiRequest, ComponentFramework, ComponentRequest, Generator, TestFramework,
    TestRequest,
};
use std::fs;
use tempfile::TempDir;

fn run(
    request: impl Into<scaffold_generator::GenerationRequest>,
    out: &std::path::Path,
    options: WriteOptions,
) -> (
    scaffold_core::Result<scaffold_generator::GenerationReport>,
    CollectingPreview,
) {
    let generator = Generator::bundled().unwrap();
    let writer = ArtifactWriter::new(out, options);
    let mut preview = CollectingPreview::default();
    let result = generator.generate(&request.into(), &writer, &mut preview);
    (result, preview)
}

#[test]
fn test_posts_router_end_to_end() {
    let temp = TempDir::new().unwrap();
    let (result, _) = run(
        ApiRequest::new("posts", ApiFramework::Fastapi),
        temp.path(),
        WriteOptions::new(),
    );
    let report = result.unwrap();

    let path = temp.path().join("posts_router.py");
    assert_eq!(report.written().collect::<Vec<_>>(), vec![path.as_path()]);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("router = APIRouter(prefix=\"/api/v1/posts\", tags=[\"posts\"])"));
    assert!(content.contains("class Post(PostBase)"));
    assert!(content.contains("def get_post("));
    assert!(content.contains("def list_posts("));
}

#[test]
fn test_express_router_end_to_end() {
    let temp = TempDir::new().unwrap();
    let (result, _) = run(
        ApiRequest::new("users", ApiFramework::Express),
        temp.path(),
        WriteOptions::new(),
    );
    result.unwrap();

    let content = fs::read_to_string(temp.path().join("users.routes.ts")).unwrap();
    assert!(content.contains("import { Router"));
    assert!(content.contains("Router()"));
    assert!(content.contains("router.get"));
    assert!(content.contains("router.post"));
    assert!(content.contains("export interface User {"));
}

#[test]
fn test_irregular_resource_model_name() {
    let temp = TempDir::new().unwrap();
    let (result, _) = run(
        ApiRequest::new("people", ApiFramework::Fastapi),
        temp.path(),
        WriteOptions::new(),
    );
    result.unwrap();

    let content = fs::read_to_string(temp.path().join("people_router.py")).unwrap();
    assert!(content.contains("class Person(PersonBase)"));
    assert!(content.contains("def get_person("));
}

#[test]
fn test_hyphenated_resource_model_is_pascal_case() {
    let temp = TempDir::new().unwrap();
    let (result, _) = run(
        ApiRequest::new("user-profiles", ApiFramework::Express),
        temp.path(),
        WriteOptions::new(),
    );
    result.unwrap();

    let content = fs::read_to_string(temp.path().join("user-profiles.routes.ts")).unwrap();
    assert!(content.contains("UserProfile"));
}

#[test]
fn test_preview_creates_nothing_and_reports_content() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("not-created");

    let (result, preview) = run(
        ComponentRequest::new("UserCard", ComponentFramework::React).with_test(true),
        &out,
        WriteOptions::new().with_preview(true),
    );
    let report = result.unwrap();

    assert!(!out.exists());
    assert!(report.preview);
    assert_eq!(report.previewed().count(), 3);
    assert_eq!(report.written().count(), 0);

    let entries = preview.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].path, out.join("UserCard/UserCard.tsx"));
    assert!(entries[0].content.contains("interface UserCardProps"));
    assert!(entries[1].content.contains("@testing-library/react"));
}

#[test]
fn test_preview_ignores_existing_destination() {
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("users_router.py");
    fs::write(&existing, "original").unwrap();

    let (result, preview) = run(
        ApiRequest::new("users", ApiFramework::Fastapi),
        temp.path(),
        WriteOptions::new().with_preview(true),
    );

    assert!(result.is_ok());
    assert_eq!(preview.entries().len(), 1);
    assert_eq!(fs::read_to_string(&existing).unwrap(), "original");
}

#[test]
fn test_existing_destination_without_force_is_untouched() {
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("users_router.py");
    fs::write(&existing, "original").unwrap();

    let (result, _) = run(
        ApiRequest::new("users", ApiFramework::Fastapi),
        temp.path(),
        WriteOptions::new(),
    );

    let err = result.unwrap_err();
    assert!(err.is_destination_exists());
    assert!(err.to_string().contains("Use --force to overwrite"));
    assert_eq!(fs::read_to_string(&existing).unwrap(), "original");
}

#[test]
fn test_force_overwrites_destination() {
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("users_router.py");
    fs::write(&existing, "original").unwrap();

    let (result, _) = run(
        ApiRequest::new("users", ApiFramework::Fastapi),
        temp.path(),
        WriteOptions::new().with_force(true),
    );

    result.unwrap();
    assert!(fs::read_to_string(&existing).unwrap().contains("class User("));
}

#[test]
fn test_partial_component_is_not_rolled_back() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("NavBar");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.ts"), "existing").unwrap();

    let (result, _) = run(
        ComponentRequest::new("NavBar", ComponentFramework::React),
        temp.path(),
        WriteOptions::new(),
    );

    assert!(result.unwrap_err().is_destination_exists());
    assert!(dir.join("NavBar.tsx").exists());
    assert_eq!(fs::read_to_string(dir.join("index.ts")).unwrap(), "existing");
}

#[test]
fn test_validation_failure_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");

    for request in [
        scaffold_generator::GenerationRequest::from(ApiRequest::new(
            "{evil}",
            ApiFramework::Fastapi,
        )),
        ComponentRequest::new("navBar", ComponentFramework::Vue).into(),
        TestRequest::new("svc", ["ok", "bad{x}"], TestFramework::Pytest).into(),
        TestRequest::new("1svc", ["ok"], TestFramework::Jest).into(),
    ] {
        let (result, preview) = run(request, &out, WriteOptions::new());
        assert!(result.unwrap_err().is_validation_error());
        assert!(preview.entries().is_empty());
        assert!(!out.exists());
    }
}

#[test]
fn test_vue_component_files() {
    let temp = TempDir::new().unwrap();
    let (result, _) = run(
        ComponentRequest::new("UserProfile", ComponentFramework::Vue).with_test(true),
        temp.path(),
        WriteOptions::new(),
    );
    let report = result.unwrap();

    assert!(report.files.iter().all(|f| f.status == FileStatus::Written));
    let content = fs::read_to_string(temp.path().join("UserProfile.vue")).unwrap();
    assert!(content.contains("<template>"));
    assert!(content.contains("<script setup lang=\"ts\">"));
    assert!(content.contains("<style"));
    assert!(temp.path().join("UserProfile.test.ts").exists());
}

#[test]
fn test_missing_template_in_custom_root_aborts_before_writing() {
    let templates = TempDir::new().unwrap();
    fs::create_dir_all(templates.path().join("component")).unwrap();
    fs::write(
        templates.path().join("component/react_component.tsx.hbs"),
        "export const {{name}} = 1;",
    )
    .unwrap();

    let out = TempDir::new().unwrap();
    let generator = Generator::new(TemplateStore::new(templates.path()).unwrap());
    let writer = ArtifactWriter::new(out.path(), WriteOptions::new());

    let err = generator
        .generate(
            &ComponentRequest::new("NavBar", ComponentFramework::React).into(),
            &writer,
            &mut CollectingPreview::default(),
        )
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(!out.path().join("NavBar").exists());
}

#[test]
fn test_defective_template_is_template_error() {
    let templates = TempDir::new().unwrap();
    fs::create_dir_all(templates.path().join("api")).unwrap();
    fs::write(
        templates.path().join("api/fastapi_router.py.hbs"),
        "{{resource}} {{undeclared}}",
    )
    .unwrap();

    let generator = Generator::new(TemplateStore::new(templates.path()).unwrap());
    let err = generator
        .plan(&ApiRequest::new("users", ApiFramework::Fastapi).into())
        .unwrap_err();

    assert!(err.is_template_error());
}

#[test]
fn test_jest_suite_end_to_end() {
    let temp = TempDir::new().unwrap();
    let (result, _) = run(
        TestRequest::new("userService", ["createUser", "updateUser"], TestFramework::Jest),
        temp.path(),
        WriteOptions::new(),
    );
    result.unwrap();

    let content = fs::read_to_string(temp.path().join("userService.test.ts")).unwrap();
    assert!(content.contains("userService"));
    assert!(content.contains("describe"));
    assert!(content.contains("it("));
    assert!(content.contains("createUser"));
    assert!(content.contains("updateUser"));
}
