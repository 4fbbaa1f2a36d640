//! ScaffoldService over the real filesystem.

use std::fs;

use construct_adapters::{
    EnglishInflector, HandlebarsEngine, LocalFilesystem, RecordingReporter, StaticSource,
};
use construct_core::{
    application::{GenerateRequest, NewProjectRequest, ScaffoldService},
    domain::TemplateReference,
};
use tempfile::TempDir;

fn write(root: &std::path::Path, rel: &str, content: impl AsRef<[u8]>) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn service(template: &TempDir, reporter: &RecordingReporter) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(StaticSource::new(template.path())),
        Box::new(LocalFilesystem::new()),
        Box::new(HandlebarsEngine::default()),
        Box::new(reporter.clone()),
    )
}

#[test]
fn new_project_on_disk() {
    let template = TempDir::new().unwrap();
    let binary: Vec<u8> = (0u8..=255).rev().collect();
    write(template.path(), "structure/cmd/main.go.tmpl", "// {{Name}}");
    write(template.path(), "structure/static/logo.bin", &binary);
    write(template.path(), "structure/instructions.tmpl", "done");

    let work = TempDir::new().unwrap();
    let reporter = RecordingReporter::new();
    let report = service(&template, &reporter)
        .new_project(&NewProjectRequest {
            name: Some("shop".into()),
            template: TemplateReference::new(template.path().to_string_lossy()),
            import_prefix: "example.com".into(),
            source_root: work.path().to_path_buf(),
        })
        .unwrap();

    let app = work.path().join("shop");
    assert_eq!(report.created.len(), 4);
    assert_eq!(fs::read_to_string(app.join("cmd/main.go")).unwrap(), "// shop");
    assert_eq!(fs::read(app.join("static/logo.bin")).unwrap(), binary);
    assert!(!app.join("instructions").exists());
    assert_eq!(reporter.blocks(), vec!["done".to_string()]);
}

#[test]
fn generate_into_working_directory() {
    let template = TempDir::new().unwrap();
    write(
        template.path(),
        "api/api/resource.go.tmpl",
        "package api\n\ntype {{capitalize SingularName}} struct{}\n",
    );
    write(template.path(), "api/db/resource_record.go.tmpl", "// {{PluralName}}");

    let work = TempDir::new().unwrap();
    let app = work.path().join("inventory");
    fs::create_dir_all(&app).unwrap();

    let reporter = RecordingReporter::new();
    service(&template, &reporter)
        .generate(
            &GenerateRequest {
                generator: Some("api".into()),
                name: Some("Categories".into()),
                template: TemplateReference::new(template.path().to_string_lossy()),
                import_prefix: "example.com".into(),
                working_dir: app.clone(),
                rename_rules: None,
            },
            &EnglishInflector,
        )
        .unwrap();

    assert_eq!(
        fs::read_to_string(app.join("api/category.go")).unwrap(),
        "package api\n\ntype Category struct{}\n"
    );
    assert_eq!(
        fs::read_to_string(app.join("db/category_record.go")).unwrap(),
        "// categories"
    );
}
