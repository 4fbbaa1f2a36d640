//! ScaffoldService end to end over the in-memory filesystem.

use std::path::{Path, PathBuf};

use construct_adapters::{
    EnglishInflector, HandlebarsEngine, MemoryFilesystem, RecordingReporter, ReportEvent,
    StaticSource,
};
use construct_core::{
    application::{
        ApplicationError, CREATING_DIRECTORY, CREATING_FILES, Filesystem, GenerateRequest,
        NewProjectRequest, ScaffoldService,
    },
    domain::{INSTRUCTIONS_DELIMITER, RenameRuleSpec, TemplateReference},
    error::ConstructError,
};

const TPL: &str = "/tpl";

fn template() -> MemoryFilesystem {
    MemoryFilesystem::new()
        .with_file(
            "/tpl/structure/main.go.tmpl",
            "package main\n\nimport \"{{ImportPrefix}}/{{Name}}/api\"\n",
        )
        .with_file("/tpl/structure/api/server.go.tmpl", "package api // {{Name}}")
        .with_file("/tpl/structure/public/favicon.ico", [0u8, 1, 2, 3, 255])
        .with_file("/tpl/structure/instructions.tmpl", "cd {{Name}} && make")
        .with_file(
            "/tpl/api/api/resource.go.tmpl",
            "type {{capitalize SingularName}} struct{} // {{AppName}}",
        )
        .with_file(
            "/tpl/api/api/resources_resource.go.tmpl",
            "type {{capitalize PluralName}}Resource struct{}",
        )
        .with_file("/tpl/api/db/resource_record.go.tmpl", "package db // {{SingularName}}")
        .with_file("/tpl/api/api/routes.go.tmpl", "// {{ImportPrefix}}/{{AppName}}")
        .with_file(
            "/tpl/api/instructions.tmpl",
            "Add {{PluralName}} routes to {{AppName}}",
        )
        .with_dir("/work/blog/api")
        .with_dir("/work/blog/db")
}

fn service(fs: &MemoryFilesystem, reporter: &RecordingReporter) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(StaticSource::new(TPL)),
        Box::new(fs.clone()),
        Box::new(HandlebarsEngine::default()),
        Box::new(reporter.clone()),
    )
}

fn new_request(name: &str) -> NewProjectRequest {
    NewProjectRequest {
        name: Some(name.into()),
        template: TemplateReference::new("https://github.com/acme/template"),
        import_prefix: "github.com/acme".into(),
        source_root: PathBuf::from("/go/src/github.com/acme"),
    }
}

fn generate_request(generator: &str, name: &str) -> GenerateRequest {
    GenerateRequest {
        generator: Some(generator.into()),
        name: Some(name.into()),
        template: TemplateReference::new("https://github.com/acme/template"),
        import_prefix: "github.com/acme".into(),
        working_dir: PathBuf::from("/work/blog"),
        rename_rules: None,
    }
}

#[test]
fn new_project_materializes_structure() {
    let fs = template();
    let reporter = RecordingReporter::new();

    let report = service(&fs, &reporter).new_project(&new_request("blog")).unwrap();

    let app = Path::new("/go/src/github.com/acme/blog");
    assert_eq!(
        report.created,
        vec![
            app.join("api"),
            app.join("api/server.go"),
            app.join("main.go"),
            app.join("public"),
            app.join("public/favicon.ico"),
        ]
    );
    assert!(report.instructions_shown);

    assert_eq!(
        fs.contents_string(app.join("main.go")).unwrap(),
        "package main\n\nimport \"github.com/acme/blog/api\"\n"
    );
    assert_eq!(
        fs.contents(app.join("public/favicon.ico")).unwrap(),
        vec![0u8, 1, 2, 3, 255]
    );
    assert!(!fs.exists(&app.join("instructions")));
}

#[test]
fn new_project_reports_in_console_order() {
    let fs = template();
    let reporter = RecordingReporter::new();

    service(&fs, &reporter).new_project(&new_request("blog")).unwrap();

    let events = reporter.events();
    assert_eq!(events[0], ReportEvent::Message(CREATING_DIRECTORY.into()));
    assert_eq!(events[1], ReportEvent::Header(CREATING_FILES.into()));
    assert_eq!(
        events.last().unwrap(),
        &ReportEvent::Block {
            delimiter: INSTRUCTIONS_DELIMITER.into(),
            body: "cd blog && make".into(),
        }
    );
}

#[test]
fn new_project_into_existing_directory_writes_nothing() {
    let fs = template().with_dir("/go/src/github.com/acme/foo");
    let before = (fs.list_files(), fs.list_directories());
    let reporter = RecordingReporter::new();

    let err = service(&fs, &reporter).new_project(&new_request("foo")).unwrap_err();

    assert!(matches!(
        err,
        ConstructError::Application(ApplicationError::DestinationExists { .. })
    ));
    assert_eq!((fs.list_files(), fs.list_directories()), before);
    assert!(reporter.events().is_empty());
}

#[test]
fn generate_renames_resource_files() {
    let fs = template();
    let reporter = RecordingReporter::new();

    let report = service(&fs, &reporter)
        .generate(&generate_request("api", "Person"), &EnglishInflector)
        .unwrap();

    let app = Path::new("/work/blog");
    assert_eq!(
        report.created,
        vec![
            app.join("api"),
            app.join("api/person.go"),
            app.join("api/people_resource.go"),
            app.join("api/routes.go"),
            app.join("db"),
            app.join("db/person_record.go"),
        ]
    );

    assert_eq!(
        fs.contents_string(app.join("api/person.go")).unwrap(),
        "type Person struct{} // blog"
    );
    assert_eq!(
        fs.contents_string(app.join("api/people_resource.go")).unwrap(),
        "type PeopleResource struct{}"
    );
    assert_eq!(
        fs.contents_string(app.join("api/routes.go")).unwrap(),
        "// github.com/acme/blog"
    );
    assert_eq!(reporter.blocks(), vec!["Add people routes to blog".to_string()]);
}

#[test]
fn generate_with_configured_rules_replaces_defaults() {
    let fs = template();
    let reporter = RecordingReporter::new();

    let mut request = generate_request("api", "widget");
    request.rename_rules = Some(vec![RenameRuleSpec::new(
        r"api/resource\.go$",
        "api/{singular}_handler.go",
    )]);

    service(&fs, &reporter)
        .generate(&request, &EnglishInflector)
        .unwrap();

    assert!(fs.is_file(Path::new("/work/blog/api/widget_handler.go")));
    // No default rules: the other resource files keep their names.
    assert!(fs.is_file(Path::new("/work/blog/api/resources_resource.go")));
    assert!(fs.is_file(Path::new("/work/blog/db/resource_record.go")));
}

#[test]
fn generate_unknown_type_writes_nothing() {
    let fs = template();
    let before = fs.list_files();
    let reporter = RecordingReporter::new();

    let err = service(&fs, &reporter)
        .generate(&generate_request("worker", "job"), &EnglishInflector)
        .unwrap_err();

    assert!(matches!(
        err,
        ConstructError::Application(ApplicationError::UnknownGenerator { .. })
    ));
    assert_eq!(fs.list_files(), before);
}

#[test]
fn broken_instructions_keep_materialized_files() {
    let fs = template().with_file("/tpl/structure/instructions.tmpl", "{{#each}}");
    let reporter = RecordingReporter::new();

    let err = service(&fs, &reporter).new_project(&new_request("blog")).unwrap_err();

    assert!(matches!(
        err,
        ConstructError::Application(ApplicationError::InstructionsRenderFailed { .. })
    ));
    assert!(fs.is_file(Path::new("/go/src/github.com/acme/blog/main.go")));
    assert!(reporter.blocks().is_empty());
}

#[test]
fn template_without_instructions_reports_none() {
    let fs = MemoryFilesystem::new().with_file("/tpl/structure/README.md", "hi");
    let reporter = RecordingReporter::new();

    let report = service(&fs, &reporter).new_project(&new_request("blog")).unwrap();
    assert!(!report.instructions_shown);
    assert!(reporter.blocks().is_empty());
}
