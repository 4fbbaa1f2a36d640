//! Scaffold Service - main application orchestrator.
//!
//! Both use cases run the same linear sequence:
//! 1. Validate arguments
//! 2. Resolve the template source
//! 3. Prepare the destination root
//! 4. Build the render view
//! 5. Render the subtree
//! 6. Print instructions, if the subtree has them
//!
//! Nothing is retried; the first error ends the command.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Inflector, ProgressReporter, TemplateEngine, VersionedSource},
        services::{
            instructions::InstructionsPrinter,
            tree_renderer::{RenderJob, TreeRenderer},
        },
    },
    domain::{
        DomainValidator as validator, EntityNames, INSTRUCTIONS_FILE, RenameRuleSpec,
        RenameRules, RenderView, ResolvedSource, STRUCTURE_DIR, TemplateReference,
        default_generate_rules,
    },
    error::ConstructResult,
};

/// Header printed before the per-file progress lines.
pub const CREATING_FILES: &str = "Creating files...";

/// Status printed before the project directory is created.
pub const CREATING_DIRECTORY: &str = "Creating directory...";

/// Input for [`ScaffoldService::new_project`].
#[derive(Debug, Clone)]
pub struct NewProjectRequest {
    /// Project name; `None` when the user gave none.
    pub name: Option<String>,
    pub template: TemplateReference,
    pub import_prefix: String,
    /// Directory the project directory is created in.
    pub source_root: PathBuf,
}

/// Input for [`ScaffoldService::generate`].
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Generator type, i.e. the template subdirectory.
    pub generator: Option<String>,
    /// Entity name, inflected into singular and plural forms.
    pub name: Option<String>,
    pub template: TemplateReference,
    pub import_prefix: String,
    /// Existing application directory files are generated into.
    pub working_dir: PathBuf,
    /// Configured rename rules; `None` uses [`default_generate_rules`].
    pub rename_rules: Option<Vec<RenameRuleSpec>>,
}

/// What a successful command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Destination paths in the order they were materialized.
    pub created: Vec<PathBuf>,
    pub instructions_shown: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    source: Box<dyn VersionedSource>,
    filesystem: Box<dyn Filesystem>,
    engine: Box<dyn TemplateEngine>,
    reporter: Box<dyn ProgressReporter>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use construct_core::prelude::*;
    ///
    /// let service = ScaffoldService::new(
    ///     source,     // impl VersionedSource
    ///     filesystem, // impl Filesystem
    ///     engine,     // impl TemplateEngine
    ///     reporter,   // impl ProgressReporter
    /// );
    /// ```
    pub fn new(
        source: Box<dyn VersionedSource>,
        filesystem: Box<dyn Filesystem>,
        engine: Box<dyn TemplateEngine>,
        reporter: Box<dyn ProgressReporter>,
    ) -> Self {
        Self {
            source,
            filesystem,
            engine,
            reporter,
        }
    }

    /// Create a brand-new project from the template's `structure/` subtree.
    #[instrument(
        skip_all,
        fields(
            name = ?request.name,
            template = %request.template,
            source_root = %request.source_root.display()
        )
    )]
    pub fn new_project(&self, request: &NewProjectRequest) -> ConstructResult<GenerationReport> {
        let name = required(request.name.as_deref(), "name")?;
        validator::validate_name(name)?;

        let resolved = self.source.resolve(&request.template)?;
        let structure_root = self.subtree(&resolved, STRUCTURE_DIR)?;

        let app_path = request.source_root.join(name);
        if self.filesystem.exists(&app_path) {
            return Err(ApplicationError::DestinationExists { path: app_path }.into());
        }

        self.reporter.message(CREATING_DIRECTORY);
        self.filesystem.create_dir_all(&app_path)?;
        info!(path = %app_path.display(), "Created project directory");

        let view = RenderView::new()
            .with("Name", name)
            .with("ImportPrefix", request.import_prefix.as_str());

        self.run(RenderJob::new(structure_root, app_path, view))
    }

    /// Generate one generator's files into an existing application.
    #[instrument(
        skip_all,
        fields(
            generator = ?request.generator,
            name = ?request.name,
            working_dir = %request.working_dir.display()
        )
    )]
    pub fn generate(
        &self,
        request: &GenerateRequest,
        inflector: &dyn Inflector,
    ) -> ConstructResult<GenerationReport> {
        let generator = required(request.generator.as_deref(), "type")?;
        let name = required(request.name.as_deref(), "name")?;
        validator::validate_name(generator)?;
        validator::validate_name(name)?;

        let lowered = name.to_lowercase();
        let names = EntityNames::new(inflector.singularize(&lowered), inflector.pluralize(&lowered));
        let rules = compile_rules(request.rename_rules.as_deref(), &names)?;
        info!(%names, rules = rules.len(), "Prepared entity names");

        let resolved = self.source.resolve(&request.template)?;
        let generator_root = self.subtree(&resolved, generator)?;

        if !self.filesystem.is_dir(&request.working_dir) {
            return Err(ApplicationError::FilesystemError {
                path: request.working_dir.clone(),
                reason: "working directory does not exist".into(),
            }
            .into());
        }

        let view = RenderView::new()
            .with("AppName", app_name(&request.working_dir))
            .with("ImportPrefix", request.import_prefix.as_str())
            .with("SingularName", names.singular())
            .with("PluralName", names.plural());

        self.run(
            RenderJob::new(generator_root, request.working_dir.clone(), view)
                .with_rename_rules(rules),
        )
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn run(&self, job: RenderJob) -> ConstructResult<GenerationReport> {
        self.reporter.header(CREATING_FILES);

        let renderer = TreeRenderer::new(&*self.filesystem, &*self.engine, &*self.reporter);
        let created = renderer.render(&job)?;

        let printer = InstructionsPrinter::new(&*self.filesystem, &*self.engine, &*self.reporter);
        let instructions_shown =
            printer.print(&job.source_root.join(INSTRUCTIONS_FILE), &job.view)?;

        info!(
            files = created.len(),
            instructions_shown, "Scaffold completed successfully"
        );

        Ok(GenerationReport {
            created,
            instructions_shown,
        })
    }

    /// Locate a top-level subtree of the resolved template.
    fn subtree(&self, resolved: &ResolvedSource, name: &str) -> ConstructResult<PathBuf> {
        let path = resolved.subtree(name);
        if self.filesystem.is_dir(&path) {
            Ok(path)
        } else {
            Err(ApplicationError::UnknownGenerator {
                generator: name.to_string(),
                path,
            }
            .into())
        }
    }
}

fn required<'a>(value: Option<&'a str>, argument: &'static str) -> ConstructResult<&'a str> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApplicationError::MissingArgument { argument }.into())
}

fn compile_rules(
    specs: Option<&[RenameRuleSpec]>,
    names: &EntityNames,
) -> ConstructResult<RenameRules> {
    let rules = match specs {
        Some(specs) => specs
            .iter()
            .map(|spec| spec.compile(names))
            .collect::<Result<RenameRules, _>>()?,
        None => default_generate_rules(names)?,
    };
    Ok(rules)
}

fn app_name(working_dir: &Path) -> String {
    working_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| working_dir.display().to_string())
}
