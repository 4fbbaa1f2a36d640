//! `construct new` - create an application from the template's `structure/`.

use tracing::{info, instrument};

use construct_core::application::NewProjectRequest;

use crate::{
    cli::{GlobalArgs, NewArgs},
    commands::build_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = ?args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let settings = config.resolve(&global);
    let template = settings.require_template()?;
    let cwd = std::env::current_dir()?;

    let request = NewProjectRequest {
        name: args.name,
        template,
        import_prefix: settings.import_prefix.clone(),
        source_root: settings.source_root(&cwd),
    };

    let report = build_service(&settings, &output).new_project(&request)?;
    info!(
        created = report.created.len(),
        instructions = report.instructions_shown,
        "Application created"
    );

    Ok(())
}
