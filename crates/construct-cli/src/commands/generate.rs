//! `construct generate` - render one generator into the current application.

use tracing::{info, instrument};

use construct_adapters::EnglishInflector;
use construct_core::application::GenerateRequest;

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    commands::build_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(generator = ?args.generator, name = ?args.name))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let settings = config.resolve(&global);
    let template = settings.require_template()?;

    let request = GenerateRequest {
        generator: args.generator,
        name: args.name,
        template,
        import_prefix: settings.import_prefix.clone(),
        working_dir: std::env::current_dir()?,
        rename_rules: settings.rename_rules.clone(),
    };

    let report =
        build_service(&settings, &output).generate(&request, &EnglishInflector::new())?;
    info!(created = report.created.len(), "Generation finished");

    Ok(())
}
