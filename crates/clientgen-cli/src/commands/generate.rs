//! `clientgen generate`: write client sources.

use std::path::PathBuf;

use serde::Serialize;
use tracing::instrument;

use clientgen_core::prelude::*;

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    wiring,
};

/// What `--output-format json` prints after a run.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    services: &'a [String],
    cors_services: &'a [String],
    written: &'a [PathBuf],
}

#[instrument(skip_all, fields(service = args.service.as_deref().unwrap_or("*")))]
pub fn execute(args: GenerateArgs, mut config: AppConfig, output: OutputManager) -> CliResult<()> {
    if let Some(dir) = args.apis_dir {
        config.paths.relocate_apis_dir(dir);
    }
    if let Some(dir) = args.clients_dir {
        config.paths.clients_dir = dir;
    }

    let orchestrator = wiring::build_orchestrator(&config)?;

    match args.service {
        Some(name) => {
            let Ok(selector) = args
                .api_version
                .as_deref()
                .unwrap_or(VersionSelector::WILDCARD)
                .parse::<VersionSelector>();
            generate_one(&orchestrator, &name, &selector, &output)
        }
        None => generate_all(&orchestrator, &output),
    }
}

fn generate_all(orchestrator: &GenerationOrchestrator, output: &OutputManager) -> CliResult<()> {
    let bar = output.progress(orchestrator.planned_files() as u64);

    let result = orchestrator.run_with(|file| {
        bar.set_message(file.service.clone());
        bar.inc(1);
    });
    bar.finish_and_clear();
    let report = result?;

    if output.format() == OutputFormat::Json {
        output.json(&Summary {
            services: &report.services,
            cors_services: &report.cors_services,
            written: &report.written,
        })?;
        return Ok(());
    }

    output.success(&format!(
        "Generated {} clients ({} browser) into {}",
        report.services.len(),
        report.cors_services.len(),
        orchestrator.generator().layout().clients_dir().display(),
    ))?;
    Ok(())
}

fn generate_one(
    orchestrator: &GenerationOrchestrator,
    name: &str,
    selector: &VersionSelector,
    output: &OutputManager,
) -> CliResult<()> {
    let file = orchestrator.generate_one(name, selector)?;

    if output.format() == OutputFormat::Json {
        output.json(&Summary {
            services: std::slice::from_ref(&file.service),
            cors_services: &[],
            written: std::slice::from_ref(&file.destination_path),
        })?;
        return Ok(());
    }

    output.success(&format!(
        "Generated {} ({selector}) at {}",
        file.service,
        file.destination_path.display()
    ))?;
    output.info("Aggregate loaders were not regenerated")?;
    Ok(())
}
