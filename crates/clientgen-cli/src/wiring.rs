//! Composition root: builds core services from [`AppConfig`] and the
//! concrete adapters.

use clientgen_adapters::{
    DirectoryCustomizationProbe, DirectoryModelCatalog, FilesystemTemplateSource,
    JsonMetadataSource, LocalFilesystem,
};
use clientgen_core::prelude::*;
use tracing::debug;

use crate::{config::AppConfig, error::CliResult};

/// Generator over the configured directories.  Templates and the model
/// listing are read lazily, on first use.
pub fn build_generator(config: &AppConfig) -> CliResult<ClientSourceGenerator> {
    let paths = &config.paths;

    let metadata = JsonMetadataSource::new(&paths.metadata_file).load()?;
    debug!(services = metadata.len(), "Service metadata loaded");

    let expander = TemplateExpander::new()
        .with_max_iterations(config.expansion.max_iterations)
        .strict_markers(config.expansion.strict_markers);

    let layout = OutputLayout::new(&paths.clients_dir).with_extension(&config.output.extension);

    Ok(ClientSourceGenerator::new(
        Box::new(FilesystemTemplateSource::new(
            &paths.client_template,
            &paths.loader_template,
        )),
        Box::new(DirectoryModelCatalog::new(&paths.apis_dir)),
        Box::new(DirectoryCustomizationProbe::new(&paths.customizations_dir)),
        metadata,
        layout,
    )
    .with_expander(expander))
}

/// Orchestrator writing to the local disk.
pub fn build_orchestrator(config: &AppConfig) -> CliResult<GenerationOrchestrator> {
    let generator = build_generator(config)?;
    Ok(GenerationOrchestrator::new(
        generator,
        Box::new(LocalFilesystem::new()),
    ))
}
