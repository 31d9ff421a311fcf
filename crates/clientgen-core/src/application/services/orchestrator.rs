//! Generation Orchestrator - writes every client plus the two aggregates.
//!
//! Strictly sequential and fail-fast: the first service that fails to
//! generate aborts the run, since a partial client set is worse than a
//! clearly failed build.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{ports::Filesystem, services::ClientSourceGenerator},
    domain::{GeneratedFile, VersionSelector},
    error::GenResult,
};

/// Output name of the aggregate covering every service.
pub const ALL_SERVICES_OUTPUT: &str = "all";
/// Output name of the aggregate covering CORS-capable services.
pub const BROWSER_OUTPUT: &str = "browser_default";

/// What a full run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Lowercase names of every generated service, in metadata order.
    pub services: Vec<String>,
    /// The subset of `services` that supports CORS.
    pub cors_services: Vec<String>,
    /// Every file written, aggregates last.
    pub written: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.written.len()
    }
}

pub struct GenerationOrchestrator {
    generator: ClientSourceGenerator,
    filesystem: Box<dyn Filesystem>,
}

impl GenerationOrchestrator {
    pub fn new(generator: ClientSourceGenerator, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            generator,
            filesystem,
        }
    }

    pub fn generator(&self) -> &ClientSourceGenerator {
        &self.generator
    }

    /// Number of files a full run writes.
    pub fn planned_files(&self) -> usize {
        self.generator.metadata().len() + 2
    }

    /// Generate and write every client, then the `all` and `browser_default`
    /// aggregates.
    pub fn run(&self) -> GenResult<GenerationReport> {
        self.run_with(|_| {})
    }

    /// Like [`run`](Self::run), calling `on_written` after each file lands.
    #[instrument(skip_all, fields(services = self.generator.metadata().len()))]
    pub fn run_with<F>(&self, mut on_written: F) -> GenResult<GenerationReport>
    where
        F: FnMut(&GeneratedFile),
    {
        let mut report = GenerationReport::default();

        for (key, entry) in self.generator.metadata().entries() {
            let file = self
                .generator
                .generate_service(entry, &VersionSelector::All)?;

            self.persist(&file)?;
            on_written(&file);

            if entry.supports_cors() {
                report.cors_services.push(file.service.clone());
            }
            report.services.push(file.service.clone());
            report.written.push(file.destination_path);

            tracing::debug!(key, "Service generated");
        }

        let aggregates = [
            (report.services.clone(), ALL_SERVICES_OUTPUT),
            (report.cors_services.clone(), BROWSER_OUTPUT),
        ];
        for (services, output) in aggregates {
            let file = self.generator.generate_aggregate(&services, output)?;
            self.persist(&file)?;
            on_written(&file);
            report.written.push(file.destination_path);
        }

        info!(
            services = report.services.len(),
            cors = report.cors_services.len(),
            "Generation completed successfully"
        );
        Ok(report)
    }

    /// Generate and write a single service client. Aggregates are untouched.
    #[instrument(skip(self, selector), fields(version = %selector))]
    pub fn generate_one(&self, name: &str, selector: &VersionSelector) -> GenResult<GeneratedFile> {
        let entry = self.generator.find_service(name)?;
        let file = self.generator.generate_service(entry, selector)?;
        self.persist(&file)?;
        Ok(file)
    }

    fn persist(&self, file: &GeneratedFile) -> GenResult<()> {
        if let Some(parent) = file.destination_path.parent() {
            if !parent.as_os_str().is_empty() && !self.filesystem.exists(parent) {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        self.filesystem
            .write_file(&file.destination_path, &file.source_text)?;

        info!(
            path = %file.destination_path.display(),
            bytes = file.size(),
            "Wrote {}",
            file.service
        );
        Ok(())
    }
}
