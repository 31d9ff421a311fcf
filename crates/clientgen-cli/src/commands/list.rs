//! `clientgen list`: services and their resolved model versions.
//!
//! Versions are shown as resolved, without validation: a version missing its
//! core API description is listed (and flagged) even though generating it
//! would fail.

use serde::Serialize;

use clientgen_core::prelude::*;

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    wiring,
};

#[derive(Debug, Serialize)]
struct ServiceListing {
    service: String,
    class_name: String,
    model: String,
    cors: bool,
    versions: Vec<VersionListing>,
}

#[derive(Debug, Serialize)]
struct VersionListing {
    version: String,
    api: Option<String>,
    paginators: Option<String>,
    waiters: Option<String>,
}

impl ServiceListing {
    fn resolve(generator: &ClientSourceGenerator, entry: &ServiceMetadataEntry) -> CliResult<Self> {
        let model = generator.list_versions(entry)?;
        let versions = model
            .versions()
            .map(|(version, artifacts)| VersionListing {
                version: version.to_owned(),
                api: artifacts.api_file().map(str::to_owned),
                paginators: artifacts.paginators_file().map(str::to_owned),
                waiters: artifacts.waiters_file().map(str::to_owned),
            })
            .collect();

        Ok(Self {
            service: entry.service_name(),
            class_name: entry.canonical_name().to_owned(),
            model: entry.model_name(),
            cors: entry.supports_cors(),
            versions,
        })
    }
}

pub fn execute(args: ListArgs, mut config: AppConfig, output: OutputManager) -> CliResult<()> {
    if let Some(dir) = args.apis_dir {
        config.paths.relocate_apis_dir(dir);
    }

    let generator = wiring::build_generator(&config)?;

    let entries: Vec<&ServiceMetadataEntry> = match &args.service {
        Some(name) => vec![generator.find_service(name)?],
        None => generator.metadata().entries().map(|(_, entry)| entry).collect(),
    };

    let listings = entries
        .into_iter()
        .map(|entry| ServiceListing::resolve(&generator, entry))
        .collect::<CliResult<Vec<_>>>()?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Services ({}):", listings.len()))?;
            for listing in &listings {
                output.print(&format!(
                    "  {:<24} {:<24} {}",
                    listing.service,
                    listing.class_name,
                    if listing.cors { "cors" } else { "" }
                ))?;
                for version in &listing.versions {
                    output.print(&format!("      {}  {}", version.version, artifact_summary(version)))?;
                }
            }
        }

        ListFormat::List => {
            for listing in &listings {
                println!("{}", listing.service);
            }
        }

        ListFormat::Json => output.json(&listings)?,
    }

    Ok(())
}

fn artifact_summary(version: &VersionListing) -> String {
    let mut kinds = Vec::with_capacity(3);
    kinds.push(if version.api.is_some() { "api" } else { "api MISSING" });
    if version.paginators.is_some() {
        kinds.push("paginators");
    }
    if version.waiters.is_some() {
        kinds.push("waiters");
    }
    kinds.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(api: bool, paginators: bool, waiters: bool) -> VersionListing {
        let id = |kind: &str| format!("foo-2015-01-01.{kind}");
        VersionListing {
            version: "2015-01-01".into(),
            api: api.then(|| id("min")),
            paginators: paginators.then(|| id("paginators")),
            waiters: waiters.then(|| id("waiters2")),
        }
    }

    #[test]
    fn summary_lists_present_artifacts() {
        assert_eq!(artifact_summary(&version(true, true, false)), "api, paginators");
        assert_eq!(
            artifact_summary(&version(true, true, true)),
            "api, paginators, waiters"
        );
    }

    #[test]
    fn summary_flags_missing_api() {
        assert_eq!(artifact_summary(&version(false, false, true)), "api MISSING, waiters");
    }

    #[test]
    fn listing_reflects_resolved_versions() {
        use clientgen_adapters::{
            InMemoryTemplateSource, StaticCustomizationProbe, StaticModelCatalog,
        };

        let generator = ClientSourceGenerator::new(
            Box::new(InMemoryTemplateSource::new("", "")),
            Box::new(StaticModelCatalog::new([
                "iot-data-2015-05-28.min.json",
                "iot-data-2015-05-28.normal.json",
                "iot-data-2016-01-01.paginators.json",
            ])),
            Box::new(StaticCustomizationProbe::default()),
            ServiceMetadataTable::new(),
            OutputLayout::new("clients"),
        );
        let entry = ServiceMetadataEntry::new("IotData")
            .with_prefix("iot-data")
            .with_cors(true);

        let listing = ServiceListing::resolve(&generator, &entry).unwrap();
        assert_eq!(listing.service, "iotdata");
        assert_eq!(listing.model, "iot-data");
        assert_eq!(listing.versions.len(), 2);
        assert_eq!(listing.versions[0].api.as_deref(), Some("iot-data-2015-05-28.min"));
        assert!(listing.versions[1].api.is_none());
    }
}
