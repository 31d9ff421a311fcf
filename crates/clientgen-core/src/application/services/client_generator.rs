//! Client Source Generator - builds per-service and aggregate client files.
//!
//! For one service this:
//! 1. Resolves the service's model versions from the catalog
//! 2. Validates the versions in scope
//! 3. Builds a replacer table and expands the client template
//!
//! The aggregate files expand the loader template once per service name.

use tracing::{debug, instrument, trace};

use crate::{
    application::{
        ApplicationError,
        ports::{CustomizationProbe, ModelCatalog, TemplateKind, TemplateSource},
    },
    domain::{
        DomainValidator as validator, ExpansionContext, GeneratedFile, ModelFile,
        ModelVersionResolver, OutputLayout, ReplacerTable, Repetition, ResolvedVersion,
        ServiceMetadataEntry, ServiceMetadataTable, ServiceVersionModel, TemplateExpander,
        VersionSelector,
    },
    error::GenResult,
};

/// Markers understood by the client and loader templates.
pub mod markers {
    pub const CLASS_NAME: &str = "$className";
    pub const SERVICE_NAME: &str = "$serviceName";
    pub const VERSION_NUMBERS: &str = "$versionNumbers";
    pub const IF_CUSTOMIZATIONS: &str = "/*ifcustomizations*/";
    pub const EACH_VERSION: &str = "/*eachVersion*/";
    pub const LOADER_PREFIX_BLOCK: &str = "/*$loaderPrefix*/";
    pub const LOADER_PREFIX: &str = "$loaderPrefix";
    pub const VERSION: &str = "$version";
    pub const API: &str = "$api";
    pub const PAGINATORS: &str = "$paginators";
    pub const WAITERS: &str = "$waiters";
    pub const IF_PAGINATORS: &str = "/*ifpaginators*/";
    pub const IF_WAITERS: &str = "/*ifwaiters*/";
    pub const COMMENT: &str = "/*comment*/";
    pub const EACH_SERVICE: &str = "/*eachService*/";

    /// Joins version keys so the template can wrap the list in quotes.
    pub const VERSION_NUMBERS_JOINER: &str = "', '";
    /// Context slot holding the captured loader prefix.
    pub const LOADER_PREFIX_SLOT: &str = "loaderPrefix";
}

/// Generates client source files from templates and resolved model versions.
pub struct ClientSourceGenerator {
    templates: Box<dyn TemplateSource>,
    catalog: Box<dyn ModelCatalog>,
    customizations: Box<dyn CustomizationProbe>,
    metadata: ServiceMetadataTable,
    layout: OutputLayout,
    expander: TemplateExpander,
    resolver: ModelVersionResolver,
}

impl ClientSourceGenerator {
    /// Create a generator with the default expander settings.
    pub fn new(
        templates: Box<dyn TemplateSource>,
        catalog: Box<dyn ModelCatalog>,
        customizations: Box<dyn CustomizationProbe>,
        metadata: ServiceMetadataTable,
        layout: OutputLayout,
    ) -> Self {
        Self {
            templates,
            catalog,
            customizations,
            metadata,
            layout,
            expander: TemplateExpander::new(),
            resolver: ModelVersionResolver::new(),
        }
    }

    pub fn with_expander(mut self, expander: TemplateExpander) -> Self {
        self.expander = expander;
        self
    }

    pub fn metadata(&self) -> &ServiceMetadataTable {
        &self.metadata
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Lowercase names of every known service, in metadata order.
    pub fn default_services(&self) -> Vec<String> {
        self.metadata.service_names()
    }

    /// Look a service up by key or lowercase name.
    pub fn find_service(&self, name: &str) -> GenResult<&ServiceMetadataEntry> {
        self.metadata.find_service(name).ok_or_else(|| {
            ApplicationError::UnknownService {
                name: name.to_owned(),
            }
            .into()
        })
    }

    /// Resolved, unvalidated version map for `entry`.
    ///
    /// Versions missing their core API description are included, so this is
    /// suitable for listings but not for generation.
    #[instrument(skip_all, fields(service = %entry.canonical_name()))]
    pub fn list_versions(&self, entry: &ServiceMetadataEntry) -> GenResult<ServiceVersionModel> {
        let model_name = entry.model_name();
        let filenames = self.catalog.filenames()?;

        if tracing::enabled!(tracing::Level::TRACE) {
            for file in filenames
                .iter()
                .filter_map(|name| ModelFile::parse(name, &model_name))
                .filter(|file| file.kind().is_none())
            {
                trace!(model_id = file.model_id, token = file.token, "Ignoring artifact");
            }
        }

        let model = self.resolver.resolve(&filenames, &model_name);
        debug!(model = %model_name, versions = model.len(), "Resolved model versions");
        Ok(model)
    }

    /// Generate the client file for one service.
    ///
    /// # Errors
    ///
    /// - `DomainError::ModelNotFound` if no model files exist for the service
    /// - `DomainError::ModelResolution` if a version in scope lacks its API file
    /// - `DomainError::VersionNotFound` if an exact version is not present
    #[instrument(
        skip_all,
        fields(service = %entry.canonical_name(), version = %selector)
    )]
    pub fn generate_service(
        &self,
        entry: &ServiceMetadataEntry,
        selector: &VersionSelector,
    ) -> GenResult<GeneratedFile> {
        let service_name = entry.service_name();
        let model = self.list_versions(entry)?;
        let versions = validator::validate_service_model(&model, &service_name, selector)?;

        for version in &versions {
            debug!(
                version = version.version,
                paginators = version.paginators_file.is_some(),
                waiters = version.waiters_file.is_some(),
                "Version in scope"
            );
        }

        let each_version = Repetition::new(versions.iter().map(version_table).collect())
            .prepare(ReplacerTable::new().capture(
                markers::LOADER_PREFIX_BLOCK,
                markers::LOADER_PREFIX_SLOT,
            ))
            .prepare(
                ReplacerTable::new().captured(markers::LOADER_PREFIX, markers::LOADER_PREFIX_SLOT),
            )
            .separator("\n");

        let table = ReplacerTable::new()
            .literal(markers::CLASS_NAME, entry.canonical_name())
            .literal(markers::SERVICE_NAME, service_name.as_str())
            .literal(
                markers::VERSION_NUMBERS,
                model.version_keys().join(markers::VERSION_NUMBERS_JOINER),
            )
            .conditional(
                markers::IF_CUSTOMIZATIONS,
                self.customizations.exists(&service_name),
            )
            .repeated(markers::EACH_VERSION, each_version)
            .strip(markers::COMMENT);

        let template = self.templates.load(TemplateKind::Client)?;
        let mut ctx = ExpansionContext::new();
        let source_text = self.expander.expand(&template, &[table], &mut ctx)?;

        debug!(blocks = ctx.blocks_expanded(), bytes = source_text.len(), "Client expanded");

        Ok(GeneratedFile::new(
            source_text,
            self.layout.path_for(&service_name),
            service_name,
        ))
    }

    /// Generate an aggregate loader listing `service_names` under `output_name`.
    ///
    /// # Errors
    ///
    /// `ApplicationError::UnknownService` if a name is not in the metadata.
    #[instrument(skip_all, fields(output = output_name, services = service_names.len()))]
    pub fn generate_aggregate(
        &self,
        service_names: &[String],
        output_name: &str,
    ) -> GenResult<GeneratedFile> {
        let items = service_names
            .iter()
            .map(|name| {
                let entry = self.metadata.find_by_service_name(name).ok_or_else(|| {
                    ApplicationError::UnknownService { name: name.clone() }
                })?;
                Ok(ReplacerTable::new()
                    .literal(markers::SERVICE_NAME, name.as_str())
                    .literal(markers::CLASS_NAME, entry.canonical_name()))
            })
            .collect::<GenResult<Vec<_>>>()?;

        let table = ReplacerTable::new().repeated(markers::EACH_SERVICE, Repetition::new(items));

        let template = self.templates.load(TemplateKind::Loader)?;
        let source_text =
            self.expander
                .expand(&template, &[table], &mut ExpansionContext::new())?;

        Ok(GeneratedFile::new(
            source_text,
            self.layout.path_for(output_name),
            output_name,
        ))
    }
}

fn version_table(version: &ResolvedVersion<'_>) -> ReplacerTable<'static> {
    let mut table = ReplacerTable::new()
        .literal(markers::VERSION, version.version)
        .literal(markers::API, version.api_file)
        .conditional(markers::IF_PAGINATORS, version.paginators_file.is_some())
        .conditional(markers::IF_WAITERS, version.waiters_file.is_some());

    if let Some(paginators) = version.paginators_file {
        table = table.literal(markers::PAGINATORS, paginators);
    }
    if let Some(waiters) = version.waiters_file {
        table = table.literal(markers::WAITERS, waiters);
    }
    table
}
