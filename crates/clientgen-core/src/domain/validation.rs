use crate::domain::{
    entities::{
        ServiceMetadataTable, ServiceVersionModel,
        model_version::{ResolvedVersion, VersionSelector},
    },
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_metadata(table: &ServiceMetadataTable) -> Result<(), DomainError> {
        table.validate()
    }

    /// A model is generatable when it has at least one version and every
    /// selected version carries its core API description.
    pub fn validate_service_model<'m>(
        model: &'m ServiceVersionModel,
        service: &str,
        selector: &VersionSelector,
    ) -> Result<Vec<ResolvedVersion<'m>>, DomainError> {
        if model.is_empty() {
            return Err(DomainError::ModelNotFound {
                model_name: model.model_name().to_owned(),
            });
        }
        model.select(service, selector)
    }
}
