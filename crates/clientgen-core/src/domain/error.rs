// ============================================================================
// domain/error.rs - GENERATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so a failed run can be reported more than once)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Model Resolution Errors
    // ========================================================================
    #[error("Unable to get models for {model_name}")]
    ModelNotFound { model_name: String },

    #[error("No API model for {service}-{version}")]
    ModelResolution { service: String, version: String },

    #[error("Version '{version}' is not available for {service}")]
    VersionNotFound {
        service: String,
        version: String,
        available: Vec<String>,
    },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Block '{marker}' is missing its closing marker")]
    UnterminatedBlock { marker: String },

    #[error("Block '{marker}' did not converge after {iterations} expansions")]
    ExpansionDiverged { marker: String, iterations: usize },

    // ========================================================================
    // Metadata Errors
    // ========================================================================
    #[error("Invalid service metadata for '{key}': {reason}")]
    InvalidMetadata { key: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModelNotFound { model_name } => vec![
                format!("No files named '{model_name}-YYYY-MM-DD.<kind>.json' were found"),
                "Check the model prefix in the service metadata".into(),
                "Try: clientgen list to see resolved versions".into(),
            ],
            Self::ModelResolution { service, version } => vec![
                format!("Add '{service}-{version}.min.json' to the models directory"),
                "Every version needs a core API description".into(),
            ],
            Self::VersionNotFound { available, .. } => vec![
                format!("Available versions: {}", available.join(", ")),
                "Omit --api-version to generate every version".into(),
            ],
            Self::UnterminatedBlock { marker } => vec![
                format!("Close the block with '{marker}/**/' on its own line"),
                "Set expansion.strict_markers = false to leave it inert".into(),
            ],
            Self::ExpansionDiverged { marker, .. } => vec![
                format!("A handler for '{marker}' re-emits its own block"),
                "Raise expansion.max_iterations only if the template is very large".into(),
            ],
            Self::InvalidMetadata { .. } => vec![
                "Every metadata entry needs a non-empty 'name'".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModelNotFound { .. } | Self::VersionNotFound { .. } => ErrorCategory::NotFound,
            Self::ModelResolution { .. }
            | Self::UnterminatedBlock { .. }
            | Self::InvalidMetadata { .. } => ErrorCategory::Validation,
            Self::ExpansionDiverged { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
