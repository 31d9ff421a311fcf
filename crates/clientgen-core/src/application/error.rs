//! Application layer errors.
//!
//! These errors represent failures at the ports (loading templates, listing
//! models, reading metadata, writing clients), not generation logic.
//! Generation logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while talking to the outside world.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template could not be read.
    #[error("Failed to load {kind} template from {path}: {reason}")]
    TemplateLoad {
        kind: String,
        path: PathBuf,
        reason: String,
    },

    /// The model directory could not be listed.
    #[error("Failed to list model files in {path}: {reason}")]
    Catalog { path: PathBuf, reason: String },

    /// The service metadata table could not be read or parsed.
    #[error("Failed to load service metadata from {path}: {reason}")]
    MetadataLoad { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A cache lock was poisoned.
    #[error("Cache lock poisoned")]
    StoreLockError,

    /// A service name is not present in the metadata table.
    #[error("Unknown service: {name}")]
    UnknownService { name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateLoad { kind, path, .. } => vec![
                format!("Check that the {kind} template exists: {}", path.display()),
                format!("Or set paths.{kind}_template in the config file"),
            ],
            Self::Catalog { path, .. } => vec![
                format!("Check that the models directory exists: {}", path.display()),
                "Or set paths.apis_dir in the config file".into(),
            ],
            Self::MetadataLoad { path, .. } => vec![
                format!("Check that {} is valid JSON", path.display()),
                "Entries look like: { \"acm\": { \"name\": \"ACM\", \"cors\": true } }".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec![
                "A previous operation panicked while holding a cache".into(),
                "Run the command again".into(),
            ],
            Self::UnknownService { .. } => vec![
                "Try: clientgen list to see known services".into(),
                "Service names are matched case-insensitively".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateLoad { .. } | Self::Catalog { .. } | Self::MetadataLoad { .. } => {
                ErrorCategory::Configuration
            }
            Self::UnknownService { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
