//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `clientgen-adapters` crate provides implementations.

use std::fmt;
use std::path::Path;

use crate::domain::ServiceMetadataTable;
use crate::error::GenResult;

/// Which of the two templates to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Per-service client template.
    Client,
    /// Aggregate "load all clients" template.
    Loader,
}

impl TemplateKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Loader => "loader",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `clientgen_adapters::template_source::FilesystemTemplateSource` (production, cached)
/// - `clientgen_adapters::template_source::InMemoryTemplateSource` (testing)
///
/// Templates are read-only and shared by every generation call in a run, so
/// implementations are expected to load each one at most once.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    fn load(&self, kind: TemplateKind) -> GenResult<String>;
}

/// Port for the model filename listing.
///
/// Implemented by:
/// - `clientgen_adapters::model_catalog::DirectoryModelCatalog` (production, cached)
/// - `clientgen_adapters::model_catalog::StaticModelCatalog` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ModelCatalog: Send + Sync {
    /// Every filename in the model location, metadata index excluded.
    fn filenames(&self) -> GenResult<Vec<String>>;
}

/// Port for detecting hand-written service customizations.
#[cfg_attr(test, mockall::automock)]
pub trait CustomizationProbe: Send + Sync {
    /// Whether an override file exists for the lowercase `service_name`.
    fn exists(&self, service_name: &str) -> bool;
}

/// Port for the static per-service metadata table.
#[cfg_attr(test, mockall::automock)]
pub trait MetadataSource: Send + Sync {
    fn load(&self) -> GenResult<ServiceMetadataTable>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `clientgen_adapters::filesystem::LocalFilesystem` (production)
/// - `clientgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> GenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
