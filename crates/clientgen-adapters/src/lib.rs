//! Infrastructure adapters for clientgen.
//!
//! This crate implements the ports defined in `clientgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod customization;
pub mod filesystem;
pub mod metadata_source;
pub mod model_catalog;
pub mod template_source;

// Re-export commonly used adapters
pub use customization::{DirectoryCustomizationProbe, StaticCustomizationProbe};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use metadata_source::{JsonMetadataSource, StaticMetadataSource};
pub use model_catalog::{DirectoryModelCatalog, METADATA_FILE_NAME, StaticModelCatalog};
pub use template_source::{FilesystemTemplateSource, InMemoryTemplateSource};
