pub mod generated_file;
pub mod model_version;
pub mod service_metadata;

pub use crate::domain::DomainError;
pub use generated_file::{GeneratedFile, OutputLayout};
pub use model_version::{ServiceVersionModel, VersionArtifacts};
pub use service_metadata::{ServiceMetadataEntry, ServiceMetadataTable};
