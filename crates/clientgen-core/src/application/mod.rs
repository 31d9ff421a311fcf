//! Application layer for clientgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ClientSourceGenerator, GenerationOrchestrator)
//! - **Ports**: Interface definitions (traits) for external collaborators
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation logic itself. Expansion and resolution live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ClientSourceGenerator, GenerationOrchestrator, GenerationReport};

pub use ports::{
    CustomizationProbe, Filesystem, MetadataSource, ModelCatalog, TemplateKind, TemplateSource,
};

pub use error::ApplicationError;
