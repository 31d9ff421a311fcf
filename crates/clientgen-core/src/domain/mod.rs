//! Core domain layer for clientgen.
//!
//! Pure generation logic: template expansion, model version resolution and
//! the value types they exchange. All I/O (reading templates, listing model
//! files, writing clients) goes through ports defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Observability belongs to the application layer
//! - **Fresh state per call**: Replacer tables and version maps are built
//!   per generation call and never shared between services

pub mod entities;
pub mod error;
pub mod resolver;
pub mod template;

mod validation;

pub use entities::{
    GeneratedFile, OutputLayout, ServiceMetadataEntry, ServiceMetadataTable, ServiceVersionModel,
    VersionArtifacts,
    model_version::{ArtifactKind, ResolvedVersion, VersionSelector},
};

pub use error::{DomainError, ErrorCategory};

pub use resolver::{ModelFile, ModelVersionResolver};

pub use template::{
    Directive, ExpansionContext, ReplacerTable, Repetition, TemplateExpander,
};

pub use validation::DomainValidator;
