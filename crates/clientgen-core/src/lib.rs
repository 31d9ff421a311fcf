//! clientgen core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for generating
//! per-service API client source files from directive templates and
//! versioned model descriptions.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          clientgen-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ClientSourceGenerator, Orchestrator)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Templates, Catalog, Metadata, Fs, ...) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   clientgen-adapters (Infrastructure)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (TemplateExpander, VersionResolver)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clientgen_core::prelude::*;
//!
//! # fn run(templates: Box<dyn TemplateSource>, catalog: Box<dyn ModelCatalog>,
//! #        probe: Box<dyn CustomizationProbe>, metadata: ServiceMetadataTable,
//! #        fs: Box<dyn Filesystem>) -> GenResult<()> {
//! let generator =
//!     ClientSourceGenerator::new(templates, catalog, probe, metadata, OutputLayout::new("clients"));
//! let report = GenerationOrchestrator::new(generator, fs).run()?;
//! println!("{} clients written", report.services.len());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ClientSourceGenerator, GenerationOrchestrator, GenerationReport,
        ports::{
            CustomizationProbe, Filesystem, MetadataSource, ModelCatalog, TemplateKind,
            TemplateSource,
        },
    };
    pub use crate::domain::{
        DomainError, GeneratedFile, ModelVersionResolver, OutputLayout, ReplacerTable,
        ServiceMetadataEntry, ServiceMetadataTable, ServiceVersionModel, TemplateExpander,
        VersionSelector,
    };
    pub use crate::error::{GenError, GenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
