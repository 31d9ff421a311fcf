//! Application ports (traits) for external collaborators.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `clientgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateSource`: client and loader templates
//!   - `ModelCatalog`: model filename listing
//!   - `CustomizationProbe`: hand-written override detection
//!   - `MetadataSource`: static service metadata
//!   - `Filesystem`: writing generated clients
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    CustomizationProbe, Filesystem, MetadataSource, ModelCatalog, TemplateKind, TemplateSource,
};
