//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate one client" or "generate everything".

pub mod client_generator;
pub mod orchestrator;

pub use client_generator::{ClientSourceGenerator, markers};
pub use orchestrator::{
    ALL_SERVICES_OUTPUT, BROWSER_OUTPUT, GenerationOrchestrator, GenerationReport,
};
