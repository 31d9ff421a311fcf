//! Filesystem adapters for writing generated clients.
//!
//! [`LocalFilesystem`] is what the binary uses; [`MemoryFilesystem`] records
//! writes so a whole run can be inspected without touching disk.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
