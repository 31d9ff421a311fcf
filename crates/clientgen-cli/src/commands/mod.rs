//! Subcommand handlers.  Each module exposes a single `execute`.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;
