//! Flags shared by every `clientgen` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so they may appear
//! before or after the subcommand name.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: -v one line per written file, -vv resolved versions and
    /// template cache hits, -vvv ignored model artifacts
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors; also hides the progress bar
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Uncoloured output, also enabled by NO_COLOR
    #[arg(long, global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Settings file layered over the built-in defaults (must exist)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are printed on stdout
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Level applied to clientgen's own crates when `RUST_LOG` is unset.
    ///
    /// `--quiet` wins over any number of `-v`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// How generate, list and config print their results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a TTY, plain otherwise.
    #[default]
    Auto,
    /// Coloured, with a progress bar.
    Human,
    /// No colours and no progress bar.
    Plain,
    /// JSON summaries on stdout.
    Json,
}
