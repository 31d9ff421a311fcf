//! Tracing subscriber for the `clientgen` binary.
//!
//! Only the binary installs a subscriber; `clientgen-core` and
//! `clientgen-adapters` only emit spans and events. The level comes from
//! [`GlobalArgs::log_level`] unless `RUST_LOG` is set.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the derived level.
const CRATES: [&str; 3] = ["clientgen_cli", "clientgen_core", "clientgen_adapters"];

/// Install the global subscriber. Call once, before anything is logged.
///
/// Events go to stderr; stdout carries the JSON summaries and listings.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(args.log_level())));

    // Targets only help once per-module debug output is on.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(args.verbose >= 2)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `crate=level` for each of our crates; everything else stays off.
fn filter_directive(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn warnings_by_default() {
        assert_eq!(args_with(0, false).log_level(), LevelFilter::WARN);
    }

    #[test]
    fn each_v_raises_the_level() {
        assert_eq!(args_with(1, false).log_level(), LevelFilter::INFO);
        assert_eq!(args_with(2, false).log_level(), LevelFilter::DEBUG);
        assert_eq!(args_with(3, false).log_level(), LevelFilter::TRACE);
        assert_eq!(args_with(10, false).log_level(), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(args_with(0, true).log_level(), LevelFilter::ERROR);
        assert_eq!(args_with(3, true).log_level(), LevelFilter::ERROR);
    }

    #[test]
    fn directive_covers_every_crate() {
        assert_eq!(
            filter_directive(LevelFilter::DEBUG),
            "clientgen_cli=debug,clientgen_core=debug,clientgen_adapters=debug"
        );
    }
}
