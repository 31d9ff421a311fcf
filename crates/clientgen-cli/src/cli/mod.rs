//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "clientgen",
    bin_name = "clientgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate per-service API client sources from directive templates",
    long_about = "clientgen expands the client and loader templates against the \
                  versioned model files on disk, writing one client per service \
                  plus the `all` and `browser_default` aggregates.",
    after_help = "EXAMPLES:\n\
        \x20 clientgen generate\n\
        \x20 clientgen generate --service dynamodb --api-version 2012-08-10\n\
        \x20 clientgen list --service s3\n\
        \x20 clientgen completions bash > /usr/share/bash-completion/completions/clientgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate client sources.
    #[command(
        visible_alias = "gen",
        about = "Generate client sources",
        after_help = "EXAMPLES:\n\
            \x20 clientgen generate                      # every service + aggregates\n\
            \x20 clientgen generate --service acm        # one client, aggregates untouched\n\
            \x20 clientgen gen -s dynamodb --api-version 2012-08-10"
    )]
    Generate(GenerateArgs),

    /// List services and their resolved model versions.
    #[command(
        visible_alias = "ls",
        about = "List services and model versions",
        after_help = "EXAMPLES:\n\
            \x20 clientgen list\n\
            \x20 clientgen list --service dynamodb\n\
            \x20 clientgen list --format json"
    )]
    List(ListArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 clientgen init           # platform config directory\n\
            \x20 clientgen init --local   # ./clientgen.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 clientgen completions bash > ~/.local/share/bash-completion/completions/clientgen\n\
            \x20 clientgen completions zsh  > ~/.zfunc/_clientgen\n\
            \x20 clientgen completions fish > ~/.config/fish/completions/clientgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 clientgen config get paths.apis_dir\n\
            \x20 clientgen config list\n\
            \x20 clientgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `clientgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Generate only this service (internal key or canonical name).
    #[arg(
        short = 's',
        long = "service",
        value_name = "NAME",
        help = "Generate a single service client"
    )]
    pub service: Option<String>,

    /// Restrict the generated client to one model version.
    #[arg(
        long = "api-version",
        value_name = "YYYY-MM-DD",
        requires = "service",
        help = "Only include this model version (`*` for all)"
    )]
    pub api_version: Option<String>,

    /// Override `paths.apis_dir`.
    #[arg(long = "apis-dir", value_name = "DIR", help = "Model files directory")]
    pub apis_dir: Option<PathBuf>,

    /// Override `paths.clients_dir`.
    #[arg(long = "clients-dir", value_name = "DIR", help = "Output directory")]
    pub clients_dir: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `clientgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show a single service.
    #[arg(short = 's', long = "service", value_name = "NAME", help = "Filter by service")]
    pub service: Option<String>,

    /// Override `paths.apis_dir`.
    #[arg(long = "apis-dir", value_name = "DIR", help = "Model files directory")]
    pub apis_dir: Option<PathBuf>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One service name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `clientgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `clientgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `clientgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `clientgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.apis_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_all() {
        let cli = Cli::parse_from(["clientgen", "generate"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.service.is_none());
        assert!(args.api_version.is_none());
    }

    #[test]
    fn gen_alias_with_version() {
        let cli = Cli::parse_from([
            "clientgen",
            "gen",
            "-s",
            "dynamodb",
            "--api-version",
            "2012-08-10",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.service.as_deref(), Some("dynamodb"));
        assert_eq!(args.api_version.as_deref(), Some("2012-08-10"));
    }

    #[test]
    fn api_version_requires_service() {
        let result = Cli::try_parse_from(["clientgen", "generate", "--api-version", "2012-08-10"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_defaults_to_table() {
        let cli = Cli::parse_from(["clientgen", "ls"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["clientgen", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
