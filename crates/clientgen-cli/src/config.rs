//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--apis-dir`, `--clients-dir`; applied at the call-site)
//! 2. Environment variables, `CLIENTGEN__<SECTION>__<KEY>`
//! 3. `--config <FILE>` if given, otherwise `./clientgen.toml` and then the
//!    platform config file
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Environment prefix; `CLIENTGEN__PATHS__APIS_DIR` maps to `paths.apis_dir`.
pub const ENV_PREFIX: &str = "CLIENTGEN";

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = "clientgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub output: OutputConfig,
    pub expansion: ExpansionConfig,
}

/// Where inputs are read from and clients are written to.  Relative paths
/// resolve against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding `<model>-<date>.<kind>.json` files.
    pub apis_dir: PathBuf,
    pub metadata_file: PathBuf,
    pub clients_dir: PathBuf,
    /// Hand-written overrides, probed as `<dir>/<service>.js`.
    pub customizations_dir: PathBuf,
    pub client_template: PathBuf,
    pub loader_template: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            apis_dir: "apis".into(),
            metadata_file: Path::new("apis").join("metadata.json"),
            clients_dir: "clients".into(),
            customizations_dir: Path::new("lib").join("services"),
            client_template: Path::new("dist-tools").join("client-template.js"),
            loader_template: Path::new("dist-tools").join("client-loader-template.js"),
        }
    }
}

impl PathsConfig {
    /// Point `apis_dir` at `dir`.  A metadata file inside the old directory
    /// moves along with it.
    pub fn relocate_apis_dir(&mut self, dir: PathBuf) {
        if let Ok(rest) = self.metadata_file.strip_prefix(&self.apis_dir) {
            self.metadata_file = dir.join(rest);
        }
        self.apis_dir = dir;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Extension of generated files, without the dot.
    pub extension: String,
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: "js".into(),
            no_color: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Cap on block replacements per marker before expansion is declared
    /// divergent.
    pub max_iterations: usize,
    /// Treat an opening block marker without its closing pair as an error.
    pub strict_markers: bool,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            strict_markers: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, config files and the environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        builder = match config_file {
            Some(path) => builder.add_source(toml_file(path, true)),
            None => builder
                .add_source(toml_file(&Self::config_path(), false))
                .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE), false)),
        };

        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `./clientgen.toml`.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "clientgen", "clientgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Serialise as the TOML written by `clientgen init`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn toml_file(path: &Path, required: bool) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml).required(required)
}
