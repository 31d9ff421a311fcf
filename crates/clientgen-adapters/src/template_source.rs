//! Template source adapters.
//!
//! [`FilesystemTemplateSource`] reads the client and loader templates from
//! disk the first time each is requested and serves the cached text after
//! that. [`InMemoryTemplateSource`] holds both templates as strings.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use tracing::{debug, instrument};

use clientgen_core::{
    application::{
        ApplicationError,
        ports::{TemplateKind, TemplateSource},
    },
    error::GenResult,
};

// ── Filesystem ────────────────────────────────────────────────────────────────

/// Reads templates from two files, each at most once per instance.
#[derive(Debug)]
pub struct FilesystemTemplateSource {
    client_path: PathBuf,
    loader_path: PathBuf,
    client: OnceLock<String>,
    loader: OnceLock<String>,
}

impl FilesystemTemplateSource {
    pub fn new(client_path: impl Into<PathBuf>, loader_path: impl Into<PathBuf>) -> Self {
        Self {
            client_path: client_path.into(),
            loader_path: loader_path.into(),
            client: OnceLock::new(),
            loader: OnceLock::new(),
        }
    }

    pub fn path(&self, kind: TemplateKind) -> &Path {
        match kind {
            TemplateKind::Client => &self.client_path,
            TemplateKind::Loader => &self.loader_path,
        }
    }

    fn cell(&self, kind: TemplateKind) -> &OnceLock<String> {
        match kind {
            TemplateKind::Client => &self.client,
            TemplateKind::Loader => &self.loader,
        }
    }

    #[instrument(skip(self), fields(path = %self.path(kind).display()))]
    fn read(&self, kind: TemplateKind) -> GenResult<String> {
        let path = self.path(kind);
        let text = fs::read_to_string(path).map_err(|e| ApplicationError::TemplateLoad {
            kind: kind.to_string(),
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(bytes = text.len(), "loaded template");
        Ok(text)
    }
}

impl TemplateSource for FilesystemTemplateSource {
    fn load(&self, kind: TemplateKind) -> GenResult<String> {
        let cell = self.cell(kind);
        if let Some(text) = cell.get() {
            return Ok(text.clone());
        }

        let text = self.read(kind)?;
        // A concurrent first load may have won; either copy is identical.
        Ok(cell.get_or_init(|| text).clone())
    }
}

// ── In memory ─────────────────────────────────────────────────────────────────

/// Both templates held in memory (tests, embedding).
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateSource {
    client: String,
    loader: String,
}

impl InMemoryTemplateSource {
    pub fn new(client: impl Into<String>, loader: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            loader: loader.into(),
        }
    }
}

impl TemplateSource for InMemoryTemplateSource {
    fn load(&self, kind: TemplateKind) -> GenResult<String> {
        Ok(match kind {
            TemplateKind::Client => self.client.clone(),
            TemplateKind::Loader => self.loader.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientgen_core::error::GenError;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_each_kind_from_its_file() {
        let temp = TempDir::new().unwrap();
        let client = write(temp.path(), "client-template.js", "client");
        let loader = write(temp.path(), "client-loader-template.js", "loader");

        let source = FilesystemTemplateSource::new(client, loader);
        assert_eq!(source.load(TemplateKind::Client).unwrap(), "client");
        assert_eq!(source.load(TemplateKind::Loader).unwrap(), "loader");
    }

    #[test]
    fn template_is_read_once() {
        let temp = TempDir::new().unwrap();
        let client = write(temp.path(), "client.js", "v1");
        let source = FilesystemTemplateSource::new(&client, temp.path().join("loader.js"));

        assert_eq!(source.load(TemplateKind::Client).unwrap(), "v1");
        fs::write(&client, "v2").unwrap();
        assert_eq!(source.load(TemplateKind::Client).unwrap(), "v1");
    }

    #[test]
    fn missing_template_is_template_load_error() {
        let temp = TempDir::new().unwrap();
        let source = FilesystemTemplateSource::new(
            temp.path().join("nope.js"),
            temp.path().join("nope-loader.js"),
        );

        let err = source.load(TemplateKind::Loader).unwrap_err();
        match err {
            GenError::Application(ApplicationError::TemplateLoad { kind, path, .. }) => {
                assert_eq!(kind, "loader");
                assert!(path.ends_with("nope-loader.js"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn in_memory_source_returns_given_text() {
        let source = InMemoryTemplateSource::new("c", "l");
        assert_eq!(source.load(TemplateKind::Client).unwrap(), "c");
        assert_eq!(source.load(TemplateKind::Loader).unwrap(), "l");
    }
}
