use std::path::{Path, PathBuf};

/// A generated source file ready for persistence.
///
/// This is the output of generation.
/// It contains no business logic, only data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub source_text: String,
    pub destination_path: PathBuf,
    /// Lowercase service name, or the aggregate's output name.
    pub service: String,
}

impl GeneratedFile {
    pub fn new(
        source_text: String,
        destination_path: impl Into<PathBuf>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            source_text,
            destination_path: destination_path.into(),
            service: service.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source_text.is_empty()
    }

    pub fn size(&self) -> usize {
        self.source_text.len()
    }
}

/// Where generated files land: `<clients_dir>/<name>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    clients_dir: PathBuf,
    extension: String,
}

impl OutputLayout {
    pub const DEFAULT_EXTENSION: &'static str = "js";

    pub fn new(clients_dir: impl Into<PathBuf>) -> Self {
        Self {
            clients_dir: clients_dir.into(),
            extension: Self::DEFAULT_EXTENSION.to_owned(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_owned();
        self
    }

    pub fn clients_dir(&self) -> &Path {
        &self.clients_dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.clients_dir.join(format!("{name}.{}", self.extension))
    }
}
