//! Model catalog adapters.
//!
//! The directory catalog lists the model directory once (top level only,
//! regular files only) and caches the sorted result for the rest of the run.
//!
//! ```text
//! apis/
//! ├── metadata.json                 ← excluded
//! ├── acm-2015-12-08.min.json
//! ├── acm-2015-12-08.paginators.json
//! └── ...
//! ```

use std::{path::PathBuf, sync::OnceLock};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use clientgen_core::{
    application::{ApplicationError, ports::ModelCatalog},
    error::GenResult,
};

/// The metadata index that lives next to the models and is never a model.
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// Lists model filenames from a directory, cached after the first call.
#[derive(Debug)]
pub struct DirectoryModelCatalog {
    dir: PathBuf,
    cache: OnceLock<Vec<String>>,
}

impl DirectoryModelCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: OnceLock::new(),
        }
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn scan(&self) -> GenResult<Vec<String>> {
        if !self.dir.is_dir() {
            return Err(ApplicationError::Catalog {
                path: self.dir.clone(),
                reason: "not a directory".into(),
            }
            .into());
        }

        let mut names = Vec::new();

        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::Catalog {
                path: self.dir.clone(),
                reason: e.to_string(),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                debug!(path = %entry.path().display(), "skipping non UTF-8 filename");
                continue;
            };

            if name != METADATA_FILE_NAME {
                names.push(name.to_owned());
            }
        }

        names.sort();
        debug!(count = names.len(), "listed model files");
        Ok(names)
    }
}

impl ModelCatalog for DirectoryModelCatalog {
    fn filenames(&self) -> GenResult<Vec<String>> {
        if let Some(names) = self.cache.get() {
            return Ok(names.clone());
        }
        let names = self.scan()?;
        Ok(self.cache.get_or_init(|| names).clone())
    }
}

/// A fixed list of filenames. `metadata.json` is filtered out like the
/// directory catalog does.
#[derive(Debug, Clone, Default)]
pub struct StaticModelCatalog {
    names: Vec<String>,
}

impl StaticModelCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(Into::into)
                .filter(|name| name != METADATA_FILE_NAME)
                .collect(),
        }
    }
}

impl ModelCatalog for StaticModelCatalog {
    fn filenames(&self) -> GenResult<Vec<String>> {
        Ok(self.names.clone())
    }
}
