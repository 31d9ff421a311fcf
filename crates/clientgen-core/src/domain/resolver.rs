//! Model version resolution.
//!
//! Turns a flat list of model filenames into a [`ServiceVersionModel`]:
//!
//! ```text
//! foo-2015-01-01.min.json          ─┐
//! foo-2015-01-01.paginators.json   ─┼─► 2015-01-01 { api, paginators }
//! foo-2016-02-02.min.json          ─┴─► 2016-02-02 { api }
//! bar-2015-01-01.min.json          ───► (ignored, other service)
//! ```
//!
//! No validation happens here: a version without a core API description is
//! still reported, so listings can show it. Generation rejects it later.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::model_version::{ArtifactKind, ServiceVersionModel};

/// `<model>-<YYYY-MM-DD>.<token>.json`; group 1 is the filename minus `.json`.
static MODEL_FILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((.+)-(\d{4}-\d{2}-\d{2})\.([A-Za-z0-9_]+))\.json$").expect("valid regex")
});

/// One filename that belongs to the service being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelFile<'a> {
    /// Filename without `.json`, e.g. `foo-2015-01-01.min`.
    pub model_id: &'a str,
    /// Version key, e.g. `2015-01-01`.
    pub version: &'a str,
    /// Artifact token, e.g. `min`.
    pub token: &'a str,
}

impl<'a> ModelFile<'a> {
    /// Parse `filename` if it is a model file of `model_name`.
    pub fn parse(filename: &'a str, model_name: &str) -> Option<Self> {
        let caps = MODEL_FILE_REGEX.captures(filename)?;
        if caps.get(2)?.as_str() != model_name {
            return None;
        }
        Some(Self {
            model_id: caps.get(1)?.as_str(),
            version: caps.get(3)?.as_str(),
            token: caps.get(4)?.as_str(),
        })
    }

    pub fn kind(&self) -> Option<ArtifactKind> {
        ArtifactKind::from_token(self.token)
    }
}

/// Groups model filenames into versions for one service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelVersionResolver;

impl ModelVersionResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve<I, S>(&self, filenames: I, model_name: &str) -> ServiceVersionModel
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut model = ServiceVersionModel::new(model_name);

        for name in filenames {
            let Some(file) = ModelFile::parse(name.as_ref(), model_name) else {
                continue;
            };

            // A version exists as soon as any of its files does, even if the
            // generator consumes none of them.
            let artifacts = model.touch(file.version);
            if let Some(kind) = file.kind() {
                artifacts.set(kind, file.model_id);
            }
        }

        model
    }
}
