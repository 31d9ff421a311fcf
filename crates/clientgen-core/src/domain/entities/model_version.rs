//! Versioned model descriptions for a single service.
//!
//! A service's models live on disk as `<model>-<YYYY-MM-DD>.<kind>.json`.
//! Files sharing a date belong to the same API revision (a *version key*);
//! each revision can carry up to three artifact kinds this generator
//! consumes. The map is built by `ModelVersionResolver` and validated only
//! when something is about to be generated from it.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// The artifact kinds the generator consumes.
///
/// Any other token in a model filename (`normal`, `examples`, ...) is an
/// artifact the generator does not read and maps to `None` in
/// [`ArtifactKind::from_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Core API description (`.min.json`). Mandatory for generation.
    Api,
    /// Paginator description (`.paginators.json`).
    Paginators,
    /// Waiter description (`.waiters2.json`).
    Waiters,
}

impl ArtifactKind {
    pub const fn as_token(&self) -> &'static str {
        match self {
            Self::Api => "min",
            Self::Paginators => "paginators",
            Self::Waiters => "waiters2",
        }
    }

    /// Classify a filename token. Unknown tokens are not an error.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "min" => Some(Self::Api),
            "paginators" => Some(Self::Paginators),
            "waiters2" => Some(Self::Waiters),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

// ── VersionArtifacts ──────────────────────────────────────────────────────────

/// Model identifiers (filename minus `.json`) present for one version key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionArtifacts {
    #[serde(rename = "apiFile", skip_serializing_if = "Option::is_none")]
    api_file: Option<String>,
    #[serde(rename = "paginatorsFile", skip_serializing_if = "Option::is_none")]
    paginators_file: Option<String>,
    #[serde(rename = "waitersFile", skip_serializing_if = "Option::is_none")]
    waiters_file: Option<String>,
}

impl VersionArtifacts {
    pub fn api_file(&self) -> Option<&str> {
        self.api_file.as_deref()
    }

    pub fn paginators_file(&self) -> Option<&str> {
        self.paginators_file.as_deref()
    }

    pub fn waiters_file(&self) -> Option<&str> {
        self.waiters_file.as_deref()
    }

    pub fn has_paginators(&self) -> bool {
        self.paginators_file.is_some()
    }

    pub fn has_waiters(&self) -> bool {
        self.waiters_file.is_some()
    }

    /// Record the identifier for `kind`, replacing any earlier one.
    pub fn set(&mut self, kind: ArtifactKind, model_id: impl Into<String>) {
        let slot = match kind {
            ArtifactKind::Api => &mut self.api_file,
            ArtifactKind::Paginators => &mut self.paginators_file,
            ArtifactKind::Waiters => &mut self.waiters_file,
        };
        *slot = Some(model_id.into());
    }

    pub fn with(mut self, kind: ArtifactKind, model_id: impl Into<String>) -> Self {
        self.set(kind, model_id);
        self
    }
}

// ── VersionSelector ───────────────────────────────────────────────────────────

/// Which versions a generation call covers. `*` selects every version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VersionSelector {
    #[default]
    All,
    Exact(String),
}

impl VersionSelector {
    pub const WILDCARD: &'static str = "*";

    pub fn matches(&self, version: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(wanted) => wanted == version,
        }
    }
}

impl FromStr for VersionSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" | Self::WILDCARD => Self::All,
            version => Self::Exact(version.to_owned()),
        })
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::WILDCARD),
            Self::Exact(version) => f.write_str(version),
        }
    }
}

// ── ServiceVersionModel ───────────────────────────────────────────────────────

/// Version map for one service, keyed by version (ascending).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceVersionModel {
    #[serde(rename = "model")]
    model_name: String,
    versions: BTreeMap<String, VersionArtifacts>,
}

impl ServiceVersionModel {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            versions: BTreeMap::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Ensure `version` has an entry, even if none of its artifacts are
    /// consumed.
    pub fn touch(&mut self, version: impl Into<String>) -> &mut VersionArtifacts {
        self.versions.entry(version.into()).or_default()
    }

    pub fn insert(&mut self, version: impl Into<String>, kind: ArtifactKind, model_id: impl Into<String>) {
        self.touch(version).set(kind, model_id);
    }

    pub fn get(&self, version: &str) -> Option<&VersionArtifacts> {
        self.versions.get(version)
    }

    pub fn versions(&self) -> impl Iterator<Item = (&str, &VersionArtifacts)> {
        self.versions.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn version_keys(&self) -> Vec<&str> {
        self.versions.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Versions covered by `selector`, each guaranteed to carry an API file.
    ///
    /// # Errors
    ///
    /// - [`DomainError::VersionNotFound`] if an exact version is not present.
    /// - [`DomainError::ModelResolution`] if a selected version lacks its
    ///   core API description.
    pub fn select(
        &self,
        service: &str,
        selector: &VersionSelector,
    ) -> Result<Vec<ResolvedVersion<'_>>, DomainError> {
        if let VersionSelector::Exact(version) = selector {
            if !self.versions.contains_key(version) {
                return Err(DomainError::VersionNotFound {
                    service: service.to_owned(),
                    version: version.clone(),
                    available: self.versions.keys().cloned().collect(),
                });
            }
        }

        self.versions()
            .filter(|(version, _)| selector.matches(version))
            .map(|(version, artifacts)| {
                let api_file = artifacts
                    .api_file()
                    .ok_or_else(|| DomainError::ModelResolution {
                        service: service.to_owned(),
                        version: version.to_owned(),
                    })?;
                Ok(ResolvedVersion {
                    version,
                    api_file,
                    paginators_file: artifacts.paginators_file(),
                    waiters_file: artifacts.waiters_file(),
                })
            })
            .collect()
    }
}

/// A version that passed validation: the API file is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedVersion<'a> {
    pub version: &'a str,
    pub api_file: &'a str,
    pub paginators_file: Option<&'a str>,
    pub waiters_file: Option<&'a str>,
}
