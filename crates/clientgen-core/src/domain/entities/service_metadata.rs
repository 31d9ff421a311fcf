use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// One row of the static service metadata table.
///
/// Deserialises from the `metadata.json` shape:
/// `{ "name": "ACM", "prefix": "acm", "cors": true }`. Fields the generator
/// does not read are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetadataEntry {
    #[serde(rename = "name")]
    canonical_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(default)]
    cors: bool,
}

impl ServiceMetadataEntry {
    pub fn new(canonical_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            prefix: None,
            cors: false,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_cors(mut self, cors: bool) -> Self {
        self.cors = cors;
        self
    }

    /// Class name used in generated code, e.g. `DynamoDB`.
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// Lowercase service name, e.g. `dynamodb`.
    pub fn service_name(&self) -> String {
        self.canonical_name.to_lowercase()
    }

    /// Filename prefix of the service's models. Falls back to the service name.
    pub fn model_name(&self) -> String {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => prefix.to_owned(),
            _ => self.service_name(),
        }
    }

    pub fn supports_cors(&self) -> bool {
        self.cors
    }
}

/// Static metadata for every known service, keyed by internal service key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceMetadataTable {
    entries: BTreeMap<String, ServiceMetadataEntry>,
}

impl ServiceMetadataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, entry: ServiceMetadataEntry) -> Self {
        self.insert(key, entry);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: ServiceMetadataEntry) {
        self.entries.insert(key.into(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&ServiceMetadataEntry> {
        self.entries.get(key)
    }

    /// Look a service up by internal key, or by its lowercase service name.
    pub fn find_service(&self, name: &str) -> Option<&ServiceMetadataEntry> {
        self.get(name).or_else(|| {
            let wanted = name.to_lowercase();
            self.entries
                .values()
                .find(|entry| entry.service_name() == wanted)
        })
    }

    /// Look a service up by its lowercase service name first, then by key.
    ///
    /// Aggregates are built from service names, and a key may collide with
    /// another entry's service name.
    pub fn find_by_service_name(&self, name: &str) -> Option<&ServiceMetadataEntry> {
        let wanted = name.to_lowercase();
        self.entries
            .values()
            .find(|entry| entry.service_name() == wanted)
            .or_else(|| self.get(name))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ServiceMetadataEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Lowercase names of every service, in table order.
    pub fn service_names(&self) -> Vec<String> {
        self.entries.values().map(ServiceMetadataEntry::service_name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for (key, entry) in &self.entries {
            if entry.canonical_name.trim().is_empty() {
                return Err(DomainError::InvalidMetadata {
                    key: key.clone(),
                    reason: "name is empty".into(),
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, ServiceMetadataEntry)> for ServiceMetadataTable {
    fn from_iter<T: IntoIterator<Item = (String, ServiceMetadataEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
