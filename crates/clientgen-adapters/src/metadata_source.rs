//! Service metadata sources.
//!
//! The metadata file is a JSON object keyed by internal service key:
//!
//! ```json
//! {
//!   "acm":      { "name": "ACM", "cors": true },
//!   "iotdata":  { "name": "IotData", "prefix": "iot-data" }
//! }
//! ```

use std::{fs, path::PathBuf};

use tracing::{debug, instrument};

use clientgen_core::{
    application::{ApplicationError, ports::MetadataSource},
    domain::{DomainValidator, ServiceMetadataTable},
    error::GenResult,
};

/// Reads and validates the metadata table from a JSON file on every `load`.
#[derive(Debug, Clone)]
pub struct JsonMetadataSource {
    path: PathBuf,
}

impl JsonMetadataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MetadataSource for JsonMetadataSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> GenResult<ServiceMetadataTable> {
        let load_error = |reason: String| ApplicationError::MetadataLoad {
            path: self.path.clone(),
            reason,
        };

        let raw = fs::read_to_string(&self.path).map_err(|e| load_error(e.to_string()))?;
        let table: ServiceMetadataTable =
            serde_json::from_str(&raw).map_err(|e| load_error(e.to_string()))?;

        DomainValidator::validate_metadata(&table)?;
        debug!(services = table.len(), "loaded service metadata");
        Ok(table)
    }
}

/// A metadata table held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticMetadataSource {
    table: ServiceMetadataTable,
}

impl StaticMetadataSource {
    pub fn new(table: ServiceMetadataTable) -> Self {
        Self { table }
    }
}

impl MetadataSource for StaticMetadataSource {
    fn load(&self) -> GenResult<ServiceMetadataTable> {
        DomainValidator::validate_metadata(&self.table)?;
        Ok(self.table.clone())
    }
}
