//! Customization probes.
//!
//! A service has hand-written customizations when
//! `<customizations_dir>/<service>.js` exists.

use std::{collections::HashSet, path::PathBuf};

use tracing::trace;

use clientgen_core::application::ports::CustomizationProbe;

const CUSTOMIZATION_EXTENSION: &str = "js";

#[derive(Debug, Clone)]
pub struct DirectoryCustomizationProbe {
    dir: PathBuf,
}

impl DirectoryCustomizationProbe {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, service_name: &str) -> PathBuf {
        self.dir
            .join(format!("{service_name}.{CUSTOMIZATION_EXTENSION}"))
    }
}

impl CustomizationProbe for DirectoryCustomizationProbe {
    fn exists(&self, service_name: &str) -> bool {
        let path = self.path_for(service_name);
        let found = path.is_file();
        trace!(path = %path.display(), found, "customization probe");
        found
    }
}

/// Reports customizations for a fixed set of service names.
#[derive(Debug, Clone, Default)]
pub struct StaticCustomizationProbe {
    services: HashSet<String>,
}

impl StaticCustomizationProbe {
    pub fn new<I, S>(services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            services: services.into_iter().map(Into::into).collect(),
        }
    }
}

impl CustomizationProbe for StaticCustomizationProbe {
    fn exists(&self, service_name: &str) -> bool {
        self.services.contains(service_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn detects_service_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("s3.js"), "").unwrap();
        std::fs::create_dir(temp.path().join("ec2.js")).unwrap();

        let probe = DirectoryCustomizationProbe::new(temp.path());
        assert!(probe.exists("s3"));
        assert!(!probe.exists("ec2"));
        assert!(!probe.exists("sqs"));
    }

    #[test]
    fn static_probe_matches_exact_names() {
        let probe = StaticCustomizationProbe::new(["dynamodb"]);
        assert!(probe.exists("dynamodb"));
        assert!(!probe.exists("DynamoDB"));
    }
}
