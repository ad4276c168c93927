use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk shape of a `bundle.toml` manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct BundleManifest {
    pub activity: ActivitySection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivitySection {
    pub name: String,
    pub service_name: String,
    pub icon: String,
}

/// Metadata for one installed activity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleInfo {
    name: String,
    service_name: String,
    icon: String,
    path: PathBuf,
}

impl BundleInfo {
    pub fn new(name: String, service_name: String, icon: String, path: PathBuf) -> Self {
        Self {
            name,
            service_name,
            icon,
            path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The activity type this bundle provides.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Bundle directory the manifest was read from.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}
