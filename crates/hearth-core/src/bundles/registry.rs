use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::errors::BundleError;
use super::types::{BundleInfo, BundleManifest};

pub const MANIFEST_FILE_NAME: &str = "bundle.toml";

/// Lookup of bundle metadata by activity type.
pub trait BundleRegistry {
    fn get_bundle(&self, service_name: &str) -> Option<BundleInfo>;
}

/// Registry built by scanning bundle directories for manifests.
#[derive(Debug, Clone, Default)]
pub struct FileBundleRegistry {
    bundles: BTreeMap<String, BundleInfo>,
}

impl FileBundleRegistry {
    /// Scan each path (manifests at most two levels deep) and index the bundles.
    ///
    /// Missing directories and broken manifests are logged and skipped. When
    /// two bundles share a service name, the first one scanned wins.
    pub fn scan(paths: &[PathBuf]) -> Self {
        let mut registry = Self::default();

        for root in paths {
            if !root.is_dir() {
                debug!(
                    event = "core.bundles.scan_path_skipped",
                    path = %root.display(),
                    reason = "not a directory"
                );
                continue;
            }

            let mut manifests: Vec<PathBuf> = WalkDir::new(root)
                .max_depth(2)
                .into_iter()
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        warn!(event = "core.bundles.scan_entry_failed", error = %e);
                        None
                    }
                })
                .filter(|entry| entry.file_type().is_file())
                .filter(|entry| entry.file_name() == MANIFEST_FILE_NAME)
                .map(|entry| entry.into_path())
                .collect();
            manifests.sort();

            for manifest_path in manifests {
                match load_manifest(&manifest_path) {
                    Ok(info) => registry.insert(info),
                    Err(e) => warn!(
                        event = "core.bundles.manifest_skipped",
                        path = %manifest_path.display(),
                        error = %e
                    ),
                }
            }
        }

        info!(
            event = "core.bundles.scan_completed",
            path_count = paths.len(),
            bundle_count = registry.bundles.len()
        );

        registry
    }

    fn insert(&mut self, info: BundleInfo) {
        if let Some(existing) = self.bundles.get(info.service_name()) {
            warn!(
                event = "core.bundles.duplicate_skipped",
                service_name = info.service_name(),
                kept = %existing.path().display(),
                skipped = %info.path().display()
            );
            return;
        }
        self.bundles.insert(info.service_name().to_string(), info);
    }

    /// All bundles ordered by service name.
    pub fn bundles(&self) -> Vec<&BundleInfo> {
        self.bundles.values().collect()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

impl BundleRegistry for FileBundleRegistry {
    fn get_bundle(&self, service_name: &str) -> Option<BundleInfo> {
        self.bundles.get(service_name).cloned()
    }
}

/// Read and validate a single `bundle.toml`.
pub fn load_manifest(path: &Path) -> Result<BundleInfo, BundleError> {
    let content = fs::read_to_string(path).map_err(|source| BundleError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest: BundleManifest =
        toml::from_str(&content).map_err(|e| BundleError::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let activity = manifest.activity;
    for (field, value) in [
        ("name", &activity.name),
        ("service_name", &activity.service_name),
        ("icon", &activity.icon),
    ] {
        if value.trim().is_empty() {
            return Err(BundleError::InvalidManifest {
                path: path.to_path_buf(),
                message: format!("{} is empty", field),
            });
        }
    }

    let bundle_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| path.to_path_buf());

    Ok(BundleInfo::new(
        activity.name,
        activity.service_name,
        activity.icon,
        bundle_dir,
    ))
}
