use std::path::PathBuf;

use crate::errors::HearthError;

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("Failed to read bundle manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse bundle manifest '{path}': {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Invalid bundle manifest '{path}': {message}")]
    InvalidManifest { path: PathBuf, message: String },
}

impl HearthError for BundleError {
    fn error_code(&self) -> &'static str {
        match self {
            BundleError::ManifestRead { .. } => "BUNDLE_MANIFEST_READ_FAILED",
            BundleError::ManifestParse { .. } => "BUNDLE_MANIFEST_PARSE_ERROR",
            BundleError::InvalidManifest { .. } => "BUNDLE_MANIFEST_INVALID",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            BundleError::ManifestParse { .. } | BundleError::InvalidManifest { .. }
        )
    }
}
