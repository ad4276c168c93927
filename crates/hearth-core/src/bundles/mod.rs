//! Bundle registry: metadata about installed activity types.
//!
//! # Manifest format
//!
//! ```toml
//! [activity]
//! name = "Web"
//! service_name = "org.laptop.WebActivity"
//! icon = "activity-web"
//! ```

pub mod errors;
pub mod registry;
pub mod types;

pub use errors::BundleError;
pub use registry::{BundleRegistry, FileBundleRegistry, MANIFEST_FILE_NAME, load_manifest};
pub use types::{BundleInfo, BundleManifest};
