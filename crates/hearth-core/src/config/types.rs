//! Configuration type definitions.
//!
//! These types are serialized/deserialized from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.hearth/config.toml`
/// 2. Project config: `./.hearth/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HearthConfig {
    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub control: ControlConfig,

    #[serde(default)]
    pub presence: PresenceConfig,

    #[serde(default)]
    pub peer: PeerConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub bundles: BundlesConfig,
}

/// Chat overlay window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatConfig {
    /// Default: 600.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Default: 450.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Activity control channel settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ControlConfig {
    /// Directory holding activity control sockets.
    /// Default: `$XDG_RUNTIME_DIR/hearth`, else `~/.hearth/sockets`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket_dir: Option<PathBuf>,

    /// Seconds to wait for an activity's reply.
    /// Default: 30 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_timeout_secs: Option<u64>,

    /// Seconds to wait while sending a request.
    /// Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_timeout_secs: Option<u64>,
}

/// Presence directory settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PresenceConfig {
    /// Service type a buddy must announce to receive invitations.
    /// Default: `_presence_olpc._tcp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

/// Outbound peer stream settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PeerConfig {
    /// Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,

    /// Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_timeout_secs: Option<u64>,
}

/// The local user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    /// Icon color as `"#STROKE,#FILL"`.
    /// Default: `#000000,#FFFFFF`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Where to look for activity bundles.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BundlesConfig {
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}
