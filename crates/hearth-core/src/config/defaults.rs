//! Default implementations for configuration types.
//!
//! Unset keys stay `None` through loading and merging so a later config file
//! can set any value, including one equal to the built-in default. The
//! accessors below resolve the built-in defaults.

use std::path::PathBuf;

use crate::config::types::{ChatConfig, ControlConfig, PeerConfig, PresenceConfig, ProfileConfig};
use crate::overlay::{CHAT_WINDOW_HEIGHT, CHAT_WINDOW_WIDTH};
use crate::presence::IconColor;

/// mDNS service type buddies announce for shell-to-shell traffic.
pub const DEFAULT_PRESENCE_SERVICE_TYPE: &str = "_presence_olpc._tcp";

pub const DEFAULT_PROFILE_COLOR: &str = "#000000,#FFFFFF";

pub fn default_icon_color() -> IconColor {
    IconColor::parse(DEFAULT_PROFILE_COLOR).expect("built-in profile color must parse")
}

/// Returns the default control socket directory.
///
/// Prefers `$XDG_RUNTIME_DIR/hearth`, then `~/.hearth/sockets`, then a
/// directory under the system temp dir.
pub fn default_socket_dir() -> PathBuf {
    if let Some(runtime) = dirs::runtime_dir() {
        return runtime.join("hearth");
    }
    match dirs::home_dir() {
        Some(home) => home.join(".hearth").join("sockets"),
        None => {
            eprintln!(
                "Warning: Could not find home directory. Set HOME environment variable. \
                Using fallback directory."
            );
            std::env::temp_dir().join("hearth")
        }
    }
}

impl ChatConfig {
    /// Returns the chat window width, defaulting to 600.
    pub fn width(&self) -> u32 {
        self.width.unwrap_or(CHAT_WINDOW_WIDTH)
    }

    /// Returns the chat window height, defaulting to 450.
    pub fn height(&self) -> u32 {
        self.height.unwrap_or(CHAT_WINDOW_HEIGHT)
    }
}

impl ControlConfig {
    /// Returns the configured socket directory or [`default_socket_dir`].
    pub fn socket_dir(&self) -> PathBuf {
        self.socket_dir.clone().unwrap_or_else(default_socket_dir)
    }

    /// Returns the reply timeout in seconds, defaulting to 30.
    pub fn read_timeout_secs(&self) -> u64 {
        self.read_timeout_secs.unwrap_or(30)
    }

    /// Returns the send timeout in seconds, defaulting to 5.
    pub fn write_timeout_secs(&self) -> u64 {
        self.write_timeout_secs.unwrap_or(5)
    }
}

impl PresenceConfig {
    pub fn service_type(&self) -> &str {
        self.service_type
            .as_deref()
            .unwrap_or(DEFAULT_PRESENCE_SERVICE_TYPE)
    }
}

impl PeerConfig {
    /// Returns the connect timeout in seconds, defaulting to 5.
    pub fn connect_timeout_secs(&self) -> u64 {
        self.connect_timeout_secs.unwrap_or(5)
    }

    /// Returns the send timeout in seconds, defaulting to 5.
    pub fn write_timeout_secs(&self) -> u64 {
        self.write_timeout_secs.unwrap_or(5)
    }
}

impl ProfileConfig {
    /// Returns the raw profile color string, defaulting to black on white.
    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_PROFILE_COLOR)
    }
}
