//! # Configuration System
//!
//! Hierarchical TOML configuration for Hearth.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.hearth/config.toml` (global user preferences)
//! 3. **Project config** - `./.hearth/config.toml` (local overrides)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.hearth/config.toml
//! [chat]
//! width = 600
//! height = 450
//!
//! [control]
//! socket_dir = "/run/user/1000/hearth"
//! read_timeout_secs = 30
//!
//! [profile]
//! color = "#FF2B34,#005FE4"
//!
//! [bundles]
//! paths = ["/usr/share/activities"]
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use hearth_core::config::HearthConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HearthConfig::load_hierarchy()?;
//!     let socket_dir = config.control_socket_dir();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

use std::path::PathBuf;
use std::time::Duration;

pub use types::{
    BundlesConfig, ChatConfig, ControlConfig, HearthConfig, PeerConfig, PresenceConfig,
    ProfileConfig,
};
pub use validation::validate_config;

use crate::control::SocketConnector;
use crate::peer::TcpPeerMessenger;
use crate::presence::IconColor;

impl HearthConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }

    /// Directory holding activity control sockets.
    pub fn control_socket_dir(&self) -> PathBuf {
        self.control.socket_dir()
    }

    /// Control-channel connector honoring the configured timeouts.
    pub fn control_connector(&self) -> SocketConnector {
        SocketConnector::new(
            self.control_socket_dir(),
            Duration::from_secs(self.control.read_timeout_secs()),
            Duration::from_secs(self.control.write_timeout_secs()),
        )
    }

    /// Peer messenger honoring the configured timeouts.
    pub fn peer_messenger(&self) -> TcpPeerMessenger {
        TcpPeerMessenger::new(
            Duration::from_secs(self.peer.connect_timeout_secs()),
            Duration::from_secs(self.peer.write_timeout_secs()),
        )
    }

    /// The local profile color, or the built-in default when the configured
    /// value does not parse. Validated configs always parse.
    pub fn profile_color(&self) -> IconColor {
        IconColor::parse(self.profile.color()).unwrap_or_else(|_| defaults::default_icon_color())
    }

    pub fn chat_size(&self) -> (u32, u32) {
        (self.chat.width(), self.chat.height())
    }
}
