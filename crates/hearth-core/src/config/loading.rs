//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.hearth/config.toml` (global user preferences)
//! 3. **Project config** - `./.hearth/config.toml` (local overrides)

use crate::config::types::{
    BundlesConfig, ChatConfig, ControlConfig, HearthConfig, PeerConfig, PresenceConfig,
    ProfileConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.hearth/config.toml`)
/// 3. Project config (`./.hearth/config.toml`)
///
/// # Errors
///
/// Returns an error if a config file fails to parse or validation fails.
/// Missing config files are not errors.
pub fn load_hierarchy() -> Result<HearthConfig, Box<dyn std::error::Error>> {
    let mut config = HearthConfig::default();

    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {}
    }

    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {}
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.hearth/config.toml.
fn load_user_config() -> Result<HearthConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".hearth").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.hearth/config.toml.
fn load_project_config() -> Result<HearthConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?.join(".hearth").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
///
/// A missing file surfaces the underlying `std::io::Error` so callers can
/// tell it apart from parse failures.
pub fn load_config_file(path: &Path) -> Result<HearthConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: HearthConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present. Bundle paths are
/// concatenated, base first, without duplicates.
pub fn merge_configs(base: HearthConfig, override_config: HearthConfig) -> HearthConfig {
    HearthConfig {
        chat: ChatConfig {
            width: override_config.chat.width.or(base.chat.width),
            height: override_config.chat.height.or(base.chat.height),
        },
        control: ControlConfig {
            socket_dir: override_config.control.socket_dir.or(base.control.socket_dir),
            read_timeout_secs: override_config
                .control
                .read_timeout_secs
                .or(base.control.read_timeout_secs),
            write_timeout_secs: override_config
                .control
                .write_timeout_secs
                .or(base.control.write_timeout_secs),
        },
        presence: PresenceConfig {
            service_type: override_config
                .presence
                .service_type
                .or(base.presence.service_type),
        },
        peer: PeerConfig {
            connect_timeout_secs: override_config
                .peer
                .connect_timeout_secs
                .or(base.peer.connect_timeout_secs),
            write_timeout_secs: override_config
                .peer
                .write_timeout_secs
                .or(base.peer.write_timeout_secs),
        },
        profile: ProfileConfig {
            color: override_config.profile.color.or(base.profile.color),
        },
        bundles: BundlesConfig {
            paths: {
                let mut merged = base.bundles.paths;
                for path in override_config.bundles.paths {
                    if !merged.contains(&path) {
                        merged.push(path);
                    }
                }
                merged
            },
        },
    }
}
