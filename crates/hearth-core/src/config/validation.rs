use crate::config::types::HearthConfig;
use crate::errors::ConfigError;
use crate::presence::IconColor;

/// Validate a loaded configuration.
pub fn validate_config(config: &HearthConfig) -> Result<(), ConfigError> {
    if config.chat.width() == 0 || config.chat.height() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "chat window size must be non-zero, got {}x{}",
                config.chat.width(),
                config.chat.height()
            ),
        });
    }

    for (name, value) in [
        ("control.read_timeout_secs", config.control.read_timeout_secs()),
        ("control.write_timeout_secs", config.control.write_timeout_secs()),
        ("peer.connect_timeout_secs", config.peer.connect_timeout_secs()),
        ("peer.write_timeout_secs", config.peer.write_timeout_secs()),
    ] {
        if value == 0 {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must be greater than zero", name),
            });
        }
    }

    if config.presence.service_type().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "presence.service_type must not be empty".to_string(),
        });
    }

    if IconColor::parse(config.profile.color()).is_err() {
        return Err(ConfigError::InvalidProfileColor {
            color: config.profile.color().to_string(),
        });
    }

    Ok(())
}
