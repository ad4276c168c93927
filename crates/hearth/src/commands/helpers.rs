use clap::ArgMatches;
use tracing::warn;

use hearth_core::{HearthConfig, Xid};

/// Load the config hierarchy, falling back to defaults with a warning.
pub fn load_config_with_warning() -> HearthConfig {
    match HearthConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.hearth/config.toml and ./.hearth/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            HearthConfig::default()
        }
    }
}

/// Parse a window id given in decimal or as `0x`-prefixed hex.
pub fn parse_xid(value: &str) -> Result<Xid, String> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => Xid::from_str_radix(hex, 16),
        None => trimmed.parse::<Xid>(),
    };
    parsed.map_err(|_| format!("Invalid window id '{}'", value))
}

/// The required `xid` argument of a subcommand, parsed by [`parse_xid`].
pub fn xid_from_matches(matches: &ArgMatches) -> Result<Xid, Box<dyn std::error::Error>> {
    let xid = matches
        .get_one::<Xid>("xid")
        .copied()
        .ok_or("Window id argument is required")?;
    Ok(xid)
}
