use clap::ArgMatches;
use tracing::{error, info};

use hearth_core::errors::HearthError;
use hearth_core::{ActivityAddress, ActivityControl, ControlConnector};

use super::helpers::{load_config_with_warning, xid_from_matches};

pub(crate) fn handle_share_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let xid = xid_from_matches(matches)?;

    info!(event = "cli.share_started", xid = xid);

    let config = load_config_with_warning();
    let result = ActivityAddress::for_window(xid)
        .and_then(|address| config.control_connector().connect(&address))
        .and_then(|activity| activity.share());

    match result {
        Ok(()) => {
            println!("Shared activity for window {}", xid);
            info!(event = "cli.share_completed", xid = xid);
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to share activity for window {}: {}", xid, e);
            error!(
                event = "cli.share_failed",
                xid = xid,
                error = %e,
                error_code = e.error_code()
            );
            Err(e.into())
        }
    }
}
