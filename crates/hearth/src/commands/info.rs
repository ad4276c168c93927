use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use hearth_core::errors::HearthError;
use hearth_core::{
    ActivityAddress, ActivityControl, BundleRegistry, ControlConnector, FileBundleRegistry, Xid,
};

use super::helpers::{load_config_with_warning, xid_from_matches};

#[derive(Debug, Serialize)]
struct ActivityInfo {
    xid: Xid,
    id: String,
    activity_type: String,
    shared: bool,
    icon: Option<String>,
}

pub(crate) fn handle_info_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let xid = xid_from_matches(matches)?;

    info!(event = "cli.info_started", xid = xid, json_output = json_output);

    let config = load_config_with_warning();
    let activity = match ActivityAddress::for_window(xid)
        .and_then(|address| config.control_connector().connect(&address))
    {
        Ok(activity) => activity,
        Err(e) => {
            eprintln!("Failed to reach activity for window {}: {}", xid, e);
            error!(
                event = "cli.info_failed",
                xid = xid,
                error = %e,
                error_code = e.error_code()
            );
            return Err(e.into());
        }
    };

    let details = query_activity(activity.as_ref(), xid).map_err(|e| {
        eprintln!("Failed to query activity for window {}: {}", xid, e);
        error!(event = "cli.info_failed", xid = xid, error = %e);
        e
    })?;

    let registry = FileBundleRegistry::scan(&config.bundles.paths);
    let details = ActivityInfo {
        icon: registry
            .get_bundle(&details.activity_type)
            .map(|bundle| bundle.icon().to_string()),
        ..details
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        println!("Activity for window {}:", details.xid);
        println!("  Id:     {}", details.id);
        println!("  Type:   {}", details.activity_type);
        println!("  Shared: {}", if details.shared { "yes" } else { "no" });
        println!(
            "  Icon:   {}",
            details.icon.as_deref().unwrap_or("(no bundle installed)")
        );
    }

    info!(event = "cli.info_completed", xid = xid);
    Ok(())
}

fn query_activity(
    activity: &dyn ActivityControl,
    xid: Xid,
) -> Result<ActivityInfo, hearth_core::ControlError> {
    Ok(ActivityInfo {
        xid,
        id: activity.get_id()?,
        activity_type: activity.get_type()?,
        shared: activity.get_shared()?,
        icon: None,
    })
}
