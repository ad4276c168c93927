use clap::ArgMatches;
use tracing::error;

use hearth_core::events;

pub mod helpers;

mod address;
mod bundles;
mod info;
mod share;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("info", sub_matches)) => info::handle_info_command(sub_matches),
        Some(("share", sub_matches)) => share::handle_share_command(sub_matches),
        Some(("bundles", sub_matches)) => bundles::handle_bundles_command(sub_matches),
        Some(("address", sub_matches)) => address::handle_address_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    match &result {
        Ok(()) => events::log_app_shutdown(),
        Err(e) => events::log_app_error(e.as_ref()),
    }

    result
}
