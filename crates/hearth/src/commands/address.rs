use clap::ArgMatches;
use tracing::{error, info};

use hearth_core::ActivityAddress;

use super::helpers::{load_config_with_warning, xid_from_matches};

pub(crate) fn handle_address_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let xid = xid_from_matches(matches)?;

    let address = match ActivityAddress::for_window(xid) {
        Ok(address) => address,
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.address_failed", xid = xid, error = %e);
            return Err(e.into());
        }
    };

    let config = load_config_with_warning();
    let socket_path = address.socket_path(&config.control_socket_dir());

    println!("Service:   {}", address.service_name());
    println!("Path:      {}", address.object_path());
    println!("Interface: {}", address.interface());
    println!("Socket:    {}", socket_path.display());

    info!(event = "cli.address_completed", xid = xid);
    Ok(())
}
