use clap::{Arg, ArgAction, Command};

use crate::commands::helpers::parse_xid;

pub fn build_cli() -> Command {
    Command::new("hearth")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and drive activities hosted by the desktop shell")
        .long_about("Hearth talks to running activities over their control channel. Every activity is addressed by the id of its top-level window, given in decimal or as 0x-prefixed hex.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("info")
                .about("Show identity, sharing state and icon of a running activity")
                .arg(xid_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("share")
                .about("Ask a running activity to share itself on the network")
                .arg(xid_arg())
        )
        .subcommand(
            Command::new("bundles")
                .about("List installed activity bundles")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("address")
                .about("Print the control address derived from a window id")
                .arg(xid_arg())
        )
}

fn xid_arg() -> Arg {
    Arg::new("xid")
        .help("Window id of the activity (decimal or 0x-prefixed hex)")
        .required(true)
        .index(1)
        .value_parser(parse_xid)
}
