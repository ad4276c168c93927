use clap::ArgMatches;
use tracing::info;

use hearth_core::FileBundleRegistry;

use super::helpers::load_config_with_warning;

pub(crate) fn handle_bundles_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.bundles_started", json_output = json_output);

    let config = load_config_with_warning();
    let registry = FileBundleRegistry::scan(&config.bundles.paths);
    let bundles = registry.bundles();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&bundles)?);
    } else if bundles.is_empty() {
        println!("No activity bundles found.");
    } else {
        let type_width = bundles
            .iter()
            .map(|bundle| bundle.service_name().len())
            .max()
            .unwrap_or(0)
            .max("Type".len());
        let name_width = bundles
            .iter()
            .map(|bundle| bundle.name().len())
            .max()
            .unwrap_or(0)
            .max("Name".len());

        println!("{:<type_width$}  {:<name_width$}  Icon", "Type", "Name");
        for bundle in &bundles {
            println!(
                "{:<type_width$}  {:<name_width$}  {}",
                bundle.service_name(),
                bundle.name(),
                bundle.icon()
            );
        }
    }

    info!(event = "cli.bundles_completed", count = bundles.len());
    Ok(())
}
