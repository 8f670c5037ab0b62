//! Profile command handlers

use crate::cli::{Cli, ProfileArgs};
use crate::output::output_item;
use crate::uber::UberClient;
use crate::ui::{create_spinner, finish_spinner};

/// Run the get profile command
pub async fn run_profile_command(
    client: &UberClient,
    args: &ProfileArgs,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching profile...", cli.batch);
    let result = if args.driver {
        client.driver_profile().await
    } else {
        client.my_profile().await
    };
    finish_spinner(spinner);

    output_item(&result?, args.output, cli.no_header);
    Ok(())
}
