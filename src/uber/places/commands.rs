//! Place command handlers

use crate::cli::{Cli, PlaceArgs};
use crate::output::output_item;
use crate::uber::UberClient;
use crate::ui::{create_spinner, finish_spinner};

/// Run the get place command
pub async fn run_place_command(
    client: &UberClient,
    args: &PlaceArgs,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(&format!("Fetching place '{}'...", args.name), cli.batch);
    let result = client.place(args.name).await;
    finish_spinner(spinner);

    output_item(&result?, args.output, cli.no_header);
    Ok(())
}
