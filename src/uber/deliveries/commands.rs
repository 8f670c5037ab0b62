//! Delivery command handlers

use crate::cli::{Cli, DeliveryArgs};
use crate::uber::helpers::print_page_stream;
use crate::uber::pagination::Pager;
use crate::uber::UberClient;

use super::models::DeliveryListRequest;

/// Run the get deliveries command
pub async fn run_deliveries_command(
    client: &UberClient,
    args: &DeliveryArgs,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let req = DeliveryListRequest {
        status: args.status.clone(),
        pager: Pager::from(&args.paging),
    };
    let message = format!("Fetching {} deliveries...", req.status());

    let stream = client.list_deliveries(Some(req));
    print_page_stream(stream, args.output, cli.no_header, &message, cli.batch).await?;
    Ok(())
}
