//! Driver command handlers

use log::debug;

use crate::cli::{Cli, DriverPaymentArgs};
use crate::uber::helpers::print_page_stream;
use crate::uber::pagination::Pager;
use crate::uber::UberClient;

use super::models::DriverPaymentsQuery;

/// Run the get driver-payments command
pub async fn run_driver_payments_command(
    client: &UberClient,
    args: &DriverPaymentArgs,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = DriverPaymentsQuery {
        from: args.from,
        to: args.to,
        pager: Pager::from(&args.paging),
    };
    debug!("Listing driver payments with {:?}", query);

    let stream = client.list_driver_payments(Some(query))?;
    print_page_stream(
        stream,
        args.output,
        cli.no_header,
        "Fetching driver payments...",
        cli.batch,
    )
    .await?;
    Ok(())
}
