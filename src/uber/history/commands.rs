//! Trip history command handlers

use log::debug;

use crate::cli::{Cli, HistoryArgs};
use crate::uber::helpers::print_page_stream;
use crate::uber::pagination::Pager;
use crate::uber::UberClient;

/// Run the get history command
pub async fn run_history_command(
    client: &UberClient,
    args: &HistoryArgs,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let pager = Pager::from(&args.paging);
    debug!("Listing trip history with {:?}", pager);

    let stream = client.list_history(Some(pager));
    print_page_stream(
        stream,
        args.output,
        cli.no_header,
        "Fetching trip history...",
        cli.batch,
    )
    .await?;
    Ok(())
}
