//! Helpers shared by command handlers

use log::{debug, info, warn};

use crate::cli::OutputFormat;
use crate::output::{PageWriter, TableRow};
use crate::uber::pagination::PageStream;
use crate::ui::{create_spinner, finish_spinner};

/// Print a paginated listing as it arrives
///
/// Ctrl-C cancels the stream; pages already received are still printed.
/// Returns the number of items written.
pub async fn print_page_stream<T: TableRow>(
    mut stream: PageStream<T>,
    format: OutputFormat,
    no_header: bool,
    message: &str,
    quiet: bool,
) -> Result<usize, Box<dyn std::error::Error>> {
    let handle = stream.cancel_handle();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping after the current page");
            handle.cancel();
        }
    });

    let mut spinner = create_spinner(message, quiet);
    let mut writer = PageWriter::new(format, no_header);
    let mut failure = None;

    while let Some(page) = stream.next_page().await {
        debug!(
            "Received page {} ({} items, count {})",
            page.page_number,
            page.items.len(),
            page.count
        );
        if format.is_streaming() {
            finish_spinner(spinner.take());
        }
        match page.into_result() {
            Ok(items) => writer.write_page(items),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    interrupt.abort();
    finish_spinner(spinner);
    let total = writer.finish();
    info!("Printed {} items", total);

    match failure {
        Some(e) => Err(e.into()),
        None => {
            if total == 0 {
                eprintln!("No results found");
            }
            Ok(total)
        }
    }
}
