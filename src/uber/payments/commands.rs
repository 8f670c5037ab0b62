//! Payment method command handlers

use log::debug;

use crate::cli::{Cli, OutputArgs, OutputFormat};
use crate::output::{output_items, print_json, print_yaml};
use crate::uber::UberClient;
use crate::ui::{create_spinner, finish_spinner};

/// Run the get payment-methods command
pub async fn run_payment_methods_command(
    client: &UberClient,
    args: &OutputArgs,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching payment methods...", cli.batch);
    let result = client.list_payment_methods().await;
    finish_spinner(spinner);

    let listing = result?;
    debug!("Found {} payment method(s)", listing.methods.len());

    match args.output {
        OutputFormat::Json => print_json(&listing),
        OutputFormat::Yaml => print_yaml(&listing),
        format => {
            if listing.methods.is_empty() {
                eprintln!("No payment methods on file");
                return Ok(());
            }
            output_items(&listing.methods, format, cli.no_header);
            if let (OutputFormat::Table, Some(last_used)) = (format, &listing.last_used_id) {
                println!("\nLast used: {}", last_used);
            }
        }
    }
    Ok(())
}
