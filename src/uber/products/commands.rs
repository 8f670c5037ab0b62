//! Product command handlers

use log::debug;

use crate::cli::{Cli, ProductArgs};
use crate::output::output_items;
use crate::uber::models::Coordinates;
use crate::uber::UberClient;
use crate::ui::{create_spinner, finish_spinner};

/// Run the get products command
pub async fn run_products_command(
    client: &UberClient,
    args: &ProductArgs,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let at = Coordinates::new(args.lat, args.lng);
    debug!("Listing products at {:?}", at);

    let spinner = create_spinner("Fetching products...", cli.batch);
    let result = client.list_products(at).await;
    finish_spinner(spinner);

    let products = result?;
    if products.is_empty() {
        eprintln!("No products available at this location");
        return Ok(());
    }
    output_items(&products, args.output, cli.no_header);
    Ok(())
}
