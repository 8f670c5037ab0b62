//! Estimate command handlers

use futures::stream::{self, StreamExt};
use log::{debug, warn};

use crate::cli::{Cli, FareArgs, PriceEstimateArgs, TimeEstimateArgs};
use crate::config::api;
use crate::output::{output_items, FareRow};
use crate::uber::helpers::print_page_stream;
use crate::uber::models::Coordinates;
use crate::uber::pagination::Pager;
use crate::uber::products::Product;
use crate::uber::UberClient;
use crate::ui::{create_spinner, finish_spinner};

use super::models::EstimateRequest;

/// Run the get price-estimates command
pub async fn run_price_estimates_command(
    client: &UberClient,
    args: &PriceEstimateArgs,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut req = EstimateRequest::between(args.trip.start(), args.trip.end());
    req.seat_count = args.trip.seats;
    req.pager = Pager::from(&args.paging);

    let stream = client.estimate_price(&req)?;
    print_page_stream(
        stream,
        args.output,
        cli.no_header,
        "Fetching price estimates...",
        cli.batch,
    )
    .await?;
    Ok(())
}

/// Run the get time-estimates command
pub async fn run_time_estimates_command(
    client: &UberClient,
    args: &TimeEstimateArgs,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut req = EstimateRequest::at(Coordinates::new(args.start_lat, args.start_lng));
    req.product_id = args.product.clone();
    req.pager = Pager::from(&args.paging);

    let stream = client.estimate_time(&req)?;
    print_page_stream(
        stream,
        args.output,
        cli.no_header,
        "Fetching time estimates...",
        cli.batch,
    )
    .await?;
    Ok(())
}

/// Run the get fares command
pub async fn run_fares_command(
    client: &UberClient,
    args: &FareArgs,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut base = EstimateRequest::between(args.trip.start(), args.trip.end());
    base.seat_count = args.trip.seats;

    let spinner = create_spinner("Fetching products...", cli.batch);
    let products = match client.list_products(args.trip.start()).await {
        Ok(products) => products,
        Err(e) => {
            finish_spinner(spinner);
            return Err(e.into());
        }
    };
    if let Some(ref s) = spinner {
        s.set_message(format!("Fetching fares for {} product(s)...", products.len()));
    }
    let fares = fetch_fares(client, &products, &base).await;
    finish_spinner(spinner);

    if fares.is_empty() {
        eprintln!("No fares available for this trip");
        return Ok(());
    }
    output_items(&fares, args.output, cli.no_header);
    Ok(())
}

/// Quote upfront fares for every product, a few at a time
///
/// Products whose fare lookup fails are logged and left out.
/// Rows are sorted by product name.
pub(crate) async fn fetch_fares(
    client: &UberClient,
    products: &[Product],
    base: &EstimateRequest,
) -> Vec<FareRow> {
    let lookups = products.iter().map(|product| {
        let mut req = base.clone();
        req.product_id = Some(product.id.clone());
        async move {
            debug!("Looking up fare for product '{}'", product.display_name);
            match client.upfront_fare(&req).await {
                Ok(fare) => Some(FareRow::new(product, fare)),
                Err(e) => {
                    warn!("No fare for product '{}': {}", product.display_name, e);
                    None
                }
            }
        }
    });

    let mut rows: Vec<FareRow> = stream::iter(lookups)
        .buffer_unordered(api::MAX_CONCURRENT_FARE_LOOKUPS)
        .filter_map(|row| async move { row })
        .collect()
        .await;
    rows.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    rows
}
