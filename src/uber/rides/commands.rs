//! Ride command handlers

use std::cell::Cell;

use log::{debug, info, warn};

use crate::cli::{Cli, OrderArgs, OutputFormat, ReceiptArgs, Waypoint};
use crate::error::UberError;
use crate::output::{output_item, FareRow};
use crate::uber::estimates::{fetch_fares, EstimateRequest, UpfrontFare};
use crate::uber::models::Coordinates;
use crate::uber::UberClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner, select_item};

use super::models::RideRequest;

/// Run the get receipt command
pub async fn run_receipt_command(
    client: &UberClient,
    args: &ReceiptArgs,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching receipt...", cli.batch);
    let result = client.request_receipt(&args.request_id).await;
    finish_spinner(spinner);

    output_item(&result?, args.output, cli.no_header);
    Ok(())
}

/// Run the order command
pub async fn run_order_command(
    client: &UberClient,
    args: &OrderArgs,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    if cli.batch && (args.product.is_none() || !args.yes) {
        return Err("--product and --yes are required to order in batch mode".into());
    }

    let mut req = RideRequest {
        seat_count: args.seats,
        product_id: args.product.clone(),
        ..RideRequest::default()
    };
    match args.start()? {
        Waypoint::Place(place) => req.start_place = Some(place),
        Waypoint::Coordinates(c) => req.start = Some(c),
    }
    match args.end()? {
        Waypoint::Place(place) => req.end_place = Some(place),
        Waypoint::Coordinates(c) => req.end = Some(c),
    }

    if req.product_id.is_none() {
        req.product_id = Some(pick_product(client, &req, args.start()?).await?);
    }
    debug!("Ordering product {:?}", req.product_id);

    let declined = Cell::new(false);
    let result = client
        .request_ride_with_prompt(&req, |fare| confirm_fare(fare, args.yes, &declined))
        .await;

    let ride = match result {
        Ok(ride) => ride,
        Err(_) if declined.get() => {
            println!("Cancelled");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    info!("Ride {} is {}", ride.request_id, ride.status.as_deref().unwrap_or("pending"));
    output_item(&ride, OutputFormat::Table, cli.no_header);
    Ok(())
}

/// Quote every product at the pickup and let the user choose one
async fn pick_product(
    client: &UberClient,
    req: &RideRequest,
    start: Waypoint,
) -> Result<String, Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching fares...", false);
    let result = quote_products(client, req, start).await;
    finish_spinner(spinner);

    let fares = result?;
    if fares.is_empty() {
        return Err("No products can serve this trip".into());
    }

    let selection = select_item("Select a product", &fares)?;
    Ok(fares[selection].product_id.clone())
}

async fn quote_products(
    client: &UberClient,
    req: &RideRequest,
    start: Waypoint,
) -> Result<Vec<FareRow>, UberError> {
    let pickup = match start {
        Waypoint::Coordinates(c) => c,
        Waypoint::Place(name) => {
            let place = client.place(name).await?;
            match (place.latitude, place.longitude) {
                (Some(lat), Some(lng)) => Coordinates::new(lat, lng),
                _ => {
                    return Err(UberError::InvalidInput(format!(
                        "saved place '{}' has no coordinates; use --start-lat/--start-lng",
                        name
                    )))
                }
            }
        }
    };

    let products = client.list_products(pickup).await?;
    let base = EstimateRequest {
        product_id: None,
        ..req.estimate_request()
    };
    Ok(fetch_fares(client, &products, &base).await)
}

fn confirm_fare(fare: &UpfrontFare, yes: bool, declined: &Cell<bool>) -> crate::error::Result<()> {
    if fare.no_cars_available() {
        warn!("No cars available for the selected product");
        return Err(UberError::InvalidInput(
            "no cars are available for this product right now".to_string(),
        ));
    }

    let mut prompt = format!("Request this ride for {}?", fare.display_amount());
    if fare.surge_in_effect() {
        let url = fare
            .estimate
            .as_ref()
            .and_then(|e| e.surge_confirmation_url.as_deref())
            .unwrap_or_default();
        eprintln!("Surge pricing is in effect, confirm it at {}", url);
        prompt = format!("Surge pricing applies. {}", prompt);
    }

    let accepted = confirm_action(&prompt, yes)
        .map_err(|e| UberError::Config(format!("Failed to read confirmation: {}", e)))?;
    if !accepted {
        declined.set(true);
        return Err(UberError::InvalidInput("fare declined".to_string()));
    }
    Ok(())
}
