//! uberctl - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use uberctl::cli::{Cli, Command, GetResource};
use uberctl::uber::{
    run_deliveries_command, run_driver_payments_command, run_fares_command, run_history_command,
    run_order_command, run_payment_methods_command, run_place_command,
    run_price_estimates_command, run_products_command, run_profile_command, run_receipt_command,
    run_time_estimates_command,
};
use uberctl::{TokenResolver, UberClient, UberError};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting uberctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: sandbox={}, batch={}, no_header={}, base_url={:?}",
        cli.sandbox, cli.batch, cli.no_header, cli.base_url
    );

    match run(&cli).await {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(ae) = e.downcast_ref::<UberError>().and_then(UberError::actionable) {
                if let Some(action) = ae.action.filter(|_| ae.has_action()) {
                    eprintln!("Hint: {}", action);
                }
                if ae.retryable {
                    eprintln!("Hint: the request may succeed if retried");
                }
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let credential = TokenResolver::new().resolve(cli.token.as_deref())?;

    let client = match &cli.base_url {
        Some(url) => {
            debug!("Using API base URL override: {}", url);
            UberClient::with_base_url(Some(credential), url.clone())
        }
        None => UberClient::new(Some(credential)),
    };
    client.set_sandbox_mode(cli.sandbox);
    if cli.sandbox {
        info!("Sandbox mode enabled");
    }

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::History(args) => run_history_command(&client, args, cli).await,
            GetResource::PriceEstimates(args) => {
                run_price_estimates_command(&client, args, cli).await
            }
            GetResource::TimeEstimates(args) => {
                run_time_estimates_command(&client, args, cli).await
            }
            GetResource::Deliveries(args) => run_deliveries_command(&client, args, cli).await,
            GetResource::DriverPayments(args) => {
                run_driver_payments_command(&client, args, cli).await
            }
            GetResource::PaymentMethods(args) => {
                run_payment_methods_command(&client, args, cli).await
            }
            GetResource::Products(args) => run_products_command(&client, args, cli).await,
            GetResource::Profile(args) => run_profile_command(&client, args, cli).await,
            GetResource::Place(args) => run_place_command(&client, args, cli).await,
            GetResource::Receipt(args) => run_receipt_command(&client, args, cli).await,
            GetResource::Fares(args) => run_fares_command(&client, args, cli).await,
        },
        Command::Order(args) => run_order_command(&client, args, cli).await,
    }
}
