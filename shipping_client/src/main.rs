//! Shipping Client — asks the Navlungo rate API what it costs to ship a parcel and
//! prints the carrier options, cheapest first. A loading skeleton is printed as soon
//! as the request goes out and is followed by the cards or a single error line.
//! Ctrl+C while the request is in flight cancels it.
//!
//! Usage example (CLI):
//! ```bash
//! NAVLUNGO_API_TOKEN=... shipping_client --to-country DE --weight 2.5
//! ```
//!
//! Pass `--json` to print exactly what the `calculate_shipping` tool returns to the host.
#![warn(missing_docs)]
mod args;

use std::sync::Arc;
use std::thread;

use clap::Parser;
use crossbeam_channel::unbounded;
use log::{error, info};
use serde_json::json;
use shipping_client::invocation::InvocationState;
use shipping_client::rate_client::RateRequestClient;
use shipping_client::tool::{ShippingTool, ToolOutput};
use shipping_common::{Result, ShippingError};

use crate::args::Args;

fn main() -> Result<(), ShippingError> {
    init_logger();
    let args = Args::parse();

    let config = args.client_config();
    let client = RateRequestClient::new(config)?;
    let tool = ShippingTool::new(Arc::new(client));

    let (cancel_tx, cancel_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Cancelling shipping calculation...");
        let _ = cancel_tx.send(());
    })
    .map_err(|e| ShippingError::Internal(format!("Error setting Ctrl+C handler: {}", e)))?;

    let (state_tx, state_rx) = unbounded::<InvocationState>();
    let print_views = !args.json;
    let renderer = thread::spawn(move || {
        for state in state_rx {
            if !print_views {
                continue;
            }
            if let Some(view) = state.view() {
                println!("{}\n", view);
            }
        }
    });

    let arguments = json!({ "toCountry": args.to_country, "weight": args.weight });
    let output = tool.call(arguments, &state_tx, Some(&cancel_rx));
    drop(state_tx);
    if renderer.join().is_err() {
        error!("Renderer thread panicked");
    }

    match output {
        ToolOutput::Json(text) => {
            if args.json {
                println!("{}", text);
            }
            info!("Shipping calculation finished.");
        }
        ToolOutput::Error(text) => {
            if args.json {
                println!("{}", text);
            }
            std::process::exit(1);
        }
        ToolOutput::Cancelled => info!("Shipping calculation cancelled."),
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
