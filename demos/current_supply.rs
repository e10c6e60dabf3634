//! Example: Current supply/demand snapshot and error handling.
//!
//! Run with: cargo run --example current_supply

use aeso_api_client::{AesoError, AesoRestClient, ApiKey};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt::init();

    let client = AesoRestClient::new(ApiKey::from_env()?)?;

    println!("=== System Marginal Price ===");
    let smp = client.fetch_active_system_marginal_price().await?;
    println!("{smp:#}");

    println!("\n=== Supply/Demand Summary ===");
    match client.fetch_latest_supply_demand_summary().await {
        Ok(summary) if summary.is_null() => println!("Empty or unreadable response"),
        Ok(summary) => println!("{summary:#}"),
        Err(AesoError::ServiceUnavailable) => println!("AESO is down for maintenance"),
        Err(e) if e.is_auth() => println!("API key rejected: {e}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
