//! Example: Fetching a week of pool prices.
//!
//! Reads the API key from `AESO_API_KEY` (a `.env` file works too).
//!
//! Run with: cargo run --example pool_price

use aeso_api_client::{AesoRestClient, ApiKey, DateRangeRequest};
use time::macros::date;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = AesoRestClient::new(ApiKey::from_env()?)?;

    let range = DateRangeRequest::new(date!(2023 - 01 - 01)).end_date(date!(2023 - 01 - 07));
    let report = client.fetch_pool_price_report(&range).await?;

    let rows = report["return"]["Pool Price Report"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    println!("=== Pool Price ({} hours) ===", rows.len());
    for row in rows.iter().take(24) {
        println!(
            "{}  {:>8}",
            row["begin_datetime_mpt"].as_str().unwrap_or("?"),
            row["pool_price"].as_str().unwrap_or("-")
        );
    }

    Ok(())
}
