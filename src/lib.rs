//! # AESO Client
//!
//! An async Rust client library for the AESO (Alberta Electric System Operator)
//! reporting REST API.
//!
//! ## Features
//!
//! - API key injection on every request (`X-Api-Key`)
//! - Query strings built from any serializable parameter map
//! - HTTP status codes mapped to typed errors
//! - One method per published report (pool price, system marginal price,
//!   merit order, current supply/demand, asset list, ...)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aeso_api_client::rest::AesoRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AesoRestClient::new("my-api-key")?;
//!     let report = client
//!         .fetch_pool_price_report(&[("startDate", "2023-01-01")])
//!         .await?;
//!     println!("Pool price: {report}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;

// Re-export commonly used types at crate root
pub use auth::ApiKey;
pub use error::AesoError;
pub use rest::{AesoClient, AesoRestClient, DateRangeRequest};

/// Result type alias using AesoError
pub type Result<T> = std::result::Result<T, AesoError>;
