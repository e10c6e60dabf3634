//! AESO REST API client.
//!
//! Provides access to the AESO reporting endpoints.
//!
//! # Trait-based API
//!
//! The [`AesoClient`] trait abstracts the report operations, enabling mock
//! implementations for testing and wrapping implementations.
//!
//! ```rust,ignore
//! use aeso_api_client::rest::{AesoClient, AesoRestClient};
//!
//! async fn use_client<C: AesoClient>(client: &C) -> Result<(), aeso_api_client::AesoError> {
//!     let assets = client.fetch_asset_list().await?;
//!     println!("Assets: {assets}");
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
mod reports;
mod traits;
mod types;

pub use client::{AesoRestClient, AesoRestClientBuilder};
pub use endpoints::AESO_BASE_URL;
pub use traits::AesoClient;
pub use types::DateRangeRequest;
