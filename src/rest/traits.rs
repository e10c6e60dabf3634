//! Trait definition for the AESO REST API client.
//!
//! [`AesoClient`] abstracts the report operations so callers can depend on the
//! trait and substitute a mock or a wrapping implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use aeso_api_client::rest::{AesoClient, AesoRestClient};
//!
//! async fn print_supply<C: AesoClient>(client: &C) -> Result<(), aeso_api_client::AesoError> {
//!     let summary = client.fetch_latest_supply_demand_summary().await?;
//!     println!("Current supply/demand: {summary}");
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde::Serialize;
use serde_json::Value;

use crate::error::AesoError;
use crate::rest::AesoRestClient;

/// Trait defining the AESO report operations.
///
/// All methods are async and return the raw decoded JSON.
pub trait AesoClient: Send + Sync {
    /// Get the pool price report.
    fn fetch_pool_price_report<Q>(
        &self,
        params: &Q,
    ) -> impl Future<Output = Result<Value, AesoError>> + Send
    where
        Q: Serialize + Sync + ?Sized;

    /// Get the system marginal price report.
    fn fetch_system_marginal_price_report<Q>(
        &self,
        params: &Q,
    ) -> impl Future<Output = Result<Value, AesoError>> + Send
    where
        Q: Serialize + Sync + ?Sized;

    /// Get the currently active system marginal price.
    fn fetch_active_system_marginal_price(
        &self,
    ) -> impl Future<Output = Result<Value, AesoError>> + Send;

    /// Get the list of pool participants.
    fn fetch_pool_participants_list(
        &self,
    ) -> impl Future<Output = Result<Value, AesoError>> + Send;

    /// Get the operating reserve offer control report.
    fn fetch_operating_reserve_offer_control_report<Q>(
        &self,
        params: &Q,
    ) -> impl Future<Output = Result<Value, AesoError>> + Send
    where
        Q: Serialize + Sync + ?Sized;

    /// Get metered volume details.
    fn fetch_metered_volume_data<Q>(
        &self,
        params: &Q,
    ) -> impl Future<Output = Result<Value, AesoError>> + Send
    where
        Q: Serialize + Sync + ?Sized;

    /// Get the energy merit order report.
    fn fetch_energy_merit_order_report<Q>(
        &self,
        params: &Q,
    ) -> impl Future<Output = Result<Value, AesoError>> + Send
    where
        Q: Serialize + Sync + ?Sized;

    /// Get actual and forecast Alberta internal load.
    fn fetch_actual_forecast_report<Q>(
        &self,
        params: &Q,
    ) -> impl Future<Output = Result<Value, AesoError>> + Send
    where
        Q: Serialize + Sync + ?Sized;

    /// Get the latest current supply/demand summary.
    fn fetch_latest_supply_demand_summary(
        &self,
    ) -> impl Future<Output = Result<Value, AesoError>> + Send;

    /// Get the latest generation by asset.
    fn fetch_latest_generation_data(
        &self,
    ) -> impl Future<Output = Result<Value, AesoError>> + Send;

    /// Get the asset list.
    fn fetch_asset_list(&self) -> impl Future<Output = Result<Value, AesoError>> + Send;
}

impl AesoClient for AesoRestClient {
    async fn fetch_pool_price_report<Q>(&self, params: &Q) -> Result<Value, AesoError>
    where
        Q: Serialize + Sync + ?Sized,
    {
        AesoRestClient::fetch_pool_price_report(self, params).await
    }

    async fn fetch_system_marginal_price_report<Q>(&self, params: &Q) -> Result<Value, AesoError>
    where
        Q: Serialize + Sync + ?Sized,
    {
        AesoRestClient::fetch_system_marginal_price_report(self, params).await
    }

    async fn fetch_active_system_marginal_price(&self) -> Result<Value, AesoError> {
        AesoRestClient::fetch_active_system_marginal_price(self).await
    }

    async fn fetch_pool_participants_list(&self) -> Result<Value, AesoError> {
        AesoRestClient::fetch_pool_participants_list(self).await
    }

    async fn fetch_operating_reserve_offer_control_report<Q>(
        &self,
        params: &Q,
    ) -> Result<Value, AesoError>
    where
        Q: Serialize + Sync + ?Sized,
    {
        AesoRestClient::fetch_operating_reserve_offer_control_report(self, params).await
    }

    async fn fetch_metered_volume_data<Q>(&self, params: &Q) -> Result<Value, AesoError>
    where
        Q: Serialize + Sync + ?Sized,
    {
        AesoRestClient::fetch_metered_volume_data(self, params).await
    }

    async fn fetch_energy_merit_order_report<Q>(&self, params: &Q) -> Result<Value, AesoError>
    where
        Q: Serialize + Sync + ?Sized,
    {
        AesoRestClient::fetch_energy_merit_order_report(self, params).await
    }

    async fn fetch_actual_forecast_report<Q>(&self, params: &Q) -> Result<Value, AesoError>
    where
        Q: Serialize + Sync + ?Sized,
    {
        AesoRestClient::fetch_actual_forecast_report(self, params).await
    }

    async fn fetch_latest_supply_demand_summary(&self) -> Result<Value, AesoError> {
        AesoRestClient::fetch_latest_supply_demand_summary(self).await
    }

    async fn fetch_latest_generation_data(&self) -> Result<Value, AesoError> {
        AesoRestClient::fetch_latest_generation_data(self).await
    }

    async fn fetch_asset_list(&self) -> Result<Value, AesoError> {
        AesoRestClient::fetch_asset_list(self).await
    }
}
