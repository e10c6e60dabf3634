//! Report endpoints.
//!
//! Each method requests one fixed path and hands the decoded JSON back
//! unchanged. Methods taking `params` accept anything that form-encodes to a
//! flat query string: a slice of pairs, a map, or [`DateRangeRequest`].
//!
//! [`DateRangeRequest`]: crate::rest::DateRangeRequest

use serde::Serialize;
use serde_json::Value;

use crate::error::AesoError;
use crate::rest::AesoRestClient;
use crate::rest::client::NO_PARAMS;
use crate::rest::endpoints::{self, csd, price};

impl AesoRestClient {
    /// Get the pool price report.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use aeso_api_client::{AesoRestClient, DateRangeRequest};
    /// use time::macros::date;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = AesoRestClient::new("my-api-key")?;
    ///     let range = DateRangeRequest::new(date!(2023 - 01 - 01)).end_date(date!(2023 - 01 - 07));
    ///     let report = client.fetch_pool_price_report(&range).await?;
    ///     println!("{report:#}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_pool_price_report<Q>(&self, params: &Q) -> Result<Value, AesoError>
    where
        Q: Serialize + ?Sized,
    {
        self.get(price::POOL_PRICE, params).await
    }

    /// Get the system marginal price report.
    pub async fn fetch_system_marginal_price_report<Q>(
        &self,
        params: &Q,
    ) -> Result<Value, AesoError>
    where
        Q: Serialize + ?Sized,
    {
        self.get(price::SYSTEM_MARGINAL_PRICE, params).await
    }

    /// Get the currently active system marginal price.
    pub async fn fetch_active_system_marginal_price(&self) -> Result<Value, AesoError> {
        self.get(price::SYSTEM_MARGINAL_PRICE_CURRENT, NO_PARAMS)
            .await
    }

    /// Get the list of pool participants.
    pub async fn fetch_pool_participants_list(&self) -> Result<Value, AesoError> {
        self.get(endpoints::POOL_PARTICIPANT_LIST, NO_PARAMS).await
    }

    /// Get the operating reserve offer control report.
    pub async fn fetch_operating_reserve_offer_control_report<Q>(
        &self,
        params: &Q,
    ) -> Result<Value, AesoError>
    where
        Q: Serialize + ?Sized,
    {
        self.get(endpoints::OPERATING_RESERVE_OFFER_CONTROL, params)
            .await
    }

    /// Get metered volume details.
    pub async fn fetch_metered_volume_data<Q>(&self, params: &Q) -> Result<Value, AesoError>
    where
        Q: Serialize + ?Sized,
    {
        self.get(endpoints::METERED_VOLUME_DETAILS, params).await
    }

    /// Get the energy merit order report.
    ///
    /// AESO publishes merit order data with a 60 day delay.
    pub async fn fetch_energy_merit_order_report<Q>(
        &self,
        params: &Q,
    ) -> Result<Value, AesoError>
    where
        Q: Serialize + ?Sized,
    {
        self.get(endpoints::ENERGY_MERIT_ORDER, params).await
    }

    /// Get actual and forecast Alberta internal load.
    pub async fn fetch_actual_forecast_report<Q>(&self, params: &Q) -> Result<Value, AesoError>
    where
        Q: Serialize + ?Sized,
    {
        self.get(endpoints::ALBERTA_INTERNAL_LOAD, params).await
    }

    /// Get the latest current supply/demand summary.
    pub async fn fetch_latest_supply_demand_summary(&self) -> Result<Value, AesoError> {
        self.get(csd::SUMMARY_CURRENT, NO_PARAMS).await
    }

    /// Get the latest generation by asset.
    pub async fn fetch_latest_generation_data(&self) -> Result<Value, AesoError> {
        self.get(csd::GENERATION_ASSETS_CURRENT, NO_PARAMS).await
    }

    /// Get the asset list.
    pub async fn fetch_asset_list(&self) -> Result<Value, AesoError> {
        self.get(endpoints::ASSET_LIST, NO_PARAMS).await
    }
}
