//! AESO REST API endpoint constants.

/// Base URL for the AESO reporting API.
pub const AESO_BASE_URL: &str = "https://api.aeso.ca/report";

/// Price reports.
pub mod price {
    /// Hourly pool price.
    pub const POOL_PRICE: &str = "/v1.1/price/poolPrice";
    /// System marginal price history.
    pub const SYSTEM_MARGINAL_PRICE: &str = "/v1.1/price/systemMarginalPrice";
    /// Currently active system marginal price.
    pub const SYSTEM_MARGINAL_PRICE_CURRENT: &str = "/v1.1/price/systemMarginalPrice/current";
}

/// Pool participant list.
pub const POOL_PARTICIPANT_LIST: &str = "/v1/poolparticipantlist";

/// Operating reserve offer control report.
pub const OPERATING_RESERVE_OFFER_CONTROL: &str = "/v1/operatingReserveOfferControl";

/// Metered volume details.
pub const METERED_VOLUME_DETAILS: &str = "/v1/meteredvolume/details";

/// Energy merit order report.
pub const ENERGY_MERIT_ORDER: &str = "/v1/meritOrder/energy";

/// Actual and forecast Alberta internal load.
pub const ALBERTA_INTERNAL_LOAD: &str = "/v1/load/albertaInternalLoad";

/// Current supply and demand.
pub mod csd {
    /// Latest supply/demand summary.
    pub const SUMMARY_CURRENT: &str = "/v1/csd/summary/current";
    /// Latest generation by asset.
    pub const GENERATION_ASSETS_CURRENT: &str = "/v1/csd/generation/assets/current";
}

/// Asset list.
pub const ASSET_LIST: &str = "/v1/assetlist";
