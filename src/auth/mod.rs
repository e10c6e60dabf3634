//! Authentication module for the AESO API.
//!
//! AESO authenticates with a static subscription key sent as the `X-Api-Key`
//! header. This module holds that key without leaking it through `Debug`.

mod api_key;

pub use api_key::{API_KEY_ENV_VAR, API_KEY_HEADER, ApiKey};
