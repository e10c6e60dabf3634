//! AESO REST API client implementation.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;

use crate::auth::{API_KEY_HEADER, ApiKey};
use crate::error::AesoError;
use crate::rest::endpoints::AESO_BASE_URL;

/// Parameters for endpoints that take none.
pub(crate) const NO_PARAMS: &[(&str, &str)] = &[];

/// The AESO REST API client.
///
/// Every request is a GET carrying the `X-Api-Key` header. Non-2xx responses
/// become [`AesoError`] variants; 2xx bodies are decoded as raw JSON.
///
/// # Example
///
/// ```rust,no_run
/// use aeso_api_client::rest::AesoRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AesoRestClient::new("my-api-key")?;
///
///     let assets = client.fetch_asset_list().await?;
///     println!("Assets: {assets}");
///
///     Ok(())
/// }
/// ```
///
/// To point the client somewhere else (a mock server, a proxy):
///
/// ```rust,no_run
/// use aeso_api_client::rest::AesoRestClient;
///
/// # fn main() -> Result<(), aeso_api_client::AesoError> {
/// let client = AesoRestClient::builder("my-api-key")
///     .base_url("http://localhost:8080/report")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AesoRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    api_key: HeaderValue,
}

impl AesoRestClient {
    /// Create a new client against the public AESO API.
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self, AesoError> {
        Self::builder(api_key).build()
    }

    /// Create a new client builder.
    pub fn builder(api_key: impl Into<ApiKey>) -> AesoRestClientBuilder {
        AesoRestClientBuilder::new(api_key)
    }

    /// The base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full request URL for an endpoint.
    ///
    /// Base URL and endpoint are joined with exactly one `/`. When `params`
    /// encodes to nothing, neither `?` nor a query string is appended.
    pub fn url_for<Q>(&self, endpoint: &str, params: &Q) -> Result<String, AesoError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| AesoError::InvalidParams(e.to_string()))?;
        let endpoint = endpoint.trim_start_matches('/');
        let url = if query_string.is_empty() {
            format!("{}/{}", self.base_url, endpoint)
        } else {
            format!("{}/{}?{}", self.base_url, endpoint, query_string)
        };
        Ok(url)
    }

    /// Make a GET request and decode the body as JSON.
    ///
    /// An empty or malformed 2xx body yields [`Value::Null`] rather than an
    /// error. Use [`AesoRestClient::get_typed`] when decode failures matter.
    pub async fn get<Q>(&self, endpoint: &str, params: &Q) -> Result<Value, AesoError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let body = self.send(endpoint, params).await?;
        Ok(decode_lenient(endpoint, &body))
    }

    /// Make a GET request and deserialize the body into `T`.
    pub async fn get_typed<T, Q>(&self, endpoint: &str, params: &Q) -> Result<T, AesoError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let body = self.send(endpoint, params).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send the request and return the body of a 2xx response.
    async fn send<Q>(&self, endpoint: &str, params: &Q) -> Result<String, AesoError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url_for(endpoint, params)?;
        tracing::debug!(endpoint, "Sending AESO request");

        let response = self
            .http_client
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.clone())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(endpoint, status = status.as_u16(), "Received AESO response");

        if let Some(error) = AesoError::from_status(status) {
            return Err(error);
        }

        Ok(response.text().await?)
    }
}

/// Decode a 2xx body, treating empty and malformed JSON as `null`.
fn decode_lenient(endpoint: &str, body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|e| {
        tracing::debug!(endpoint, error = %e, "Response body is not valid JSON, returning null");
        Value::Null
    })
}

impl std::fmt::Debug for AesoRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesoRestClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Builder for [`AesoRestClient`].
pub struct AesoRestClientBuilder {
    api_key: ApiKey,
    base_url: String,
    user_agent: Option<String>,
}

impl AesoRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: AESO_BASE_URL.to_string(),
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    ///
    /// Fails if the API key is empty or not a valid header value, if the
    /// user agent is not a valid header value, or if the base URL is not an
    /// absolute URL.
    ///
    /// Redirects are not followed: a 3xx response surfaces as a status error
    /// and the API key is never forwarded to another host.
    pub fn build(self) -> Result<AesoRestClient, AesoError> {
        let api_key = self.api_key.header_value()?;

        url::Url::parse(&self.base_url)?;
        let base_url = self.base_url.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("aeso-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .map_err(|_| AesoError::InvalidUserAgent(user_agent.clone()))?;
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(AesoRestClient {
            http_client: client,
            base_url,
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn client() -> AesoRestClient {
        AesoRestClient::new("test_key").unwrap()
    }

    #[test]
    fn test_url_without_params_has_no_question_mark() {
        let url = client().url_for("/v1/assetlist", NO_PARAMS).unwrap();
        assert_eq!(url, "https://api.aeso.ca/report/v1/assetlist");
    }

    #[test]
    fn test_url_with_params() {
        let url = client()
            .url_for("/v1.1/price/poolPrice", &[("startDate", "2023-01-01")])
            .unwrap();
        assert_eq!(
            url,
            "https://api.aeso.ca/report/v1.1/price/poolPrice?startDate=2023-01-01"
        );
    }

    #[test]
    fn test_url_endpoint_without_leading_slash() {
        let url = client().url_for("v1/assetlist", NO_PARAMS).unwrap();
        assert_eq!(url, "https://api.aeso.ca/report/v1/assetlist");

        let url = client()
            .url_for("v1.1/price/poolPrice", &[("startDate", "2023-01-01")])
            .unwrap();
        assert_eq!(
            url,
            "https://api.aeso.ca/report/v1.1/price/poolPrice?startDate=2023-01-01"
        );
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        let client = AesoRestClient::builder("k")
            .base_url("http://localhost:9000/report/")
            .build()
            .unwrap();
        assert_eq!(
            client.url_for("/v1/assetlist", NO_PARAMS).unwrap(),
            "http://localhost:9000/report/v1/assetlist"
        );
        assert_eq!(
            client.url_for("v1/assetlist", NO_PARAMS).unwrap(),
            "http://localhost:9000/report/v1/assetlist"
        );
    }

    #[test]
    fn test_invalid_user_agent_rejected() {
        let err = AesoRestClient::builder("k")
            .user_agent("bad\nagent")
            .build()
            .unwrap_err();
        assert!(matches!(err, AesoError::InvalidUserAgent(_)));
    }

    #[test]
    fn test_url_keeps_param_order_and_encodes_values() {
        let params = [("startDate", "2023-01-01"), ("asset_ID", "A B&C")];
        let url = client().url_for("/v1/meteredvolume/details", &params).unwrap();
        assert_eq!(
            url,
            "https://api.aeso.ca/report/v1/meteredvolume/details?startDate=2023-01-01&asset_ID=A+B%26C"
        );
    }

    #[test]
    fn test_url_with_empty_map() {
        let params: BTreeMap<String, String> = BTreeMap::new();
        let url = client().url_for("/v1/poolparticipantlist", &params).unwrap();
        assert_eq!(url, "https://api.aeso.ca/report/v1/poolparticipantlist");
    }

    #[test]
    fn test_nested_params_rejected() {
        let params = serde_json::json!({ "startDate": { "nested": true } });
        let err = client().url_for("/v1.1/price/poolPrice", &params).unwrap_err();
        assert!(matches!(err, AesoError::InvalidParams(_)));
    }

    #[test]
    fn test_trailing_slash_trimmed_from_base_url() {
        let client = AesoRestClient::builder("k")
            .base_url("http://localhost:9000/report/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/report");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = AesoRestClient::builder("k")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, AesoError::Url(_)));
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = AesoRestClient::new("").unwrap_err();
        assert!(matches!(err, AesoError::InvalidApiKey(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug_str = format!("{:?}", AesoRestClient::new("very_secret_key").unwrap());
        assert!(!debug_str.contains("very_secret_key"));
        assert!(debug_str.contains("api.aeso.ca"));
    }

    #[test]
    fn test_decode_lenient() {
        assert_eq!(decode_lenient("/x", ""), Value::Null);
        assert_eq!(decode_lenient("/x", "  \n"), Value::Null);
        assert_eq!(decode_lenient("/x", "{not json"), Value::Null);
        assert_eq!(decode_lenient("/x", r#"{"a":1}"#), serde_json::json!({ "a": 1 }));
        assert_eq!(decode_lenient("/x", "[1,2]"), serde_json::json!([1, 2]));
        assert_eq!(decode_lenient("/x", "42"), serde_json::json!(42));
    }
}
