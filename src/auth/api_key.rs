//! API key storage and header construction.

use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::error::AesoError;

/// Name of the header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Default environment variable holding the API key.
pub const API_KEY_ENV_VAR: &str = "AESO_API_KEY";

/// The AESO subscription key sent with every request.
#[derive(Clone)]
pub struct ApiKey {
    key: SecretString,
}

impl ApiKey {
    /// Create a key from its string form.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: SecretString::from(key.into()),
        }
    }

    /// Read the key from `AESO_API_KEY`.
    pub fn from_env() -> Result<Self, AesoError> {
        Self::from_env_var(API_KEY_ENV_VAR)
    }

    /// Read the key from a custom environment variable.
    pub fn from_env_var(var: &str) -> Result<Self, AesoError> {
        Self::try_from_env_var(var)
            .ok_or_else(|| AesoError::InvalidApiKey(format!("environment variable {var} not set")))
    }

    /// Try to read the key from `AESO_API_KEY`.
    ///
    /// Returns `None` if the variable is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_var(API_KEY_ENV_VAR)
    }

    /// Try to read the key from a custom environment variable.
    ///
    /// Returns `None` if the variable is not set.
    pub fn try_from_env_var(var: &str) -> Option<Self> {
        std::env::var(var).ok().map(Self::new)
    }

    /// Get the raw key.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.key.expose_secret()
    }

    /// Build the `X-Api-Key` header value.
    ///
    /// The value is marked sensitive so it is redacted from `Debug` output and
    /// request traces.
    pub fn header_value(&self) -> Result<HeaderValue, AesoError> {
        let raw = self.key.expose_secret();
        if raw.is_empty() {
            return Err(AesoError::InvalidApiKey("key is empty".to_string()));
        }
        let mut value = HeaderValue::from_str(raw).map_err(|_| {
            AesoError::InvalidApiKey("key contains characters not allowed in a header".to_string())
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey").field("key", &"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_redacted() {
        let key = ApiKey::new("super_secret");
        let debug_str = format!("{:?}", key);
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_header_value_is_sensitive() {
        let value = ApiKey::new("abc123").header_value().unwrap();
        assert_eq!(value.to_str().unwrap(), "abc123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = ApiKey::new("").header_value().unwrap_err();
        assert!(matches!(err, AesoError::InvalidApiKey(_)));
    }

    #[test]
    fn test_key_with_newline_rejected() {
        let err = ApiKey::new("abc\r\nX-Other: 1").header_value().unwrap_err();
        assert!(matches!(err, AesoError::InvalidApiKey(_)));
    }

    #[test]
    fn test_missing_env_var() {
        let var = "AESO_API_CLIENT_TEST_UNSET_VARIABLE";
        assert!(ApiKey::try_from_env_var(var).is_none());
        assert!(matches!(
            ApiKey::from_env_var(var),
            Err(AesoError::InvalidApiKey(_))
        ));
    }
}
