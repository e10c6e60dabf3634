//! Error types for the AESO client library.

use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for all AESO client operations.
///
/// Non-2xx responses map onto one variant per status code the API documents,
/// with [`AesoError::Unknown`] covering everything else. Transport failures are
/// kept apart from status errors; see [`AesoError::is_transport`].
#[derive(Error, Debug)]
pub enum AesoError {
    /// HTTP 400
    #[error("Bad Request")]
    BadRequest,

    /// HTTP 401, usually a missing or revoked API key
    #[error("Unauthorized")]
    Unauthorized,

    /// HTTP 403
    #[error("Forbidden")]
    Forbidden,

    /// HTTP 404
    #[error("Not Found")]
    NotFound,

    /// HTTP 405
    #[error("Invalid Method")]
    InvalidMethod,

    /// HTTP 500
    #[error("Internal Server Error")]
    InternalServerError,

    /// HTTP 503
    #[error("Service Unavailable")]
    ServiceUnavailable,

    /// Any other non-2xx status
    #[error("Unknown error (HTTP {status})")]
    Unknown {
        /// The status code returned by the server
        status: u16,
    },

    /// HTTP request failed before a status was received, or the body could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON deserialization into a typed response failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Query parameters could not be form-encoded
    #[error("Invalid query parameters: {0}")]
    InvalidParams(String),

    /// The API key cannot be sent as a header value
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    /// The configured user agent cannot be sent as a header value
    #[error("Invalid user agent: {0:?}")]
    InvalidUserAgent(String),
}

impl AesoError {
    /// Map an HTTP status to its error variant.
    ///
    /// Returns `None` for 2xx statuses.
    pub fn from_status(status: StatusCode) -> Option<Self> {
        if status.is_success() {
            return None;
        }
        let error = match status.as_u16() {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            405 => Self::InvalidMethod,
            500 => Self::InternalServerError,
            503 => Self::ServiceUnavailable,
            other => Self::Unknown { status: other },
        };
        Some(error)
    }

    /// The HTTP status code behind a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest => Some(400),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::InvalidMethod => Some(405),
            Self::InternalServerError => Some(500),
            Self::ServiceUnavailable => Some(503),
            Self::Unknown { status } => Some(*status),
            _ => None,
        }
    }

    /// Check if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpMiddleware(_))
    }

    /// Check if the server rejected the API key.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_map_to_named_variants() {
        let cases = [
            (400, "Bad Request"),
            (401, "Unauthorized"),
            (403, "Forbidden"),
            (404, "Not Found"),
            (405, "Invalid Method"),
            (500, "Internal Server Error"),
            (503, "Service Unavailable"),
        ];
        for (code, message) in cases {
            let status = StatusCode::from_u16(code).unwrap();
            let error = AesoError::from_status(status).unwrap();
            assert_eq!(error.to_string(), message);
            assert_eq!(error.status(), Some(code));
            assert!(!matches!(error, AesoError::Unknown { .. }));
        }
    }

    #[test]
    fn test_other_statuses_are_unknown() {
        for code in [302, 418, 422, 429, 502, 504] {
            let status = StatusCode::from_u16(code).unwrap();
            match AesoError::from_status(status) {
                Some(AesoError::Unknown { status }) => assert_eq!(status, code),
                other => panic!("expected Unknown for {code}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_success_is_not_an_error() {
        assert!(AesoError::from_status(StatusCode::OK).is_none());
        assert!(AesoError::from_status(StatusCode::NO_CONTENT).is_none());
        assert!(AesoError::from_status(StatusCode::from_u16(299).unwrap()).is_none());
    }

    #[test]
    fn test_auth_classification() {
        assert!(AesoError::Unauthorized.is_auth());
        assert!(AesoError::Forbidden.is_auth());
        assert!(!AesoError::NotFound.is_auth());
        assert!(!AesoError::BadRequest.is_transport());
    }
}
