//! Error types for the news API client.
//!
//! Failures fall into three disjoint groups:
//!
//! - [`ValidationError`]: local, deterministic checks on a parameter set.
//!   Raised before any request is sent, so retrying with the same input
//!   always fails the same way.
//! - [`ApiError`]: the service answered with an envelope whose `status` is
//!   not `"ok"`. Carries the HTTP status plus the service's code and message.
//! - Transport and decode failures, passed through untouched from `reqwest`
//!   and `serde_json`.
//!
//! [`Error`] is the single type every client call returns.

use thiserror::Error;

/// Rejected parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("query exceeds 500 character limit")]
    QueryTooLong,

    #[error("invalid search key")]
    InvalidSearchScope,

    #[error("invalid category")]
    InvalidCategory,

    #[error("invalid language")]
    InvalidLanguage,

    #[error("invalid country")]
    InvalidCountry,

    #[error("invalid sort key")]
    InvalidSortBy,

    /// `sources` was combined with `country` or `category` on top headlines.
    #[error("country/category parameter cannot be used along with sources parameter")]
    IncompatibleParams,

    #[error("sources exceeds 20 entries limit")]
    TooManySources,

    /// `from` is strictly after `to`.
    #[error("from time cannot be after to time")]
    InvalidTimeRange,

    #[error("page size exceeds 100 entries limit")]
    PageSizeTooLarge,

    /// No selective filter was given, which would ask the service for an
    /// unbounded result set.
    #[error("scope of parameters is too broad")]
    ScopeTooBroad,
}

/// Failure reported by the service in a non-`"ok"` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("statusCode: \"{status_code}\", code: {code:?}, message: {message:?}")]
pub struct ApiError {
    /// HTTP status of the response that carried the envelope.
    pub status_code: u16,
    /// Machine readable code from the envelope (e.g. `apiKeyInvalid`).
    pub code: String,
    /// Human readable message from the envelope.
    pub message: String,
}

/// Everything a [`Client`](crate::Client) call can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// Connection, TLS, timeout or body read failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The response body was not a valid envelope.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// The validation sentinel, if this is a local rejection.
    pub fn as_validation(&self) -> Option<ValidationError> {
        match self {
            Error::Validation(e) => Some(*e),
            _ => None,
        }
    }

    /// The service error, if the service answered with a failure envelope.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors raised while loading a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("missing API key (set it in the config file or pass --api-key)")]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError {
            status_code: 500,
            code: "123".to_string(),
            message: "321".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"statusCode: "500", code: "123", message: "321""#
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err = Error::from(ValidationError::ScopeTooBroad);
        assert_eq!(err.to_string(), "scope of parameters is too broad");
        assert_eq!(err.as_validation(), Some(ValidationError::ScopeTooBroad));
        assert!(err.as_api().is_none());
    }

    #[test]
    fn test_api_error_accessor() {
        let err = Error::from(ApiError {
            status_code: 401,
            code: "apiKeyInvalid".to_string(),
            message: "Your API key is invalid".to_string(),
        });
        assert_eq!(err.as_api().map(|e| e.status_code), Some(401));
        assert!(err.as_validation().is_none());
    }

    #[test]
    fn test_decode_error_is_transparent() {
        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let message = inner.to_string();
        let err = Error::from(inner);
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.to_string(), message);
    }
}
