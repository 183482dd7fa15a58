//! Error types for the `cryptomepay` crate.
//!
//! Follows the same pattern as the rest of the workspace: a root Error struct
//! holding an error kind tree and an optional source for error chaining.
//!
//! A webhook whose signature does not match is *not* an error. Verification
//! returns `false` for that case; the kinds below cover configuration, input
//! shape, transport and decode failures only.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level error type for the cryptomepay crate.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in cryptomepay.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Config(ConfigErrorKind),
    Signing(SigningErrorKind),
    Webhook(WebhookErrorKind),
    Http(HttpErrorKind),
    Api(ApiError),
}

/// Errors detected while constructing a client.
#[derive(Debug, PartialEq)]
pub enum ConfigErrorKind {
    MissingApiKey,
    MissingApiSecret,
    InvalidBaseUrl,
}

/// Errors from assembling a parameter set for signing.
#[derive(Debug, PartialEq)]
pub enum SigningErrorKind {
    MissingField(&'static str),
    InvalidAmount,
}

/// Errors from webhook decoding.
#[derive(Debug, PartialEq)]
pub enum WebhookErrorKind {
    InvalidPayload,
}

/// Errors from HTTP client operations.
#[derive(Debug, PartialEq)]
pub enum HttpErrorKind {
    BuilderFailed,
    RequestFailed,
    Network,
    Decode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Config(kind) => write!(f, "Configuration error: {:?}", kind),
            ErrorKind::Signing(kind) => write!(f, "Signing error: {:?}", kind),
            ErrorKind::Webhook(kind) => write!(f, "Webhook error: {:?}", kind),
            ErrorKind::Http(kind) => write!(f, "HTTP error: {:?}", kind),
            ErrorKind::Api(err) => write!(f, "{}", err),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let error_kind = if err.is_builder() {
            ErrorKind::Http(HttpErrorKind::BuilderFailed)
        } else if err.is_decode() {
            ErrorKind::Http(HttpErrorKind::Decode)
        } else if err.is_request() {
            ErrorKind::Http(HttpErrorKind::RequestFailed)
        } else {
            ErrorKind::Http(HttpErrorKind::Network)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Http(HttpErrorKind::Decode),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Config(ConfigErrorKind::InvalidBaseUrl),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error {
            source: None,
            error_kind: ErrorKind::Api(err),
        }
    }
}

/// Helper function to create configuration errors.
pub fn config_error(kind: ConfigErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Config(kind),
    }
}

/// Helper function to create signing errors.
pub fn signing_error(kind: SigningErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Signing(kind),
    }
}

/// Helper function to create webhook errors.
pub fn webhook_error(kind: WebhookErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Webhook(kind),
    }
}

/// Error codes documented by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidApiKey,
    SignatureVerifyFailed,
    ApiKeyExpired,
    IpNotWhitelisted,
    MerchantSuspended,

    InvalidOrderId,
    OrderExists,
    NoAvailableWallet,
    InvalidAmount,
    AmountChannelUnavailable,
    ExchangeRateError,
    OrderAlreadyPaid,
    OrderNotFound,
    OrderExpired,

    InvalidChainType,
    ChainUnavailable,
    ChainMonitoringDelay,

    RateLimitExceeded,
    BurstLimitExceeded,
}

impl ErrorCode {
    /// Numeric code as sent in the `status_code` field.
    pub fn as_i64(&self) -> i64 {
        match self {
            ErrorCode::InvalidApiKey => 1001,
            ErrorCode::SignatureVerifyFailed => 1002,
            ErrorCode::ApiKeyExpired => 1003,
            ErrorCode::IpNotWhitelisted => 1004,
            ErrorCode::MerchantSuspended => 1005,
            ErrorCode::InvalidOrderId => 10001,
            ErrorCode::OrderExists => 10002,
            ErrorCode::NoAvailableWallet => 10003,
            ErrorCode::InvalidAmount => 10004,
            ErrorCode::AmountChannelUnavailable => 10005,
            ErrorCode::ExchangeRateError => 10006,
            ErrorCode::OrderAlreadyPaid => 10007,
            ErrorCode::OrderNotFound => 10008,
            ErrorCode::OrderExpired => 10009,
            ErrorCode::InvalidChainType => 20001,
            ErrorCode::ChainUnavailable => 20002,
            ErrorCode::ChainMonitoringDelay => 20003,
            ErrorCode::RateLimitExceeded => 50001,
            ErrorCode::BurstLimitExceeded => 50002,
        }
    }

    /// Look up a documented code. Unknown codes return `None`.
    pub fn from_i64(code: i64) -> Option<Self> {
        let code = match code {
            1001 => ErrorCode::InvalidApiKey,
            1002 => ErrorCode::SignatureVerifyFailed,
            1003 => ErrorCode::ApiKeyExpired,
            1004 => ErrorCode::IpNotWhitelisted,
            1005 => ErrorCode::MerchantSuspended,
            10001 => ErrorCode::InvalidOrderId,
            10002 => ErrorCode::OrderExists,
            10003 => ErrorCode::NoAvailableWallet,
            10004 => ErrorCode::InvalidAmount,
            10005 => ErrorCode::AmountChannelUnavailable,
            10006 => ErrorCode::ExchangeRateError,
            10007 => ErrorCode::OrderAlreadyPaid,
            10008 => ErrorCode::OrderNotFound,
            10009 => ErrorCode::OrderExpired,
            20001 => ErrorCode::InvalidChainType,
            20002 => ErrorCode::ChainUnavailable,
            20003 => ErrorCode::ChainMonitoringDelay,
            50001 => ErrorCode::RateLimitExceeded,
            50002 => ErrorCode::BurstLimitExceeded,
            _ => return None,
        };
        Some(code)
    }
}

/// An error envelope returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub status_code: i64,
    pub message: String,
    #[serde(default)]
    pub request_id: String,
}

impl ApiError {
    pub fn new(status_code: i64, message: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            request_id: request_id.into(),
        }
    }

    /// The documented code for this error, if it is one.
    pub fn code(&self) -> Option<ErrorCode> {
        ErrorCode::from_i64(self.status_code)
    }

    /// Rate limit and server errors can be retried by the caller.
    pub fn is_retryable(&self) -> bool {
        self.status_code == 429 || self.status_code >= 500
    }

    pub fn is_auth_error(&self) -> bool {
        (1001..=1005).contains(&self.status_code)
    }

    pub fn is_validation_error(&self) -> bool {
        (10001..=10009).contains(&self.status_code)
    }

    pub fn is_chain_error(&self) -> bool {
        (20001..=20003).contains(&self.status_code)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "cryptomepay: {} (code={}, request_id={})",
            self.message, self.status_code, self.request_id
        )
    }
}

impl StdError for ApiError {}
