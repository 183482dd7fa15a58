//! Merchant API credentials.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{config_error, ConfigErrorKind, Error};
use crate::signing::Signer;
use crate::webhook::HmacWebhookValidator;

/// API key and secret issued to a merchant.
///
/// The key identifies the merchant and is sent as a Bearer token. The secret
/// never leaves the process; it keys request signatures and webhook checks.
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: SecretString,
    api_secret: SecretString,
}

impl Credentials {
    /// Create credentials, rejecting an empty key or secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(config_error(
                ConfigErrorKind::MissingApiKey,
                "API key must not be empty",
            ));
        }
        if api_secret.is_empty() {
            return Err(config_error(
                ConfigErrorKind::MissingApiSecret,
                "API secret must not be empty",
            ));
        }

        Ok(Self {
            api_key: SecretString::new(api_key),
            api_secret: SecretString::new(api_secret),
        })
    }

    /// Get a reference to the API key.
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Signer keyed by the API secret.
    pub fn signer(&self) -> Signer {
        Signer::new(self.api_secret.clone())
    }

    /// Webhook validator keyed by the API secret.
    pub fn webhook_validator(&self) -> HmacWebhookValidator {
        HmacWebhookValidator::new(self.api_secret.clone())
    }

    /// Apply `Authorization: Bearer <api_key>` to a request.
    pub fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(self.api_key.expose_secret())
    }
}
