//! HMAC-SHA256 webhook signature validation.

use log::*;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};

use super::{verify_payload, verify_untyped_record, WebhookPayload, WebhookValidator};
use crate::error::{webhook_error, Error, WebhookErrorKind};

/// HMAC-SHA256 webhook validator bound to the merchant's API secret.
#[derive(Debug, Clone)]
pub struct HmacWebhookValidator {
    secret: SecretString,
}

impl HmacWebhookValidator {
    /// Create a new HMAC webhook validator.
    ///
    /// # Arguments
    ///
    /// * `secret` - The API secret the gateway signs webhooks with
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Verify an already decoded payment webhook.
    pub fn verify(&self, payload: &WebhookPayload) -> bool {
        let valid = verify_payload(payload, self.secret.expose_secret());
        if !valid {
            warn!(
                "Webhook signature mismatch for trade_id={} order_id={}",
                payload.trade_id, payload.order_id
            );
        }
        valid
    }

    /// Verify an arbitrary JSON object through the best-effort path.
    pub fn verify_untyped(&self, record: &Map<String, Value>) -> bool {
        verify_untyped_record(record, self.secret.expose_secret())
    }

    /// Validate a raw body through the best-effort path.
    ///
    /// Errors only when the body is not a JSON object.
    pub fn validate_untyped(&self, body: &[u8]) -> Result<bool, Error> {
        let record: Map<String, Value> = serde_json::from_slice(body).map_err(|e| {
            warn!("Failed to decode webhook body: {:?}", e);
            webhook_error(
                WebhookErrorKind::InvalidPayload,
                "Webhook body is not a JSON object",
            )
        })?;

        Ok(self.verify_untyped(&record))
    }

    /// Decode a raw body into a typed payload without verifying it.
    pub fn decode(&self, body: &[u8]) -> Result<WebhookPayload, Error> {
        serde_json::from_slice(body).map_err(|e| {
            warn!("Failed to decode webhook payload: {:?}", e);
            webhook_error(
                WebhookErrorKind::InvalidPayload,
                &format!("Invalid webhook payload: {}", e),
            )
        })
    }
}

impl WebhookValidator for HmacWebhookValidator {
    fn validate(&self, body: &[u8]) -> Result<bool, Error> {
        let payload = self.decode(body)?;
        Ok(self.verify(&payload))
    }
}
