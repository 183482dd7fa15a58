//! Webhook signature validation.
//!
//! Two verification paths are offered. The typed path decodes the payment
//! webhook into [`WebhookPayload`] and formats every field exactly the way the
//! gateway signs it. The untyped path accepts any decoded JSON object and
//! stringifies values generically; it is best-effort and should only be used
//! for payloads the typed path cannot represent.

mod hmac;
mod payload;
mod untyped;

pub use self::hmac::HmacWebhookValidator;
pub use payload::{verify_payload, WebhookPayload};
pub use untyped::{stringify_value, verify_untyped_record};

use crate::error::Error;

/// Trait for validating webhook deliveries.
pub trait WebhookValidator: Send + Sync {
    /// Validate a raw webhook request body.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the signature is valid, `Ok(false)` if it is not, and an
    /// error only when the body cannot be decoded at all.
    fn validate(&self, body: &[u8]) -> Result<bool, Error>;
}
