//! Replay protection inputs for outbound requests.

use chrono::Utc;
use rand::Rng;

/// Single-use random token sent with every signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce(String);

impl Nonce {
    /// Generate a new nonce from 16 random bytes (128 bits), hex encoded.
    pub fn generate() -> Self {
        let random_bytes: [u8; 16] = rand::thread_rng().gen();
        Self(hex::encode(random_bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Current Unix time in seconds, as sent in the `timestamp` field.
pub fn unix_timestamp() -> String {
    Utc::now().timestamp().to_string()
}
