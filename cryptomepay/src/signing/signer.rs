//! HMAC-SHA256 signing and constant-time verification.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::{canonicalize, ParameterSet};

type HmacSha256 = Hmac<Sha256>;

/// Length of a hex-encoded signature.
pub const SIGNATURE_LEN: usize = 64;

/// Sign a parameter set: lowercase hex HMAC-SHA256 of its canonical string.
pub fn sign(params: &ParameterSet, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(canonicalize(params).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Check `received` against the signature of `params` under `secret`.
pub fn verify(received: &str, params: &ParameterSet, secret: &str) -> bool {
    let expected = sign(params, secret);
    signatures_match(expected.as_bytes(), received.as_bytes())
}

// `expected` is always SIGNATURE_LEN bytes. `received` is copied into a buffer of
// that size so the byte comparison always covers the full length, and the length
// check is folded into the same constant-time result.
fn signatures_match(expected: &[u8], received: &[u8]) -> bool {
    let mut padded = [0u8; SIGNATURE_LEN];
    for (slot, byte) in padded.iter_mut().zip(received) {
        *slot = *byte;
    }

    let same_len = (received.len() as u64).ct_eq(&(expected.len() as u64));
    let same_bytes = padded[..].ct_eq(expected);
    (same_len & same_bytes).into()
}

/// Signer bound to one API secret.
#[derive(Debug, Clone)]
pub struct Signer {
    secret: SecretString,
}

impl Signer {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    pub fn sign(&self, params: &ParameterSet) -> String {
        sign(params, self.secret.expose_secret())
    }

    pub fn verify(&self, received: &str, params: &ParameterSet) -> bool {
        verify(received, params, self.secret.expose_secret())
    }
}
