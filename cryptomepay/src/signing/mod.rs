//! Request signing and signature verification.
//!
//! Every signed exchange with the gateway, outbound requests and inbound
//! webhooks alike, reduces a flat parameter set to a canonical string and
//! authenticates it with HMAC-SHA256 under the merchant's API secret.

mod canonical;
mod format;
mod nonce;
mod signer;

use std::collections::HashMap;

pub use canonical::{canonicalize, SIGNATURE_KEY};
pub use format::{format_actual_amount, format_amount, format_status};
pub use nonce::{unix_timestamp, Nonce};
pub use signer::{sign, verify, Signer, SIGNATURE_LEN};

/// Field name to already-formatted field value.
pub type ParameterSet = HashMap<String, String>;
