//! Per-field value formatting.
//!
//! The signer and the verifier must render numeric fields identically, so
//! every call site formats through these functions.

use crate::types::PaymentStatus;

/// Fiat `amount` fields: exactly two decimal digits.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// On-chain `actual_amount` fields: exactly four decimal digits.
pub fn format_actual_amount(amount: f64) -> String {
    format!("{:.4}", amount)
}

/// Status fields: plain base-10 integer.
pub fn format_status(status: PaymentStatus) -> String {
    status.as_i64().to_string()
}
