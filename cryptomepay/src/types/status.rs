//! Payment lifecycle status codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a payment order, sent on the wire as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Expired,
    Other(i64),
}

impl PaymentStatus {
    pub fn as_i64(&self) -> i64 {
        match self {
            PaymentStatus::Pending => 1,
            PaymentStatus::Paid => 2,
            PaymentStatus::Expired => 3,
            PaymentStatus::Other(code) => *code,
        }
    }

    /// True once the order can no longer change.
    pub fn is_final(&self) -> bool {
        matches!(self, PaymentStatus::Paid | PaymentStatus::Expired)
    }
}

/// A status the gateway did not send.
impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Other(0)
    }
}

impl From<i64> for PaymentStatus {
    fn from(code: i64) -> Self {
        match code {
            1 => PaymentStatus::Pending,
            2 => PaymentStatus::Paid,
            3 => PaymentStatus::Expired,
            other => PaymentStatus::Other(other),
        }
    }
}

impl From<PaymentStatus> for i64 {
    fn from(status: PaymentStatus) -> Self {
        status.as_i64()
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Expired => write!(f, "expired"),
            PaymentStatus::Other(code) => write!(f, "unknown({})", code),
        }
    }
}
