use serde::{Deserialize, Serialize};

/// Merchant profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantData {
    pub merchant_id: i64,
    pub merchant_code: String,
    pub name: String,
    pub email: String,
    pub status: String,
    pub kyc_status: String,
    pub kyc_level: i64,
    pub created_at: String,
}
