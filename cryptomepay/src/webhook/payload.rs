//! Typed payment webhook payload.

use serde::{Deserialize, Serialize};

use crate::signing::{
    format_actual_amount, format_amount, format_status, verify, ParameterSet,
};
use crate::types::{ChainType, PaymentStatus};

/// Payment outcome delivered to the merchant's `notify_url`.
///
/// Fields missing from the delivery decode to their empty values. They then
/// either drop out of the canonical string or format differently from what the
/// gateway signed, so an incomplete payload fails verification instead of
/// erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub trade_id: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub actual_amount: f64,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub chain_type: Option<ChainType>,
    #[serde(default)]
    pub block_transaction_id: String,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub signature: String,
}

impl WebhookPayload {
    /// The parameter set the gateway signed for this payload.
    pub fn signing_params(&self) -> ParameterSet {
        let chain_type = self
            .chain_type
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        [
            ("trade_id", self.trade_id.clone()),
            ("order_id", self.order_id.clone()),
            ("amount", format_amount(self.amount)),
            ("actual_amount", format_actual_amount(self.actual_amount)),
            ("token", self.token.clone()),
            ("chain_type", chain_type),
            ("block_transaction_id", self.block_transaction_id.clone()),
            ("status", format_status(self.status)),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
    }
}

/// Verify a typed webhook payload against `secret`.
pub fn verify_payload(payload: &WebhookPayload, secret: &str) -> bool {
    verify(&payload.signature, &payload.signing_params(), secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::sign;

    fn paid_payload() -> WebhookPayload {
        WebhookPayload {
            trade_id: "CP123".to_string(),
            order_id: "ORDER_001".to_string(),
            amount: 100.00,
            actual_amount: 15.6250,
            token: "0xabc".to_string(),
            chain_type: Some(ChainType::Bsc),
            block_transaction_id: "0x123".to_string(),
            status: PaymentStatus::Paid,
            signature: String::new(),
        }
    }

    fn gateway_signature(secret: &str) -> String {
        let params: ParameterSet = [
            ("trade_id", "CP123"),
            ("order_id", "ORDER_001"),
            ("amount", "100.00"),
            ("actual_amount", "15.6250"),
            ("token", "0xabc"),
            ("chain_type", "BSC"),
            ("block_transaction_id", "0x123"),
            ("status", "2"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        sign(&params, secret)
    }

    #[test]
    fn test_signing_params_formats_fields() {
        let params = paid_payload().signing_params();

        assert_eq!(params["amount"], "100.00");
        assert_eq!(params["actual_amount"], "15.6250");
        assert_eq!(params["status"], "2");
        assert_eq!(params["chain_type"], "BSC");
        assert!(!params.contains_key("signature"));
    }

    #[test]
    fn test_valid_signature() {
        let mut payload = paid_payload();
        payload.signature = gateway_signature("test_secret");

        assert!(verify_payload(&payload, "test_secret"));
    }

    #[test]
    fn test_tampered_amount_fails() {
        let mut payload = paid_payload();
        payload.signature = gateway_signature("test_secret");
        payload.amount = 999.99;

        assert!(!verify_payload(&payload, "test_secret"));
    }

    #[test]
    fn test_invalid_signature_fails() {
        let mut payload = paid_payload();
        payload.signature = "invalid_signature_here".to_string();

        assert!(!verify_payload(&payload, "test_secret"));
    }

    #[test]
    fn test_wrong_secret_fails() {
        let mut payload = paid_payload();
        payload.signature = gateway_signature("test_secret");

        assert!(!verify_payload(&payload, "another_secret"));
    }

    #[test]
    fn test_decodes_from_json() {
        let payload: WebhookPayload = serde_json::from_str(
            r#"{
                "trade_id": "CP123",
                "order_id": "ORDER_001",
                "amount": 100.00,
                "actual_amount": 15.6250,
                "token": "0xabc",
                "chain_type": "BSC",
                "block_transaction_id": "0x123",
                "status": 2,
                "signature": "abc"
            }"#,
        )
        .unwrap();

        assert_eq!(payload.status, PaymentStatus::Paid);
        assert_eq!(payload.signing_params(), paid_payload().signing_params());
    }

    #[test]
    fn test_missing_fields_fail_closed() {
        let mut payload: WebhookPayload =
            serde_json::from_str(r#"{"trade_id": "CP123", "order_id": "ORDER_001"}"#).unwrap();
        payload.signature = gateway_signature("test_secret");

        assert_eq!(payload.status, PaymentStatus::Other(0));
        assert!(!verify_payload(&payload, "test_secret"));
    }
}
