use cryptomepay::signing::{sign, ParameterSet};
use cryptomepay::{Client, PaymentStatus, WebhookPayload, WebhookValidator};
use serde_json::{json, Map, Value};

const API_SECRET: &str = "test_secret";

fn client() -> Client {
    Client::new("sk_test_key", API_SECRET).unwrap()
}

fn delivery_signature() -> String {
    let params: ParameterSet = [
        ("trade_id", "CP123456789"),
        ("order_id", "ORDER_001"),
        ("amount", "100.00"),
        ("actual_amount", "15.6250"),
        ("token", "0xabc123"),
        ("chain_type", "BSC"),
        ("block_transaction_id", "0xdef456"),
        ("status", "2"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    sign(&params, API_SECRET)
}

fn delivery() -> Value {
    json!({
        "trade_id": "CP123456789",
        "order_id": "ORDER_001",
        "amount": 100.00,
        "actual_amount": 15.6250,
        "token": "0xabc123",
        "chain_type": "BSC",
        "block_transaction_id": "0xdef456",
        "status": 2,
        "signature": delivery_signature()
    })
}

#[test]
fn test_paid_webhook_verifies() {
    let payload: WebhookPayload = serde_json::from_value(delivery()).unwrap();

    assert_eq!(payload.status, PaymentStatus::Paid);
    assert!(client().verify_webhook_signature(&payload));
}

#[test]
fn test_tampered_webhook_is_rejected() {
    let mut body = delivery();
    body["amount"] = json!(999.99);
    let payload: WebhookPayload = serde_json::from_value(body).unwrap();

    assert!(!client().verify_webhook_signature(&payload));
}

#[test]
fn test_webhook_from_other_secret_is_rejected() {
    let payload: WebhookPayload = serde_json::from_value(delivery()).unwrap();
    let other = Client::new("sk_test_key", "other_secret").unwrap();

    assert!(!other.verify_webhook_signature(&payload));
}

#[test]
fn test_webhook_missing_signature_is_rejected() {
    let mut body = delivery();
    body.as_object_mut().unwrap().remove("signature");
    let payload: WebhookPayload = serde_json::from_value(body).unwrap();

    assert!(!client().verify_webhook_signature(&payload));
}

#[test]
fn test_raw_body_through_validator_trait() {
    let client = client();
    let validator: &dyn WebhookValidator = client.webhook_validator();
    let body = serde_json::to_vec(&delivery()).unwrap();

    assert!(validator.validate(&body).unwrap());
    assert!(validator.validate(b"{oops").is_err());
}

#[test]
fn test_untyped_record_with_string_fields() {
    let mut params = ParameterSet::new();
    params.insert("event".to_string(), "payment.paid".to_string());
    params.insert("trade_id".to_string(), "CP1".to_string());
    params.insert("count".to_string(), "3".to_string());
    let signature = sign(&params, API_SECRET);

    let record: Map<String, Value> = serde_json::from_value(json!({
        "event": "payment.paid",
        "trade_id": "CP1",
        "count": 3,
        "note": "",
        "signature": signature
    }))
    .unwrap();

    assert!(client().verify_webhook_signature_from_map(&record));
}

#[test]
fn test_untyped_record_rejects_non_string_signature() {
    let record: Map<String, Value> = serde_json::from_value(json!({
        "trade_id": "CP1",
        "signature": 12345
    }))
    .unwrap();

    assert!(!client().verify_webhook_signature_from_map(&record));
}
