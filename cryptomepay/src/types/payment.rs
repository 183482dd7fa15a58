//! Payment creation request and response data.

use serde::{Deserialize, Serialize};

use super::ChainType;
use crate::error::{signing_error, Error, SigningErrorKind};
use crate::signing::{format_amount, ParameterSet};

/// Parameters for creating a payment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentParams {
    /// Merchant-side order identifier.
    pub order_id: String,
    /// Fiat amount, signed with two decimal digits.
    pub amount: f64,
    /// URL the gateway posts the payment webhook to.
    pub notify_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_type: Option<ChainType>,
}

impl CreatePaymentParams {
    pub fn new(order_id: impl Into<String>, amount: f64, notify_url: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            amount,
            notify_url: notify_url.into(),
            redirect_url: None,
            chain_type: None,
        }
    }

    pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    pub fn with_chain_type(mut self, chain_type: ChainType) -> Self {
        self.chain_type = Some(chain_type);
        self
    }

    /// Endpoint fields of the signed parameter set.
    ///
    /// Required fields must be present: an empty one would silently drop out of
    /// the canonical string and leave the signature under-determined.
    pub(crate) fn signing_params(&self) -> Result<ParameterSet, Error> {
        if self.order_id.is_empty() {
            return Err(signing_error(
                SigningErrorKind::MissingField("order_id"),
                "order_id is required",
            ));
        }
        if self.notify_url.is_empty() {
            return Err(signing_error(
                SigningErrorKind::MissingField("notify_url"),
                "notify_url is required",
            ));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(signing_error(
                SigningErrorKind::InvalidAmount,
                &format!("amount must be a positive number, got {}", self.amount),
            ));
        }

        let mut params = ParameterSet::new();
        params.insert("order_id".to_string(), self.order_id.clone());
        params.insert("amount".to_string(), format_amount(self.amount));
        params.insert("notify_url".to_string(), self.notify_url.clone());
        if let Some(redirect_url) = self.redirect_url.as_ref().filter(|u| !u.is_empty()) {
            params.insert("redirect_url".to_string(), redirect_url.clone());
        }
        if let Some(chain_type) = &self.chain_type {
            params.insert("chain_type".to_string(), chain_type.to_string());
        }
        Ok(params)
    }
}

/// Payment order created by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentData {
    pub trade_id: String,
    pub order_id: String,
    pub amount: f64,
    /// Amount to pay on-chain, in the settlement token.
    pub actual_amount: f64,
    /// Receiving wallet address.
    pub token: String,
    pub chain_type: Option<ChainType>,
    pub chain_name: String,
    pub expiration_time: i64,
    pub payment_url: String,
}
