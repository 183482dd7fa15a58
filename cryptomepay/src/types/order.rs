//! Order query and listing types.

use serde::{Deserialize, Serialize};

use super::{ChainType, PaymentStatus};

/// A payment order as returned by the query and list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderData {
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
    pub status: PaymentStatus,
    #[serde(default)]
    pub block_transaction_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub paid_at: String,
}

/// One page of orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderListData {
    pub list: Vec<OrderData>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

/// Filters for listing orders. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOrdersParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub status: Option<PaymentStatus>,
    pub chain_type: Option<ChainType>,
    /// Inclusive start date, as accepted by the gateway (e.g. `2024-01-01`).
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ListOrdersParams {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn chain_type(mut self, chain_type: ChainType) -> Self {
        self.chain_type = Some(chain_type);
        self
    }

    pub fn date_range(mut self, start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self.end_date = Some(end_date.into());
        self
    }

    /// Query pairs for the filters that are set, in a stable order.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size.filter(|p| *p > 0) {
            pairs.push(("page_size", page_size.to_string()));
        }
        if let Some(status) = self.status.filter(|s| s.as_i64() > 0) {
            pairs.push(("status", status.as_i64().to_string()));
        }
        if let Some(chain_type) = &self.chain_type {
            pairs.push(("chain_type", chain_type.to_string()));
        }
        if let Some(start_date) = self.start_date.as_ref().filter(|d| !d.is_empty()) {
            pairs.push(("start_date", start_date.clone()));
        }
        if let Some(end_date) = self.end_date.as_ref().filter(|d| !d.is_empty()) {
            pairs.push(("end_date", end_date.clone()));
        }
        pairs
    }
}
