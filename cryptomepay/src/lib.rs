//! # cryptomepay
//!
//! Client for the Cryptome Pay non-custodial cryptocurrency payment gateway:
//! - Signed requests for creating payments, querying and listing orders, and
//!   fetching the merchant profile
//! - HMAC-SHA256 webhook signature verification
//!
//! ## Signing
//!
//! Requests and webhooks are authenticated the same way: the flat parameter
//! set is reduced to a canonical `key=value&...` string (keys sorted, empty
//! values and `signature` dropped) and signed with HMAC-SHA256 under the
//! merchant's API secret. See [`signing`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cryptomepay::{ChainType, Client, CreatePaymentParams};
//!
//! let client = Client::new("sk_live_xxx", "your_secret")?;
//!
//! let payment = client
//!     .create_payment(
//!         &CreatePaymentParams::new("ORDER_001", 100.00, "https://example.com/webhook")
//!             .with_chain_type(ChainType::Bsc),
//!     )
//!     .await?;
//! ```

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod client;
pub mod credentials;
pub mod environment;
pub mod error;
pub mod gateway;
pub mod http;
pub mod signing;
pub mod types;
pub mod webhook;

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use credentials::Credentials;
pub use environment::Environment;
pub use error::{ApiError, Error, ErrorCode, ErrorKind};
pub use gateway::PaymentGateway;
pub use types::{
    ApiResponse, ChainType, CreatePaymentParams, ListOrdersParams, MerchantData, OrderData,
    OrderListData, PaymentData, PaymentStatus,
};
pub use webhook::{HmacWebhookValidator, WebhookPayload, WebhookValidator};
