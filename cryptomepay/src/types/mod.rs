//! Request and response types for the gateway API.

mod chain;
mod merchant;
mod order;
mod payment;
mod response;
mod status;

pub use chain::ChainType;
pub use merchant::MerchantData;
pub use order::{ListOrdersParams, OrderData, OrderListData};
pub use payment::{CreatePaymentParams, PaymentData};
pub use response::ApiResponse;
pub use status::PaymentStatus;
