//! Payment gateway trait.

use async_trait::async_trait;

use crate::client::Client;
use crate::error::Error;
use crate::types::{
    ApiResponse, CreatePaymentParams, ListOrdersParams, MerchantData, OrderData, OrderListData,
    PaymentData,
};

/// Abstraction over the gateway endpoints.
///
/// [`Client`] is the production implementation. Application code that depends
/// on this trait can swap in an in-memory fake for its own tests.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment order and return the payment instructions.
    async fn create_payment(
        &self,
        params: &CreatePaymentParams,
    ) -> Result<ApiResponse<PaymentData>, Error>;

    /// Look up a payment by the gateway-assigned trade id.
    async fn query_payment_by_trade_id(
        &self,
        trade_id: &str,
    ) -> Result<ApiResponse<OrderData>, Error>;

    /// Look up a payment by the merchant's own order id.
    async fn query_payment_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<ApiResponse<OrderData>, Error>;

    /// List orders; filters are passed through as query parameters.
    async fn list_orders(
        &self,
        params: &ListOrdersParams,
    ) -> Result<ApiResponse<OrderListData>, Error>;

    /// Fetch the merchant profile. Doubles as a credentials check.
    async fn get_merchant_info(&self) -> Result<ApiResponse<MerchantData>, Error>;
}

#[async_trait]
impl PaymentGateway for Client {
    async fn create_payment(
        &self,
        params: &CreatePaymentParams,
    ) -> Result<ApiResponse<PaymentData>, Error> {
        Client::create_payment(self, params).await
    }

    async fn query_payment_by_trade_id(
        &self,
        trade_id: &str,
    ) -> Result<ApiResponse<OrderData>, Error> {
        Client::query_payment_by_trade_id(self, trade_id).await
    }

    async fn query_payment_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<ApiResponse<OrderData>, Error> {
        Client::query_payment_by_order_id(self, order_id).await
    }

    async fn list_orders(
        &self,
        params: &ListOrdersParams,
    ) -> Result<ApiResponse<OrderListData>, Error> {
        Client::list_orders(self, params).await
    }

    async fn get_merchant_info(&self) -> Result<ApiResponse<MerchantData>, Error> {
        Client::get_merchant_info(self).await
    }
}
