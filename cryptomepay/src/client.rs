//! Cryptome Pay API client.
//!
//! Builds signed requests for the gateway endpoints and verifies webhook
//! deliveries with the same API secret.

use std::time::Duration;

use log::*;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::credentials::Credentials;
use crate::environment::Environment;
use crate::error::{config_error, ConfigErrorKind, Error};
use crate::http::{HttpClientBuilder, HttpClientConfig};
use crate::signing::{unix_timestamp, Nonce, Signer};
use crate::types::{
    ApiResponse, ChainType, CreatePaymentParams, ListOrdersParams, MerchantData, OrderData,
    OrderListData, PaymentData,
};
use crate::webhook::{HmacWebhookValidator, WebhookPayload};

const CREATE_PAYMENT_PATH: &str = "/order/create-transaction";
const QUERY_PAYMENT_PATH: &str = "/order/query";
const LIST_ORDERS_PATH: &str = "/merchant/orders";
const MERCHANT_INFO_PATH: &str = "/merchant/info";

/// JSON body of a create-payment request.
#[derive(Debug, Serialize)]
struct CreatePaymentRequest<'a> {
    api_key: &'a str,
    timestamp: &'a str,
    nonce: &'a str,
    order_id: &'a str,
    amount: f64,
    notify_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain_type: Option<&'a ChainType>,
    signature: &'a str,
}

/// Cryptome Pay API client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    credentials: Credentials,
    signer: Signer,
    webhook_validator: HmacWebhookValidator,
    base_url: String,
}

impl Client {
    /// Create a client for the production environment with default settings.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self, Error> {
        Self::builder(api_key, api_secret).build()
    }

    pub fn builder(api_key: impl Into<String>, api_secret: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key, api_secret)
    }

    /// Switch to the sandbox environment.
    pub fn use_sandbox(&mut self) -> &mut Self {
        self.base_url = Environment::Sandbox.base_url().to_string();
        self
    }

    /// Switch to the production environment.
    pub fn use_production(&mut self) -> &mut Self {
        self.base_url = Environment::Production.base_url().to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn webhook_validator(&self) -> &HmacWebhookValidator {
        &self.webhook_validator
    }

    /// Create a new payment order.
    ///
    /// Required fields are checked before anything is sent.
    pub async fn create_payment(
        &self,
        params: &CreatePaymentParams,
    ) -> Result<ApiResponse<PaymentData>, Error> {
        let mut signed = params.signing_params()?;

        let api_key = self.credentials.api_key().expose_secret();
        let timestamp = unix_timestamp();
        let nonce = Nonce::generate();
        signed.insert("api_key".to_string(), api_key.clone());
        signed.insert("timestamp".to_string(), timestamp.clone());
        signed.insert("nonce".to_string(), nonce.as_str().to_string());

        let signature = self.signer.sign(&signed);

        let body = CreatePaymentRequest {
            api_key,
            timestamp: &timestamp,
            nonce: nonce.as_str(),
            order_id: &params.order_id,
            amount: params.amount,
            notify_url: &params.notify_url,
            redirect_url: params.redirect_url.as_deref().filter(|u| !u.is_empty()),
            chain_type: params.chain_type.as_ref(),
            signature: &signature,
        };

        debug!("Creating payment for order: {}", params.order_id);

        let url = self.endpoint(CREATE_PAYMENT_PATH, &[])?;
        let response: ApiResponse<PaymentData> = self.post(url, &body).await?;

        if let Some(data) = response.data.as_ref().filter(|_| response.is_success()) {
            info!(
                "Created payment trade_id={} for order {}",
                data.trade_id, data.order_id
            );
        }
        Ok(response)
    }

    /// Query a payment by the gateway's trade id.
    pub async fn query_payment_by_trade_id(
        &self,
        trade_id: &str,
    ) -> Result<ApiResponse<OrderData>, Error> {
        let url = self.endpoint(QUERY_PAYMENT_PATH, &[("trade_id", trade_id.to_string())])?;
        self.get(url).await
    }

    /// Query a payment by the merchant's order id.
    pub async fn query_payment_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<ApiResponse<OrderData>, Error> {
        let url = self.endpoint(QUERY_PAYMENT_PATH, &[("order_id", order_id.to_string())])?;
        self.get(url).await
    }

    /// List orders matching the given filters.
    pub async fn list_orders(
        &self,
        params: &ListOrdersParams,
    ) -> Result<ApiResponse<OrderListData>, Error> {
        let url = self.endpoint(LIST_ORDERS_PATH, &params.query_pairs())?;
        self.get(url).await
    }

    /// Fetch the merchant profile.
    pub async fn get_merchant_info(&self) -> Result<ApiResponse<MerchantData>, Error> {
        let url = self.endpoint(MERCHANT_INFO_PATH, &[])?;
        self.get(url).await
    }

    /// Verify a typed payment webhook against this client's secret.
    pub fn verify_webhook_signature(&self, payload: &WebhookPayload) -> bool {
        self.webhook_validator.verify(payload)
    }

    /// Verify an arbitrary decoded webhook record. Best-effort; see
    /// [`crate::webhook::verify_untyped_record`].
    pub fn verify_webhook_signature_from_map(&self, payload: &Map<String, Value>) -> bool {
        self.webhook_validator.verify_untyped(payload)
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, Error> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<ApiResponse<T>, Error> {
        debug!("GET {}", url.path());
        self.execute(self.http.get(url)).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<ApiResponse<T>, Error> {
        debug!("POST {}", url.path());
        self.execute(self.http.post(url).json(body)).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse<T>, Error> {
        let response = self
            .credentials
            .authenticate(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to Cryptome Pay failed: {:?}", e);
                Error::from(e)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read Cryptome Pay response: {:?}", e);
            Error::from(e)
        })?;

        let envelope: ApiResponse<T> = serde_json::from_slice(&body).map_err(|e| {
            warn!(
                "Failed to parse Cryptome Pay response (HTTP {}): {:?}",
                status, e
            );
            Error::from(e)
        })?;

        if !envelope.is_success() {
            debug!(
                "Cryptome Pay returned status_code={} request_id={}",
                envelope.status_code, envelope.request_id
            );
        }
        Ok(envelope)
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    api_key: String,
    api_secret: String,
    base_url: String,
    config: HttpClientConfig,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: Environment::default().base_url().to_string(),
            config: HttpClientConfig::default(),
            http_client: None,
        }
    }

    /// Target one of the gateway environments.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.base_url = environment.base_url().to_string();
        self
    }

    /// Target a custom base URL. Trailing slashes are removed.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout. Ignored when a custom HTTP client is supplied.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent string. Ignored when a custom HTTP client is supplied.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Use a preconfigured `reqwest` client.
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Build the client, validating credentials and the base URL.
    pub fn build(self) -> Result<Client, Error> {
        let credentials = Credentials::new(self.api_key, self.api_secret)?;

        let parsed = Url::parse(&self.base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(config_error(
                ConfigErrorKind::InvalidBaseUrl,
                &format!("Unsupported base URL: {}", self.base_url),
            ));
        }

        let http = match self.http_client {
            Some(http) => http,
            None => HttpClientBuilder::with_config(self.config).build()?,
        };

        Ok(Client {
            http,
            signer: credentials.signer(),
            webhook_validator: credentials.webhook_validator(),
            credentials,
            base_url: self.base_url,
        })
    }
}
