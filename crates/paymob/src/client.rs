use serde_json::Value;

use crate::checkout::unified_checkout_url;
use crate::config::PaymobConfig;
use crate::constants::{
    AUTH_TOKENS_PATH, CAPTURE_PATH, DEFAULT_PAGE, INTENTION_PATH, ORDERS_PATH, PAYMENT_KEYS_PATH,
    PAY_PATH, TRANSACTIONS_PATH, TRANSACTION_INQUIRY_PATH,
};
use crate::error::{PaymobError, Result};
use crate::request::{
    AuthRequest, CaptureRequest, CardPayment, IntentionData, IntentionRequest, OrderRequest,
    PaymentKeyParams, PaymentKeyRequest, PaymentRequest, TransactionInquiryRequest,
};
use crate::transport::{endpoint, Transport};

/// Client for the Paymob Accept API.
///
/// Each method maps to exactly one gateway request and returns the decoded
/// JSON body as-is. The client holds no per-call state, so one instance can
/// be cloned and shared across tasks.
#[derive(Debug, Clone)]
pub struct PaymobClient {
    config: PaymobConfig,
    transport: Transport,
}

impl PaymobClient {
    pub fn new(config: PaymobConfig) -> Result<Self> {
        let transport = Transport::new(config.timeout)?;
        Ok(Self { config, transport })
    }

    /// Create a client with a custom reqwest::Client. `config.timeout` is ignored.
    pub fn with_http_client(config: PaymobConfig, http: reqwest::Client) -> Self {
        Self {
            config,
            transport: Transport::with_http_client(http),
        }
    }

    pub fn config(&self) -> &PaymobConfig {
        &self.config
    }

    /// Exchange the configured API key for an auth token.
    #[tracing::instrument(skip_all)]
    pub async fn authenticate(&self) -> Result<Value> {
        let url = endpoint(&self.config.accept_base_url, AUTH_TOKENS_PATH, &[])?;
        let body = AuthRequest {
            api_key: self.config.api_key.clone(),
        };
        self.transport.post_json(url, &body, None).await
    }

    /// Authenticate and pull the `token` string out of the response.
    #[tracing::instrument(skip_all)]
    pub async fn auth_token(&self) -> Result<String> {
        let response = self.authenticate().await?;
        response
            .get("token")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(PaymobError::MissingToken)
    }

    /// Create a payment intention. `token` is the merchant secret key.
    #[tracing::instrument(skip_all)]
    pub async fn create_intention(&self, token: &str, data: &IntentionData) -> Result<Value> {
        if token.is_empty() {
            return Err(PaymobError::InvalidInput(
                "intention token must not be empty".to_string(),
            ));
        }
        let url = endpoint(&self.config.accept_base_url, INTENTION_PATH, &[])?;
        let body = IntentionRequest::from(data);
        self.transport
            .post_json(url, &body, Some(format!("Token {token}")))
            .await
    }

    #[tracing::instrument(skip_all, fields(order_id = order_id))]
    pub async fn transaction_inquiry(&self, token: &str, order_id: i64) -> Result<Value> {
        let url = endpoint(&self.config.accept_base_url, TRANSACTION_INQUIRY_PATH, &[])?;
        let body = TransactionInquiryRequest { order_id };
        self.transport
            .post_json(url, &body, Some(format!("Bearer {token}")))
            .await
    }

    /// Hosted checkout link for an intention. No request is made.
    pub fn unified_checkout_url(&self, public_key: &str, client_secret: &str) -> String {
        unified_checkout_url(&self.config.checkout_base_url, public_key, client_secret)
    }

    /// Register an order. Currency is always EGP and the customer is always notified.
    #[tracing::instrument(skip_all, fields(merchant_order_id = %merchant_order_id))]
    pub async fn create_order(
        &self,
        token: &str,
        merchant_id: i64,
        amount_cents: i64,
        merchant_order_id: &str,
    ) -> Result<Value> {
        let url = endpoint(
            &self.config.accept_base_url,
            ORDERS_PATH,
            &[("token", token)],
        )?;
        let body = OrderRequest::new(merchant_id, amount_cents, merchant_order_id);
        self.transport.post_json(url, &body, None).await
    }

    /// Issue a payment key for rendering the hosted card form.
    #[tracing::instrument(skip_all, fields(order_id = params.order_id))]
    pub async fn create_payment_key(
        &self,
        token: &str,
        params: &PaymentKeyParams,
    ) -> Result<Value> {
        let url = endpoint(
            &self.config.accept_base_url,
            PAYMENT_KEYS_PATH,
            &[("token", token)],
        )?;
        let body = PaymentKeyRequest::from(params);
        self.transport.post_json(url, &body, None).await
    }

    /// Pay with raw card details. `payment_token` is the key from [`create_payment_key`](Self::create_payment_key).
    #[tracing::instrument(skip_all, fields(order_id = payment.order_id))]
    pub async fn pay(&self, payment_token: &str, payment: &CardPayment) -> Result<Value> {
        let url = endpoint(&self.config.solutions_base_url, PAY_PATH, &[])?;
        let body = PaymentRequest::new(payment_token, payment);
        self.transport.post_json(url, &body, None).await
    }

    /// Capture an authorized transaction.
    #[tracing::instrument(skip_all, fields(transaction_id = transaction_id))]
    pub async fn capture(
        &self,
        token: &str,
        transaction_id: i64,
        amount_cents: i64,
    ) -> Result<Value> {
        let url = endpoint(
            &self.config.solutions_base_url,
            CAPTURE_PATH,
            &[("token", token)],
        )?;
        let body = CaptureRequest {
            transaction_id,
            amount_cents,
        };
        self.transport.post_json(url, &body, None).await
    }

    /// List orders; `page` defaults to 1.
    #[tracing::instrument(skip_all, fields(page))]
    pub async fn list_orders(&self, auth_token: &str, page: Option<u32>) -> Result<Value> {
        self.list(ORDERS_PATH, auth_token, page).await
    }

    #[tracing::instrument(skip_all, fields(order_id = order_id))]
    pub async fn get_order(&self, auth_token: &str, order_id: i64) -> Result<Value> {
        self.get_by_id(ORDERS_PATH, auth_token, order_id).await
    }

    /// List transactions; `page` defaults to 1.
    #[tracing::instrument(skip_all, fields(page))]
    pub async fn list_transactions(&self, auth_token: &str, page: Option<u32>) -> Result<Value> {
        self.list(TRANSACTIONS_PATH, auth_token, page).await
    }

    #[tracing::instrument(skip_all, fields(transaction_id = transaction_id))]
    pub async fn get_transaction(&self, auth_token: &str, transaction_id: i64) -> Result<Value> {
        self.get_by_id(TRANSACTIONS_PATH, auth_token, transaction_id)
            .await
    }

    async fn list(&self, path: &str, auth_token: &str, page: Option<u32>) -> Result<Value> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        tracing::Span::current().record("page", page);
        let page = page.to_string();
        let url = endpoint(
            &self.config.solutions_base_url,
            path,
            &[("page", &page), ("token", auth_token)],
        )?;
        self.transport.get_json(url).await
    }

    async fn get_by_id(&self, path: &str, auth_token: &str, id: i64) -> Result<Value> {
        let url = endpoint(
            &self.config.solutions_base_url,
            &format!("{path}/{id}"),
            &[("token", auth_token)],
        )?;
        self.transport.get_json(url).await
    }
}
