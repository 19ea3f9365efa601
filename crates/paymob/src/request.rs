//! Request bodies sent to the gateway, and the caller-facing inputs they are built from.
//!
//! Field names match the gateway's wire format exactly. Values the gateway
//! requires but the caller never chooses are filled from [`crate::constants`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{
    CARD_SUBTYPE, CURRENCY_EGP, NOT_AVAILABLE, PAYMENT_KEY_EXPIRATION_SECS, SHIPPING_METHOD,
};

/// Body of `POST /api/auth/tokens`.
#[derive(Serialize)]
pub struct AuthRequest {
    pub api_key: String,
}

impl std::fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRequest")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Caller input for creating an intention. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentionData {
    /// Amount in minor units
    pub amount: Option<i64>,
    pub currency: Option<String>,
    /// Integration ids or method names accepted for this intention
    pub payment_methods: Option<Vec<Value>>,
    pub items: Option<Vec<Value>>,
    pub billing: Option<Map<String, Value>>,
    pub customer: Option<Map<String, Value>>,
    /// Forwarded verbatim, and only when present
    pub extras: Option<Value>,
}

/// Body of `POST /v1/intention/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentionRequest {
    pub amount: i64,
    pub currency: String,
    pub payment_methods: Vec<Value>,
    pub items: Vec<Value>,
    pub billing_data: Map<String, Value>,
    pub customer: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Value>,
}

impl From<&IntentionData> for IntentionRequest {
    fn from(data: &IntentionData) -> Self {
        Self {
            amount: data.amount.unwrap_or(0),
            currency: data.currency.clone().unwrap_or_default(),
            payment_methods: data.payment_methods.clone().unwrap_or_default(),
            items: data.items.clone().unwrap_or_default(),
            billing_data: data.billing.clone().unwrap_or_default(),
            customer: data.customer.clone().unwrap_or_default(),
            // An explicit null counts as not supplied
            extras: data.extras.clone().filter(|v| !v.is_null()),
        }
    }
}

/// Body of `POST /api/ecommerce/orders/transaction_inquiry`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionInquiryRequest {
    pub order_id: i64,
}

/// Body of `POST /api/ecommerce/orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub merchant_id: i64,
    pub amount_cents: i64,
    pub merchant_order_id: String,
    pub currency: &'static str,
    pub notify_user_with_email: bool,
}

impl OrderRequest {
    pub fn new(merchant_id: i64, amount_cents: i64, merchant_order_id: impl Into<String>) -> Self {
        Self {
            merchant_id,
            amount_cents,
            merchant_order_id: merchant_order_id.into(),
            currency: CURRENCY_EGP,
            notify_user_with_email: true,
        }
    }
}

/// Optional customer details attached to a payment key.
///
/// Anything left as `None` is sent as `"NA"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingContact {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Caller input for issuing a payment key.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentKeyParams {
    /// Card integration the key is issued for
    pub integration_id: i64,
    pub amount_cents: i64,
    /// Gateway order id returned by order creation
    pub order_id: i64,
    pub billing: BillingContact,
}

impl PaymentKeyParams {
    pub fn new(integration_id: i64, amount_cents: i64, order_id: i64) -> Self {
        Self {
            integration_id,
            amount_cents,
            order_id,
            billing: BillingContact::default(),
        }
    }

    pub fn with_billing(mut self, billing: BillingContact) -> Self {
        self.billing = billing;
        self
    }
}

/// `billing_data` object of a payment key request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingData {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub city: String,
    pub country: String,
    pub street: String,
    pub building: String,
    pub floor: String,
    pub apartment: String,
    pub shipping_method: String,
    pub postal_code: String,
    pub state: String,
}

impl From<&BillingContact> for BillingData {
    fn from(contact: &BillingContact) -> Self {
        let or_na = |v: &Option<String>| v.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());
        Self {
            email: or_na(&contact.email),
            first_name: or_na(&contact.first_name),
            last_name: or_na(&contact.last_name),
            phone_number: or_na(&contact.phone_number),
            city: or_na(&contact.city),
            country: or_na(&contact.country),
            street: NOT_AVAILABLE.to_string(),
            building: NOT_AVAILABLE.to_string(),
            floor: NOT_AVAILABLE.to_string(),
            apartment: NOT_AVAILABLE.to_string(),
            shipping_method: SHIPPING_METHOD.to_string(),
            postal_code: NOT_AVAILABLE.to_string(),
            state: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Body of `POST /api/acceptance/payment_keys`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentKeyRequest {
    pub amount_cents: i64,
    pub expiration: u64,
    pub order_id: i64,
    pub billing_data: BillingData,
    pub currency: &'static str,
    pub card_integration_id: i64,
}

impl From<&PaymentKeyParams> for PaymentKeyRequest {
    fn from(params: &PaymentKeyParams) -> Self {
        Self {
            amount_cents: params.amount_cents,
            expiration: PAYMENT_KEY_EXPIRATION_SECS,
            order_id: params.order_id,
            billing_data: BillingData::from(&params.billing),
            currency: CURRENCY_EGP,
            card_integration_id: params.integration_id,
        }
    }
}

/// Raw card details for a direct API payment.
#[derive(Clone, PartialEq, Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub holder_name: String,
    /// Two-digit month, e.g. `"07"`
    pub expiry_month: String,
    /// Two-digit year, e.g. `"27"`
    pub expiry_year: String,
    pub cvn: String,
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &mask_card_number(&self.number))
            .field("holder_name", &self.holder_name)
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("cvn", &"[REDACTED]")
            .finish()
    }
}

/// Person paying, sent as the `billing` object of a card payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

/// Caller input for a direct card payment.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPayment {
    pub card: CardDetails,
    /// Gateway order being paid; bound through the payment token, not sent in the body
    pub order_id: i64,
    pub payer: Payer,
}

/// `source` object of a card payment.
#[derive(Clone, PartialEq, Serialize)]
pub struct PaymentSource {
    pub identifier: String,
    pub sourceholder_name: String,
    pub subtype: &'static str,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvn: String,
}

impl std::fmt::Debug for PaymentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentSource")
            .field("identifier", &mask_card_number(&self.identifier))
            .field("sourceholder_name", &self.sourceholder_name)
            .field("subtype", &self.subtype)
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("cvn", &"[REDACTED]")
            .finish()
    }
}

/// Body of `POST /api/acceptance/payments/pay`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    pub source: PaymentSource,
    pub billing: Payer,
    pub payment_token: String,
}

impl PaymentRequest {
    pub fn new(payment_token: impl Into<String>, payment: &CardPayment) -> Self {
        let card = &payment.card;
        Self {
            source: PaymentSource {
                identifier: card.number.clone(),
                sourceholder_name: card.holder_name.clone(),
                subtype: CARD_SUBTYPE,
                expiry_month: card.expiry_month.clone(),
                expiry_year: card.expiry_year.clone(),
                cvn: card.cvn.clone(),
            },
            billing: payment.payer.clone(),
            payment_token: payment_token.into(),
        }
    }
}

/// Body of `POST /api/acceptance/capture`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptureRequest {
    pub transaction_id: i64,
    pub amount_cents: i64,
}

/// Keep only the last four digits of a card number.
fn mask_card_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| !c.is_whitespace()).collect();
    let visible = digits.len().min(4);
    let tail: String = digits[digits.len() - visible..].iter().collect();
    format!("****{tail}")
}
