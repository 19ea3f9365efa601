//! Async client for the Paymob Accept payment gateway.
//!
//! Every [`PaymobClient`] method builds one JSON request, sends it, and
//! returns the gateway's decoded JSON response untouched. Transport and
//! decoding failures come back as distinct [`PaymobError`] variants.
//!
//! # Quick example
//!
//! ```no_run
//! use paymob::{PaymentKeyParams, PaymobClient, PaymobConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> paymob::Result<()> {
//! let client = PaymobClient::new(PaymobConfig::new("YOUR_API_KEY"))?;
//!
//! let token = client.auth_token().await?;
//! let order = client.create_order(&token, 1234, 10_000, "inv-001").await?;
//! let order_id = order["id"].as_i64().unwrap_or_default();
//!
//! let key = client
//!     .create_payment_key(&token, &PaymentKeyParams::new(56789, 10_000, order_id))
//!     .await?;
//! println!("payment key: {}", key["token"]);
//! # Ok(())
//! # }
//! ```

pub mod checkout;
pub mod config;
pub mod constants;
pub mod error;
pub mod request;

mod client;
mod transport;

pub use checkout::unified_checkout_url;
pub use client::PaymobClient;
pub use config::{ConfigError, PaymobConfig};
pub use error::{PaymobError, Result};
pub use request::{
    BillingContact, CardDetails, CardPayment, IntentionData, Payer, PaymentKeyParams,
};
