/// Primary Accept API host.
pub const ACCEPT_BASE_URL: &str = "https://accept.paymob.com";

/// Legacy host still serving payments, capture and the query endpoints.
pub const SOLUTIONS_BASE_URL: &str = "https://accept.paymobsolutions.com";

/// Host serving the hosted unified checkout page.
pub const CHECKOUT_BASE_URL: &str = "https://accept.paymob.com";

/// Currency sent with orders and payment keys.
pub const CURRENCY_EGP: &str = "EGP";

/// Placeholder for billing fields the gateway requires but the caller did not supply.
pub const NOT_AVAILABLE: &str = "NA";

/// Shipping method sent with every payment key.
pub const SHIPPING_METHOD: &str = "PKG";

/// Payment source subtype for card payments.
pub const CARD_SUBTYPE: &str = "CARD";

/// Lifetime of an issued payment key, in seconds.
pub const PAYMENT_KEY_EXPIRATION_SECS: u64 = 36_000;

/// First page of the paginated query endpoints.
pub const DEFAULT_PAGE: u32 = 1;

pub(crate) const AUTH_TOKENS_PATH: &str = "/api/auth/tokens";
pub(crate) const INTENTION_PATH: &str = "/v1/intention/";
pub(crate) const TRANSACTION_INQUIRY_PATH: &str = "/api/ecommerce/orders/transaction_inquiry";
pub(crate) const ORDERS_PATH: &str = "/api/ecommerce/orders";
pub(crate) const PAYMENT_KEYS_PATH: &str = "/api/acceptance/payment_keys";
pub(crate) const PAY_PATH: &str = "/api/acceptance/payments/pay";
pub(crate) const CAPTURE_PATH: &str = "/api/acceptance/capture";
pub(crate) const TRANSACTIONS_PATH: &str = "/api/acceptance/transactions";
pub(crate) const UNIFIED_CHECKOUT_PATH: &str = "/unifiedcheckout/";
