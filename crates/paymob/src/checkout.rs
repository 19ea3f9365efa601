use crate::constants::UNIFIED_CHECKOUT_PATH;

/// Build the hosted unified checkout link for an intention.
///
/// Both values are percent-encoded, so keys containing `&`, `=` or spaces
/// cannot break the query string. Plain alphanumeric keys appear verbatim.
pub fn unified_checkout_url(base_url: &str, public_key: &str, client_secret: &str) -> String {
    format!(
        "{}{}?publicKey={}&clientSecret={}",
        base_url.trim_end_matches('/'),
        UNIFIED_CHECKOUT_PATH,
        urlencoding::encode(public_key),
        urlencoding::encode(client_secret),
    )
}
