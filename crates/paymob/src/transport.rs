//! JSON-over-HTTP primitives every client operation goes through.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{PaymobError, Result};

const APPLICATION_JSON: &str = "application/json";

/// Thin wrapper over `reqwest::Client` that speaks JSON both ways.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
}

impl Transport {
    pub(crate) fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }

    pub(crate) fn with_http_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// POST `body` as JSON, with an optional `Authorization` header value.
    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
        authorization: Option<String>,
    ) -> Result<Value> {
        let body_bytes = serde_json::to_vec(body).map_err(PaymobError::Encode)?;

        tracing::debug!(method = "POST", path = url.path(), "sending gateway request");

        let mut request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, APPLICATION_JSON);
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }

        let resp = request.body(body_bytes).send().await?;
        decode(resp).await
    }

    /// GET `url`; tokens travel in the query string, never in headers.
    pub(crate) async fn get_json(&self, url: Url) -> Result<Value> {
        tracing::debug!(method = "GET", path = url.path(), "sending gateway request");

        let resp = self
            .http
            .get(url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode(resp: reqwest::Response) -> Result<Value> {
    let status = resp.status();
    let path = resp.url().path().to_string();
    let bytes = resp.bytes().await?;

    if !status.is_success() {
        tracing::warn!(%status, %path, "gateway returned non-success status");
    }

    serde_json::from_slice(&bytes).map_err(|source| PaymobError::Decode { status, source })
}

/// Append an endpoint path to a base URL, keeping any path prefix on the base,
/// then append query pairs in order.
pub(crate) fn endpoint(base: &str, path: &str, query: &[(&str, &str)]) -> Result<Url> {
    let mut url = Url::parse(base)?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
    }
    let full_path = format!(
        "{}/{}",
        url.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&full_path);
    url.set_query(None);
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}
