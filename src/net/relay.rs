//! Mail relay transport for the contact form.
//!
//! The relay is a third-party AJAX endpoint: one form-urlencoded POST per
//! submission with `Accept: application/json`. Any 2xx status counts as
//! delivered; anything else may carry a JSON body `{ "message": "..." }`.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests plug in their own [`MailRelay`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use serde::Deserialize;

use crate::state::contact::ContactMessage;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const FALLBACK_FAILURE_MESSAGE: &str = "Falha no envio";

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay unreachable: {0}")]
    Network(String),
    #[error("relay rejected submission ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Raw HTTP response from the relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

impl RelayResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP capability used by the submission pipeline. Enables mocking in tests.
///
/// Futures are `!Send`: the browser transport holds JS handles.
#[async_trait::async_trait(?Send)]
pub trait MailRelay {
    /// POST an already-encoded form body.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Network`] when no response was received.
    async fn post_form(&self, body: String) -> Result<RelayResponse, RelayError>;
}

/// Encode a message as `application/x-www-form-urlencoded`.
#[must_use]
pub fn encode_form(message: &ContactMessage) -> String {
    message
        .pairs()
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Map a relay response to delivered / rejected.
///
/// # Errors
///
/// Returns [`RelayError::Rejected`] for non-2xx statuses, carrying the body's
/// `message` when it parses, or [`FALLBACK_FAILURE_MESSAGE`] otherwise.
pub fn interpret(response: &RelayResponse) -> Result<(), RelayError> {
    if response.is_success() {
        return Ok(());
    }
    let body: RelayErrorBody = serde_json::from_str(&response.body).unwrap_or_default();
    let message = body
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_owned());
    Err(RelayError::Rejected { status: response.status, message })
}

/// Send one message through `relay`.
///
/// # Errors
///
/// Propagates transport failures and non-2xx rejections.
pub async fn deliver<R: MailRelay + ?Sized>(relay: &R, message: &ContactMessage) -> Result<(), RelayError> {
    let response = relay.post_form(encode_form(message)).await?;
    interpret(&response)
}

/// Browser relay client backed by `fetch`.
#[derive(Clone, Debug)]
pub struct HttpRelay {
    endpoint: String,
}

impl HttpRelay {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl MailRelay for HttpRelay {
    async fn post_form(&self, body: String) -> Result<RelayResponse, RelayError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header("Accept", "application/json")
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(body)
                .map_err(|e| RelayError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| RelayError::Network(e.to_string()))?;
            let status = resp.status();
            // An unreadable body only matters for error detail.
            let body = resp.text().await.unwrap_or_default();
            Ok(RelayResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            Err(RelayError::Network("not available outside the browser".to_owned()))
        }
    }
}
