//! Shared plumbing for the restaurant API.
//!
//! Every per-entity client goes through the helpers here: one place builds
//! URLs, attaches the bearer credential, classifies failures and normalizes
//! the two accepted list envelopes into a plain `Vec<T>`.

use contracts::session::Session;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure taxonomy surfaced to the screens. The screen boundary renders
/// each kind; only `Network` is worth suggesting a retry for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response from server: {0}")]
    Protocol(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Domain(String),
}

impl ApiError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Log the failure at the screen boundary and hand back the message
    /// shown to the user.
    pub fn surface(&self, context: &str) -> String {
        let message = self.to_string();
        log::error!("{context}: {message}");
        message
    }
}

/// Base URL of the restaurant API, derived from the current window
/// location. Empty outside a browser (native test builds).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "https:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:7048/api", protocol, hostname)
}

fn url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// The API returns collections either as a bare JSON array or as an object
/// wrapping the array under `$values` (reference-preserving serializer).
/// Anything else is a protocol error. Neither shape leaks past this module.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Wrapped {
        #[serde(rename = "$values")]
        values: Vec<T>,
    },
    Bare(Vec<T>),
}

pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    let envelope: ListEnvelope<T> = serde_json::from_str(body).map_err(|e| {
        ApiError::Protocol(format!("expected an array or a $values wrapper: {e}"))
    })?;
    Ok(match envelope {
        ListEnvelope::Wrapped { values } => values,
        ListEnvelope::Bare(values) => values,
    })
}

fn with_bearer(builder: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
    match session {
        Some(s) => builder.header("Authorization", &format!("Bearer {}", s.token)),
        None => builder,
    }
}

/// Reads the body and maps a non-2xx response to `Domain`, surfacing the
/// server's message verbatim when it sent one.
async fn read_ok(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !ok {
        return Err(ApiError::Domain(if body.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        }));
    }
    Ok(body)
}

async fn send(builder: RequestBuilder) -> Result<String, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_ok(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<String, ApiError> {
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Protocol(format!("failed to serialize request: {e}")))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_ok(response).await
}

/// GET a collection.
pub async fn get_list<T: DeserializeOwned>(
    path: &str,
    session: Option<&Session>,
) -> Result<Vec<T>, ApiError> {
    let body = send(with_bearer(Request::get(&url(path)), session)).await?;
    decode_list(&body)
}

/// POST with an empty body, expecting a collection back. Several list
/// endpoints of this API are POSTs.
pub async fn post_list<T: DeserializeOwned>(
    path: &str,
    session: Option<&Session>,
) -> Result<Vec<T>, ApiError> {
    let body = send(with_bearer(Request::post(&url(path)), session)).await?;
    decode_list(&body)
}

/// POST a JSON payload. The response body is discarded: every successful
/// mutation is followed by a wholesale refetch, so nothing is patched from
/// the mutation response.
pub async fn post_json<B: Serialize>(
    path: &str,
    payload: &B,
    session: Option<&Session>,
) -> Result<(), ApiError> {
    send_json(with_bearer(Request::post(&url(path)), session), payload).await?;
    Ok(())
}

/// POST with an empty body (query-string-only mutations).
pub async fn post_empty(path: &str, session: Option<&Session>) -> Result<(), ApiError> {
    send(with_bearer(Request::post(&url(path)), session)).await?;
    Ok(())
}

/// PUT a JSON payload.
pub async fn put_json<B: Serialize>(
    path: &str,
    payload: &B,
    session: Option<&Session>,
) -> Result<(), ApiError> {
    send_json(with_bearer(Request::put(&url(path)), session), payload).await?;
    Ok(())
}

/// PUT with an empty body (query-string-only mutations).
pub async fn put_empty(path: &str, session: Option<&Session>) -> Result<(), ApiError> {
    send(with_bearer(Request::put(&url(path)), session)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: i64,
    }

    #[test]
    fn decodes_bare_array() {
        let rows: Vec<Row> = decode_list(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn decodes_values_wrapper() {
        let body = r#"{"$id":"1","$values":[{"id":3}]}"#;
        let rows: Vec<Row> = decode_list(body).unwrap();
        assert_eq!(rows, vec![Row { id: 3 }]);
    }

    #[test]
    fn empty_collections_in_both_shapes() {
        let bare: Vec<Row> = decode_list("[]").unwrap();
        assert!(bare.is_empty());
        let wrapped: Vec<Row> = decode_list(r#"{"$values":[]}"#).unwrap();
        assert!(wrapped.is_empty());
    }

    #[test]
    fn any_other_shape_is_a_protocol_error() {
        let scalar = decode_list::<Row>("42").unwrap_err();
        assert!(matches!(scalar, ApiError::Protocol(_)));
        let object = decode_list::<Row>(r#"{"items":[{"id":1}]}"#).unwrap_err();
        assert!(matches!(object, ApiError::Protocol(_)));
        let garbage = decode_list::<Row>("not json").unwrap_err();
        assert!(matches!(garbage, ApiError::Protocol(_)));
    }

    #[test]
    fn surfaced_message_matches_the_display_form() {
        let err = ApiError::Domain("phone not found".into());
        assert_eq!(err.surface("failed to create bill"), err.to_string());
        let net = ApiError::Network("timeout".into());
        assert_eq!(net.surface("failed to fetch bookings"), "Network error: timeout");
    }

    #[test]
    fn only_network_errors_suggest_retry() {
        assert!(ApiError::Network("timeout".into()).is_retryable());
        assert!(!ApiError::Domain("phone not found".into()).is_retryable());
        assert!(!ApiError::Validation("name required".into()).is_retryable());
    }
}
