use contracts::session::{Credentials, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api::{api_base, ApiError};

/// Login with gmail and password
pub async fn login(gmail: String, password: String) -> Result<LoginResponse, ApiError> {
    let credentials = Credentials { gmail, password };

    let response = Request::post(&format!("{}/Users/login", api_base()))
        .json(&credentials)
        .map_err(|e| ApiError::Protocol(format!("failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Domain(if body.trim().is_empty() {
            "Invalid email or password".to_string()
        } else {
            body
        }));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Protocol(format!("failed to parse login response: {e}")))
}
