use contracts::system::auth::{ApiMessage, LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Exchange phone/PIN credentials for a bearer token.
pub async fn login(phone: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { phone, password };

    let response = Request::post(&format!("{}/api/auth/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error. Please try again. ({e})"))?;

    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ApiMessage>().await {
            Ok(envelope) if !envelope.message.is_empty() => envelope.message,
            _ => format!("Login failed: {status}"),
        });
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}
