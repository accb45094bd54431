//! API URL helpers for frontend-backend communication.

/// Backend port. The dashboard itself is served statically; the API
/// lives on the same host under this port.
const BACKEND_PORT: u16 = 3000;

/// Base URL for API requests, derived from the current window location.
///
/// Returns e.g. "http://localhost:3000" or "https://example.com:3000",
/// or an empty string when no window is available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
