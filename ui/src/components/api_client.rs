//! Browser HTTP client for the marketplace backend.
//!
//! Base URL comes from `AGROTECH_API_URL` at compile time. When it is unset
//! or empty, paths are requested relative to the page origin.

use agrotech_common::api::{ApiResponse, HttpClient};
use agrotech_common::error::ApiError;

/// Get the backend base URL from compile-time env vars.
fn api_base_url() -> String {
    option_env!("AGROTECH_API_URL")
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// `fetch`-backed client. Only functional in WASM builds.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchClient {
    base_url: String,
}

impl FetchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(api_base_url())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl HttpClient for FetchClient {
    async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        fetch(&self.url(path), "GET").await
    }

    async fn put(&self, path: &str) -> Result<ApiResponse, ApiError> {
        fetch(&self.url(path), "PUT").await
    }
}

// ─── HTTP helpers (WASM) ─────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
async fn fetch(url: &str, method: &str) -> Result<ApiResponse, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    opts.set_mode(web_sys::RequestMode::Cors);

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Transport(format!("Failed to create request: {:?}", e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Transport(format!("Failed to set header: {:?}", e)))?;

    let window = web_sys::window().ok_or(ApiError::Transport("No window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Transport(format!("Fetch failed: {:?}", e)))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("Response is not a Response object".to_string()))?;

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| ApiError::Transport(format!("Failed to get text: {:?}", e)))?,
    )
    .await
    .map_err(|e| ApiError::Transport(format!("Failed to read body: {:?}", e)))?;

    let body = text.as_string().unwrap_or_default();

    let status = resp.status();
    if status >= 400 {
        return Err(ApiError::Status { code: status, body });
    }

    ApiResponse::from_body(status, &body)
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
async fn fetch(url: &str, method: &str) -> Result<ApiResponse, ApiError> {
    Err(ApiError::Transport(format!(
        "{method} {url}: HTTP client only available in WASM"
    )))
}
