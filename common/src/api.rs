//! Backend REST contract consumed by the request list view.
//!
//! The paths here are owned by the backend service; this crate only builds
//! them. Transport lives behind [`HttpClient`] so the browser `fetch`
//! implementation and in-memory test clients are interchangeable.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Endpoint paths, relative to the API base URL.
pub mod paths {
    use crate::purchase_request::{PurchaseRequestId, RequestStatus};

    pub const ALL_PENDING: &str = "/api/purchase-requests/all-pending";

    pub fn update_status(id: &PurchaseRequestId, status: RequestStatus) -> String {
        format!(
            "/api/purchase-requests/{}/status?status={}",
            id,
            status.as_query()
        )
    }

    pub fn user_profile(username: &str) -> String {
        format!("/api/user/{username}")
    }
}

/// A successful response: HTTP status plus decoded JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Value,
}

impl ApiResponse {
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    /// Build a response from a raw body. An empty body becomes `null`.
    pub fn from_body(status: u16, body: &str) -> Result<Self, ApiError> {
        let data = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(body)?
        };
        Ok(Self { status, data })
    }

    /// Decode the payload into a typed value.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(self.data).map_err(ApiError::from)
    }
}

/// Abstraction over the HTTP transport.
///
/// Implementations resolve `path` against their own base URL and return
/// `Err` for transport failures and for error statuses.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn get(&self, path: &str) -> Result<ApiResponse, ApiError>;

    async fn put(&self, path: &str) -> Result<ApiResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::purchase_request::{PurchaseRequestId, RequestStatus};

    #[test]
    fn status_update_path() {
        let id = PurchaseRequestId("17".into());
        assert_eq!(
            paths::update_status(&id, RequestStatus::Fulfilled),
            "/api/purchase-requests/17/status?status=fulfilled"
        );
        assert_eq!(
            paths::update_status(&id, RequestStatus::Pending),
            "/api/purchase-requests/17/status?status=pending"
        );
    }

    #[test]
    fn profile_path() {
        assert_eq!(paths::user_profile("meera"), "/api/user/meera");
    }

    #[test]
    fn empty_body_is_null() {
        let resp = ApiResponse::from_body(200, "  ").unwrap();
        assert_eq!(resp.data, Value::Null);
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = ApiResponse::from_body(200, "{not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn typed_decode() {
        let resp = ApiResponse::from_body(200, "[1,2,3]").unwrap();
        let v: Vec<u8> = resp.json().unwrap();
        assert_eq!(v, vec![1, 2, 3]);
    }
}
