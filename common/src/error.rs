use crate::purchase_request::PurchaseRequestId;

/// Errors from the HTTP client.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, no window).
    Transport(String),
    /// The backend answered with a status of 400 or above.
    Status { code: u16, body: String },
    /// The payload did not have the expected shape.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Status { code, body } if body.is_empty() => write!(f, "HTTP {code}"),
            Self::Status { code, body } => write!(f, "HTTP {code}: {body}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Failures of the request list view's operations.
///
/// `Display` is the message shown to the operator; `detail()` carries the
/// underlying client error for logs.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestsError {
    FetchList(ApiError),
    StatusUpdate {
        id: PurchaseRequestId,
        source: ApiError,
    },
    ProfileFetch {
        username: String,
        source: ApiError,
    },
}

impl RequestsError {
    pub fn detail(&self) -> &ApiError {
        match self {
            Self::FetchList(source)
            | Self::StatusUpdate { source, .. }
            | Self::ProfileFetch { source, .. } => source,
        }
    }
}

impl std::fmt::Display for RequestsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FetchList(_) => write!(f, "Failed to fetch requests. Please try again."),
            Self::StatusUpdate { id, .. } => {
                write!(f, "Failed to update status for request {id}.")
            }
            Self::ProfileFetch { username, .. } => {
                write!(f, "Failed to fetch profile for {username}.")
            }
        }
    }
}

impl std::error::Error for RequestsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.detail())
    }
}
