use crate::api::{paths, HttpClient};
use crate::error::RequestsError;
use crate::profile::UserProfile;
use crate::purchase_request::{PurchaseRequest, PurchaseRequestId, RequestStatus};

/// Result of [`RequestService::toggle_and_reload`].
#[derive(Debug, PartialEq)]
pub enum ToggleOutcome {
    /// The update succeeded and the list was fetched again.
    Reloaded {
        status: RequestStatus,
        list: Result<Vec<PurchaseRequest>, RequestsError>,
    },
    /// The update failed; no reload was attempted.
    UpdateFailed(RequestsError),
}

/// Typed calls against the purchase request backend.
#[derive(Clone, Debug)]
pub struct RequestService<C> {
    client: C,
}

impl<C: HttpClient> RequestService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch every pending and fulfilled request, in server order.
    pub async fn fetch_requests(&self) -> Result<Vec<PurchaseRequest>, RequestsError> {
        tracing::debug!("Fetching purchase requests");
        self.client
            .get(paths::ALL_PENDING)
            .await
            .and_then(|resp| resp.json::<Vec<PurchaseRequest>>())
            .inspect(|list| tracing::debug!("Fetched {} purchase requests", list.len()))
            .map_err(|e| {
                tracing::warn!("Fetch error: {e}");
                RequestsError::FetchList(e)
            })
    }

    /// Ask the backend to move a request to the opposite of `current`.
    /// Returns the status that was requested.
    pub async fn update_status(
        &self,
        id: &PurchaseRequestId,
        current: RequestStatus,
    ) -> Result<RequestStatus, RequestsError> {
        let next = current.toggled();
        tracing::debug!("Updating request {id}: {current} -> {next}");
        match self.client.put(&paths::update_status(id, next)).await {
            Ok(_) => Ok(next),
            Err(e) => {
                tracing::warn!("Status update error for request {id}: {e}");
                Err(RequestsError::StatusUpdate {
                    id: id.clone(),
                    source: e,
                })
            }
        }
    }

    /// Update the status, then fetch the whole list once the update has
    /// resolved. The caller never patches its list locally.
    pub async fn toggle_and_reload(
        &self,
        id: &PurchaseRequestId,
        current: RequestStatus,
    ) -> ToggleOutcome {
        match self.update_status(id, current).await {
            Ok(status) => ToggleOutcome::Reloaded {
                status,
                list: self.fetch_requests().await,
            },
            Err(e) => ToggleOutcome::UpdateFailed(e),
        }
    }

    pub async fn fetch_profile(&self, username: &str) -> Result<UserProfile, RequestsError> {
        tracing::debug!("Fetching profile for {username}");
        self.client
            .get(&paths::user_profile(username))
            .await
            .and_then(|resp| resp.json::<UserProfile>())
            .map_err(|e| {
                tracing::warn!("Profile fetch error for {username}: {e}");
                RequestsError::ProfileFetch {
                    username: username.to_string(),
                    source: e,
                }
            })
    }
}
