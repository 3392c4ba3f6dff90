//! State behind the middleman's purchase request page.
//!
//! The state is a plain value so it can live in a UI signal. Each backend
//! operation is a synchronous `begin_*`/`retry` step, one awaited
//! [`RequestService`](crate::service::RequestService) call, and a
//! synchronous `finish_*` step, so no borrow is held across an await.

use crate::error::RequestsError;
use crate::filter::StatusFilter;
use crate::profile::UserProfile;
use crate::purchase_request::PurchaseRequest;
use crate::service::ToggleOutcome;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadPhase {
    Loading,
    /// The list fetch failed; holds the operator-facing message.
    Failed(String),
    Ready,
}

/// What the page should render right now.
#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Failed(&'a str),
    /// Nothing passes the filter; holds the empty-state message.
    Empty(String),
    Requests(Vec<&'a PurchaseRequest>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RequestListState {
    pub phase: LoadPhase,
    /// Last successfully fetched list, in server order.
    pub requests: Vec<PurchaseRequest>,
    pub filter: StatusFilter,
    /// Transient message from a failed toggle or profile fetch.
    pub action_error: Option<String>,
    /// Profile shown in the overlay, if open.
    pub viewing_profile: Option<UserProfile>,
}

impl Default for RequestListState {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestListState {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
            requests: Vec::new(),
            filter: StatusFilter::All,
            action_error: None,
            viewing_profile: None,
        }
    }

    // ── Synchronous transitions ──

    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Replace the list on success; keep the previous list on failure.
    pub fn finish_load(&mut self, result: Result<Vec<PurchaseRequest>, RequestsError>) {
        match result {
            Ok(list) => {
                self.requests = list;
                self.phase = LoadPhase::Ready;
            }
            Err(e) => self.phase = LoadPhase::Failed(e.to_string()),
        }
    }

    /// Leave the failed phase and start another fetch.
    pub fn retry(&mut self) {
        self.begin_load();
    }

    /// Apply a toggle: a failed update becomes the per-action message and
    /// keeps the current list; a successful one takes the reloaded list.
    pub fn finish_toggle(&mut self, outcome: ToggleOutcome) {
        match outcome {
            ToggleOutcome::Reloaded { list, .. } => self.finish_load(list),
            ToggleOutcome::UpdateFailed(e) => self.fail_action(&e),
        }
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Clear any per-action message before a toggle or profile fetch.
    pub fn begin_action(&mut self) {
        self.action_error = None;
    }

    pub fn fail_action(&mut self, err: &RequestsError) {
        self.action_error = Some(err.to_string());
    }

    pub fn dismiss_error(&mut self) {
        self.action_error = None;
    }

    pub fn finish_profile(&mut self, result: Result<UserProfile, RequestsError>) {
        match result {
            Ok(profile) => self.viewing_profile = Some(profile),
            Err(e) => self.fail_action(&e),
        }
    }

    pub fn close_profile(&mut self) {
        self.viewing_profile = None;
    }

    // ── Derived views ──

    /// Requests passing the current filter, in server order.
    pub fn filtered(&self) -> Vec<&PurchaseRequest> {
        self.filter.apply(&self.requests)
    }

    pub fn view(&self) -> ListView<'_> {
        match &self.phase {
            LoadPhase::Loading => ListView::Loading,
            LoadPhase::Failed(msg) => ListView::Failed(msg),
            LoadPhase::Ready => {
                let visible = self.filtered();
                if visible.is_empty() {
                    ListView::Empty(self.filter.empty_message())
                } else {
                    ListView::Requests(visible)
                }
            }
        }
    }
}
