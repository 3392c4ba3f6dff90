//! Middleman view of farmer purchase requests.
//!
//! Fetches the list on mount, filters it client-side, toggles a request's
//! status through the backend and opens the farmer's profile in an overlay.

use dioxus::prelude::*;

use agrotech_common::filter::StatusFilter;
use agrotech_common::purchase_request::{PurchaseRequestId, RequestStatus};
use agrotech_common::request_list::{ListView, RequestListState};
use agrotech_common::service::{RequestService, ToggleOutcome};

use super::api_client::FetchClient;
use super::request_card::RequestCard;
use super::user_profile_modal::UserProfileModal;

type Service = RequestService<FetchClient>;

pub fn use_request_service() -> Service {
    use_context::<Service>()
}

/// Fetch the list in the background and apply the result.
fn spawn_fetch(service: Service, mut state: Signal<RequestListState>) {
    spawn(async move {
        let result = service.fetch_requests().await;
        state.write().finish_load(result);
    });
}

fn load_requests(service: Service, mut state: Signal<RequestListState>) {
    state.write().begin_load();
    spawn_fetch(service, state);
}

fn retry_load(service: Service, mut state: Signal<RequestListState>) {
    state.write().retry();
    spawn_fetch(service, state);
}

/// Update the status, then apply the list reloaded after the update.
fn toggle_status(
    service: Service,
    mut state: Signal<RequestListState>,
    id: PurchaseRequestId,
    current: RequestStatus,
) {
    state.write().begin_action();
    spawn(async move {
        let outcome = service.toggle_and_reload(&id, current).await;
        if let ToggleOutcome::Reloaded { status, .. } = &outcome {
            tracing::info!("Request {id} marked {status}");
        }
        state.write().finish_toggle(outcome);
    });
}

fn view_profile(service: Service, mut state: Signal<RequestListState>, username: String) {
    state.write().begin_action();
    spawn(async move {
        let result = service.fetch_profile(&username).await;
        state.write().finish_profile(result);
    });
}

fn filter_button_class(filter: StatusFilter, active: bool) -> String {
    let tone = match filter {
        StatusFilter::All => "success",
        StatusFilter::Pending => "warning",
        StatusFilter::Fulfilled => "primary",
    };
    if active {
        format!("btn btn-{tone}")
    } else {
        format!("btn btn-outline-{tone}")
    }
}

#[component]
pub fn RequestListView() -> Element {
    let service = use_request_service();
    let mut state = use_signal(RequestListState::new);

    // Initial data fetch
    {
        let service = service.clone();
        use_effect(move || {
            tracing::debug!("Request list mounted");
            load_requests(service.clone(), state);
        });
    }

    let current = state.read();

    let body = match current.view() {
        ListView::Loading => {
            return rsx! {
                div { class: "middleman-requests-container d-flex justify-content-center align-items-center",
                    div { class: "spinner-border text-primary", role: "status",
                        span { class: "visually-hidden", "Loading..." }
                    }
                }
            };
        }
        ListView::Failed(message) => {
            let service = service.clone();
            return rsx! {
                div { class: "middleman-requests-container",
                    div { class: "alert alert-danger text-center",
                        "{message}"
                        button {
                            class: "btn btn-primary ms-3",
                            onclick: move |_| retry_load(service.clone(), state),
                            "Retry"
                        }
                    }
                }
            };
        }
        ListView::Empty(message) => rsx! {
            div { class: "empty-state text-center py-5",
                i { class: "bi bi-inbox text-muted empty-icon" }
                h4 { class: "mt-3", "No requests found" }
                p { class: "text-muted", "{message}" }
            }
        },
        ListView::Requests(list) => rsx! {
            div { class: "requests-list",
                for request in list {
                    {
                        let id = request.id.clone();
                        let status = request.status;
                        let farmer = request.farmer_username.clone();
                        let toggle_service = service.clone();
                        let profile_service = service.clone();
                        rsx! {
                            RequestCard {
                                key: "{request.id}",
                                request: request.clone(),
                                on_toggle: move |_| {
                                    toggle_status(toggle_service.clone(), state, id.clone(), status)
                                },
                                on_view_profile: move |_| {
                                    view_profile(profile_service.clone(), state, farmer.clone())
                                },
                            }
                        }
                    }
                }
            }
        },
    };

    let active_filter = current.filter;
    let action_error = current.action_error.clone();
    let viewing_profile = current.viewing_profile.clone();
    drop(current);

    rsx! {
        div { class: "middleman-requests-container",
            div { class: "container py-5",
                div { class: "row justify-content-center",
                    div { class: "col-lg-10",
                        div { class: "section-header text-center mb-5",
                            h1 { class: "display-5 fw-bold text-success",
                                i { class: "bi bi-people-fill me-2" }
                                "Farmer Purchase Requests"
                            }
                            p { class: "lead text-muted", "Manage and fulfill farmer crop purchase requests" }
                        }

                        div { class: "filter-controls mb-4",
                            div { class: "btn-group", role: "group",
                                for filter in StatusFilter::ALL {
                                    button {
                                        r#type: "button",
                                        class: filter_button_class(filter, filter == active_filter),
                                        onclick: move |_| state.write().set_filter(filter),
                                        {filter.label()}
                                    }
                                }
                            }
                        }

                        if let Some(err) = action_error {
                            div { class: "alert alert-danger alert-dismissible", role: "alert",
                                "{err}"
                                button {
                                    r#type: "button",
                                    class: "btn-close",
                                    "aria-label": "Dismiss",
                                    onclick: move |_| state.write().dismiss_error(),
                                }
                            }
                        }

                        {body}
                    }
                }
            }

            if let Some(profile) = viewing_profile {
                UserProfileModal {
                    profile,
                    on_close: move |_| state.write().close_profile(),
                }
            }
        }
    }
}
