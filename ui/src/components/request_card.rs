use dioxus::prelude::*;

use agrotech_common::purchase_request::{PurchaseRequest, RequestStatus};

#[component]
pub fn RequestCard(
    request: PurchaseRequest,
    on_toggle: EventHandler<()>,
    on_view_profile: EventHandler<()>,
) -> Element {
    let pending = request.status == RequestStatus::Pending;
    let status_badge = if pending { "badge bg-warning" } else { "badge bg-success" };
    let toggle_class = if pending {
        "btn btn-success btn-lg"
    } else {
        "btn btn-warning btn-lg"
    };
    let toggle_icon = if pending {
        "bi bi-check-circle me-2"
    } else {
        "bi bi-arrow-counterclockwise me-2"
    };
    let status_label = request.status.label();
    let action_label = request.status.action_label();
    let requested_on = request.display_date();

    rsx! {
        div { class: "request-card card mb-4 border-0 shadow-sm",
            div { class: "card-header bg-light d-flex justify-content-between align-items-center",
                div {
                    span { class: "badge bg-primary me-2",
                        i { class: "bi bi-tag-fill me-1" }
                        "{request.crop_type}"
                    }
                    span { class: "badge bg-secondary",
                        i { class: "bi bi-speedometer2 me-1" }
                        "{request.quantity} kg"
                    }
                }
                div {
                    span { class: "{status_badge}", "{status_label}" }
                }
            }
            div { class: "card-body",
                div { class: "row",
                    div { class: "col-md-6",
                        div { class: "d-flex align-items-center mb-3",
                            div { class: "user-avatar me-3",
                                i { class: "bi bi-person-circle text-primary" }
                            }
                            div {
                                h5 { class: "mb-0", "{request.farmer_username}" }
                                small { class: "text-muted", "Farmer" }
                            }
                        }
                        div { class: "mb-2",
                            i { class: "bi bi-calendar-check text-muted me-2" }
                            span { class: "text-muted", "Requested:" }
                            " {requested_on}"
                        }
                    }
                    div { class: "col-md-6",
                        div { class: "price-display mb-3",
                            div { class: "d-flex align-items-center",
                                div { class: "price-icon me-2",
                                    i { class: "bi bi-currency-rupee text-success" }
                                }
                                div {
                                    h4 { class: "mb-0", "₹{request.price}" }
                                    small { class: "text-muted", "per kg" }
                                }
                            }
                        }
                        if let Some(middleman) = request.middleman_username.as_ref() {
                            div { class: "mb-2",
                                i { class: "bi bi-person-check text-muted me-2" }
                                span { class: "text-muted", "Middleman:" }
                                " {middleman}"
                            }
                        }
                    }
                }
            }
            div { class: "card-footer bg-white border-0 d-flex justify-content-between",
                button {
                    class: "{toggle_class}",
                    onclick: move |_| on_toggle.call(()),
                    i { class: "{toggle_icon}" }
                    "{action_label}"
                }
                button {
                    class: "btn btn-outline-primary btn-lg",
                    onclick: move |_| on_view_profile.call(()),
                    i { class: "bi bi-person-lines-fill me-2" }
                    "View Profile"
                }
            }
        }
    }
}
