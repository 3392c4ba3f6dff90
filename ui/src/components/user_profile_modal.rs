use dioxus::prelude::*;

use agrotech_common::profile::UserProfile;

/// Overlay showing a user's profile as served by the backend.
///
/// Clicking the backdrop or the close button calls `on_close`.
#[component]
pub fn UserProfileModal(profile: UserProfile, on_close: EventHandler<()>) -> Element {
    let title = profile.display_name().to_string();
    let fields = profile.fields();

    rsx! {
        div {
            class: "profile-modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "profile-modal card shadow",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "card-header d-flex justify-content-between align-items-center",
                    h5 { class: "mb-0",
                        i { class: "bi bi-person-vcard me-2" }
                        "{title}"
                    }
                    button {
                        r#type: "button",
                        class: "btn-close",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                    }
                }
                div { class: "card-body",
                    if fields.is_empty() {
                        p { class: "text-muted", "No profile details available" }
                    } else {
                        dl { class: "row mb-0",
                            for (name, value) in fields {
                                dt { class: "col-sm-4 text-muted", "{name}" }
                                dd { class: "col-sm-8", "{value}" }
                            }
                        }
                    }
                }
                div { class: "card-footer bg-white border-0 text-end",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
