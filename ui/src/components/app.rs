use dioxus::prelude::*;

use agrotech_common::service::RequestService;

use super::api_client::FetchClient;
use super::requests_page::RequestListView;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[redirect("/", || Route::MiddlemanRequests {})]
    #[route("/middleman/requests")]
    MiddlemanRequests {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| RequestService::new(FetchClient::from_env()));

    rsx! {
        document::Stylesheet { href: BOOTSTRAP_CSS }
        document::Stylesheet { href: BOOTSTRAP_ICONS }
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Route component: renders the purchase request list.
#[component]
fn MiddlemanRequests() -> Element {
    rsx! { RequestListView {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{path}");

    rsx! {
        div { class: "container py-5 text-center",
            h2 { "Page not found" }
            p { class: "text-muted", "Nothing lives at /{path}" }
            Link { to: Route::MiddlemanRequests {}, class: "btn btn-success", "View purchase requests" }
        }
    }
}
