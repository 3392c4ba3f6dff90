pub mod api_client;
pub mod app;
pub mod request_card;
pub mod requests_page;
pub mod user_profile_modal;
