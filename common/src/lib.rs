pub mod api;
pub mod error;
pub mod filter;
pub mod profile;
pub mod purchase_request;
pub mod request_list;
pub mod service;
