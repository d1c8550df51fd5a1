mod client;
mod user_api;

pub use client::{ApiClient, ApiError, response_body, verify_status_code};
pub use user_api::UserApi;
