//! HTTP request handlers for API endpoints.

pub mod convert;
pub mod health;

pub use convert::{deeplink_handler, web_url_handler};
pub use health::health_handler;
