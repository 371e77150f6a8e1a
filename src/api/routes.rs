//! API route configuration.

use crate::api::handlers::{deeplink_handler, web_url_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Conversion routes.
///
/// # Endpoints
///
/// - `POST /getDeepLink` - Web URL to deeplink
/// - `POST /getWebURL`   - Deeplink to web URL
pub fn converter_routes() -> Router<AppState> {
    Router::new()
        .route("/getDeepLink", post(deeplink_handler))
        .route("/getWebURL", post(web_url_handler))
}
