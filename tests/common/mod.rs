#![allow(dead_code)]

use axum::{Router, routing::get};
use deeplink_converter::api::handlers::health_handler;
use deeplink_converter::api::routes::converter_routes;
use deeplink_converter::infrastructure::audit::TracingAuditLog;
use deeplink_converter::infrastructure::persistence::InMemoryLinkRepository;
use deeplink_converter::state::AppState;
use std::sync::Arc;

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repo.clone(), Arc::new(TracingAuditLog::new()));
    (state, repo)
}

pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .merge(converter_routes())
        .route("/health", get(health_handler))
        .with_state(state)
}
