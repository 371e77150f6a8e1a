//! Handlers for the conversion endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use tracing::debug;
use validator::Validate;

use crate::api::dto::convert::{DeepLinkRequest, DeepLinkResponse, WebUrlRequest, WebUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the deeplink for a web URL.
///
/// # Endpoint
///
/// `POST /getDeepLink`
///
/// # Request Flow
///
/// 1. Check the mapping store for the URL
/// 2. On a miss, translate and store the new pair
/// 3. Return the deeplink
///
/// # Request Body
///
/// ```json
/// { "weburl": "https://www.trendyol.com/casio/saat-p-1925865?boutiqueId=439892" }
/// ```
///
/// # Response
///
/// ```json
/// { "deeplink": "ty://?Page=Product&ContentId=1925865&CampaignId=439892" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or the URL is malformed.
pub async fn deeplink_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeepLinkRequest>, JsonRejection>,
) -> Result<Json<DeepLinkResponse>, AppError> {
    let Json(payload) = payload.map_err(malformed_body)?;
    payload.validate()?;

    let conversion = state.converter_service.to_deeplink(&payload.web_url).await?;

    Ok(Json(DeepLinkResponse {
        deeplink: conversion.link.deeplink,
    }))
}

/// Returns the web URL for a deeplink.
///
/// # Endpoint
///
/// `POST /getWebURL`
///
/// # Request Body
///
/// ```json
/// { "deeplink": "ty://?Page=Search&Query=elbise" }
/// ```
///
/// # Response
///
/// ```json
/// { "weburl": "https://www.trendyol.com/sr?q=elbise" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or the deeplink is empty
/// or contains whitespace.
pub async fn web_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<WebUrlRequest>, JsonRejection>,
) -> Result<Json<WebUrlResponse>, AppError> {
    let Json(payload) = payload.map_err(malformed_body)?;
    payload.validate()?;

    let conversion = state.converter_service.to_web_url(&payload.deeplink).await?;

    Ok(Json(WebUrlResponse {
        web_url: conversion.link.web_url,
    }))
}

fn malformed_body(rejection: JsonRejection) -> AppError {
    debug!("Rejected request body: {}", rejection.body_text());
    AppError::bad_request(
        "There is an error in the requested data. Check the data. Data should be JSON.",
        json!({ "reason": rejection.body_text() }),
    )
}
