//! Feature extraction handlers for `/` and `/json`.

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{AppState, FeaturesTemplate};
use crate::models::UrlFeatures;

/// Picks the single `url` value out of a raw query string.
///
/// Repeated `url` keys are rejected rather than silently using the first.
pub(crate) fn requested_url(query: Option<&str>) -> Result<String, (StatusCode, String)> {
    let mut values = url::form_urlencoded::parse(query.unwrap_or("").as_bytes())
        .filter(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned());

    let Some(first) = values.next() else {
        return Err((StatusCode::BAD_REQUEST, "No url param".to_string()));
    };
    if values.next().is_some() {
        return Err((StatusCode::BAD_REQUEST, "too many urls".to_string()));
    }
    if first.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "No url to analyze".to_string()));
    }
    Ok(first)
}

async fn extract_requested(
    state: &AppState,
    query: Option<&str>,
) -> Result<UrlFeatures, (StatusCode, String)> {
    let url = requested_url(query)?;
    log::info!("Analyzing {url}");
    state.extractor.extract_str(&url).await.map_err(|e| {
        log::warn!("Rejected {url}: {e}");
        (StatusCode::BAD_REQUEST, e.to_string())
    })
}

/// HTML feature page for `?url=...`
pub async fn features_html_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    match extract_requested(&state, query.as_deref()).await {
        Ok(features) => FeaturesTemplate::from(&features).into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

/// JSON feature record for `?url=...`
pub async fn features_json_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    match extract_requested(&state, query.as_deref()).await {
        Ok(features) => Json(features).into_response(),
        Err(rejection) => rejection.into_response(),
    }
}
