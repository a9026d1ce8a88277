use crate::error::{AppError, AppResult};
use crate::models::{ShortenRequest, ShortenResponse, UrlMapping};
use crate::services::short_code::ShortCodeService;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Json};
use std::sync::Arc;

use super::helpers::request_base_url;
use super::AppState;

static HOMEPAGE: &str = include_str!("../../templates/index.html");

/// Serve the static landing page
pub async fn homepage() -> Html<&'static str> {
    Html(HOMEPAGE)
}

/// Shorten a URL
pub async fn shorten_url(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> AppResult<impl IntoResponse> {
    // Any non-empty string is accepted and stored verbatim; only presence
    // is validated
    if payload.url.is_empty() {
        return Err(AppError::Validation("URL is required".to_string()));
    }

    let mapping = create_mapping(&state, &payload.url).await?;

    let base_url = request_base_url(&headers).unwrap_or_else(|| state.base_url.clone());
    let short_url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        mapping.short_code
    );

    tracing::info!("Shortened URL to code {}", mapping.short_code);

    Ok(Json(ShortenResponse {
        short_url,
        code: mapping.short_code,
    }))
}

/// Generate a code and insert the mapping, retrying on insert conflicts.
///
/// The generator's existence check is not atomic with the insert, so a
/// concurrent request can win the race for the same candidate. The UNIQUE
/// constraint surfaces that as `ShortCodeExists`, and we regenerate rather
/// than fail the request.
async fn create_mapping(state: &Arc<AppState>, long_url: &str) -> AppResult<UrlMapping> {
    for _ in 0..state.short_code_max_attempts {
        let code = ShortCodeService::generate(
            state.short_code_length,
            state.short_code_max_attempts,
            &state.repository,
        )
        .await?;

        match state.repository.insert_mapping(&code, long_url).await {
            Ok(mapping) => return Ok(mapping),
            Err(AppError::ShortCodeExists(_)) => continue,
            Err(e) => return Err(e),
        }
    }

    Err(AppError::ShortCodeGenerationFailed)
}

/// Redirect a short code to its long URL
pub async fn redirect_to_url(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mapping = state
        .repository
        .get_by_short_code(&code)
        .await?
        .ok_or(AppError::UrlNotFound(code))?;

    // 302 Found, built by hand: axum's Redirect helpers emit 303/307/308
    let location = HeaderValue::from_str(&mapping.long_url)
        .map_err(|_| AppError::Internal("Stored URL is not a valid header value".to_string()))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
