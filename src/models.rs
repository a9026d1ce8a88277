use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// URL mapping row in the database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UrlMapping {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
}

/// Request to shorten a URL.
///
/// `url` defaults to an empty string so a missing field and an empty field
/// take the same validation path.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: String,
}

/// Response after shortening a URL
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub code: String,
}
