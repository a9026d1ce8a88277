use crate::db::Repository;

/// Application state shared across all HTTP handlers.
///
/// Wrapped in `Arc` and handed to every request handler through Axum's
/// State extraction. Handlers hold no state of their own; all reads and
/// inserts go through the repository.
#[derive(Clone)]
pub struct AppState {
    /// Database repository for URL mappings
    pub repository: Repository,

    /// Fallback base URL for constructing short URLs when the request
    /// carries no Host header
    pub base_url: String,

    /// Length of randomly generated short codes
    pub short_code_length: usize,

    /// Maximum attempts for code generation and insert-conflict retries
    pub short_code_max_attempts: u32,
}
