use crate::db::Repository;
use crate::error::{AppError, AppResult};

/// Character set for generating short codes.
pub(crate) const ALPHABET_CHARS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Service for generating unique short codes.
pub struct ShortCodeService;

impl ShortCodeService {
    /// Generate a short code not currently present in the store.
    ///
    /// Each candidate is drawn uniformly from the 62-symbol alphanumeric
    /// alphabet and checked against the repository. The existence check is
    /// advisory only; the storage UNIQUE constraint remains the final
    /// arbiter under concurrent inserts.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ShortCodeGenerationFailed` if no unused code is
    /// found within `max_attempts` draws.
    pub async fn generate(
        length: usize,
        max_attempts: u32,
        repository: &Repository,
    ) -> AppResult<String> {
        for _ in 0..max_attempts {
            let code = nanoid::nanoid!(length, ALPHABET_CHARS);

            if !repository.short_code_exists(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::ShortCodeGenerationFailed)
    }
}
