// src/constants.rs
//
// Application-wide constants: cache keys, defaults and the placeholder credentials.

/// Cache key for the last successfully fetched note list.
pub const NOTES_KEY: &str = "notes";

/// Cache key for the unsaved title/content draft.
pub const DRAFT_KEY: &str = "draft";

/// Cache key for the session gate flag.
pub const SESSION_KEY: &str = "sessionAuthenticated";

/// Maximum note content length in characters; longer input is truncated, not rejected.
///
/// Used in: `application/note_repository.rs`, `infrastructure/config.rs`
pub const DEFAULT_CONTENT_LIMIT: usize = 300;

/// Backend used when neither config nor environment name one.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Environment variable overriding the configured backend URL.
pub const API_URL_ENV: &str = "NOTES_API_URL";

/// Transport timeout in seconds for a single HTTP exchange.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application directory name under the platform config/data dirs.
pub const APP_DIR_NAME: &str = "notesync";

/// Placeholder login pair checked by the session gate.
///
/// These are fixed, public values. They gate nothing of value and are not a
/// security mechanism; a real deployment needs an external identity provider.
pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "notes123";
