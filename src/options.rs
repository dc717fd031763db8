//! Configuration options for fetching and tagging.
//!
//! The `Options` struct controls where articles are fetched from, how long a
//! fetch may take and the default sizes used by the `Tagger` operations.

use std::time::Duration;

/// Base address article identifiers are appended to.
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// Configuration options for a `Tagger`.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tagwiki::Options;
///
/// let options = Options {
///     timeout: Duration::from_secs(5),
///     tag_count: 20,
///     ..Options::default()
/// };
/// assert_eq!(options.preview_len, 2000);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Base address the article identifier is appended to.
    ///
    /// Default: `https://en.wikipedia.org/wiki/`
    pub base_url: String,

    /// Upper bound for the whole article request.
    ///
    /// Expiry surfaces as `Error::Timeout`.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// `User-Agent` header sent with the article request.
    ///
    /// Default: `tagwiki/<crate version>`
    pub user_agent: String,

    /// Number of characters returned by `Tagger::preview_default`.
    ///
    /// Default: `2000`
    pub preview_len: usize,

    /// Number of groups returned by `Tagger::most_frequent_tokens_default`.
    ///
    /// Default: `5`
    pub token_count: usize,

    /// Number of tags returned by `Tagger::tags_default`.
    ///
    /// Default: `10`
    pub tag_count: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("tagwiki/", env!("CARGO_PKG_VERSION")).to_string(),
            preview_len: 2000,
            token_count: 5,
            tag_count: 10,
        }
    }
}
