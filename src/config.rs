//! Frontend Configuration
//!
//! The API base URL is baked in at compile time (`MARKET_API_URL`) and can
//! be overridden per browser through `localStorage["apiBaseUrl"]`.

use crate::session;

pub use market_core::PAGE_SIZE;

/// Used when neither the build nor the browser sets a base URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Storage key for the runtime base URL override
pub const API_URL_KEY: &str = "apiBaseUrl";

/// Unread-count refresh period
pub const POLL_INTERVAL_MS: u32 = 30_000;

/// Notifications shown in the bell dropdown
pub const BELL_PREVIEW: usize = 5;

/// Items requested per server page for client-side filtering
pub const FETCH_LIMIT: usize = 200;

/// Server pages followed before the browse page stops and reports the rest
pub const MAX_FETCH_PAGES: usize = 10;

/// Categories always offered in the filter, merged with those seen in data
pub const CATEGORIES: &[&str] = &[
    "Books",
    "Electronics",
    "Furniture",
    "Clothing",
    "Stationery",
    "Sports",
    "Other",
];

pub fn api_base_url() -> String {
    let url = session::get(API_URL_KEY)
        .or_else(|| option_env!("MARKET_API_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    normalize_base_url(&url)
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(" http://api.test/api/ "), "http://api.test/api");
        assert_eq!(normalize_base_url(DEFAULT_API_URL), DEFAULT_API_URL);
    }
}
