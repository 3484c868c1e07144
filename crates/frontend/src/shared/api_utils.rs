//! Helpers for building backend URLs.

/// Port the analytics backend listens on, next to the static frontend host.
const API_PORT: u16 = 3000;

/// Base URL for API requests, derived from the current window location.
///
/// Returns e.g. `"https://example.com:3000"`, or an empty string outside a
/// browser so relative URLs are used.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Full API URL for a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Appends `query` to `path` unless it is empty.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_query_skips_empty_query() {
        assert_eq!(with_query("/api/x", ""), "/api/x");
        assert_eq!(with_query("/api/x", "a=1&b=2"), "/api/x?a=1&b=2");
    }
}
