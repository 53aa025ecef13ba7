/// Validates a post-sign-in `return_to` target to prevent open redirects.
///
/// Returns `Some(url)` if the URL is a valid relative path, `None` otherwise.
///
/// Accepted URLs:
/// - Start with a single `/` (relative path)
/// - Do not start with `//` (protocol-relative URLs like `//evil.com`)
/// - Do not contain backslashes (browsers normalize `/\evil.com` to `//evil.com`)
/// - Do not contain control characters
/// - Do not contain `://`
///
/// # Examples
///
/// ```
/// use logistix_core::auth::validate_return_to;
///
/// assert_eq!(validate_return_to("/dashboard/jobs"), Some("/dashboard/jobs"));
/// assert_eq!(validate_return_to("/"), Some("/"));
/// assert_eq!(validate_return_to("//evil.com"), None);
/// assert_eq!(validate_return_to("https://evil.com"), None);
/// ```
pub fn validate_return_to(url: &str) -> Option<&str> {
    if !url.starts_with('/') {
        return None;
    }

    if url.starts_with("//") {
        return None;
    }

    if url.contains('\\') {
        return None;
    }

    if url.chars().any(|c| c.is_control()) {
        return None;
    }

    if url.contains("://") {
        return None;
    }

    Some(url)
}
