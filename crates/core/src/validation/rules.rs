/// Checks the shape of an email address.
///
/// Accepts `local@domain.tld`: exactly one `@`, no whitespace, a non-empty
/// local part, and a domain containing an interior dot.
///
/// # Examples
///
/// ```
/// use logistix_core::validation::is_valid_email;
///
/// assert!(is_valid_email("ops@unitaslogistix.com"));
/// assert!(!is_valid_email("ops@localhost"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    match domain.find('.') {
        Some(_) => !domain.starts_with('.') && !domain.ends_with('.') && !domain.contains(".."),
        None => false,
    }
}
