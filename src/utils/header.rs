use actix_web::http::header::{HeaderValue, InvalidHeaderValue};

/// Builds a `Location` value for a stored URL.
///
/// Stored URLs are kept exactly as submitted, so they may hold bytes a header
/// cannot carry (CR, LF and other controls). Those bytes are percent-encoded;
/// everything else passes through untouched.
pub fn location_value(url: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    if let Ok(value) = HeaderValue::from_str(url) {
        return Ok(value);
    }

    let mut encoded = String::with_capacity(url.len() + 8);
    for c in url.chars() {
        if c.is_ascii_control() && c != '\t' {
            encoded.push_str(&format!("%{:02X}", c as u32));
        } else {
            encoded.push(c);
        }
    }
    HeaderValue::from_str(&encoded)
}
