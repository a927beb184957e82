/// Decode character references the way a browser's `textContent` would.
///
/// Covers numeric references and the full HTML5 named-entity set; anything
/// that is not a known reference is left untouched.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    html_escape::decode_html_entities(text).into_owned()
}

/// Escape text for use as element content or a double-quoted attribute value.
#[must_use]
pub fn escape_text(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}
