//! Checkbox marker normalization.
//!
//! Journal content reaches us with checklist state in several shapes: native
//! `<input type="checkbox">` elements (often inside `<label>`), and plain
//! bracket notation typed by hand. Everything is folded into two glyphs.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Marker for a checked entry (U+2611)
pub const CHECKED: char = '\u{2611}';
/// Marker for an unchecked entry (U+2610)
pub const UNCHECKED: char = '\u{2610}';

static LABEL_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?label\b[^>]*>").expect("label pattern"));

static INPUT_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<input\b[^>]*>").expect("input pattern"));

/// One attribute of a tag: leading whitespace, name, optional value. Quoted
/// values are consumed whole, so words inside them are never read as names.
static ATTRIBUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\s([^\s"'=<>/]+)(?:\s*=\s*("[^"]*"|'[^']*'|[^\s"'=<>`]+))?"#)
        .expect("attribute pattern")
});

static BRACKET_CHECKED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\s*[xX]\s*\]").expect("checked bracket pattern"));

static BRACKET_UNCHECKED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\s*\]").expect("unchecked bracket pattern"));

static LEADING_CHECKED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[\s*[xX]\s*\]").expect("leading checked pattern"));

static LEADING_UNCHECKED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[\s*\]").expect("leading unchecked pattern"));

/// Fold every recognized checkbox form into [`CHECKED`] / [`UNCHECKED`].
///
/// Label wrappers go first, then checkbox inputs, then bracket notation, so
/// brackets embedded in checkbox markup are never processed twice. Markup that
/// does not match passes through untouched; whitespace is not trimmed.
#[must_use]
pub fn normalize(html: &str) -> String {
    let mut out = html.to_string();

    // Removing one wrapper can splice a new one together; run to a fixed point.
    while LABEL_TAG_RE.is_match(&out) {
        out = LABEL_TAG_RE.replace_all(&out, "").into_owned();
    }

    out = INPUT_TAG_RE
        .replace_all(&out, |caps: &Captures<'_>| {
            let tag = &caps[0];
            match checkbox_state(tag) {
                Some(true) => CHECKED.to_string(),
                Some(false) => UNCHECKED.to_string(),
                None => tag.to_string(),
            }
        })
        .into_owned();

    out = BRACKET_CHECKED_RE
        .replace_all(&out, CHECKED.to_string().as_str())
        .into_owned();
    BRACKET_UNCHECKED_RE
        .replace_all(&out, UNCHECKED.to_string().as_str())
        .into_owned()
}

/// `Some(checked)` for a checkbox `<input>` tag, `None` for any other input
fn checkbox_state(tag: &str) -> Option<bool> {
    let mut is_checkbox = false;
    let mut checked = false;
    for attribute in ATTRIBUTE_RE.captures_iter(tag) {
        let name = &attribute[1];
        if name.eq_ignore_ascii_case("type") {
            let value = attribute.get(2).map_or("", |value| value.as_str());
            is_checkbox = value
                .trim_matches(['"', '\''])
                .trim()
                .eq_ignore_ascii_case("checkbox");
        } else if name.eq_ignore_ascii_case("checked") {
            checked = true;
        }
    }
    is_checkbox.then_some(checked)
}

/// [`normalize`] for optional content; absent content normalizes to `""`
#[must_use]
pub fn normalize_opt(html: Option<&str>) -> String {
    html.map(normalize).unwrap_or_default()
}

/// Split a leading marker off trimmed entry text.
///
/// Returns `Some((checked, rest))` when a glyph or bracket marker opens the
/// text, `None` when the text carries no recognizable marker.
#[must_use]
pub fn split_marker(text: &str) -> Option<(bool, &str)> {
    if let Some(rest) = text.strip_prefix(CHECKED) {
        return Some((true, rest.trim_start()));
    }
    if let Some(rest) = text.strip_prefix(UNCHECKED) {
        return Some((false, rest.trim_start()));
    }
    if let Some(m) = LEADING_CHECKED_RE.find(text) {
        return Some((true, text[m.end()..].trim_start()));
    }
    if let Some(m) = LEADING_UNCHECKED_RE.find(text) {
        return Some((false, text[m.end()..].trim_start()));
    }
    None
}
