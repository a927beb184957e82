use crate::error::Result;
use prep_html_fragment::Fragment;

const SECTION_HEADING: &str = "h2";

/// HTML between the `<h2>` whose text equals `heading_text` and the next
/// `<h2>` sibling, both headings excluded.
///
/// Matching is exact and case-sensitive on trimmed text; the first matching
/// heading wins. Returns `None` when no heading matches or the page cannot be
/// parsed: previous-session content is user-edited, so a failed lookup is
/// never an error.
#[must_use]
pub fn extract_section(page_html: &str, heading_text: &str) -> Option<String> {
    match try_extract_section(page_html, heading_text) {
        Ok(section) => section,
        Err(e) => {
            log::debug!("Section lookup for {heading_text:?} failed: {e}");
            None
        }
    }
}

fn try_extract_section(page_html: &str, heading_text: &str) -> Result<Option<String>> {
    let fragment = Fragment::parse(page_html)?;
    let wanted = heading_text.trim();

    let Some(heading) = fragment
        .elements_by_tag(SECTION_HEADING)
        .into_iter()
        .find(|heading| heading.text_content().trim() == wanted)
    else {
        return Ok(None);
    };

    let section = fragment.slice_after_until(&heading, |sibling| sibling.is(SECTION_HEADING));
    Ok(Some(section.to_string()))
}
