use crate::markers;
use prep_html_fragment::{Element, Fragment};
use serde::{Deserialize, Serialize};

/// Class marking a checklist generated by this crate
pub const DEFAULT_CHECKLIST_CLASS: &str = "lgmp-checklist";

/// One checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Plain text, markup stripped and trimmed
    pub text: String,
    pub checked: bool,
}

impl ChecklistItem {
    /// Build an item from an entry's plain text.
    ///
    /// Returns `None` for entries that are blank once the marker is removed.
    /// Text without a recognizable marker is kept whole and unchecked.
    #[must_use]
    pub fn from_entry_text(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let (checked, text) = markers::split_marker(trimmed).unwrap_or((false, trimmed));
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            checked,
        })
    }
}

/// A fragment split into its first checklist and everything else
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionResult {
    /// Input HTML with the extracted list removed
    pub body_without_checklist: String,
    /// Entries in document order
    pub items: Vec<ChecklistItem>,
}

impl ExtractionResult {
    fn unchanged(html: &str) -> Self {
        Self {
            body_without_checklist: html.to_string(),
            items: Vec::new(),
        }
    }

    /// Texts of the entries that are still open
    #[must_use]
    pub fn unchecked_texts(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| !item.checked)
            .map(|item| item.text.clone())
            .collect()
    }
}

/// Extract the first checklist from `html` using the default class
#[must_use]
pub fn extract_checklist(html: &str) -> ExtractionResult {
    extract(html, DEFAULT_CHECKLIST_CLASS)
}

/// Extract the first checklist from `html`.
///
/// A `<ul>` carrying `checklist_class` wins; otherwise the first `<ul>` in the
/// document is taken. Without any list the input comes back unchanged with no
/// items. `html` is expected to be marker-normalized already.
#[must_use]
pub fn extract(html: &str, checklist_class: &str) -> ExtractionResult {
    let fragment = match Fragment::parse(html) {
        Ok(fragment) => fragment,
        Err(e) => {
            log::debug!("Checklist extraction skipped, fragment did not parse: {e}");
            return ExtractionResult::unchanged(html);
        }
    };

    let Some(list) = fragment
        .find_first(|e| is_list(e) && e.has_class(checklist_class))
        .or_else(|| fragment.find_first(is_list))
    else {
        return ExtractionResult::unchanged(html);
    };

    let items: Vec<ChecklistItem> = list
        .children()
        .iter()
        .filter(|child| child.is("li"))
        .filter_map(|entry| ChecklistItem::from_entry_text(&entry.text_content()))
        .collect();

    match fragment.without_element(&list) {
        Ok(body_without_checklist) => ExtractionResult {
            body_without_checklist,
            items,
        },
        Err(e) => {
            log::warn!("Failed to remove checklist from fragment: {e}");
            ExtractionResult::unchanged(html)
        }
    }
}

fn is_list(element: &Element<'_>) -> bool {
    element.is("ul")
}

/// Pad `items` with `filler` up to `target` entries, or truncate to `target`.
///
/// Filler only ever fills empty slots; truncation only happens when the real
/// items alone exceed the target.
#[must_use]
pub fn top_up(mut items: Vec<String>, target: usize, filler: &str) -> Vec<String> {
    items.truncate(target);
    let missing = target - items.len();
    items.extend(std::iter::repeat(filler.to_string()).take(missing));
    items
}
