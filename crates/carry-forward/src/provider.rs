use crate::localization::LocalizationProvider;
use crate::page::{PageDefinition, PageKind};
use crate::section::extract_section;
use std::collections::HashMap;

/// Source of the previous session's content, per page kind
pub trait PreviousContentProvider {
    fn fetch(&self, kind: PageKind) -> Option<String>;
}

/// First session: nothing to carry forward
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrevious;

impl PreviousContentProvider for NoPrevious {
    fn fetch(&self, _kind: PageKind) -> Option<String> {
        None
    }
}

/// Previous session stored as one page per kind
#[derive(Debug, Clone, Default)]
pub struct SeparatePages {
    pages: HashMap<PageKind, String>,
}

impl SeparatePages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the previous content of one page
    #[must_use]
    pub fn with_page(mut self, kind: PageKind, html: impl Into<String>) -> Self {
        self.pages.insert(kind, html.into());
        self
    }
}

impl FromIterator<(PageKind, String)> for SeparatePages {
    fn from_iter<I: IntoIterator<Item = (PageKind, String)>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

impl PreviousContentProvider for SeparatePages {
    fn fetch(&self, kind: PageKind) -> Option<String> {
        self.pages.get(&kind).cloned()
    }
}

/// Previous session stored as one combined page.
///
/// Each kind's content is the `<h2>` section titled with the kind's localized
/// page title.
pub struct CombinedPage<'a> {
    html: String,
    localizer: &'a dyn LocalizationProvider,
}

impl<'a> CombinedPage<'a> {
    pub fn new(html: impl Into<String>, localizer: &'a dyn LocalizationProvider) -> Self {
        Self {
            html: html.into(),
            localizer,
        }
    }
}

impl PreviousContentProvider for CombinedPage<'_> {
    fn fetch(&self, kind: PageKind) -> Option<String> {
        let heading = self
            .localizer
            .localize(&PageDefinition::standard(kind).title_key);
        let section = extract_section(&self.html, &heading);
        if section.is_none() {
            log::debug!("No section titled {heading:?} in previous combined page");
        }
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::Catalogue;

    #[test]
    fn test_no_previous() {
        assert!(NoPrevious.fetch(PageKind::SecretsClues).is_none());
    }

    #[test]
    fn test_separate_pages() {
        let pages = SeparatePages::new().with_page(PageKind::Npcs, "<p>Mira</p>");
        assert_eq!(pages.fetch(PageKind::Npcs).as_deref(), Some("<p>Mira</p>"));
        assert!(pages.fetch(PageKind::Monsters).is_none());

        let collected: SeparatePages = vec![(PageKind::Rewards, "<p>Sword</p>".to_string())]
            .into_iter()
            .collect();
        assert!(collected.fetch(PageKind::Rewards).is_some());
    }

    #[test]
    fn test_combined_page_uses_localized_titles() {
        let catalogue = Catalogue::english().unwrap();
        let previous = CombinedPage::new(
            "<h2>Important NPCs</h2><p>Mira</p><h2>Relevant Monsters</h2><p>Owlbear</p>",
            &catalogue,
        );
        assert_eq!(previous.fetch(PageKind::Npcs).as_deref(), Some("<p>Mira</p>"));
        assert_eq!(
            previous.fetch(PageKind::Monsters).as_deref(),
            Some("<p>Owlbear</p>")
        );
        assert!(previous.fetch(PageKind::Rewards).is_none());
    }
}
