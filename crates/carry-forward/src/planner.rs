use crate::composer::{Composer, PrepContext};
use crate::config::Layout;
use crate::page::{PageDefinition, PageKind};
use crate::provider::{CombinedPage, NoPrevious, PreviousContentProvider};
use crate::render;
use serde::{Deserialize, Serialize};

/// One page ready for the journal store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPage {
    /// Page kind; `None` for a combined page
    pub kind: Option<PageKind>,
    /// Display name
    pub name: String,
    pub html: String,
}

/// Generates every configured page for a new session
pub struct SessionPlanner<'a> {
    ctx: PrepContext<'a>,
    composer: Composer<'a>,
    pages: Vec<PageDefinition>,
}

impl<'a> SessionPlanner<'a> {
    #[must_use]
    pub fn new(ctx: PrepContext<'a>) -> Self {
        let pages = ctx
            .config
            .pages
            .iter()
            .copied()
            .map(PageDefinition::standard)
            .collect();
        Self {
            ctx,
            composer: Composer::new(ctx),
            pages,
        }
    }

    /// Generate pages in the configured layout.
    ///
    /// For [`Layout::Combined`] `previous` should be a [`CombinedPage`] (see
    /// [`SessionPlanner::plan_combined_from_html`]) so sections resolve.
    #[must_use]
    pub fn plan(
        &self,
        session_title: &str,
        previous: &dyn PreviousContentProvider,
    ) -> Vec<GeneratedPage> {
        match self.ctx.config.layout {
            Layout::Separate => self.plan_separate(previous),
            Layout::Combined => vec![self.plan_combined(session_title, previous)],
        }
    }

    /// One page per configured kind
    #[must_use]
    pub fn plan_separate(&self, previous: &dyn PreviousContentProvider) -> Vec<GeneratedPage> {
        self.pages
            .iter()
            .map(|page| GeneratedPage {
                kind: Some(page.kind),
                name: self.title(page),
                html: self.compose(page, previous),
            })
            .collect()
    }

    /// A single page with one `<h2>` section per configured kind
    #[must_use]
    pub fn plan_combined(
        &self,
        session_title: &str,
        previous: &dyn PreviousContentProvider,
    ) -> GeneratedPage {
        let html = self
            .pages
            .iter()
            .map(|page| render::section(&self.title(page), &self.compose(page, previous)))
            .collect::<String>();

        GeneratedPage {
            kind: None,
            name: session_title.to_string(),
            html,
        }
    }

    /// [`SessionPlanner::plan_combined`] reading sections from the previous
    /// combined page's HTML
    #[must_use]
    pub fn plan_combined_from_html(
        &self,
        session_title: &str,
        previous_combined: Option<&str>,
    ) -> GeneratedPage {
        match previous_combined {
            Some(html) => {
                let previous = CombinedPage::new(html, self.ctx.localizer);
                self.plan_combined(session_title, &previous)
            }
            None => self.plan_combined(session_title, &NoPrevious),
        }
    }

    fn title(&self, page: &PageDefinition) -> String {
        self.ctx.localizer.localize(&page.title_key)
    }

    fn compose(&self, page: &PageDefinition, previous: &dyn PreviousContentProvider) -> String {
        let previous = if self.ctx.config.carries_forward(page.kind) {
            previous.fetch(page.kind)
        } else {
            None
        };
        self.composer.compose(page, previous.as_deref())
    }
}
