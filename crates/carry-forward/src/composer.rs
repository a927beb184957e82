use crate::checklist::{self, top_up};
use crate::config::CarryForwardConfig;
use crate::localization::{keys, LocalizationProvider};
use crate::markers;
use crate::page::{PageDefinition, PageKind, PagePolicy};
use crate::render::PageWriter;

/// Entries in a Secrets & Clues checklist
pub const CHECKLIST_TARGET: usize = 10;

/// Collaborators for one page-generation request
#[derive(Clone, Copy)]
pub struct PrepContext<'a> {
    pub localizer: &'a dyn LocalizationProvider,
    pub config: &'a CarryForwardConfig,
}

impl<'a> PrepContext<'a> {
    pub fn new(localizer: &'a dyn LocalizationProvider, config: &'a CarryForwardConfig) -> Self {
        Self { localizer, config }
    }
}

/// What to do with a page's previous content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarryForwardDecision {
    /// Keep the previous content exactly
    Verbatim { html: String },

    /// Keep the non-checklist body and the open checklist entries, padded
    /// to `pad_to`
    UncheckedSubset {
        body: String,
        items: Vec<String>,
        pad_to: usize,
    },

    /// Build fresh scaffolding; `previous_notes` is appended under its own
    /// heading when present
    Regenerate { previous_notes: Option<String> },
}

/// Builds page HTML from previous content according to the page policy
pub struct Composer<'a> {
    ctx: PrepContext<'a>,
}

impl<'a> Composer<'a> {
    #[must_use]
    pub const fn new(ctx: PrepContext<'a>) -> Self {
        Self { ctx }
    }

    /// Final HTML for `page` given the previous session's content
    #[must_use]
    pub fn compose(&self, page: &PageDefinition, previous: Option<&str>) -> String {
        let decision = self.decide(page.policy(), previous);
        log::debug!("{:?}: {}", page.kind, decision_label(&decision));
        self.render(page, decision)
    }

    /// Apply the policy table. Whitespace-only content counts as absent.
    #[must_use]
    pub fn decide(&self, policy: PagePolicy, previous: Option<&str>) -> CarryForwardDecision {
        let previous = previous.filter(|html| !html.trim().is_empty());

        match (policy, previous) {
            (PagePolicy::Notes | PagePolicy::Template, Some(html)) => {
                CarryForwardDecision::Verbatim {
                    html: html.to_string(),
                }
            }
            (PagePolicy::Checklist, Some(html)) => {
                let normalized = markers::normalize(html);
                let extracted = checklist::extract(&normalized, &self.ctx.config.checklist_class);
                let items = extracted.unchecked_texts();
                log::debug!(
                    "Carrying {} of {} checklist entries forward",
                    items.len(),
                    extracted.items.len()
                );
                CarryForwardDecision::UncheckedSubset {
                    body: extracted.body_without_checklist,
                    items,
                    pad_to: CHECKLIST_TARGET,
                }
            }
            (PagePolicy::StrongStart, previous) => CarryForwardDecision::Regenerate {
                previous_notes: previous.map(str::to_string),
            },
            (_, None) => CarryForwardDecision::Regenerate {
                previous_notes: None,
            },
        }
    }

    /// Turn a decision into page HTML
    #[must_use]
    pub fn render(&self, page: &PageDefinition, decision: CarryForwardDecision) -> String {
        match decision {
            CarryForwardDecision::Verbatim { html } => html,
            CarryForwardDecision::UncheckedSubset {
                body,
                items,
                pad_to,
            } => {
                let entries = top_up(items, pad_to, &self.filler());
                let mut writer = PageWriter::new(self.ctx.localizer);
                if body.trim().is_empty() {
                    writer.description(page).prompts(page).notes();
                } else {
                    writer.raw(&body);
                }
                writer
                    .checklist(&self.ctx.config.checklist_class, &entries)
                    .finish()
            }
            CarryForwardDecision::Regenerate { previous_notes } => {
                let mut writer = PageWriter::new(self.ctx.localizer);
                self.scaffold(page, &mut writer);
                if let Some(previous) = previous_notes {
                    writer.previous_notes(&previous);
                }
                writer.finish()
            }
        }
    }

    fn scaffold(&self, page: &PageDefinition, writer: &mut PageWriter<'_>) {
        writer.description(page);
        match page.policy() {
            PagePolicy::Notes => {
                writer.notes();
            }
            PagePolicy::Checklist => {
                let entries = top_up(Vec::new(), CHECKLIST_TARGET, &self.filler());
                writer
                    .prompts(page)
                    .notes()
                    .checklist(&self.ctx.config.checklist_class, &entries);
            }
            PagePolicy::Template => {
                writer.prompts(page);
                if page.kind == PageKind::Locations {
                    writer.location_blocks();
                } else {
                    writer.scene_blocks();
                }
            }
            PagePolicy::StrongStart => {
                writer.prompts(page).notes().strong_start_table();
            }
        }
    }

    fn filler(&self) -> String {
        self.ctx.localizer.localize(keys::CHECKLIST_FILLER)
    }
}

fn decision_label(decision: &CarryForwardDecision) -> &'static str {
    match decision {
        CarryForwardDecision::Verbatim { .. } => "verbatim",
        CarryForwardDecision::UncheckedSubset { .. } => "unchecked-subset",
        CarryForwardDecision::Regenerate {
            previous_notes: Some(_),
        } => "regenerate+previous",
        CarryForwardDecision::Regenerate {
            previous_notes: None,
        } => "regenerate",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::Catalogue;
    use pretty_assertions::assert_eq;

    fn with_composer<T>(f: impl FnOnce(&Composer<'_>) -> T) -> T {
        let catalogue = Catalogue::english().unwrap();
        let config = CarryForwardConfig::default();
        let composer = Composer::new(PrepContext::new(&catalogue, &config));
        f(&composer)
    }

    #[test]
    fn test_decide_notes_and_templates() {
        with_composer(|composer| {
            for policy in [PagePolicy::Notes, PagePolicy::Template] {
                assert_eq!(
                    composer.decide(policy, Some("<p>mine</p>")),
                    CarryForwardDecision::Verbatim {
                        html: "<p>mine</p>".to_string()
                    }
                );
                assert_eq!(
                    composer.decide(policy, Some("  \n ")),
                    CarryForwardDecision::Regenerate {
                        previous_notes: None
                    }
                );
                assert_eq!(
                    composer.decide(policy, None),
                    CarryForwardDecision::Regenerate {
                        previous_notes: None
                    }
                );
            }
        });
    }

    #[test]
    fn test_decide_checklist_keeps_unchecked() {
        with_composer(|composer| {
            let previous = "<p>body</p><ul class=\"lgmp-checklist\"><li>[x] Found</li><li>[ ] Open</li></ul>";
            assert_eq!(
                composer.decide(PagePolicy::Checklist, Some(previous)),
                CarryForwardDecision::UncheckedSubset {
                    body: "<p>body</p>".to_string(),
                    items: vec!["Open".to_string()],
                    pad_to: CHECKLIST_TARGET,
                }
            );
        });
    }

    #[test]
    fn test_decide_strong_start_always_regenerates() {
        with_composer(|composer| {
            assert_eq!(
                composer.decide(PagePolicy::StrongStart, Some("<p>old</p>")),
                CarryForwardDecision::Regenerate {
                    previous_notes: Some("<p>old</p>".to_string())
                }
            );
            assert_eq!(
                composer.decide(PagePolicy::StrongStart, Some(" ")),
                CarryForwardDecision::Regenerate {
                    previous_notes: None
                }
            );
        });
    }

    #[test]
    fn test_notes_scaffold() {
        with_composer(|composer| {
            let page = PageDefinition::standard(PageKind::Npcs);
            let html = composer.compose(&page, None);
            assert!(html.starts_with("<p class=\"lgmp-description\">"));
            assert!(html.contains("<h3>Notes</h3>"));
            assert!(!html.contains("lgmp-prompts"));
        });
    }

    #[test]
    fn test_location_template_scaffold() {
        with_composer(|composer| {
            let page = PageDefinition::standard(PageKind::Locations);
            let html = composer.compose(&page, None);
            assert!(html.contains("lgmp-prompts"));
            assert!(html.contains("<h3>Location 1</h3>"));
            assert!(!html.contains("<h3>Scene 1</h3>"));
        });
    }

    #[test]
    fn test_unchecked_subset_with_blank_body_gets_intro() {
        with_composer(|composer| {
            let page = PageDefinition::standard(PageKind::SecretsClues);
            let html = composer.render(
                &page,
                CarryForwardDecision::UncheckedSubset {
                    body: " ".to_string(),
                    items: vec!["Open".to_string()],
                    pad_to: 2,
                },
            );
            assert!(html.starts_with("<p class=\"lgmp-description\">"));
            assert!(html.ends_with(
                "<ul class=\"lgmp-checklist\"><li>\u{2610} Open</li><li>\u{2610} Clue</li></ul>"
            ));
        });
    }
}
