//! HTML scaffolding for freshly generated pages.
//!
//! Every localized string goes through [`escape_text`]; carried-over HTML is
//! inserted as-is.

use crate::localization::{keys, LocalizationProvider};
use crate::markers::UNCHECKED;
use crate::page::PageDefinition;
use prep_html_fragment::text::escape_text;

/// Template blocks per template page
pub const TEMPLATE_BLOCKS: usize = 3;

/// Fantastic aspects per location block
const LOCATION_ASPECTS: usize = 3;

/// Sides of the strong-start die
pub const STRONG_START_ROLLS: usize = 20;

/// Appends scaffolding pieces for one page
pub struct PageWriter<'a> {
    localizer: &'a dyn LocalizationProvider,
    html: String,
}

impl<'a> PageWriter<'a> {
    pub fn new(localizer: &'a dyn LocalizationProvider) -> Self {
        Self {
            localizer,
            html: String::new(),
        }
    }

    fn text(&self, key: &str) -> String {
        escape_text(&self.localizer.localize(key))
    }

    pub fn description(&mut self, page: &PageDefinition) -> &mut Self {
        let desc = self.text(&page.desc_key);
        self.html
            .push_str(&format!("<p class=\"lgmp-description\"><em>{desc}</em></p>"));
        self
    }

    /// Prompt questions; skipped when the page has none
    pub fn prompts(&mut self, page: &PageDefinition) -> &mut Self {
        if page.prompt_keys.is_empty() {
            return self;
        }
        self.html.push_str("<div class=\"lgmp-prompts\">");
        for key in &page.prompt_keys {
            let prompt = self.text(key);
            self.html.push_str(&format!("<p><em>{prompt}</em></p>"));
        }
        self.html.push_str("</div>");
        self
    }

    pub fn notes(&mut self) -> &mut Self {
        let label = self.text(keys::NOTES);
        self.html.push_str(&format!("<h3>{label}</h3><p></p>"));
        self
    }

    /// Checklist of unchecked entries; entry texts are plain text
    pub fn checklist(&mut self, class: &str, entries: &[String]) -> &mut Self {
        self.html
            .push_str(&format!("<ul class=\"{}\">", escape_text(class)));
        for entry in entries {
            self.html
                .push_str(&format!("<li>{UNCHECKED} {}</li>", escape_text(entry)));
        }
        self.html.push_str("</ul>");
        self
    }

    pub fn strong_start_table(&mut self) -> &mut Self {
        let header = self.text(keys::STRONG_START_TABLE);
        self.html.push_str(&format!(
            "<table class=\"lgmp-d20\"><thead><tr><th>d20</th><th>{header}</th></tr></thead><tbody>"
        ));
        for roll in 1..=STRONG_START_ROLLS {
            let idea = self.text(&keys::strong_start_roll(roll));
            self.html
                .push_str(&format!("<tr><td>{roll}</td><td>{idea}</td></tr>"));
        }
        self.html.push_str("</tbody></table>");
        self
    }

    pub fn scene_blocks(&mut self) -> &mut Self {
        let scene = self.text(keys::SCENE);
        let goal = self.text(keys::SCENE_GOAL);
        let obstacle = self.text(keys::SCENE_OBSTACLE);
        for n in 1..=TEMPLATE_BLOCKS {
            self.html.push_str(&format!(
                "<h3>{scene} {n}</h3><p><strong>{goal}:</strong> </p><p><strong>{obstacle}:</strong> </p>"
            ));
        }
        self
    }

    pub fn location_blocks(&mut self) -> &mut Self {
        let location = self.text(keys::LOCATION);
        let aspects = self.text(keys::ASPECTS);
        for n in 1..=TEMPLATE_BLOCKS {
            self.html.push_str(&format!(
                "<h3>{location} {n}</h3><p><strong>{aspects}:</strong></p><ol>"
            ));
            for _ in 0..LOCATION_ASPECTS {
                self.html.push_str("<li></li>");
            }
            self.html.push_str("</ol>");
        }
        self
    }

    /// Carried-over content under its own subheading
    pub fn previous_notes(&mut self, previous_html: &str) -> &mut Self {
        let label = self.text(keys::PREVIOUS_NOTES);
        self.html.push_str(&format!("<h3>{label}</h3>"));
        self.html.push_str(previous_html);
        self
    }

    /// Raw HTML, unescaped
    pub fn raw(&mut self, html: &str) -> &mut Self {
        self.html.push_str(html);
        self
    }

    #[must_use]
    pub fn finish(&mut self) -> String {
        std::mem::take(&mut self.html)
    }
}

/// One `<h2>` section of a combined page
#[must_use]
pub fn section(heading: &str, body: &str) -> String {
    format!("<h2>{}</h2>{body}", escape_text(heading))
}
