use crate::error::Result;
use std::collections::HashMap;

/// Shared localization keys used by the page scaffolding
pub mod keys {
    pub const NOTES: &str = "LGMP.Notes";
    pub const PREVIOUS_NOTES: &str = "LGMP.PreviousNotes";
    pub const CHECKLIST_FILLER: &str = "LGMP.Checklist.Filler";
    pub const SCENE: &str = "LGMP.Template.Scene";
    pub const SCENE_GOAL: &str = "LGMP.Template.SceneGoal";
    pub const SCENE_OBSTACLE: &str = "LGMP.Template.SceneObstacle";
    pub const LOCATION: &str = "LGMP.Template.Location";
    pub const ASPECTS: &str = "LGMP.Template.Aspects";
    pub const STRONG_START_TABLE: &str = "LGMP.StrongStart.Table";

    /// Key of one d20 strong-start idea (`roll` in `1..=20`)
    #[must_use]
    pub fn strong_start_roll(roll: usize) -> String {
        format!("LGMP.StrongStart.Roll{roll}")
    }
}

/// Turns opaque keys into display text
pub trait LocalizationProvider {
    fn localize(&self, key: &str) -> String;
}

/// Flat key → string catalogue.
///
/// Unknown keys localize to themselves, so a missing translation shows up in
/// the page instead of breaking generation.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    entries: HashMap<String, String>,
}

impl Catalogue {
    /// Parse a flat JSON object of key/string pairs
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Bundled English catalogue
    pub fn english() -> Result<Self> {
        Self::from_json_str(include_str!("../lang/en.json"))
    }

    /// Builder: add or replace one entry
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl LocalizationProvider for Catalogue {
    fn localize(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => {
                log::debug!("No translation for {key}");
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageDefinition;

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let catalogue = Catalogue::default();
        assert_eq!(catalogue.localize("LGMP.Missing"), "LGMP.Missing");
    }

    #[test]
    fn test_with_entry_overrides() {
        let catalogue = Catalogue::default().with_entry(keys::CHECKLIST_FILLER, "Secret");
        assert_eq!(catalogue.localize(keys::CHECKLIST_FILLER), "Secret");
    }

    #[test]
    fn test_rejects_nested_json() {
        assert!(Catalogue::from_json_str(r#"{"LGMP": {"Notes": "Notes"}}"#).is_err());
    }

    #[test]
    fn test_english_covers_standard_pages() {
        let catalogue = Catalogue::english().unwrap();
        assert_eq!(catalogue.localize(keys::CHECKLIST_FILLER), "Clue");

        for page in PageDefinition::catalogue() {
            for key in std::iter::once(&page.title_key)
                .chain(std::iter::once(&page.desc_key))
                .chain(page.prompt_keys.iter())
            {
                assert_ne!(&catalogue.localize(key), key, "missing translation for {key}");
            }
        }

        for roll in 1..=20 {
            let key = keys::strong_start_roll(roll);
            assert_ne!(catalogue.localize(&key), key);
        }
    }
}
