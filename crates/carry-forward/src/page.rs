use serde::{Deserialize, Serialize};

/// One step of session prep, each generating its own page (or section)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    ReviewCharacters,
    StrongStart,
    Scenes,
    SecretsClues,
    Locations,
    Npcs,
    Monsters,
    Rewards,
}

impl PageKind {
    /// All page kinds in prep order
    pub const ALL: [PageKind; 8] = [
        PageKind::ReviewCharacters,
        PageKind::StrongStart,
        PageKind::Scenes,
        PageKind::SecretsClues,
        PageKind::Locations,
        PageKind::Npcs,
        PageKind::Monsters,
        PageKind::Rewards,
    ];

    /// Carry-forward policy for this page kind
    #[must_use]
    pub const fn policy(self) -> PagePolicy {
        match self {
            Self::StrongStart => PagePolicy::StrongStart,
            Self::SecretsClues => PagePolicy::Checklist,
            Self::Scenes | Self::Locations => PagePolicy::Template,
            Self::ReviewCharacters | Self::Npcs | Self::Monsters | Self::Rewards => {
                PagePolicy::Notes
            }
        }
    }

    /// Stable identifier used in localization keys
    #[must_use]
    pub const fn key_stem(self) -> &'static str {
        match self {
            Self::ReviewCharacters => "ReviewCharacters",
            Self::StrongStart => "StrongStart",
            Self::Scenes => "Scenes",
            Self::SecretsClues => "SecretsClues",
            Self::Locations => "Locations",
            Self::Npcs => "Npcs",
            Self::Monsters => "Monsters",
            Self::Rewards => "Rewards",
        }
    }

    /// Number of prompt questions the standard catalogue ships for this page
    const fn prompt_count(self) -> usize {
        match self {
            Self::StrongStart => 3,
            Self::Scenes | Self::SecretsClues | Self::Locations => 2,
            Self::ReviewCharacters | Self::Npcs | Self::Monsters | Self::Rewards => 0,
        }
    }
}

/// How previous content is treated when a page is regenerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagePolicy {
    /// Previous content replaces the scaffold verbatim
    Notes,
    /// Unchecked checklist entries survive, topped up to a fixed count
    Checklist,
    /// Like `Notes`, but the scaffold carries template blocks
    Template,
    /// Scaffold is always fresh; previous content is kept underneath it
    StrongStart,
}

/// Localization keys describing one page.
///
/// Keys are opaque: they are only ever handed to a
/// [`crate::LocalizationProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDefinition {
    pub kind: PageKind,
    pub title_key: String,
    pub desc_key: String,
    #[serde(default)]
    pub prompt_keys: Vec<String>,
}

impl PageDefinition {
    /// Standard definition for a page kind
    #[must_use]
    pub fn standard(kind: PageKind) -> Self {
        let stem = kind.key_stem();
        Self {
            kind,
            title_key: format!("LGMP.Page.{stem}.Title"),
            desc_key: format!("LGMP.Page.{stem}.Desc"),
            prompt_keys: (1..=kind.prompt_count())
                .map(|n| format!("LGMP.Page.{stem}.Prompt{n}"))
                .collect(),
        }
    }

    /// Standard definitions for every page kind, in prep order
    #[must_use]
    pub fn catalogue() -> Vec<Self> {
        PageKind::ALL.into_iter().map(Self::standard).collect()
    }

    #[must_use]
    pub const fn policy(&self) -> PagePolicy {
        self.kind.policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_table() {
        assert_eq!(PageKind::SecretsClues.policy(), PagePolicy::Checklist);
        assert_eq!(PageKind::StrongStart.policy(), PagePolicy::StrongStart);
        assert_eq!(PageKind::Scenes.policy(), PagePolicy::Template);
        assert_eq!(PageKind::Locations.policy(), PagePolicy::Template);
        assert_eq!(PageKind::Npcs.policy(), PagePolicy::Notes);
    }

    #[test]
    fn test_standard_definition_keys() {
        let page = PageDefinition::standard(PageKind::StrongStart);
        assert_eq!(page.title_key, "LGMP.Page.StrongStart.Title");
        assert_eq!(page.desc_key, "LGMP.Page.StrongStart.Desc");
        assert_eq!(page.prompt_keys.len(), 3);
        assert!(PageDefinition::standard(PageKind::Monsters)
            .prompt_keys
            .is_empty());
    }

    #[test]
    fn test_catalogue_order() {
        let kinds: Vec<PageKind> = PageDefinition::catalogue().iter().map(|p| p.kind).collect();
        assert_eq!(kinds, PageKind::ALL.to_vec());
    }
}
