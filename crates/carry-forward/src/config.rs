use crate::checklist::DEFAULT_CHECKLIST_CLASS;
use crate::error::{CarryForwardError, Result};
use crate::page::PageKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Configuration for session-prep page generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarryForwardConfig {
    /// One journal page per step, or a single page with one section per step
    pub layout: Layout,

    /// Carry content over from the previous session at all
    pub carry_forward: bool,

    /// Pages that always start from fresh scaffolding
    pub skip_carry_forward: Vec<PageKind>,

    /// Pages to generate, in output order
    pub pages: Vec<PageKind>,

    /// Class marking generated checklists
    pub checklist_class: String,
}

impl Default for CarryForwardConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Separate,
            carry_forward: true,
            skip_carry_forward: Vec::new(),
            pages: PageKind::ALL.to_vec(),
            checklist_class: DEFAULT_CHECKLIST_CLASS.to_string(),
        }
    }
}

impl CarryForwardConfig {
    /// Create config for the single combined page layout
    pub fn combined() -> Self {
        Self {
            layout: Layout::Combined,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate().map_err(CarryForwardError::invalid_config)?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        log::debug!("Loaded carry-forward config from {}", path.display());
        Ok(config)
    }

    /// Whether previous content should be looked up for `kind`
    #[must_use]
    pub fn carries_forward(&self, kind: PageKind) -> bool {
        self.carry_forward && !self.skip_carry_forward.contains(&kind)
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.pages.is_empty() {
            return Err("pages must list at least one page".to_string());
        }

        let mut seen = HashSet::new();
        for kind in &self.pages {
            if !seen.insert(kind) {
                return Err(format!("page {kind:?} is listed more than once"));
            }
        }

        if self.checklist_class.is_empty() {
            return Err("checklist_class must not be empty".to_string());
        }

        if self.checklist_class.chars().any(char::is_whitespace) {
            return Err(format!(
                "checklist_class ({:?}) must be a single class name",
                self.checklist_class
            ));
        }

        Ok(())
    }
}

/// Page layout for one prepared session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One journal page per prep step
    #[default]
    Separate,

    /// One journal page; each step is an `<h2>` section
    Combined,
}
