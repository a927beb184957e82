//! # Prep Carry-Forward
//!
//! Decides what content from the previous session's prep journal survives
//! into the next session's pages.
//!
//! ## Architecture
//!
//! ```text
//! Previous page HTML (or none)
//!     │
//!     ├──> Marker Normalizer
//!     │    └─> checkbox inputs / [x] / [ ]  →  ☑ / ☐
//!     │
//!     ├──> Checklist Extractor (prep-html-fragment)
//!     │    └─> body without list + ordered {text, checked} items
//!     │
//!     ├──> Section Extractor (combined pages)
//!     │    └─> HTML between one <h2> and the next
//!     │
//!     └──> Carry-Forward Composer
//!          ├─> Policy table per page kind
//!          ├─> Top-up padding of open checklist entries
//!          └─> Fresh scaffolding (description, prompts, notes, templates)
//! ```
//!
//! Every operation is a pure transformation of strings. Host concerns enter
//! only through [`LocalizationProvider`] and [`PreviousContentProvider`].
//!
//! ## Example
//!
//! ```rust
//! use prep_carry_forward::{
//!     CarryForwardConfig, Catalogue, Composer, PageDefinition, PageKind, PrepContext,
//! };
//!
//! let catalogue = Catalogue::english().unwrap();
//! let config = CarryForwardConfig::default();
//! let composer = Composer::new(PrepContext::new(&catalogue, &config));
//!
//! let page = PageDefinition::standard(PageKind::SecretsClues);
//! let previous = "<ul class=\"lgmp-checklist\"><li>☑ Found the amulet</li><li>☐ Missing heir</li></ul>";
//! let html = composer.compose(&page, Some(previous));
//!
//! assert!(html.contains("Missing heir"));
//! assert!(!html.contains("Found the amulet"));
//! ```

mod checklist;
mod composer;
mod config;
mod error;
mod localization;
pub mod markers;
mod page;
mod planner;
mod provider;
mod render;
mod section;

pub use checklist::{
    extract, extract_checklist, top_up, ChecklistItem, ExtractionResult, DEFAULT_CHECKLIST_CLASS,
};
pub use composer::{CarryForwardDecision, Composer, PrepContext, CHECKLIST_TARGET};
pub use config::{CarryForwardConfig, Layout};
pub use error::{CarryForwardError, Result};
pub use localization::{keys, Catalogue, LocalizationProvider};
pub use markers::{normalize, normalize_opt};
pub use page::{PageDefinition, PageKind, PagePolicy};
pub use planner::{GeneratedPage, SessionPlanner};
pub use provider::{CombinedPage, NoPrevious, PreviousContentProvider, SeparatePages};
pub use section::extract_section;
