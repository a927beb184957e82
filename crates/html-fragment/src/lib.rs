//! # Prep HTML Fragment
//!
//! A deliberately small HTML model for journal page content: parse, query by
//! tag or class, read attributes and text, cut a node out, slice sibling runs.
//!
//! ## Architecture
//!
//! ```text
//! HTML string
//!     │
//!     ├──> Tree-sitter Parsing (tree-sitter-html) → syntax tree
//!     │
//!     ├──> Queries
//!     │    ├─> elements / elements_by_tag / find_first
//!     │    └─> Element: tag_name, attr, has_class, text_content
//!     │
//!     └──> Serialization (byte ranges over the original source)
//!          ├─> without / without_element
//!          └─> slice_after_until
//! ```
//!
//! ## Example
//!
//! ```rust
//! use prep_html_fragment::Fragment;
//!
//! let fragment = Fragment::parse("<p>intro</p><ul class=\"todo\"><li>one</li></ul>").unwrap();
//! let list = fragment.find_first(|e| e.has_class("todo")).unwrap();
//! assert_eq!(list.children().len(), 1);
//! assert_eq!(fragment.without_element(&list).unwrap(), "<p>intro</p>");
//! ```

mod element;
mod error;
mod fragment;
pub mod text;

pub use element::Element;
pub use error::{FragmentError, Result};
pub use fragment::Fragment;
