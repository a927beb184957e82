use crate::element::Element;
use crate::error::{FragmentError, Result};
use std::ops::Range;
use tree_sitter::{Node, Parser, Tree};

/// A parsed HTML fragment.
///
/// The source text is kept verbatim; every query returns views into it and
/// every mutation produces a new string, so markup the parser does not
/// understand survives serialization unchanged.
pub struct Fragment {
    source: String,
    tree: Tree,
}

impl Fragment {
    /// Parse an HTML fragment.
    ///
    /// Malformed markup still produces a fragment (tree-sitter recovers with
    /// error nodes); only parser setup failures are reported.
    pub fn parse(html: &str) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_html::LANGUAGE.into())
            .map_err(|e| FragmentError::language(format!("Failed to set language: {e}")))?;

        let tree = parser
            .parse(html, None)
            .ok_or_else(|| FragmentError::parse("Failed to parse HTML fragment"))?;

        if tree.root_node().has_error() {
            log::debug!("HTML fragment parsed with recovered errors");
        }

        Ok(Self {
            source: html.to_string(),
            tree,
        })
    }

    /// All elements in document order
    #[must_use]
    pub fn elements(&self) -> Vec<Element<'_>> {
        let mut out = Vec::new();
        collect_elements(self.tree.root_node(), &self.source, &mut out);
        out
    }

    /// All elements with the given tag name, in document order
    #[must_use]
    pub fn elements_by_tag(&self, tag: &str) -> Vec<Element<'_>> {
        self.elements()
            .into_iter()
            .filter(|element| element.is(tag))
            .collect()
    }

    /// First element (document order) accepted by `predicate`
    pub fn find_first<F>(&self, predicate: F) -> Option<Element<'_>>
    where
        F: Fn(&Element<'_>) -> bool,
    {
        self.elements().into_iter().find(|element| predicate(element))
    }

    /// Serialize the fragment with `range` cut out
    pub fn without(&self, range: Range<usize>) -> Result<String> {
        let invalid = || FragmentError::InvalidRange {
            start: range.start,
            end: range.end,
        };
        if range.start > range.end {
            return Err(invalid());
        }
        let head = self.source.get(..range.start).ok_or_else(invalid)?;
        let tail = self.source.get(range.end..).ok_or_else(invalid)?;

        let mut out = String::with_capacity(head.len() + tail.len());
        out.push_str(head);
        out.push_str(tail);
        Ok(out)
    }

    /// Serialize the fragment with `element` removed
    pub fn without_element(&self, element: &Element<'_>) -> Result<String> {
        self.without(element.byte_range())
    }

    /// HTML of every sibling after `element`, up to (not including) the first
    /// sibling element accepted by `stop`, or up to the end of the parent's
    /// content when no sibling stops the walk.
    pub fn slice_after_until<F>(&self, element: &Element<'_>, stop: F) -> &str
    where
        F: Fn(&Element<'_>) -> bool,
    {
        let node = element.node();
        let start = node.end_byte();
        let mut end = self.parent_content_end(node);

        for sibling in element.next_sibling_elements() {
            if stop(&sibling) {
                end = sibling.byte_range().start;
                break;
            }
        }

        self.source.get(start..end.max(start)).unwrap_or("")
    }

    fn parent_content_end(&self, node: Node<'_>) -> usize {
        let Some(parent) = node.parent() else {
            return self.source.len();
        };

        // Top-level siblings run to the end of the source, trailing text included.
        if parent.parent().is_none() {
            return self.source.len();
        }

        match Element::from_node(parent, &self.source) {
            Some(parent_element) => parent_element.content_range().end,
            None => parent.end_byte(),
        }
    }
}

impl std::fmt::Debug for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fragment")
            .field("len", &self.source.len())
            .field("has_error", &self.tree.root_node().has_error())
            .finish()
    }
}

fn collect_elements<'a>(node: Node<'a>, source: &'a str, out: &mut Vec<Element<'a>>) {
    if let Some(element) = Element::from_node(node, source) {
        out.push(element);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_elements(child, source, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty() {
        let fragment = Fragment::parse("").unwrap();
        assert!(fragment.elements().is_empty());
    }

    #[test]
    fn test_elements_in_document_order() {
        let fragment = Fragment::parse("<div><p>a</p><ul><li>b</li></ul></div><h2>c</h2>").unwrap();
        let tags: Vec<String> = fragment.elements().iter().map(Element::tag_name).collect();
        assert_eq!(tags, vec!["div", "p", "ul", "li", "h2"]);
    }

    #[test]
    fn test_without_element() {
        let html = "<p>keep</p><ul><li>drop</li></ul><p>tail</p>";
        let fragment = Fragment::parse(html).unwrap();
        let list = fragment.find_first(|e| e.is("ul")).unwrap();
        assert_eq!(
            fragment.without_element(&list).unwrap(),
            "<p>keep</p><p>tail</p>"
        );
    }

    #[test]
    fn test_without_rejects_bad_range() {
        let fragment = Fragment::parse("<p>\u{2611}</p>").unwrap();
        // Byte 4 falls inside the three-byte glyph.
        assert!(fragment.without(4..5).is_err());
        assert!(fragment.without(10..100).is_err());
    }

    #[test]
    fn test_slice_after_until_stops_at_sibling() {
        let html = "<h2>A</h2><p>one</p><h2>B</h2><p>two</p>";
        let fragment = Fragment::parse(html).unwrap();
        let first = fragment.find_first(|e| e.is("h2")).unwrap();
        assert_eq!(fragment.slice_after_until(&first, |e| e.is("h2")), "<p>one</p>");
    }

    #[test]
    fn test_slice_after_until_runs_to_parent_end() {
        let html = "<section><h2>A</h2><p>one</p></section><p>outside</p>";
        let fragment = Fragment::parse(html).unwrap();
        let heading = fragment.find_first(|e| e.is("h2")).unwrap();
        assert_eq!(
            fragment.slice_after_until(&heading, |e| e.is("h2")),
            "<p>one</p>"
        );
    }
}
