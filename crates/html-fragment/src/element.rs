use crate::text;
use std::ops::Range;
use tree_sitter::Node;

const ELEMENT_KINDS: [&str; 3] = ["element", "script_element", "style_element"];

/// A borrowed view of one element inside a [`crate::Fragment`]
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> Element<'a> {
    /// Wrap an element node. Elements opened by text the parser read as a tag
    /// (`a < b and c > d`) are not elements.
    pub(crate) fn from_node(node: Node<'a>, source: &'a str) -> Option<Self> {
        if !ELEMENT_KINDS.contains(&node.kind()) {
            return None;
        }
        let element = Self { node, source };
        element
            .open_tag()
            .map_or(true, |open| is_markup(open, source))
            .then_some(element)
    }

    pub(crate) const fn node(&self) -> Node<'a> {
        self.node
    }

    fn text_of(&self, node: Node<'_>) -> &'a str {
        self.source
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }

    fn open_tag(&self) -> Option<Node<'a>> {
        let mut cursor = self.node.walk();
        let tag = self
            .node
            .children(&mut cursor)
            .find(|child| matches!(child.kind(), "start_tag" | "self_closing_tag"));
        tag
    }

    fn close_tag(&self) -> Option<Node<'a>> {
        let mut cursor = self.node.walk();
        let tag = self
            .node
            .children(&mut cursor)
            .find(|child| child.kind() == "end_tag");
        tag
    }

    /// Lower-cased tag name, empty when the parser recovered an element without one
    #[must_use]
    pub fn tag_name(&self) -> String {
        let Some(open) = self.open_tag() else {
            return String::new();
        };
        let mut cursor = open.walk();
        let name = open
            .children(&mut cursor)
            .find(|child| child.kind() == "tag_name")
            .map(|name| self.text_of(name).to_ascii_lowercase())
            .unwrap_or_default();
        name
    }

    /// Check the tag name case-insensitively
    #[must_use]
    pub fn is(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }

    /// Attribute value with entities decoded.
    ///
    /// A bare attribute (`<input checked>`) yields `Some("")`.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<String> {
        let open = self.open_tag()?;
        let mut cursor = open.walk();
        for attribute in open.children(&mut cursor) {
            if attribute.kind() != "attribute" {
                continue;
            }

            let mut attr_cursor = attribute.walk();
            let parts: Vec<Node<'a>> = attribute.children(&mut attr_cursor).collect();
            let matches_name = parts.iter().any(|part| {
                part.kind() == "attribute_name" && self.text_of(*part).eq_ignore_ascii_case(name)
            });
            if !matches_name {
                continue;
            }

            let value = parts.iter().find_map(|part| match part.kind() {
                "attribute_value" => Some(self.text_of(*part).to_string()),
                "quoted_attribute_value" => {
                    let raw = self.text_of(*part);
                    let unquoted = raw
                        .strip_prefix(['"', '\''])
                        .and_then(|rest| rest.strip_suffix(['"', '\'']))
                        .unwrap_or(raw);
                    Some(unquoted.to_string())
                }
                _ => None,
            });

            return Some(text::decode_entities(&value.unwrap_or_default()));
        }
        None
    }

    /// Whether the `class` attribute lists `class`
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Full source of the element, tags included
    #[must_use]
    pub fn outer_html(&self) -> &'a str {
        self.text_of(self.node)
    }

    /// Source between the opening and closing tags
    #[must_use]
    pub fn inner_html(&self) -> &'a str {
        self.source.get(self.content_range()).unwrap_or("")
    }

    /// Plain text of the element: comments and tags removed, entities decoded.
    ///
    /// Built from the source between markup nodes, so stray `<` and `>` in
    /// user text survive as text.
    #[must_use]
    pub fn text_content(&self) -> String {
        let content = self.content_range();
        let mut markup = Vec::new();
        collect_markup(self.node, self.source, &mut markup);

        let mut raw = String::with_capacity(content.len());
        let mut pos = content.start;
        for range in markup {
            if range.end <= pos || range.start >= content.end {
                continue;
            }
            raw.push_str(self.source.get(pos..range.start).unwrap_or(""));
            pos = range.end;
        }
        if pos < content.end {
            raw.push_str(self.source.get(pos..content.end).unwrap_or(""));
        }

        text::decode_entities(&raw)
    }

    /// Byte range of the whole element in the fragment source
    #[must_use]
    pub fn byte_range(&self) -> Range<usize> {
        self.node.start_byte()..self.node.end_byte()
    }

    /// Byte range of the element's content (between its tags)
    #[must_use]
    pub fn content_range(&self) -> Range<usize> {
        let start = match self.open_tag() {
            Some(open) if open.kind() == "self_closing_tag" => return open.end_byte()..open.end_byte(),
            Some(open) => open.end_byte(),
            None => self.node.start_byte(),
        };
        let end = self
            .close_tag()
            .map_or_else(|| self.node.end_byte(), |close| close.start_byte());
        start..end.max(start)
    }

    /// Direct child elements in document order
    #[must_use]
    pub fn children(&self) -> Vec<Element<'a>> {
        let mut cursor = self.node.walk();
        let children = self
            .node
            .children(&mut cursor)
            .filter_map(|child| Self::from_node(child, self.source))
            .collect();
        children
    }

    /// Sibling elements that follow this one, in document order
    #[must_use]
    pub fn next_sibling_elements(&self) -> Vec<Element<'a>> {
        let mut out = Vec::new();
        let mut sibling = self.node.next_sibling();
        while let Some(node) = sibling {
            if let Some(element) = Self::from_node(node, self.source) {
                out.push(element);
            }
            sibling = node.next_sibling();
        }
        out
    }
}

/// Whether `node` is a tag or comment rather than text the parser happened to
/// read as one. In HTML a `<` not followed by an ASCII letter is text.
fn is_markup(node: Node<'_>, source: &str) -> bool {
    let opener = match node.kind() {
        "comment" | "doctype" => return true,
        "start_tag" | "self_closing_tag" => "<",
        "end_tag" | "erroneous_end_tag" => "</",
        _ => return false,
    };
    source
        .get(node.start_byte()..node.end_byte())
        .and_then(|tag| tag.strip_prefix(opener))
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// Byte ranges of markup nodes under `node`, in document order
fn collect_markup(node: Node<'_>, source: &str, out: &mut Vec<Range<usize>>) {
    if is_markup(node, source) {
        out.push(node.start_byte()..node.end_byte());
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_markup(child, source, out);
    }
}
