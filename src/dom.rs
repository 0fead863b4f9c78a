//! A small element tree that serialises to HTML.
//!
//! Text nodes and attribute values are always escaped on output. Unescaped
//! markup can only enter the tree as a `&'static str`, so nothing fetched at
//! runtime can be injected as markup.

use std::fmt::Write;

const VOID_ELEMENTS: &[&str] = &["area", "br", "hr", "img", "input", "link", "meta"];

/// Escapes `& < > " '` for use in text or quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Raw(&'static str),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Raw(markup) => out.push_str(markup),
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            Node::Text(text) => out.push_str(text),
            Node::Raw(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any earlier value for the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children_from(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn raw(mut self, markup: &'static str) -> Self {
        self.children.push(Node::Raw(markup));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all descendant text nodes, unescaped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.children.iter().for_each(|c| c.collect_text(&mut out));
        out
    }

    /// Depth-first search over descendants (not including `self`).
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(pred, &mut found);
        found
    }

    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        self.find_all(pred).into_iter().next()
    }

    fn walk<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if let Node::Element(el) = child {
                if pred(el) {
                    found.push(el);
                }
                el.walk(pred, found);
            }
        }
    }

    pub fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}
