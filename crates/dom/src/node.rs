//! The node types every other part of the converter manipulates.

/// A single node in the markup tree: an element or a run of character data.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated character data of this node and all its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with a tag name, ordered attributes and ordered children.
///
/// Attribute names are unique; `set_attr` overwrites in place so the
/// original declaration order survives a rewrite.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(attr, _)| attr == name) {
            Some((_, existing)) => value.clone_into(existing),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Concatenated character data of all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attr_overwrites_in_place() {
        let mut el = Element::new("run");
        el.set_attr("a", "1");
        el.set_attr("b", "2");
        el.set_attr("a", "3");
        assert_eq!(el.attrs, vec![("a".into(), "3".into()), ("b".into(), "2".into())]);
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let mut inner = Element::new("i");
        inner.push(Node::Text("world".into()));
        let mut el = Element::new("p");
        el.push(Node::Text("hello ".into()));
        el.push(inner);
        assert_eq!(el.text_content(), "hello world");
    }
}
