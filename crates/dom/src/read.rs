//! Fragment parsing: markup string in, owned tree out.

use crate::error::DomError;
use crate::node::{Element, Node};

/// Name of the synthetic root wrapped around the fragment, so multi-node
/// fragments parse as one well-formed document.
const WRAPPER: &str = "dxl-wrapper";

/// Parses a markup fragment into an owned tree rooted at a synthetic
/// wrapper element. Comments and processing instructions are dropped;
/// text nodes (whitespace included) are kept verbatim.
pub fn parse_fragment(source: &str) -> Result<Element, DomError> {
    let wrapped = format!("<{WRAPPER}>{source}</{WRAPPER}>");
    let doc = roxmltree::Document::parse(&wrapped)?;
    Ok(build_element(doc.root_element()))
}

fn build_element(node: roxmltree::Node) -> Element {
    let mut el = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        el.attrs.push((attr.name().to_string(), attr.value().to_string()));
    }
    for child in node.children() {
        if child.is_element() {
            el.children.push(Node::Element(build_element(child)));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                el.children.push(Node::Text(text.to_string()));
            }
        }
    }
    el
}
