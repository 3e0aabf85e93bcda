//! Fragment serialization: owned tree in, markup string out.

use crate::error::DomError;
use crate::node::{Element, Node};
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use std::borrow::Cow;

/// Serializes the children of `root`, leaving the synthetic wrapper
/// element out of the output.
pub fn serialize_fragment(root: &Element) -> Result<String, DomError> {
    let mut writer = Writer::new(Vec::new());
    for child in &root.children {
        write_node(&mut writer, child)?;
    }
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<(), DomError> {
    match node {
        Node::Text(text) => writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(
                text.as_str(),
            ))))
            .map_err(write_err),
        Node::Element(el) => {
            let mut start = BytesStart::new(el.name.as_str());
            for (name, value) in &el.attrs {
                start.push_attribute(Attribute {
                    key: QName(name.as_bytes()),
                    value: Cow::Owned(escape_attr(value).into_bytes()),
                });
            }
            if el.children.is_empty() {
                writer.write_event(Event::Empty(start)).map_err(write_err)
            } else {
                writer.write_event(Event::Start(start)).map_err(write_err)?;
                for child in &el.children {
                    write_node(writer, child)?;
                }
                writer
                    .write_event(Event::End(BytesEnd::new(el.name.as_str())))
                    .map_err(write_err)
            }
        }
    }
}

/// Escapes an attribute value for a double-quoted attribute. Apostrophes
/// stay literal; script-bearing attributes read the way they were built.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn write_err(err: impl std::fmt::Display) -> DomError {
    DomError::Write(err.to_string())
}
