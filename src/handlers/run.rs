//! Run and font style composition.
//!
//! A run's font keywords become nested semantic wrappers applied in a
//! fixed order, so "bold italic" and "italic bold" render identically.
//! Highlight colors map through two deliberately distinct palettes: one
//! for raw-markup runs, one for plain text runs.

use crate::engine::Ctx;
use crate::style::{Css, remap_code_highlight, remap_text_highlight};
use dxl2html_dom::{Element, Node};

pub fn convert_run(run: Element, ctx: &Ctx) -> Element {
    let mut css = Css::new();
    let mut wrapper: Option<Element> = None;

    if run.attr("html") == Some("true") {
        wrapper = Some(Element::new("code"));
        match run.attr("highlight") {
            Some(color) => css.push("background-color", remap_code_highlight(color)),
            None => css.push("background-color", "gainsboro"),
        }
    } else if let Some(color) = run.attr("highlight") {
        wrapper = Some(Element::new("span"));
        css.push("background-color", remap_text_highlight(color));
    }

    let text = run.text_content();
    let child_count = run.children.len();
    let mut children = run.children.into_iter();

    // Full font composition needs a leading font element plus content;
    // anything simpler takes just the highlight/raw-markup wrapper.
    let font = match children.next() {
        Some(Node::Element(first)) if first.name == "font" && child_count >= 2 => first,
        other => {
            let mut tag = wrapper.unwrap_or_else(|| Element::new("span"));
            if ctx.options.use_inline_styles() && !css.is_empty() {
                tag.set_attr("style", css.as_str());
            }
            tag.children.extend(other);
            tag.children.extend(children);
            return tag;
        }
    };

    // The primary text child is already captured in `text`; whatever
    // follows it rides along behind the styled chain.
    let _primary = children.next();
    let trailing: Vec<Node> = children.collect();

    let keywords = font.attr("style").unwrap_or("");
    let mut chain: Option<Element> = None;
    let mut force_wrapper = false;

    // Fixed nesting order, innermost first; the order keywords appear in
    // the source attribute is irrelevant.
    if keywords.contains("italic") {
        chain = Some(wrap(chain, &text, "i"));
        css.push("font-style", "italic");
    }
    if keywords.contains("bold") {
        chain = Some(wrap(chain, &text, "strong"));
        css.push("font-weight", "bold");
    }
    if keywords.contains("underline") {
        chain = Some(wrap(chain, &text, "u"));
    }
    if keywords.contains("strikethrough") {
        chain = Some(wrap(chain, &text, "del"));
    }
    if keywords.contains("superscript") {
        chain = Some(wrap(chain, &text, "sup"));
    }
    if keywords.contains("subscript") {
        chain = Some(wrap(chain, &text, "sub"));
    }

    // Effects with no markup equivalent, and the plain font attributes,
    // still need an element for their declarations to attach to.
    for effect in ["emboss", "shadow", "extrude"] {
        if keywords.contains(effect) {
            force_wrapper = true;
        }
    }
    if let Some(color) = font.attr("color") {
        force_wrapper = true;
        css.push("color", color);
    }
    if let Some(size) = font.attr("size") {
        force_wrapper = true;
        css.push("font-size", size);
    }
    if let Some(family) = font.attr("name") {
        force_wrapper = true;
        css.push("font-family", family);
    }
    if chain.is_none() && force_wrapper {
        chain = Some(wrap(None, &text, "span"));
    }

    let mut tag = match (wrapper, chain) {
        (Some(mut outer), Some(styled)) => {
            outer.children.push(Node::Element(styled));
            outer
        }
        (Some(mut outer), None) => {
            outer.children.push(Node::Text(text));
            outer
        }
        (None, Some(styled)) => styled,
        (None, None) => wrap(None, &text, "span"),
    };

    if ctx.options.use_inline_styles() && !css.is_empty() {
        tag.set_attr("style", css.as_str());
    }
    tag.children.extend(trailing);
    tag
}

/// Nests `inner` (or the text content, at the innermost level) inside a
/// fresh wrapper element.
fn wrap(inner: Option<Element>, text: &str, tag: &str) -> Element {
    let mut el = Element::new(tag);
    el.children.push(match inner {
        Some(styled) => Node::Element(styled),
        None => Node::Text(text.to_string()),
    });
    el
}
