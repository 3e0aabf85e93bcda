//! Straightforward attribute remaps: links, buttons, action hotspots and
//! horizontal rules.

use crate::engine::Ctx;
use crate::style::Css;
use dxl2html_dom::{Element, Node};

pub fn convert_url_link(link: Element, ctx: &Ctx) -> Element {
    let mut tag = Element::new("a");
    if let Some(href) = link.attr("href") {
        tag.set_attr("href", href);
    }
    if let Some(target) = link.attr("targetframe") {
        tag.set_attr("target", target);
    }

    let mut css = Css::new();
    if link.attr("showborder") == Some("true") {
        css.push_raw("border:solid 1px teal;");
    }
    if ctx.options.use_inline_styles() && !css.is_empty() {
        tag.set_attr("style", css.as_str());
    }

    for child in link.children {
        match child {
            Node::Element(el) if el.name == "code" => {
                // A formula computes the real target; it overrides any
                // static href but does not itself render.
                if let Some(href) = formula_href(&el) {
                    tag.set_attr("href", &href);
                }
            }
            other => tag.children.push(other),
        }
    }
    tag
}

/// Extracts a link target from a formula: its text, lower-cased, with
/// double quotes stripped. The last formula in the code block wins.
fn formula_href(code: &Element) -> Option<String> {
    let mut href = None;
    for child in &code.children {
        if let Node::Element(el) = child {
            if el.name == "formula" {
                if let Some(first) = el.children.first() {
                    href = Some(first.text_content().to_lowercase().replace('"', ""));
                }
            }
        }
    }
    href
}

pub fn convert_button(button: &Element, ctx: &Ctx) -> Element {
    let mut tag = Element::new("input");
    tag.set_attr("type", "button");

    // The label is the button's direct character data; embedded scripts
    // do not contribute.
    let mut label = String::new();
    for child in &button.children {
        if let Node::Text(text) = child {
            label.push_str(text);
        }
    }
    tag.set_attr("value", &label);

    let width = if button.attr("widthtype") == Some("fitcontent") {
        "auto"
    } else {
        button.attr("width").unwrap_or("")
    };
    let mut css = Css::new();
    if !width.is_empty() {
        css.push("width", width);
    }
    if ctx.options.use_inline_styles() && !css.is_empty() {
        tag.set_attr("style", css.as_str());
    }
    tag
}

pub fn convert_action_hotspot(hotspot: Element, ctx: &Ctx) -> Element {
    let mut tag = Element::new("span");
    let mut css = Css::new();
    if hotspot.attr("hotspotstyle") != Some("none") {
        css.push_raw("border:solid 1px teal;");
    }
    if ctx.options.use_inline_styles() && !css.is_empty() {
        tag.set_attr("style", css.as_str());
    }
    tag.children = hotspot.children;
    tag
}

pub fn convert_rule(rule: &Element, ctx: &Ctx) -> Element {
    let mut tag = Element::new("hr");
    let mut css = Css::new();
    if let Some(height) = rule.attr("height") {
        css.push("height", height);
    }
    if let Some(width) = rule.attr("width") {
        css.push("width", width);
    }
    if let Some(color) = rule.attr("color") {
        css.push("background-color", color);
    }
    if ctx.options.use_inline_styles() && !css.is_empty() {
        tag.set_attr("style", css.as_str());
    }
    tag
}
