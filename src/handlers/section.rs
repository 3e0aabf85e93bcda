//! Disclosure widgets: collapsible sections and hover/click popups.
//!
//! Both produce a visible trigger and a hidden body linked by a generated
//! per-document identifier; a small inline script toggles the body's
//! visibility. The fixed widget chrome (header rule, popup box) is part
//! of the widget itself and is emitted regardless of the inline-styles
//! option.

use crate::engine::Ctx;
use crate::error::ConvertError;
use crate::style::Css;
use dxl2html_dom::{Element, Node};

const SECTION_HEADER_STYLE: &str =
    "padding-left:5px;border-left:solid 5px teal;border-bottom:solid 1px teal;cursor:pointer;cursor:hand;";

const POPUP_BODY_STYLE: &str =
    "display:none;margin: 10px;border:solid 1px teal;width:300px;height:50px;";

pub fn convert_section(section: Element, ctx: &mut Ctx) -> Result<Element, ConvertError> {
    let title = section_title(&section)
        .ok_or(ConvertError::MalformedSection)?
        .to_string();
    let body_id = ctx.next_id();

    let mut header = Element::new("div");
    header.set_attr("style", SECTION_HEADER_STYLE);
    header.set_attr(
        "onclick",
        &format!(
            "var sec=document.getElementById('{body_id}');\
             if(sec.style.display=='none'){{sec.style.display='block'}}\
             else{{sec.style.display='none'}}"
        ),
    );
    header.push(Node::Text(title));

    let mut body = Element::new("div");
    body.set_attr("id", &body_id);
    body.set_attr("style", "display:none;");
    body.children.extend(section.children.into_iter().skip(2));
    body.push(Element::new("br"));

    let mut tag = Element::new("div");
    tag.push(header);
    tag.push(body);
    Ok(tag)
}

/// The section title sits at a fixed structural position: the first node
/// of the second child's second child, and it must be character data.
fn section_title(section: &Element) -> Option<&str> {
    let level1 = section.children.get(1)?.as_element()?;
    let level2 = level1.children.get(1)?.as_element()?;
    match level2.children.first()? {
        Node::Text(text) => Some(text),
        Node::Element(_) => None,
    }
}

pub fn convert_popup(popup: Element, ctx: &mut Ctx) -> Element {
    let cover_id = ctx.next_id();
    let hotspot_style = popup.attr("hotspotstyle").map(str::to_string);
    let show_on_click = popup.attr("show") == Some("onclick");

    let mut trigger = Element::new("span");
    let mut cover = Element::new("span");
    cover.set_attr("id", &cover_id);
    cover.set_attr("style", POPUP_BODY_STYLE);

    for child in popup.children {
        match child {
            Node::Element(el) if el.name == "popuptext" => cover.children.extend(el.children),
            // Embedded scripts do not render.
            Node::Element(el) if el.name == "code" => {}
            other => trigger.children.push(other),
        }
    }

    let mut css = Css::new();
    css.push("cursor", "pointer");
    css.push("cursor", "hand");
    match hotspot_style.as_deref() {
        Some("highlight") => css.push("background-color", "Lemonchiffon"),
        Some("none") => {}
        _ => css.push_raw("border:solid 1px teal;"),
    }
    if ctx.options.use_inline_styles() {
        trigger.set_attr("style", css.as_str());
    }

    let reveal = if show_on_click { "onclick" } else { "onmouseover" };
    trigger.set_attr(
        reveal,
        &format!("var cover=document.getElementById('{cover_id}');cover.style.display='block';"),
    );
    trigger.set_attr(
        "onmouseout",
        &format!("var cover=document.getElementById('{cover_id}');cover.style.display='none';"),
    );

    let mut tag = Element::new("span");
    tag.push(trigger);
    tag.push(cover);
    tag
}
