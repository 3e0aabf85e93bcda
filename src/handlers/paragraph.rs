//! Paragraph and list conversion.
//!
//! A `par` node resolves its formatting through the definition table.
//! Paragraph-kind definitions produce a `p` (or degrade to a `br`);
//! list-kind definitions produce `li` items grouped into a shared `ul`/`ol`
//! container as long as adjacent siblings keep referencing the same
//! definition.

use crate::engine::Ctx;
use crate::error::ConvertError;
use crate::pardef::{ParDef, ParDefKind};
use crate::style::{Css, parse_inches};
use dxl2html_dom::{Element, Node};

/// Converts one `par`, appending the result to `out`. `open_list` is the
/// grouping cursor owned by the caller's sibling walk: the definition id
/// and `out`-index of the list container still accepting items.
pub fn convert_par(
    par: Element,
    out: &mut Vec<Node>,
    open_list: &mut Option<(String, usize)>,
    ctx: &mut Ctx,
) -> Result<(), ConvertError> {
    let id = par
        .attr("def")
        .ok_or(ConvertError::MissingParDefRef)?
        .to_string();
    let def = ctx
        .pardefs
        .get(&id)
        .ok_or_else(|| ConvertError::UnresolvedParDef(id.clone()))?
        .clone();

    match def.kind {
        ParDefKind::List => {
            let container_idx = match open_list {
                Some((open_id, idx)) if *open_id == id => *idx,
                _ => {
                    out.push(Node::Element(list_container(&def, ctx)));
                    let idx = out.len() - 1;
                    *open_list = Some((id, idx));
                    idx
                }
            };
            let mut item = Element::new("li");
            item.children = par.children;
            if let Some(container) = out.get_mut(container_idx).and_then(Node::as_element_mut) {
                container.children.push(Node::Element(item));
            }
        }
        ParDefKind::Paragraph => {
            *open_list = None;
            out.push(Node::Element(paragraph(par, &def, ctx)));
        }
    }
    Ok(())
}

fn paragraph(par: Element, def: &ParDef, ctx: &Ctx) -> Element {
    let mut css = Css::new();
    match def.align.as_str() {
        "full" => css.push("text-align", "justify"),
        "center" => css.push("text-align", "center"),
        "right" => css.push("text-align", "right"),
        "none" => css.push("white-space", "nowrap"),
        _ => {}
    }

    // Margins only apply to paragraphs with content; an empty paragraph
    // is spacing, not a box.
    let has_content = !par.children.is_empty();
    let mut margins = Css::new();
    if has_content && !def.left_margin.is_empty() {
        margins.push(
            "margin-left",
            &format!("{}in", parse_inches(&def.left_margin, 1.0)),
        );
    }
    if has_content && !def.space_after.is_empty() {
        match def.space_after.as_str() {
            "2" => margins.push("margin-bottom", "1em"),
            "1.5" => margins.push("margin-bottom", "0.5em"),
            _ => {}
        }
    }
    if !margins.is_empty() {
        css.push("margin", "0px");
        css.push_raw(margins.as_str());
    }

    if def.new_page == "true" {
        css.push_raw("border-top:solid 1px black;");
    }

    if ctx.options.use_inline_styles() && !css.is_empty() {
        let mut tag = Element::new("p");
        tag.set_attr("style", css.as_str());
        tag.children = par.children;
        tag
    } else if par.children.is_empty() {
        // Nothing to style and nothing to hold: a bare line break.
        Element::new("br")
    } else {
        let mut tag = Element::new("p");
        tag.children = par.children;
        tag
    }
}

fn list_container(def: &ParDef, ctx: &Ctx) -> Element {
    let (tag, marker) = match def.style.as_str() {
        "square" => ("ul", "square"),
        "circle" => ("ul", "circle"),
        "uncheck" => ("ul", "square"),
        "number" => ("ol", "decimal"),
        "alphaupper" => ("ol", "upper-alpha"),
        "alphalower" => ("ol", "lower-alpha"),
        "romanupper" => ("ol", "upper-roman"),
        "romanlower" => ("ol", "lower-roman"),
        _ => ("ul", "disc"),
    };

    let mut css = Css::new();
    css.push("list-style-type", marker);
    css.push("margin", "0px");
    css.push(
        "margin-left",
        &format!("{}in", parse_inches(&def.left_margin, 1.5)),
    );
    match def.align.as_str() {
        "full" => css.push("text-align", "justify"),
        "center" => css.push("text-align", "center"),
        "right" => css.push("text-align", "right"),
        _ => {}
    }

    let mut el = Element::new(tag);
    if ctx.options.use_inline_styles() {
        el.set_attr("style", css.as_str());
    }
    el
}
