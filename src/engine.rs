//! The top-level recursive walker.
//!
//! Each level of the tree is rewritten in two phases: phase 1 takes a
//! snapshot of the direct children and rebuilds the child list through
//! per-tag dispatch, phase 2 recurses into the rebuilt children. Content
//! a converter copied wholesale (a table cell's body, a list item's body)
//! is therefore still picked up downstream, because the recursion walks
//! the new tree, not the snapshot.

use crate::error::ConvertError;
use crate::handlers::{hotspot, paragraph, run, section, table};
use crate::options::Options;
use crate::pardef::ParDefTable;
use dxl2html_dom::{Element, Node};

/// Per-conversion state threaded through the recursive walk. A fresh
/// value per call keeps the engine reentrant; nothing outlives the
/// conversion that created it.
pub struct Ctx {
    pub pardefs: ParDefTable,
    pub options: Options,
    ids: u64,
}

impl Ctx {
    pub fn new(pardefs: ParDefTable, options: Options) -> Self {
        Ctx {
            pardefs,
            options,
            ids: 0,
        }
    }

    /// Next per-document identifier, used to link disclosure-widget
    /// headers to their hidden bodies. Monotonic, unique per conversion.
    pub fn next_id(&mut self) -> String {
        self.ids += 1;
        format!("rt{}", self.ids)
    }
}

/// The node kinds the rewrite recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Par,
    Break,
    Run,
    HorizRule,
    Section,
    ComputedText,
    UrlLink,
    Popup,
    Button,
    ActionHotspot,
    Table,
    Picture,
    Other,
}

impl Tag {
    fn from_name(name: &str) -> Tag {
        match name {
            "par" => Tag::Par,
            "break" => Tag::Break,
            "run" => Tag::Run,
            "horizrule" => Tag::HorizRule,
            "section" => Tag::Section,
            "computedtext" => Tag::ComputedText,
            "urllink" => Tag::UrlLink,
            "popup" => Tag::Popup,
            "button" => Tag::Button,
            "actionhotspot" => Tag::ActionHotspot,
            "table" => Tag::Table,
            "picture" => Tag::Picture,
            _ => Tag::Other,
        }
    }
}

/// Rewrites `parent`'s children in place, then recurses into the result.
pub fn transform(parent: &mut Element, ctx: &mut Ctx) -> Result<(), ConvertError> {
    rewrite_children(parent, ctx)?;
    for child in &mut parent.children {
        if let Node::Element(el) = child {
            transform(el, ctx)?;
        }
    }
    Ok(())
}

fn rewrite_children(parent: &mut Element, ctx: &mut Ctx) -> Result<(), ConvertError> {
    // A table that was wrapped in a centering container on a previous pass
    // is already converted; converting it again would nest wrappers.
    let in_centering_wrapper = parent.name == "center" && parent.attr("table") == Some("true");

    let snapshot = std::mem::take(&mut parent.children);
    let mut out: Vec<Node> = Vec::with_capacity(snapshot.len());

    // Adjacency cursor for list grouping: definition id of the open list
    // container and its index in `out`. Cleared by any sibling that does
    // not continue the run of identically-defined list paragraphs.
    let mut open_list: Option<(String, usize)> = None;

    for child in snapshot {
        let el = match child {
            Node::Element(el) => el,
            Node::Text(text) => {
                // Inter-element whitespace is formatting noise; it passes
                // through without breaking list adjacency.
                if !text.trim().is_empty() {
                    open_list = None;
                }
                out.push(Node::Text(text));
                continue;
            }
        };

        let tag = Tag::from_name(&el.name);
        if tag == Tag::Par {
            paragraph::convert_par(el, &mut out, &mut open_list, ctx)?;
            continue;
        }
        open_list = None;

        match tag {
            Tag::Break => out.push(Node::Element(Element::new("br"))),
            Tag::Run => out.push(Node::Element(run::convert_run(el, ctx))),
            Tag::HorizRule => out.push(Node::Element(hotspot::convert_rule(&el, ctx))),
            Tag::Section => out.push(Node::Element(section::convert_section(el, ctx)?)),
            Tag::UrlLink => out.push(Node::Element(hotspot::convert_url_link(el, ctx))),
            Tag::Popup => out.push(Node::Element(section::convert_popup(el, ctx))),
            Tag::Button => out.push(Node::Element(hotspot::convert_button(&el, ctx))),
            Tag::ActionHotspot => {
                out.push(Node::Element(hotspot::convert_action_hotspot(el, ctx)))
            }
            Tag::Table if !in_centering_wrapper => {
                out.push(Node::Element(table::convert_table(el, ctx)))
            }
            // Computed text needs an evaluation engine this renderer does
            // not have; pictures carry binary media it cannot embed.
            Tag::ComputedText | Tag::Picture => {}
            Tag::Par | Tag::Table | Tag::Other => out.push(Node::Element(el)),
        }
    }

    parent.children = out;
    Ok(())
}
