//! Table layout.
//!
//! The source format omits cells that are physically merged away by a
//! row or column span, so emitting borders and widths correctly means
//! tracking which (row, column) positions a span has already claimed.
//! A first scan fixes the declared geometry; the second scan emits rows
//! while the covered-position registry keeps the numbering honest.

use crate::engine::Ctx;
use crate::style::{Css, parse_inches};
use dxl2html_dom::{Element, Node};
use log::debug;
use std::collections::HashSet;

/// Per-table scratch state, discarded once the rows are emitted.
struct TableLayout {
    row_count: usize,
    col_count: usize,
    /// Declared column widths, 1-based column index minus one.
    widths: Vec<String>,
    border_color: String,
    border_style: String,
    /// Positions claimed by a span from an earlier row or column.
    covered: HashSet<(usize, usize)>,
    row_no: usize,
    cell_no: usize,
    last_row: bool,
    last_cell: bool,
}

pub fn convert_table(table: Element, ctx: &Ctx) -> Element {
    let mut tag = Element::new("table");
    tag.set_attr("cellspacing", "0");
    tag.set_attr("cellpadding", "0");

    let border_color = table.attr("cellbordercolor").unwrap_or("black").to_string();
    let border_style = table.attr("cellborderstyle").unwrap_or("solid").to_string();
    let width_type = table.attr("widthtype").unwrap_or("").to_string();
    let ref_width = table.attr("refwidth").unwrap_or("").to_string();

    let mut css = Css::new();
    let mut table_width = "";
    let mut centered = false;
    match width_type.as_str() {
        "fitmargins" | "fitwindow" => table_width = "100%",
        "fixedleft" => {
            table_width = ref_width.as_str();
            css.push("float", "left");
        }
        "fixedright" => {
            table_width = ref_width.as_str();
            css.push("float", "right");
        }
        "fixedcenter" => {
            table_width = ref_width.as_str();
            centered = true;
        }
        _ => {}
    }
    if !table_width.is_empty() {
        css.push("width", table_width);
    }
    if width_type == "fitmargins" {
        if let Some(margin) = table.attr("leftmargin") {
            css.push("margin-left", &format!("{}in", parse_inches(margin, 1.0)));
        }
    }
    if ctx.options.use_inline_styles() && !css.is_empty() {
        tag.set_attr("style", css.as_str());
    }

    let mut layout = TableLayout {
        row_count: 0,
        col_count: 0,
        widths: Vec::new(),
        border_color,
        border_style,
        covered: HashSet::new(),
        row_no: 0,
        cell_no: 0,
        last_row: false,
        last_cell: false,
    };
    for child in &table.children {
        if let Node::Element(el) = child {
            match el.name.as_str() {
                "tablecolumn" => {
                    layout.col_count += 1;
                    layout.widths.push(el.attr("width").unwrap_or("").to_string());
                }
                "tablerow" => layout.row_count += 1,
                _ => {}
            }
        }
    }
    debug!(
        "laying out table: {} rows, {} columns",
        layout.row_count, layout.col_count
    );

    for child in table.children {
        if let Node::Element(el) = child {
            if el.name == "tablerow" {
                layout.row_no += 1;
                layout.last_row = layout.row_no >= layout.row_count;
                tag.children.push(Node::Element(convert_row(el, &mut layout, ctx)));
            }
        }
    }

    if centered {
        // Marked so the walker does not convert the wrapped table again
        // when it recurses into this wrapper.
        let mut center = Element::new("center");
        center.set_attr("table", "true");
        center.push(tag);
        return center;
    }
    tag
}

fn convert_row(row: Element, layout: &mut TableLayout, ctx: &Ctx) -> Element {
    let mut tag = Element::new("tr");
    layout.cell_no = 0;
    for child in row.children {
        if let Node::Element(el) = child {
            if el.name == "tablecell" {
                layout.cell_no += 1;
                // Positions a span already claimed have no cell node of
                // their own; step past them.
                while layout.covered.contains(&(layout.row_no, layout.cell_no)) {
                    layout.cell_no += 1;
                }
                layout.last_cell = layout.cell_no >= layout.col_count;
                tag.children.push(Node::Element(convert_cell(el, layout, ctx)));
            }
        }
    }
    tag
}

fn convert_cell(cell: Element, layout: &mut TableLayout, ctx: &Ctx) -> Element {
    let mut tag = Element::new("td");

    if let Some(rowspan) = cell.attr("rowspan") {
        tag.set_attr("rowspan", rowspan);
        let span: usize = rowspan.parse().unwrap_or(0);
        for offset in 1..span {
            layout.covered.insert((layout.row_no + offset, layout.cell_no));
        }
        layout.last_row = layout.row_no + span > layout.row_count;
    }
    if let Some(colspan) = cell.attr("columnspan") {
        tag.set_attr("colspan", colspan);
        let span: usize = colspan.parse().unwrap_or(0);
        for offset in 1..span {
            layout.covered.insert((layout.row_no, layout.cell_no + offset));
        }
        layout.last_cell = layout.cell_no + span > layout.col_count;
    }

    let border_width = cell.attr("borderwidth").unwrap_or("").to_string();
    let tokens: Vec<&str> = border_width.split_whitespace().collect();
    let mut css = Css::new();
    let sides = [
        ("border-top", tokens.first(), true),
        ("border-right", tokens.get(1), layout.last_cell),
        ("border-bottom", tokens.get(2), layout.last_row),
        ("border-left", tokens.get(3), true),
    ];
    for (side, width, emit) in sides {
        if emit {
            css.push(
                side,
                &format!(
                    "{} {} {}",
                    layout.border_style,
                    width.copied().unwrap_or("1px"),
                    layout.border_color
                ),
            );
        }
    }

    if let Some(width) = layout.widths.get(layout.cell_no - 1) {
        if !width.is_empty() {
            css.push("width", width);
        }
    }
    if ctx.options.use_inline_styles() && !css.is_empty() {
        tag.set_attr("style", css.as_str());
    }
    tag.children = cell.children;
    tag
}
