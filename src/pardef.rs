//! Paragraph definition loading.
//!
//! The source format declares paragraph and list formatting once as
//! `pardef` elements and references them by id from every `par`. The
//! declarations are indexed here and stripped from the tree before the
//! transform pass runs.

use dxl2html_dom::{Element, Node};
use log::debug;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParDefKind {
    Paragraph,
    List,
}

/// One paragraph/list formatting declaration. String fields default to
/// empty, never to an absent value.
#[derive(Debug, Clone)]
pub struct ParDef {
    pub kind: ParDefKind,
    pub style: String,
    pub left_margin: String,
    pub align: String,
    pub space_after: String,
    pub new_page: String,
}

impl Default for ParDef {
    fn default() -> Self {
        ParDef {
            kind: ParDefKind::Paragraph,
            style: String::new(),
            left_margin: String::new(),
            align: String::new(),
            space_after: String::new(),
            new_page: String::new(),
        }
    }
}

impl ParDef {
    /// Classifies a `pardef` element. A `list` attribute wins over
    /// `align`; `newpage` is recorded whichever way the kind falls.
    fn classify(el: &Element) -> ParDef {
        let mut def = ParDef::default();
        let get = |name: &str| el.attr(name).unwrap_or("").to_string();

        if let Some(list) = el.attr("list") {
            def.kind = ParDefKind::List;
            def.style = list.to_string();
            def.left_margin = get("leftmargin");
            def.align = get("align");
        } else {
            def.align = get("align");
            def.left_margin = get("leftmargin");
            def.space_after = get("spaceafter");
        }
        def.new_page = get("newpage");
        def
    }
}

/// All definitions of one document, keyed by id. Built once per
/// conversion, read-only afterwards.
#[derive(Debug, Default)]
pub struct ParDefTable {
    defs: HashMap<String, ParDef>,
}

impl ParDefTable {
    /// Indexes every `pardef` in the tree and detaches it from its parent.
    /// Declarations without an id are left in place and ignored.
    pub fn load(root: &mut Element) -> Self {
        let mut table = ParDefTable::default();
        table.strip(root);
        debug!("indexed {} paragraph definitions", table.defs.len());
        table
    }

    fn strip(&mut self, parent: &mut Element) {
        // Take a snapshot of the child list and rebuild it, so removals
        // never skip or re-visit a sibling mid-iteration.
        let children = std::mem::take(&mut parent.children);
        for mut child in children {
            if let Node::Element(el) = &mut child {
                if el.name == "pardef" {
                    if let Some(id) = el.attr("id") {
                        self.defs.insert(id.to_string(), ParDef::classify(el));
                        continue;
                    }
                }
                self.strip(el);
            }
            parent.children.push(child);
        }
    }

    pub fn get(&self, id: &str) -> Option<&ParDef> {
        self.defs.get(id)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxl2html_dom::parse_fragment;

    #[test]
    fn list_attribute_wins_over_align() {
        let mut root =
            parse_fragment(r#"<pardef id="1" list="bullet" align="center" leftmargin="1.5in"/>"#)
                .unwrap();
        let table = ParDefTable::load(&mut root);
        let def = table.get("1").unwrap();
        assert_eq!(def.kind, ParDefKind::List);
        assert_eq!(def.style, "bullet");
        assert_eq!(def.align, "center");
        assert_eq!(def.left_margin, "1.5in");
    }

    #[test]
    fn align_classifies_as_paragraph() {
        let mut root =
            parse_fragment(r#"<pardef id="2" align="right" spaceafter="1.5"/>"#).unwrap();
        let table = ParDefTable::load(&mut root);
        let def = table.get("2").unwrap();
        assert_eq!(def.kind, ParDefKind::Paragraph);
        assert_eq!(def.align, "right");
        assert_eq!(def.space_after, "1.5");
    }

    #[test]
    fn newpage_is_recorded_regardless_of_kind() {
        let mut root = parse_fragment(
            r#"<pardef id="3" list="number" newpage="true"/><pardef id="4" newpage="true"/>"#,
        )
        .unwrap();
        let table = ParDefTable::load(&mut root);
        assert_eq!(table.get("3").unwrap().new_page, "true");
        assert_eq!(table.get("4").unwrap().new_page, "true");
    }

    #[test]
    fn loaded_definitions_are_detached() {
        let mut root =
            parse_fragment(r#"<pardef id="1" align="left"/><par def="1"/>"#).unwrap();
        let _ = ParDefTable::load(&mut root);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].as_element().unwrap().name, "par");
    }

    #[test]
    fn pardef_without_id_stays_in_place() {
        let mut root = parse_fragment(r#"<pardef align="center"/>"#).unwrap();
        let table = ParDefTable::load(&mut root);
        assert!(table.is_empty());
        assert_eq!(root.children[0].as_element().unwrap().name, "pardef");
    }

    #[test]
    fn nested_definitions_are_found() {
        let mut root = parse_fragment(
            r#"<table><tablerow><tablecell><pardef id="9" align="left"/></tablecell></tablerow></table>"#,
        )
        .unwrap();
        let table = ParDefTable::load(&mut root);
        assert_eq!(table.len(), 1);
        assert!(table.get("9").is_some());
    }
}
