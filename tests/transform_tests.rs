mod common;

use common::{convert_inline, convert_plain, init_logging};

#[test]
fn alignment_keywords_map_to_css() {
    init_logging();

    for (align, css) in [
        ("full", "text-align:justify;"),
        ("center", "text-align:center;"),
        ("right", "text-align:right;"),
        ("none", "white-space:nowrap;"),
    ] {
        let rich = format!(r#"<pardef id="1" align="{align}"/><par def="1">text</par>"#);
        let html = convert_inline(&rich);
        assert_eq!(html, format!(r#"<p style="{css}">text</p>"#));
    }
}

#[test]
fn left_margin_is_offset_by_the_page_base() {
    init_logging();

    let html =
        convert_inline(r#"<pardef id="1" align="left" leftmargin="2.5in"/><par def="1">text</par>"#);
    assert_eq!(html, r#"<p style="margin:0px;margin-left:1.5in;">text</p>"#);
}

#[test]
fn unparseable_margin_defaults_to_zero() {
    init_logging();

    let html =
        convert_inline(r#"<pardef id="1" align="left" leftmargin="abc"/><par def="1">text</par>"#);
    assert_eq!(html, r#"<p style="margin:0px;margin-left:0in;">text</p>"#);
}

#[test]
fn childless_paragraph_degrades_to_a_line_break() {
    init_logging();

    // A margin is declared but there is no content to indent: no styled
    // empty paragraph, just a break.
    let html = convert_inline(r#"<pardef id="1" leftmargin="0.5in"/><par def="1"/>"#);
    assert_eq!(html, "<br/>");
}

#[test]
fn space_after_maps_to_bottom_margins() {
    init_logging();

    let html =
        convert_inline(r#"<pardef id="1" align="left" spaceafter="2"/><par def="1">text</par>"#);
    assert_eq!(html, r#"<p style="margin:0px;margin-bottom:1em;">text</p>"#);

    let html =
        convert_inline(r#"<pardef id="1" align="left" spaceafter="1.5"/><par def="1">text</par>"#);
    assert_eq!(html, r#"<p style="margin:0px;margin-bottom:0.5em;">text</p>"#);
}

#[test]
fn new_page_adds_a_top_rule() {
    init_logging();

    let html = convert_inline(r#"<pardef id="1" newpage="true"/><par def="1">text</par>"#);
    assert_eq!(html, r#"<p style="border-top:solid 1px black;">text</p>"#);
}

#[test]
fn paragraphs_without_inline_styles_are_bare() {
    init_logging();

    let html = convert_plain(r#"<pardef id="1" align="center"/><par def="1">text</par>"#);
    assert_eq!(html, "<p>text</p>");
}

#[test]
fn break_becomes_a_line_break() {
    init_logging();

    assert_eq!(convert_inline("<break/>"), "<br/>");
}

#[test]
fn computed_text_and_pictures_are_removed() {
    init_logging();

    let html = convert_inline(
        r#"<computedtext>field</computedtext>before<picture>blob</picture>after"#,
    );
    assert_eq!(html, "beforeafter");
}

#[test]
fn unknown_elements_pass_through_unchanged() {
    init_logging();

    let html = convert_inline(r#"<custom keep="yes">body</custom>"#);
    assert_eq!(html, r#"<custom keep="yes">body</custom>"#);
}

#[test]
fn horizontal_rule_styling() {
    init_logging();

    let html = convert_inline(r#"<horizrule height="2px" width="50%" color="blue"/>"#);
    assert_eq!(
        html,
        r#"<hr style="height:2px;width:50%;background-color:blue;"/>"#
    );
    assert_eq!(convert_plain(r#"<horizrule height="2px"/>"#), "<hr/>");
}

#[test]
fn url_link_remaps_attributes() {
    init_logging();

    let html = convert_inline(
        r#"<urllink href="http://example.com/" targetframe="_blank" showborder="true">go</urllink>"#,
    );
    assert_eq!(
        html,
        r#"<a href="http://example.com/" target="_blank" style="border:solid 1px teal;">go</a>"#
    );
}

#[test]
fn formula_overrides_the_static_href() {
    init_logging();

    let html = convert_inline(
        r#"<urllink href="http://static/"><code><formula>"HTTP://COMPUTED/"</formula></code>go</urllink>"#,
    );
    assert_eq!(html, r#"<a href="http://computed/">go</a>"#);
}

#[test]
fn button_collects_its_label_and_width() {
    init_logging();

    let html = convert_inline(
        r#"<button width="80px"><code><formula>@Command</formula></code>Save</button>"#,
    );
    assert_eq!(
        html,
        r#"<input type="button" value="Save" style="width:80px;"/>"#
    );

    let html = convert_inline(r#"<button widthtype="fitcontent">Go</button>"#);
    assert_eq!(html, r#"<input type="button" value="Go" style="width:auto;"/>"#);
}

#[test]
fn action_hotspot_is_bordered_unless_suppressed() {
    init_logging();

    let html = convert_inline(r#"<actionhotspot>run me</actionhotspot>"#);
    assert_eq!(html, r#"<span style="border:solid 1px teal;">run me</span>"#);

    let html = convert_inline(r#"<actionhotspot hotspotstyle="none">run me</actionhotspot>"#);
    assert_eq!(html, "<span>run me</span>");
}
