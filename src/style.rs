//! CSS declaration accumulation and the small value parsers shared by the
//! node converters.

/// Accumulates `property:value;` declarations into one style string.
#[derive(Debug, Default)]
pub struct Css {
    buf: String,
}

impl Css {
    pub fn new() -> Self {
        Css::default()
    }

    pub fn push(&mut self, property: &str, value: &str) {
        self.buf.push_str(property);
        self.buf.push(':');
        self.buf.push_str(value);
        self.buf.push(';');
    }

    /// Appends pre-formed declarations verbatim.
    pub fn push_raw(&mut self, declarations: &str) {
        self.buf.push_str(declarations);
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

/// Parses an inch-denominated margin value ("1.5in"), subtracts the layout
/// base the source format builds in, and floors the result at zero.
/// Malformed values yield zero; a bad margin never fails the conversion.
pub fn parse_inches(value: &str, base: f64) -> f64 {
    match value.trim().trim_end_matches("in").parse::<f64>() {
        Ok(v) => (v - base).max(0.0),
        Err(_) => 0.0,
    }
}

/// Highlight palette for raw-markup (`code`) runs.
pub fn remap_code_highlight(value: &str) -> &str {
    match value {
        "yellow" => "Khaki",
        "blue" => "Lightsteelblue",
        "pink" => "Thistle",
        other => other,
    }
}

/// Highlight palette for plain text runs. Deliberately different from the
/// raw-markup palette: the two kinds must stay visually distinguishable.
pub fn remap_text_highlight(value: &str) -> &str {
    match value {
        "yellow" => "Lemonchiffon",
        "blue" => "Lightcyan",
        "pink" => "Mistyrose",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_accumulates_declarations() {
        let mut css = Css::new();
        css.push("width", "100%");
        css.push("float", "left");
        assert_eq!(css.as_str(), "width:100%;float:left;");
    }

    #[test]
    fn margins_are_offset_and_floored() {
        assert_eq!(parse_inches("2.5in", 1.0), 1.5);
        assert_eq!(parse_inches("0.5in", 1.0), 0.0);
        assert_eq!(parse_inches("1.5in", 1.5), 0.0);
    }

    #[test]
    fn malformed_margins_default_to_zero() {
        assert_eq!(parse_inches("abc", 1.0), 0.0);
        assert_eq!(parse_inches("", 1.0), 0.0);
    }

    #[test]
    fn highlight_palettes_stay_distinct() {
        assert_eq!(remap_code_highlight("yellow"), "Khaki");
        assert_eq!(remap_text_highlight("yellow"), "Lemonchiffon");
        assert_ne!(remap_code_highlight("pink"), remap_text_highlight("pink"));
    }

    #[test]
    fn unknown_highlights_pass_through() {
        assert_eq!(remap_code_highlight("green"), "green");
        assert_eq!(remap_text_highlight("green"), "green");
    }
}
