//! DXL-style rich text to HTML fragment conversion.
//!
//! The input is a rich-text markup fragment (paragraphs, runs, tables,
//! sections, widgets) plus the plain-text rendering of the same content.
//! `convert` rewrites the tree node kind by node kind into display HTML;
//! if anything goes wrong at any stage, the caller gets the plain text
//! back verbatim instead of a half-converted fragment.
//!
//! ```
//! use dxl2html::{Options, convert};
//!
//! let rich = r#"<pardef id="1" align="center"/><par def="1">Hello</par>"#;
//! let html = convert(rich, "Hello", Options::USE_INLINE_STYLES);
//! assert_eq!(html, r#"<p style="text-align:center;">Hello</p>"#);
//! ```

pub mod engine;
pub mod error;
pub mod options;
pub mod pardef;
pub mod style;

mod handlers;

pub use error::ConvertError;
pub use options::Options;

use dxl2html_dom as dom;
use log::warn;

/// Converts a rich-text fragment to HTML, returning the supplied
/// plain-text rendering verbatim if any stage of the conversion fails.
/// The output is always one or the other, never a mixture.
pub fn convert(rich_text: &str, plain_text: &str, options: Options) -> String {
    match try_convert(rich_text, options) {
        Ok(html) => html,
        Err(err) => {
            warn!("conversion failed, returning plain-text fallback: {err}");
            plain_text.to_string()
        }
    }
}

/// The typed conversion entry point: parse, strip and index paragraph
/// definitions, transform, serialize.
pub fn try_convert(rich_text: &str, options: Options) -> Result<String, ConvertError> {
    let mut root = dom::parse_fragment(rich_text)?;
    let pardefs = pardef::ParDefTable::load(&mut root);
    let mut ctx = engine::Ctx::new(pardefs, options);
    engine::transform(&mut root, &mut ctx)?;
    Ok(dom::serialize_fragment(&root)?)
}
