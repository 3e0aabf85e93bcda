//! Shared helpers for the integration tests.

use dxl2html::Options;

pub const FALLBACK: &str = "plain text fallback";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Converts with inline styles enabled.
pub fn convert_inline(rich: &str) -> String {
    dxl2html::convert(rich, FALLBACK, Options::USE_INLINE_STYLES)
}

/// Converts with every option off.
pub fn convert_plain(rich: &str) -> String {
    dxl2html::convert(rich, FALLBACK, Options::ALL_OPTIONS_OFF)
}
