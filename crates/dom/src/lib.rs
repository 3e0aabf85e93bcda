//! Owned markup tree used by the rich-text converter.
//!
//! The converter rewrites documents in place, so unlike a read-only parse
//! tree this crate hands out owned, mutable nodes. Reading goes through
//! `roxmltree`, writing through `quick-xml`; both ends deal in fragments
//! (markup with any number of top-level nodes) rather than full documents.

pub mod error;
pub mod node;
pub mod read;
pub mod write;

pub use error::DomError;
pub use node::{Element, Node};
pub use read::parse_fragment;
pub use write::serialize_fragment;
