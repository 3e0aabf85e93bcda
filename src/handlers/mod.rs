//! Per-node-kind converters, one module per family of constructs.

pub mod hotspot;
pub mod paragraph;
pub mod run;
pub mod section;
pub mod table;
