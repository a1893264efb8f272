//! Conversion resolution engine: rule-graph construction and depth-first
//! chain search with multiplier composition.

pub mod graph;
pub mod resolver;
