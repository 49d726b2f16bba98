//! Utility modules for chart scoring
//!
//! - Lookup tables: glyph → element mapping
//! - Normalization: percentage rounding and weight configuration

pub mod lookup_tables;
pub mod normalization;

// Re-export commonly used types
pub use lookup_tables::{element_for_hidden_stem, element_for_label_glyph, element_for_stem};
pub use normalization::{percentages, largest_element, ScoringWeights};
