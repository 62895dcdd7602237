//! # harmonize-normalize
//!
//! Turns noisy retailer shorthand into canonical comparable text:
//! multi-strategy abbreviation expansion, size extraction, brand detection,
//! and the full normalization pipeline.

pub mod expander;
pub mod heuristics;
pub mod normalizer;
pub mod size;
pub mod words;

pub use expander::AbbreviationExpander;
pub use normalizer::TextNormalizer;
