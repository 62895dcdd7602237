//! Record types exchanged between engine components.
//!
//! One concern per file, all serde-serializable so every record can flow
//! through the file-backed stores unchanged.

pub mod brand;
pub mod feedback;
pub mod matching;
pub mod normalization;
