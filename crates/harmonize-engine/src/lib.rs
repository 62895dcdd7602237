//! # harmonize-engine
//!
//! Single entry point over the normalization-and-learning core. The engine
//! owns one shared instance of each component and exposes the operations
//! the hosting API layer calls.

pub mod engine;

pub use engine::{HarmonizeEngine, MatchRequest};
