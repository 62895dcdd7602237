//! # harmonize-knowledge
//!
//! The brand/abbreviation knowledge base: static FMCG tables seeded at
//! startup, a learned table grown through the feedback loop, and the
//! file-backed snapshot stores behind both the knowledge base and the
//! learning subsystem.

pub mod knowledge;
pub mod statics;
pub mod store;

pub use knowledge::{BrandKnowledgeBase, CustomDictionary, LearnedSnapshot};
pub use store::{JsonFileStore, MemoryStore};
