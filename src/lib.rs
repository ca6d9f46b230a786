//! Sangam Algo - Compatibility engine for the Sangam matchmaking app
//!
//! This library provides the pairwise compatibility scoring and candidate
//! ranking used by the Sangam app: seven category scorers, a weighted
//! aggregator with human-readable explanations, and a deterministic ranking
//! pipeline with a swappable quality/tier adjustment stage.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    CompatibilityEngine, EngineError, QualityTierAdjustment, Ranker, ScoreAdjustment,
};
pub use crate::models::{
    CompatibilityResult, CompatibilityWeights, Profile, RankedCandidate, WeightOverrides,
};
