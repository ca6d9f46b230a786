// Core algorithm exports
pub mod compatibility;
pub mod helpers;
pub mod ranking;
pub mod scorers;

pub use compatibility::{identify_unique_strengths, CompatibilityEngine, EngineError};
pub use ranking::{QualityTierAdjustment, Ranker, ScoreAdjustment};
pub use scorers::{
    score_demographic, score_growth, score_lifestyle, score_preference, score_psychological,
    score_semantic, score_spiritual, CategoryScore,
};
