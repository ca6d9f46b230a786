// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AccountTier, CategoryBreakdown, CompatibilityResult, CompatibilityWeights, Diet,
    IncomeBracket, Philosophy, Profile, RankedCandidate, TempleFrequency, VanaprasthaInterest,
    WeightOverrides,
};
pub use requests::{RankRequest, ScoreRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse};
