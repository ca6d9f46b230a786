use crate::models::{Profile, WeightOverrides};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score one candidate against a reference profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub reference: Profile,
    pub candidate: Profile,
    #[serde(default)]
    pub weights: Option<WeightOverrides>,
}

/// Request to rank a pre-filtered candidate pool for a reference profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    pub reference: Profile,
    #[validate(length(min = 1, max = 500))]
    pub candidates: Vec<Profile>,
    #[serde(default)]
    pub limit: Option<u16>,
}
