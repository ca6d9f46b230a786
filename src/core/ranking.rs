use crate::core::compatibility::{CompatibilityEngine, EngineError};
use crate::models::{AccountTier, Profile, RankedCandidate};
use std::sync::Arc;

/// Quality penalties never push an adjusted score below this floor
const MIN_ADJUSTED_SCORE: f64 = 10.0;
const MAX_ADJUSTED_SCORE: f64 = 99.0;

/// Post-processing stage applied to the raw compatibility total.
///
/// Business-policy adjustments (quality boost, tier nudge) live behind this
/// trait so they can evolve independently of the compatibility heuristics.
pub trait ScoreAdjustment: Send + Sync {
    fn adjust(&self, raw_score: f64, candidate: &Profile) -> f64;
}

/// Default policy: profile-quality boost plus a small account-tier nudge
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityTierAdjustment;

impl ScoreAdjustment for QualityTierAdjustment {
    fn adjust(&self, raw_score: f64, candidate: &Profile) -> f64 {
        let quality = candidate.quality() as f64;
        let mut adjusted = raw_score;

        if quality > 5.0 {
            adjusted = (adjusted + ((quality - 5.0) * 1.5).min(7.0)).min(MAX_ADJUSTED_SCORE);
        } else if quality < 5.0 {
            adjusted = (adjusted - (5.0 - quality) * 2.0).max(MIN_ADJUSTED_SCORE);
        }

        let nudge = match candidate.tier() {
            AccountTier::Elite => 1.0,
            AccountTier::Premium => 0.5,
            _ => 0.0,
        };

        (adjusted + nudge).min(MAX_ADJUSTED_SCORE)
    }
}

/// The ranking pipeline: compatibility per candidate, policy adjustment,
/// then a deterministic multi-key sort.
#[derive(Clone)]
pub struct Ranker {
    engine: CompatibilityEngine,
    adjustment: Arc<dyn ScoreAdjustment>,
}

impl Ranker {
    pub fn new(engine: CompatibilityEngine) -> Self {
        Self::with_adjustment(engine, Arc::new(QualityTierAdjustment))
    }

    pub fn with_adjustment(engine: CompatibilityEngine, adjustment: Arc<dyn ScoreAdjustment>) -> Self {
        Self { engine, adjustment }
    }

    pub fn with_default_weights() -> Self {
        Self::new(CompatibilityEngine::with_default_weights())
    }

    pub fn engine(&self) -> &CompatibilityEngine {
        &self.engine
    }

    /// Order candidates for presentation against a reference profile.
    ///
    /// Sort keys, descending: adjusted score, profile quality, spiritual
    /// sub-score, unique-strength count. The sort is stable, so candidates
    /// tied on all four keys keep their input order.
    pub fn rank_candidates(
        &self,
        reference: &Profile,
        candidates: Vec<Profile>,
    ) -> Result<Vec<RankedCandidate>, EngineError> {
        let mut ranked = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let compatibility = self.engine.calculate(reference, &candidate, None)?;
            let adjusted = self
                .adjustment
                .adjust(compatibility.total_score as f64, &candidate);
            let adjusted_score = adjusted.round().clamp(0.0, MAX_ADJUSTED_SCORE) as u8;

            ranked.push(RankedCandidate {
                profile: candidate,
                compatibility,
                adjusted_score,
            });
        }

        ranked.sort_by(|a, b| {
            b.adjusted_score
                .cmp(&a.adjusted_score)
                .then_with(|| b.profile.quality().cmp(&a.profile.quality()))
                .then_with(|| {
                    b.compatibility
                        .breakdown
                        .spiritual
                        .cmp(&a.compatibility.breakdown.spiritual)
                })
                .then_with(|| {
                    b.compatibility
                        .unique_strengths
                        .len()
                        .cmp(&a.compatibility.unique_strengths.len())
                })
        });

        Ok(ranked)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
