use crate::core::scorers::{
    score_demographic, score_growth, score_lifestyle, score_preference, score_psychological,
    score_semantic, score_spiritual, shared_items, CategoryScore,
};
use crate::models::{
    CategoryBreakdown, CompatibilityResult, CompatibilityWeights, Philosophy, Profile,
    WeightOverrides,
};
use thiserror::Error;

/// Total score ceiling; a perfect 100 is never reported
const MAX_TOTAL_SCORE: f64 = 99.0;

const MAX_REASONS: usize = 8;
const MAX_CONCERNS: usize = 4;
const MAX_STRENGTHS: usize = 3;

/// Contract violations raised by the engine. Missing optional profile data
/// is never an error; a profile without an identifier is.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{role} profile is missing its identifier")]
    MissingProfileId { role: &'static str },
}

/// The compatibility aggregator: runs the seven category scorers and folds
/// them into a single weighted verdict.
#[derive(Debug, Clone)]
pub struct CompatibilityEngine {
    weights: CompatibilityWeights,
}

impl CompatibilityEngine {
    pub fn new(weights: CompatibilityWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: CompatibilityWeights::default(),
        }
    }

    pub fn weights(&self) -> &CompatibilityWeights {
        &self.weights
    }

    /// Score a candidate against a reference profile.
    ///
    /// `overrides` merges onto the engine's configured weights for this call
    /// only. Weights are not required to sum to 1.0; the total is clamped to
    /// [0, 99] regardless.
    pub fn calculate(
        &self,
        reference: &Profile,
        candidate: &Profile,
        overrides: Option<&WeightOverrides>,
    ) -> Result<CompatibilityResult, EngineError> {
        ensure_identified(reference, "reference")?;
        ensure_identified(candidate, "candidate")?;

        let weights = match overrides {
            Some(o) => self.weights.merged(o),
            None => self.weights,
        };

        let spiritual = score_spiritual(reference, candidate);
        let lifestyle = score_lifestyle(reference, candidate);
        let psychological = score_psychological(reference, candidate);
        let demographic = score_demographic(reference, candidate);
        let preference = score_preference(reference, candidate);
        let semantic = score_semantic(reference, candidate);
        let growth = score_growth(reference, candidate);

        let weighted_total = spiritual.score * weights.spiritual
            + lifestyle.score * weights.lifestyle
            + psychological.score * weights.psychological
            + demographic.score * weights.demographic
            + preference.score * weights.preference
            + semantic.score * weights.semantic
            + growth.score * weights.growth;

        let total_score = weighted_total.round().clamp(0.0, MAX_TOTAL_SCORE) as u8;

        // Fixed category order for explanation merging
        let categories = [
            &spiritual,
            &lifestyle,
            &psychological,
            &demographic,
            &preference,
            &semantic,
            &growth,
        ];
        let reasons = merge_explanations(&categories, |c| &c.reasons, MAX_REASONS);
        let concerns = merge_explanations(&categories, |c| &c.concerns, MAX_CONCERNS);

        let breakdown = CategoryBreakdown {
            spiritual: spiritual.score.round() as u8,
            lifestyle: lifestyle.score.round() as u8,
            psychological: psychological.score.round() as u8,
            demographic: demographic.score.round() as u8,
            preference: preference.score.round() as u8,
            semantic: semantic.score.round() as u8,
            growth: growth.score.round() as u8,
        };

        Ok(CompatibilityResult {
            total_score,
            breakdown,
            reasons,
            concerns,
            unique_strengths: identify_unique_strengths(reference, candidate),
        })
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn ensure_identified(profile: &Profile, role: &'static str) -> Result<(), EngineError> {
    if profile.profile_id.trim().is_empty() {
        return Err(EngineError::MissingProfileId { role });
    }
    Ok(())
}

fn merge_explanations<'a>(
    categories: &[&'a CategoryScore],
    pick: impl Fn(&'a CategoryScore) -> &'a Vec<String>,
    cap: usize,
) -> Vec<String> {
    let mut merged: Vec<String> = categories
        .iter()
        .flat_map(|c| pick(c).iter().cloned())
        .collect();
    merged.truncate(cap);
    merged
}

/// Standout signals worth surfacing even though they carry no weight in the
/// total. At most three, first match wins per rubric, in a fixed order.
pub fn identify_unique_strengths(reference: &Profile, candidate: &Profile) -> Vec<String> {
    let mut strengths = Vec::new();

    let shared_orgs = shared_items(&reference.spiritual_orgs, &candidate.spiritual_orgs);
    if let Some(org) = shared_orgs.first() {
        strengths.push(format!("Both engaged with {}", org));
    }

    if let (Some(rank_a), Some(rank_b)) = (
        reference.annual_income.and_then(|i| i.rank()),
        candidate.annual_income.and_then(|i| i.rank()),
    ) {
        if (rank_a - rank_b).abs() <= 1 {
            strengths.push("Similar financial footing".to_string());
        }
    }

    if reference.artha_vs_moksha == Some(Philosophy::Balance)
        || candidate.artha_vs_moksha == Some(Philosophy::Balance)
    {
        strengths.push("A balanced artha-moksha outlook anchors the match".to_string());
    }

    let same = |a: &Option<String>, b: &Option<String>| match (a, b) {
        (Some(x), Some(y)) => x.eq_ignore_ascii_case(y),
        _ => false,
    };
    if same(&reference.city, &candidate.city) {
        strengths.push("Rooted in the same city".to_string());
    } else if same(&reference.state, &candidate.state) {
        strengths.push("Rooted in the same state".to_string());
    }

    strengths.truncate(MAX_STRENGTHS);
    strengths
}
