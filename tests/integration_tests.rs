// Integration tests for the ranking pipeline

use chrono::NaiveDate;
use sangam_algo::models::{AccountTier, Diet, Philosophy, TempleFrequency};
use sangam_algo::{Profile, Ranker};

fn profile(id: &str) -> Profile {
    serde_json::from_str(&format!(r#"{{"profileId":"{}"}}"#, id)).unwrap()
}

fn devotee(id: &str) -> Profile {
    let mut p = profile(id);
    p.spiritual_practices = vec!["Meditation".to_string(), "Japa".to_string()];
    p.spiritual_orgs = vec!["ISKCON".to_string()];
    p.temple_frequency = Some(TempleFrequency::Weekly);
    p.diet = Some(Diet::Vegetarian);
    p.artha_vs_moksha = Some(Philosophy::MokshaFocused);
    p.birthdate = NaiveDate::from_ymd_opt(1992, 3, 14);
    p.city = Some("Vrindavan".to_string());
    p.state = Some("Uttar Pradesh".to_string());
    p.country = Some("India".to_string());
    p
}

fn skeptic(id: &str) -> Profile {
    let mut p = profile(id);
    p.spiritual_practices = vec!["None".to_string()];
    p.temple_frequency = Some(TempleFrequency::Never);
    p.diet = Some(Diet::NonVegetarian);
    p.artha_vs_moksha = Some(Philosophy::ArthaFocused);
    p
}

#[test]
fn test_end_to_end_ranking_orders_by_fit() {
    let ranker = Ranker::with_default_weights();
    let reference = devotee("ref");

    let candidates = vec![
        skeptic("skeptic"),
        devotee("kindred"),
        profile("blank"),
    ];

    let ranked = ranker.rank_candidates(&reference, candidates).unwrap();

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].profile.profile_id, "kindred");
    assert!(
        ranked[0].adjusted_score > ranked[1].adjusted_score + 20,
        "the kindred spirit should lead by a wide margin"
    );

    for window in ranked.windows(2) {
        assert!(window[0].adjusted_score >= window[1].adjusted_score);
    }
}

#[test]
fn test_ranking_is_idempotent() {
    let ranker = Ranker::with_default_weights();
    let reference = devotee("ref");

    let candidates: Vec<Profile> = (0..10)
        .map(|i| {
            let mut c = devotee(&format!("c{}", i));
            c.quality_score = Some(3 + (i % 7) as u8);
            c.birthdate = NaiveDate::from_ymd_opt(1985 + i, 6, 1);
            c
        })
        .collect();

    let first = ranker
        .rank_candidates(&reference, candidates.clone())
        .unwrap();
    let second = ranker.rank_candidates(&reference, candidates).unwrap();

    let ids_first: Vec<&str> = first.iter().map(|r| r.profile.profile_id.as_str()).collect();
    let ids_second: Vec<&str> = second.iter().map(|r| r.profile.profile_id.as_str()).collect();
    assert_eq!(ids_first, ids_second);

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.adjusted_score, b.adjusted_score);
        assert_eq!(a.compatibility.total_score, b.compatibility.total_score);
    }
}

#[test]
fn test_quality_adjustment_is_monotonic() {
    let ranker = Ranker::with_default_weights();
    let reference = devotee("ref");

    // Identical compatibility content, differing only in quality score
    let mut modest = devotee("modest");
    modest.quality_score = Some(5);
    let mut polished = devotee("polished");
    polished.quality_score = Some(10);

    // Input order puts the lower-quality twin first; quality must still win
    let ranked = ranker
        .rank_candidates(&reference, vec![modest, polished])
        .unwrap();

    assert_eq!(ranked[0].profile.profile_id, "polished");
    assert!(ranked[0].adjusted_score >= ranked[1].adjusted_score);
    // The raw compatibility verdicts are untouched by the adjustment
    assert_eq!(
        ranked[0].compatibility.total_score,
        ranked[1].compatibility.total_score
    );
}

#[test]
fn test_low_quality_penalty_never_sinks_below_floor() {
    let ranker = Ranker::with_default_weights();
    let reference = devotee("ref");

    let mut weak = profile("weak");
    weak.quality_score = Some(1);

    let ranked = ranker.rank_candidates(&reference, vec![weak]).unwrap();
    assert!(ranked[0].adjusted_score >= 10);
    assert!(ranked[0].adjusted_score <= 99);
}

#[test]
fn test_elite_tier_breaks_quality_ties() {
    let ranker = Ranker::with_default_weights();
    let reference = devotee("ref");

    let standard = devotee("standard");
    let mut elite = devotee("elite");
    elite.account_tier = Some(AccountTier::Elite);

    let ranked = ranker
        .rank_candidates(&reference, vec![standard, elite])
        .unwrap();

    assert_eq!(ranked[0].profile.profile_id, "elite");
    assert_eq!(
        ranked[0].adjusted_score,
        ranked[1].adjusted_score + 1,
        "elite nudge is exactly one point"
    );
}

#[test]
fn test_fully_tied_candidates_preserve_input_order() {
    let ranker = Ranker::with_default_weights();
    let reference = devotee("ref");

    let candidates = vec![devotee("first"), devotee("second"), devotee("third")];
    let ranked = ranker.rank_candidates(&reference, candidates).unwrap();

    let ids: Vec<&str> = ranked.iter().map(|r| r.profile.profile_id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn test_spiritual_subscore_breaks_adjusted_ties() {
    // All-zero weights force every adjusted total to the same value, so the
    // sort has to fall through to the spiritual sub-score key.
    let zero_weights = sangam_algo::CompatibilityWeights {
        spiritual: 0.0,
        lifestyle: 0.0,
        psychological: 0.0,
        demographic: 0.0,
        preference: 0.0,
        semantic: 0.0,
        growth: 0.0,
    };
    let ranker = Ranker::new(sangam_algo::CompatibilityEngine::new(zero_weights));
    let reference = devotee("ref");

    let ranked = ranker
        .rank_candidates(
            &reference,
            vec![profile("blank"), skeptic("opposed"), devotee("aligned")],
        )
        .unwrap();

    assert_eq!(ranked[0].adjusted_score, ranked[1].adjusted_score);
    assert_eq!(ranked[1].adjusted_score, ranked[2].adjusted_score);

    let ids: Vec<&str> = ranked.iter().map(|r| r.profile.profile_id.as_str()).collect();
    assert_eq!(ids, vec!["aligned", "opposed", "blank"]);
}

#[test]
fn test_ranked_output_carries_explanations() {
    let ranker = Ranker::with_default_weights();
    let reference = devotee("ref");

    let ranked = ranker
        .rank_candidates(&reference, vec![devotee("kindred")])
        .unwrap();

    let verdict = &ranked[0].compatibility;
    assert!(!verdict.reasons.is_empty());
    assert!(verdict.reasons.len() <= 8);
    assert!(verdict.concerns.len() <= 4);
    assert!(verdict.unique_strengths.len() <= 3);
    assert!(verdict
        .unique_strengths
        .iter()
        .any(|s| s.contains("ISKCON")));
}
