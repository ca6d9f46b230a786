// Unit tests for the Sangam compatibility engine

use chrono::NaiveDate;
use sangam_algo::core::helpers::{age_years_on, text_similarity};
use sangam_algo::core::{
    score_demographic, score_growth, score_lifestyle, score_preference, score_psychological,
    score_semantic, score_spiritual, CompatibilityEngine,
};
use sangam_algo::models::{Diet, Philosophy, TempleFrequency};
use sangam_algo::{Profile, WeightOverrides};

fn profile(id: &str) -> Profile {
    serde_json::from_str(&format!(r#"{{"profileId":"{}"}}"#, id)).unwrap()
}

/// The reference fixture: a devoted practitioner with a complete profile
fn devotee(id: &str) -> Profile {
    let mut p = profile(id);
    p.spiritual_practices = vec!["Meditation".to_string(), "Japa".to_string()];
    p.spiritual_orgs = vec!["ISKCON".to_string()];
    p.temple_frequency = Some(TempleFrequency::Weekly);
    p.diet = Some(Diet::Vegetarian);
    p.artha_vs_moksha = Some(Philosophy::MokshaFocused);
    p.birthdate = NaiveDate::from_ymd_opt(1992, 3, 14);
    p.city = Some("Mayapur".to_string());
    p.state = Some("West Bengal".to_string());
    p.country = Some("India".to_string());
    p
}

#[test]
fn test_all_category_scores_bounded() {
    let scorers = [
        score_spiritual,
        score_lifestyle,
        score_psychological,
        score_demographic,
        score_preference,
        score_semantic,
        score_growth,
    ];

    let full = devotee("full");
    let empty = profile("empty");
    let mut divergent = profile("div");
    divergent.spiritual_practices = vec!["None".to_string()];
    divergent.diet = Some(Diet::NonVegetarian);
    divergent.artha_vs_moksha = Some(Philosophy::ArthaFocused);

    for (a, b) in [
        (&full, &full),
        (&full, &empty),
        (&empty, &full),
        (&full, &divergent),
        (&empty, &empty),
    ] {
        for scorer in scorers {
            let result = scorer(a, b);
            assert!(
                (0.0..=100.0).contains(&result.score),
                "category score {} out of [0, 100]",
                result.score
            );
        }
    }
}

#[test]
fn test_total_score_bounded() {
    let engine = CompatibilityEngine::with_default_weights();
    let full = devotee("full");
    let empty = profile("empty");

    for (a, b) in [(&full, &full), (&full, &empty), (&empty, &empty)] {
        let result = engine.calculate(a, b, None).unwrap();
        assert!(result.total_score <= 99);
    }
}

#[test]
fn test_identical_spiritual_profiles_score_high() {
    let engine = CompatibilityEngine::with_default_weights();
    let reference = devotee("ref");
    let candidate = devotee("cand");

    let result = engine.calculate(&reference, &candidate, None).unwrap();

    assert!(
        result.breakdown.spiritual >= 80,
        "spiritual sub-score was {}",
        result.breakdown.spiritual
    );
    assert!(result.total_score > 70, "total was {}", result.total_score);
}

#[test]
fn test_divergent_spiritual_profiles_score_low() {
    let engine = CompatibilityEngine::with_default_weights();

    let mut reference = profile("ref");
    reference.spiritual_practices = vec!["Meditation".to_string(), "Yoga".to_string()];
    reference.diet = Some(Diet::Vegan);
    reference.artha_vs_moksha = Some(Philosophy::MokshaFocused);

    let mut candidate = profile("cand");
    candidate.spiritual_practices = vec!["None".to_string()];
    candidate.diet = Some(Diet::NonVegetarian);
    candidate.artha_vs_moksha = Some(Philosophy::ArthaFocused);

    let result = engine.calculate(&reference, &candidate, None).unwrap();

    assert!(
        result.breakdown.spiritual <= 30,
        "spiritual sub-score was {}",
        result.breakdown.spiritual
    );
    // A weak spiritual match must not drag the whole verdict: the weighted
    // total stays below the unweighted lifestyle + psychological sub-scores
    let ceiling = result.breakdown.lifestyle as u16 + result.breakdown.psychological as u16 + 1;
    assert!((result.total_score as u16) < ceiling);
}

#[test]
fn test_weight_override_shifts_total() {
    let engine = CompatibilityEngine::with_default_weights();
    let reference = devotee("ref");
    let candidate = devotee("cand");

    let baseline = engine.calculate(&reference, &candidate, None).unwrap();

    // Drop the spiritual weight to zero; a spiritually perfect pair loses ground
    let overrides = WeightOverrides {
        spiritual: Some(0.0),
        ..Default::default()
    };
    let reweighted = engine
        .calculate(&reference, &candidate, Some(&overrides))
        .unwrap();

    assert!(reweighted.total_score < baseline.total_score);
}

#[test]
fn test_preference_category_reads_reference_side() {
    let mut with_notes = devotee("a");
    with_notes.partner_notes = Some(
        "Looking for a partner devoted to daily sadhana, vegetarian cooking and seva".to_string(),
    );
    let without_notes = devotee("b");

    let forward = score_preference(&with_notes, &without_notes);
    let backward = score_preference(&without_notes, &with_notes);

    assert!(forward.score > backward.score);
}

#[test]
fn test_missing_fields_never_panic() {
    let engine = CompatibilityEngine::with_default_weights();
    let empty_a = profile("a");
    let empty_b = profile("b");

    let result = engine.calculate(&empty_a, &empty_b, None).unwrap();
    assert!(result.total_score <= 99);
    assert!(result.unique_strengths.is_empty());
}

#[test]
fn test_age_calculation_boundaries() {
    let birthdate = NaiveDate::from_ymd_opt(1988, 12, 31).unwrap();

    let day_before = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
    assert_eq!(age_years_on(birthdate, day_before), 35);

    let birthday = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    assert_eq!(age_years_on(birthdate, birthday), 36);
}

#[test]
fn test_text_similarity_threshold() {
    let a = "devoted temple service and morning meditation practice";
    let b = "morning meditation practice with temple service weekly";

    assert!(text_similarity(a, b) > 0.3);
    assert!(text_similarity(a, "completely unrelated sentence about cricket scores") < 0.3);
}
