use crate::core::helpers::{
    age_years, professional_synergy, profile_depth, spiritual_depth, text_similarity,
    SPIRITUAL_KEYWORDS,
};
use crate::models::{Diet, Philosophy, Profile, VanaprasthaInterest};
use std::collections::HashSet;

/// Curated profession fields treated as compatible for lifestyle scoring
const PROFESSION_GROUPS: &[&[&str]] = &[
    &["doctor", "nurse", "healthcare", "medical", "pharmacist", "therapist"],
    &["teacher", "professor", "education", "academic", "counselor"],
    &["engineer", "developer", "software", "technical", "architect"],
    &["business", "entrepreneur", "manager", "finance", "accountant"],
    &["artist", "musician", "writer", "designer", "creative"],
];

/// One category's verdict: a bounded score plus its explanations
#[derive(Debug, Clone, Default)]
pub struct CategoryScore {
    pub score: f64,
    pub reasons: Vec<String>,
    pub concerns: Vec<String>,
}

impl CategoryScore {
    fn finish(mut self, score: f64) -> Self {
        self.score = score.clamp(0.0, 100.0);
        self
    }
}

/// Items present in both lists, case-insensitive, deduplicated,
/// preserving the order of the first list
pub(crate) fn shared_items(a: &[String], b: &[String]) -> Vec<String> {
    let b_lower: HashSet<String> = b.iter().map(|s| s.to_lowercase()).collect();
    let mut seen = HashSet::new();
    a.iter()
        .filter(|item| {
            let lower = item.to_lowercase();
            b_lower.contains(&lower) && seen.insert(lower)
        })
        .cloned()
        .collect()
}

fn compatible_diets(a: Diet, b: Diet) -> bool {
    matches!(
        (a, b),
        (Diet::Vegetarian, Diet::Vegan)
            | (Diet::Vegan, Diet::Vegetarian)
            | (Diet::Vegetarian, Diet::Eggetarian)
            | (Diet::Eggetarian, Diet::Vegetarian)
    )
}

fn same_profession_group(a: &str, b: &str) -> bool {
    PROFESSION_GROUPS.iter().any(|group| {
        group.iter().any(|kw| a.contains(kw)) && group.iter().any(|kw| b.contains(kw))
    })
}

/// Spiritual alignment: practices, organizations, temple habits, diet,
/// and the artha-moksha stance. Five independently capped sub-factors.
pub fn score_spiritual(reference: &Profile, candidate: &Profile) -> CategoryScore {
    let mut out = CategoryScore::default();
    let mut score = 0.0;

    // Practice overlap, up to 25 points scaled by |shared| / max(|A|, |B|)
    let shared_practices = shared_items(
        &reference.spiritual_practices,
        &candidate.spiritual_practices,
    );
    let larger = reference
        .spiritual_practices
        .len()
        .max(candidate.spiritual_practices.len());
    if larger > 0 && !shared_practices.is_empty() {
        score += 25.0 * shared_practices.len() as f64 / larger as f64;
        out.reasons.push(format!(
            "Share {} spiritual practice{}: {}",
            shared_practices.len(),
            if shared_practices.len() == 1 { "" } else { "s" },
            shared_practices.join(", ")
        ));
    }

    // Organization overlap, up to 20 points by the same ratio
    let shared_orgs = shared_items(&reference.spiritual_orgs, &candidate.spiritual_orgs);
    let larger_orgs = reference
        .spiritual_orgs
        .len()
        .max(candidate.spiritual_orgs.len());
    if larger_orgs > 0 && !shared_orgs.is_empty() {
        score += 20.0 * shared_orgs.len() as f64 / larger_orgs as f64;
        out.reasons
            .push(format!("Connected through {}", shared_orgs.join(", ")));
    }

    // Temple-frequency distance, up to 15 points
    if let (Some(freq_a), Some(rank_a)) = (
        reference.temple_frequency,
        reference.temple_frequency.and_then(|f| f.rank()),
    ) {
        if let Some(rank_b) = candidate.temple_frequency.and_then(|f| f.rank()) {
            let distance = (rank_a - rank_b).abs();
            score += match distance {
                0 => {
                    out.reasons
                        .push(format!("Visit the temple equally often ({})", freq_a));
                    15.0
                }
                1 => 10.0,
                d if d >= 3 => {
                    out.concerns
                        .push("Very different temple visit habits".to_string());
                    2.0
                }
                _ => 5.0,
            };
        }
    }

    // Diet compatibility, up to 20 points
    if let (Some(diet_a), Some(diet_b)) = (reference.diet, candidate.diet) {
        if diet_a != Diet::Unknown && diet_b != Diet::Unknown {
            if diet_a == diet_b {
                score += 20.0;
                out.reasons.push(format!("Same diet: {}", diet_a));
            } else if compatible_diets(diet_a, diet_b) {
                score += 12.0;
                out.reasons
                    .push(format!("Compatible diets: {} and {}", diet_a, diet_b));
            } else {
                score += 3.0;
                out.concerns
                    .push("Dietary preferences may clash".to_string());
            }
        }
    }

    // Philosophy alignment, up to 20 points
    if let (Some(phil_a), Some(phil_b)) = (reference.artha_vs_moksha, candidate.artha_vs_moksha) {
        if phil_a != Philosophy::Unknown && phil_b != Philosophy::Unknown {
            if phil_a == phil_b {
                score += 20.0;
                out.reasons
                    .push(format!("Aligned on a {} life philosophy", phil_a));
            } else if phil_a == Philosophy::Balance || phil_b == Philosophy::Balance {
                score += 15.0;
                out.reasons
                    .push("One of you seeks balance between artha and moksha".to_string());
            } else {
                score += 5.0;
                out.concerns
                    .push("Different outlooks on artha vs moksha".to_string());
            }
        }
    }

    out.finish(score)
}

/// Lifestyle fit: profession, income bracket, and vanaprastha stance
/// on top of a neutral base
pub fn score_lifestyle(reference: &Profile, candidate: &Profile) -> CategoryScore {
    let mut out = CategoryScore::default();
    let mut score = 40.0;

    // Profession compatibility, up to 25 points
    if let (Some(prof_a), Some(prof_b)) = (&reference.profession, &candidate.profession) {
        let a = prof_a.to_lowercase();
        let b = prof_b.to_lowercase();
        if a == b || a.contains(&b) || b.contains(&a) {
            score += 25.0;
            out.reasons.push(format!("Shared profession: {}", prof_a));
        } else if same_profession_group(&a, &b) {
            score += 20.0;
            out.reasons.push("Work in related fields".to_string());
        } else {
            score += 12.0;
        }
    }

    // Income-bracket distance, up to 15 points
    if let (Some(rank_a), Some(rank_b)) = (
        reference.annual_income.and_then(|i| i.rank()),
        candidate.annual_income.and_then(|i| i.rank()),
    ) {
        let distance = (rank_a - rank_b).abs();
        score += match distance {
            0 => {
                out.reasons.push("Same income bracket".to_string());
                15.0
            }
            1 => 12.0,
            d if d >= 3 => {
                out.concerns
                    .push("Large gap in income brackets".to_string());
                5.0
            }
            _ => 8.0,
        };
    }

    // Vanaprastha stance, up to 20 points
    if let (Some(van_a), Some(van_b)) = (
        reference.vanaprastha_interest,
        candidate.vanaprastha_interest,
    ) {
        if van_a != VanaprasthaInterest::Unknown && van_b != VanaprasthaInterest::Unknown {
            if van_a == van_b {
                score += 20.0;
                out.reasons
                    .push("Same stance on vanaprastha".to_string());
            } else if van_a == VanaprasthaInterest::Open || van_b == VanaprasthaInterest::Open {
                score += 15.0;
                out.reasons
                    .push("Open attitude toward vanaprastha".to_string());
            } else {
                score += 5.0;
                out.concerns
                    .push("Opposite views on vanaprastha".to_string());
            }
        }
    }

    out.finish(score)
}

/// Psychological fit: proxies for engagement and expressiveness
pub fn score_psychological(reference: &Profile, candidate: &Profile) -> CategoryScore {
    let mut out = CategoryScore::default();
    let mut score = 50.0;

    let depth_gap = (profile_depth(reference) - profile_depth(candidate)).abs();
    if depth_gap < 15.0 {
        score += 15.0;
        out.reasons
            .push("Similar level of profile engagement".to_string());
    } else if depth_gap > 30.0 {
        out.concerns
            .push("Very different levels of profile detail".to_string());
    }

    if let (Some(quote_a), Some(quote_b)) = (&reference.favorite_quote, &candidate.favorite_quote) {
        if (quote_a.len() as i64 - quote_b.len() as i64).abs() < 50 {
            score += 10.0;
        }
    }

    if let (Some(about_a), Some(about_b)) = (&reference.about_me, &candidate.about_me) {
        if (about_a.len() as i64 - about_b.len() as i64).abs() < 100 {
            score += 10.0;
            out.reasons
                .push("Express themselves in similar depth".to_string());
        }
    }

    out.finish(score)
}

/// Demographic fit: age gap, location, and height
pub fn score_demographic(reference: &Profile, candidate: &Profile) -> CategoryScore {
    let mut out = CategoryScore::default();
    let mut score = 0.0;

    // Age gap, up to 40 points
    if let (Some(birth_a), Some(birth_b)) = (reference.birthdate, candidate.birthdate) {
        let gap = (age_years(birth_a) - age_years(birth_b)).abs();
        if gap <= 2 {
            score += 40.0;
            out.reasons.push(format!(
                "Close in age ({} year{} apart)",
                gap,
                if gap == 1 { "" } else { "s" }
            ));
        } else if gap <= 5 {
            score += 30.0;
            out.reasons.push("Within five years of age".to_string());
        } else if gap <= 8 {
            score += 20.0;
        } else if gap <= 12 {
            score += 10.0;
        } else {
            out.concerns
                .push(format!("Notable age gap of {} years", gap));
        }
    }

    // Location, up to 35 points
    score += match location_tier(reference, candidate) {
        LocationTier::SameCity => {
            out.reasons.push("Live in the same city".to_string());
            35.0
        }
        LocationTier::SameState => {
            out.reasons.push("Live in the same state".to_string());
            20.0
        }
        LocationTier::SameCountry => 10.0,
        LocationTier::DifferentCountry => {
            out.concerns.push("Live in different countries".to_string());
            0.0
        }
        LocationTier::Incomparable => 0.0,
    };

    // Height gap, up to 25 points
    if let (Some(height_a), Some(height_b)) =
        (reference.height_in_inches(), candidate.height_in_inches())
    {
        let gap = (height_a - height_b).abs();
        score += if gap <= 3 {
            out.reasons.push("Similar height".to_string());
            25.0
        } else if gap <= 6 {
            20.0
        } else if gap <= 12 {
            12.0
        } else {
            5.0
        };
    }

    out.finish(score)
}

enum LocationTier {
    SameCity,
    SameState,
    SameCountry,
    DifferentCountry,
    Incomparable,
}

fn location_tier(reference: &Profile, candidate: &Profile) -> LocationTier {
    let same = |a: &Option<String>, b: &Option<String>| match (a, b) {
        (Some(x), Some(y)) => Some(x.eq_ignore_ascii_case(y)),
        _ => None,
    };

    match same(&reference.city, &candidate.city) {
        Some(true) => return LocationTier::SameCity,
        _ => {}
    }
    match same(&reference.state, &candidate.state) {
        Some(true) => return LocationTier::SameState,
        _ => {}
    }
    match same(&reference.country, &candidate.country) {
        Some(true) => LocationTier::SameCountry,
        Some(false) => LocationTier::DifferentCountry,
        None => LocationTier::Incomparable,
    }
}

/// Preference fit. Deliberately soft: no hard filters, just a generous base
/// plus small signals read primarily from the reference profile.
pub fn score_preference(reference: &Profile, candidate: &Profile) -> CategoryScore {
    let mut out = CategoryScore::default();
    let mut score = 70.0;

    if reference
        .partner_notes
        .as_deref()
        .map(|n| n.len() > 50)
        .unwrap_or(false)
    {
        score += 20.0;
        out.reasons
            .push("Detailed partner preferences on file".to_string());
    }

    if let (Some(birth_a), Some(birth_b)) = (reference.birthdate, candidate.birthdate) {
        if (age_years(birth_a) - age_years(birth_b)).abs() <= 5 {
            score += 10.0;
        }
    }

    out.finish(score)
}

/// Semantic fit: shared spiritual vocabulary in quotes and overlap between
/// the two self-descriptions
pub fn score_semantic(reference: &Profile, candidate: &Profile) -> CategoryScore {
    let mut out = CategoryScore::default();
    let mut score = 50.0;

    if let (Some(quote_a), Some(quote_b)) = (&reference.favorite_quote, &candidate.favorite_quote) {
        let a = quote_a.to_lowercase();
        let b = quote_b.to_lowercase();
        let shared: Vec<&str> = SPIRITUAL_KEYWORDS
            .iter()
            .filter(|kw| a.contains(**kw) && b.contains(**kw))
            .copied()
            .collect();

        if shared.len() >= 2 {
            score += 30.0;
            out.reasons.push(format!(
                "Favorite quotes share spiritual themes: {}",
                shared.join(", ")
            ));
        } else if shared.len() == 1 {
            score += 15.0;
            out.reasons.push(format!(
                "Favorite quotes share a spiritual theme: {}",
                shared[0]
            ));
        }
    }

    if let (Some(about_a), Some(about_b)) = (&reference.about_me, &candidate.about_me) {
        if text_similarity(about_a, about_b) > 0.3 {
            score += 20.0;
            out.reasons
                .push("Self-descriptions overlap strongly".to_string());
        }
    }

    out.finish(score)
}

/// Growth potential: closeness in spiritual maturity plus professional synergy
pub fn score_growth(reference: &Profile, candidate: &Profile) -> CategoryScore {
    let mut out = CategoryScore::default();
    let mut score = 60.0;

    let depth_gap = (spiritual_depth(reference) - spiritual_depth(candidate)).abs();
    if depth_gap < 20.0 {
        score += 25.0;
        out.reasons
            .push("Similar spiritual maturity".to_string());
    } else if depth_gap > 40.0 {
        out.concerns
            .push("Wide gap in spiritual engagement".to_string());
    }

    let both_have_career_data = reference.profession.is_some()
        && reference.education.is_some()
        && candidate.profession.is_some()
        && candidate.education.is_some();
    if both_have_career_data {
        let (bonus, reason) = professional_synergy(
            reference.profession.as_deref().unwrap_or_default(),
            candidate.profession.as_deref().unwrap_or_default(),
        );
        score += bonus;
        if let Some(reason) = reason {
            out.reasons.push(reason);
        }
    }

    out.finish(score)
}
