use crate::models::{Profile, TempleFrequency, VanaprasthaInterest};
use chrono::{Datelike, NaiveDate, Utc};
use std::collections::HashSet;

/// Keywords scanned for in favorite-quote texts by the semantic scorer
pub const SPIRITUAL_KEYWORDS: &[&str] = &[
    "love",
    "peace",
    "meditation",
    "dharma",
    "karma",
    "soul",
    "divine",
    "consciousness",
    "enlightenment",
    "truth",
    "wisdom",
    "compassion",
];

/// Complementary profession pairs awarded a synergy bonus
const SYNERGY_PAIRS: &[(&str, &str)] = &[
    ("doctor", "pharmacist"),
    ("doctor", "nurse"),
    ("teacher", "counselor"),
    ("engineer", "architect"),
    ("lawyer", "accountant"),
    ("therapist", "social worker"),
];

/// Age in whole years, accounting for a birthday not yet reached this year
pub fn age_years(birthdate: NaiveDate) -> i32 {
    age_years_on(birthdate, Utc::now().date_naive())
}

pub fn age_years_on(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age.max(0)
}

/// Heuristic for how much effort went into filling out a profile (0-100).
///
/// Only meaningful when comparing two profiles against each other; never
/// surfaced as a standalone score.
pub fn profile_depth(profile: &Profile) -> f64 {
    let mut depth = 0.0;

    if profile.first_name.is_some() {
        depth += 5.0;
    }
    if profile.last_name.is_some() {
        depth += 5.0;
    }
    depth += text_field_depth(profile.about_me.as_deref(), 50, 10.0, 5.0);
    depth += text_field_depth(profile.partner_notes.as_deref(), 50, 10.0, 5.0);
    if !profile.spiritual_practices.is_empty() {
        depth += 10.0;
    }
    if !profile.spiritual_orgs.is_empty() {
        depth += 8.0;
    }
    if profile.favorite_quote.is_some() {
        depth += 7.0;
    }
    if profile.temple_frequency.is_some() {
        depth += 8.0;
    }
    if profile.artha_vs_moksha.is_some() {
        depth += 8.0;
    }
    if profile.education.is_some() {
        depth += 8.0;
    }
    if profile.profession.is_some() {
        depth += 8.0;
    }
    if profile.annual_income.is_some() {
        depth += 6.0;
    }
    depth += (profile.photo_urls.len() as f64 * 4.0).min(12.0);

    depth.min(100.0)
}

fn text_field_depth(text: Option<&str>, threshold: usize, full: f64, partial: f64) -> f64 {
    match text {
        Some(t) if t.len() >= threshold => full,
        Some(t) if !t.trim().is_empty() => partial,
        _ => 0.0,
    }
}

/// Heuristic for a member's spiritual engagement (0-100)
pub fn spiritual_depth(profile: &Profile) -> f64 {
    let mut depth = profile.spiritual_practices.len() as f64 * 10.0;

    depth += match profile.temple_frequency {
        Some(TempleFrequency::Daily) => 20.0,
        Some(TempleFrequency::Weekly) => 15.0,
        Some(TempleFrequency::Monthly) => 10.0,
        Some(TempleFrequency::Rarely) => 5.0,
        _ => 0.0,
    };

    depth += profile.spiritual_orgs.len() as f64 * 8.0;

    if profile.artha_vs_moksha.is_some() {
        depth += 15.0;
    }
    if matches!(
        profile.vanaprastha_interest,
        Some(VanaprasthaInterest::Yes) | Some(VanaprasthaInterest::No)
    ) {
        depth += 10.0;
    }
    if let Some(quote) = &profile.favorite_quote {
        depth += (quote.len() as f64 / 10.0).min(15.0);
    }

    depth.min(100.0)
}

/// Bag-of-words overlap between two free-text fields.
///
/// Counts only words longer than 3 characters; returns |common| / |union|.
pub fn text_similarity(a: &str, b: &str) -> f64 {
    let words_a = significant_words(a);
    let words_b = significant_words(b);

    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let common = words_a.intersection(&words_b).count() as f64;
    let union = words_a.union(&words_b).count() as f64;

    common / union
}

fn significant_words(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| w.len() > 3)
        .collect()
}

/// Bonus for complementary professions, plus a reason when a curated pair hits.
///
/// Callers only invoke this when both profiles carry profession and education.
pub fn professional_synergy(profession_a: &str, profession_b: &str) -> (f64, Option<String>) {
    let a = profession_a.to_lowercase();
    let b = profession_b.to_lowercase();

    for (left, right) in SYNERGY_PAIRS {
        if (a.contains(left) && b.contains(right)) || (a.contains(right) && b.contains(left)) {
            return (
                15.0,
                Some(format!("Complementary professions: {} and {}", left, right)),
            );
        }
    }

    (5.0, None)
}
