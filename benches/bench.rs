// Criterion benchmarks for the Sangam compatibility engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sangam_algo::core::helpers::{profile_depth, text_similarity};
use sangam_algo::{CompatibilityEngine, Profile, Ranker};

fn candidate(id: usize) -> Profile {
    let mut p: Profile =
        serde_json::from_str(&format!(r#"{{"profileId":"{}"}}"#, id)).unwrap();
    p.spiritual_practices = vec!["Meditation".to_string(), "Japa".to_string()];
    p.spiritual_orgs = if id % 2 == 0 {
        vec!["ISKCON".to_string()]
    } else {
        vec!["Chinmaya Mission".to_string()]
    };
    p.temple_frequency = serde_json::from_str(match id % 5 {
        0 => "\"Daily\"",
        1 => "\"Weekly\"",
        2 => "\"Monthly\"",
        3 => "\"Rarely\"",
        _ => "\"Never\"",
    })
    .ok();
    p.diet = serde_json::from_str(if id % 3 == 0 {
        "\"Vegetarian\""
    } else {
        "\"Vegan\""
    })
    .ok();
    p.birthdate = chrono::NaiveDate::from_ymd_opt(1980 + (id % 20) as i32, 6, 15);
    p.city = Some(format!("City {}", id % 10));
    p.about_me = Some("Devoted to daily practice, community service and a simple life".to_string());
    p.quality_score = Some(3 + (id % 8) as u8);
    p
}

fn bench_calculate_compatibility(c: &mut Criterion) {
    let engine = CompatibilityEngine::with_default_weights();
    let reference = candidate(0);
    let other = candidate(1);

    c.bench_function("calculate_compatibility", |b| {
        b.iter(|| {
            engine
                .calculate(black_box(&reference), black_box(&other), None)
                .unwrap()
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();
    let reference = candidate(0);

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Profile> = (1..=*candidate_count).map(candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    ranker
                        .rank_candidates(black_box(&reference), black_box(candidates.clone()))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_text_similarity(c: &mut Criterion) {
    let a = "Devoted to daily meditation, temple service and the study of scripture";
    let b = "Daily meditation and scripture study shape my mornings before work";

    c.bench_function("text_similarity", |bench| {
        bench.iter(|| text_similarity(black_box(a), black_box(b)));
    });
}

fn bench_profile_depth(c: &mut Criterion) {
    let profile = candidate(7);

    c.bench_function("profile_depth", |b| {
        b.iter(|| profile_depth(black_box(&profile)));
    });
}

criterion_group!(
    benches,
    bench_calculate_compatibility,
    bench_ranking,
    bench_text_similarity,
    bench_profile_depth
);

criterion_main!(benches);
