// Criterion benchmarks for Nosh Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nosh_algo::core::{distance::haversine_distance, RankingEngine};
use nosh_algo::models::{Coordinate, UserProfile, Venue};
use std::collections::HashMap;

const USER_LOCATION: Coordinate = Coordinate {
    latitude: 25.0173,
    longitude: 121.5397,
};

fn create_venue(id: usize) -> Venue {
    let cuisines = ["taiwanese", "japanese", "italian", ""];

    Venue {
        osm_id: id as i64,
        name: format!("Venue {}", id),
        category: if id % 3 == 0 { "cafe" } else { "restaurant" }.to_string(),
        cuisine: cuisines[id % cuisines.len()].to_string(),
        latitude: Some(25.0173 + (id % 100) as f64 * 0.0004),
        longitude: Some(121.5397 + (id % 50) as f64 * 0.0006),
        tags: HashMap::new(),
    }
}

fn create_profile() -> UserProfile {
    UserProfile {
        cuisines: vec!["taiwanese".to_string()],
        health_goals: vec!["light".to_string()],
        extra: HashMap::new(),
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    let target = Coordinate {
        latitude: 25.02,
        longitude: 121.55,
    };

    c.bench_function("haversine_distance", |b| {
        b.iter(|| haversine_distance(black_box(USER_LOCATION), black_box(target)));
    });
}

fn bench_rank(c: &mut Criterion) {
    let engine = RankingEngine::with_default_weights();
    let profile = create_profile();

    let mut group = c.benchmark_group("rank");
    for size in [50usize, 200, 1000] {
        let venues: Vec<Venue> = (0..size).map(create_venue).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &venues, |b, venues| {
            b.iter(|| {
                engine.rank(
                    black_box(&profile),
                    black_box(USER_LOCATION),
                    venues.clone(),
                    10,
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_haversine_distance, bench_rank);
criterion_main!(benches);
