// Criterion benchmarks for Geomatch

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use geomatch::core::{ZoneMatcher, distance::{haversine_distance, calculate_bounding_box}, radius::within_radius};
use geomatch::models::{EventListing, Location};

fn create_event(id: usize, lat: f64, lon: f64) -> EventListing {
    EventListing {
        id: id.to_string(),
        title: format!("Plateau {}", id),
        date: None,
        location: Location::new(format!("Ville {}", id))
            .with_postal_code("75000")
            .with_coordinates(lat, lon),
    }
}

fn create_performer() -> Location {
    Location::new("Paris").with_coordinates(48.8566, 2.3522)
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(48.8566),
                black_box(2.3522),
                black_box(45.7640),
                black_box(4.8357),
            )
        });
    });
}

fn bench_bounding_box(c: &mut Criterion) {
    c.bench_function("bounding_box_calculation", |b| {
        b.iter(|| {
            calculate_bounding_box(
                black_box(48.8566),
                black_box(2.3522),
                black_box(50.0),
            )
        });
    });
}

fn bench_within_radius(c: &mut Criterion) {
    let performer = create_performer();
    let venue = Location::new("Lyon").with_coordinates(45.7640, 4.8357);

    c.bench_function("within_radius", |b| {
        b.iter(|| within_radius(black_box(&performer), black_box(&venue), black_box(400.0)));
    });
}

fn bench_zone_matching(c: &mut Criterion) {
    let matcher = ZoneMatcher::default();
    let performer = create_performer();

    let mut group = c.benchmark_group("zone_matching");

    for event_count in [10, 50, 100, 500, 1000].iter() {
        let events: Vec<EventListing> = (0..*event_count)
            .map(|i| {
                let lat_offset = (i as f64 * 0.01) % 5.0;
                let lon_offset = (i as f64 * 0.013) % 5.0;
                create_event(i, 48.8566 - 2.5 + lat_offset, 2.3522 - 2.5 + lon_offset)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("events_in_zone", event_count),
            event_count,
            |b, _| {
                b.iter(|| {
                    matcher.events_in_zone(
                        black_box(&performer),
                        black_box(80.0),
                        black_box(events.clone()),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_bounding_box,
    bench_within_radius,
    bench_zone_matching
);

criterion_main!(benches);
