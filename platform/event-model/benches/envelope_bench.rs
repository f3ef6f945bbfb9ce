use criterion::{black_box, criterion_group, criterion_main, Criterion};
use event_model::{Event, Status};

fn bench_construct(c: &mut Criterion) {
    c.bench_function("event_new", |b| {
        b.iter(|| {
            Event::<String>::new(
                black_box("org1".to_string()),
                black_box("employees".to_string()),
                black_box("GET_ALL_EMPLOYEES".to_string()),
                black_box("tokenA".to_string()),
            )
        })
    });
}

fn bench_json_round_trip(c: &mut Criterion) {
    let mut event = Event::new(
        "org1".to_string(),
        "employees".to_string(),
        "GET_ALL_EMPLOYEES".to_string(),
        "tokenA".to_string(),
    )
    .with_status(Status::Success);
    for i in 0..16 {
        event.add_data(format!("employee record {i}"));
    }

    c.bench_function("event_json_round_trip", |b| {
        b.iter(|| {
            let json = event.to_json().unwrap();
            let decoded: Event<String> = Event::from_json(black_box(&json)).unwrap();
            decoded
        })
    });
}

criterion_group!(benches, bench_construct, bench_json_round_trip);
criterion_main!(benches);
