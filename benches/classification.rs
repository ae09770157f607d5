use criterion::{black_box, criterion_group, criterion_main, Criterion};
use faultline::mappers::{
    map_ai_error, map_database_error, map_unknown_source, RawAiError, RawDbError,
};
use faultline::normalize::normalize_failure;
use serde_json::json;

fn mapper_hot_path(c: &mut Criterion) {
    let db = RawDbError::new("23505", "duplicate key value violates unique constraint");
    c.bench_function("map_database_error/sqlstate", |b| {
        b.iter(|| map_database_error(black_box(&db)))
    });

    let ai = RawAiError::new(429, "Number of requests exceeds your rate limit");
    c.bench_function("map_ai_error/status", |b| {
        b.iter(|| map_ai_error(black_box(&ai)))
    });

    let unknown = json!({"status": 503, "message": "service unavailable"});
    c.bench_function("map_unknown_source/dispatch", |b| {
        b.iter(|| map_unknown_source(black_box(&unknown)))
    });
}

fn normalizer_hot_path(c: &mut Criterion) {
    let runtime = json!({"message": "A server with the specified hostname could not be found"});
    c.bench_function("normalize_failure/runtime_text", |b| {
        b.iter(|| normalize_failure(black_box(&runtime)))
    });

    let envelope = json!({
        "success": false,
        "error": {"code": "FL-AI-004", "message": "busy", "retryable": true}
    });
    c.bench_function("normalize_failure/envelope", |b| {
        b.iter(|| normalize_failure(black_box(&envelope)))
    });
}

criterion_group!(benches, mapper_hot_path, normalizer_hot_path);
criterion_main!(benches);
