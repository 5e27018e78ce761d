//! Benchmarks for the token mint/validate hot paths

use std::collections::BTreeMap;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gatehouse_auth_core::TokenIssuer;

fn bench_token_operations(c: &mut Criterion) {
    let issuer = TokenIssuer::new(b"benchmark-secret-0123456789abcdef", Duration::from_secs(3600));

    c.bench_function("token_mint", |b| {
        b.iter(|| issuer.mint(black_box("alice"), BTreeMap::new()).unwrap());
    });

    let token = issuer.mint("alice", BTreeMap::new()).unwrap();

    c.bench_function("token_decode", |b| {
        b.iter(|| issuer.decode(black_box(&token)).unwrap());
    });

    c.bench_function("token_decode_invalid", |b| {
        b.iter(|| issuer.decode(black_box("not.a.token")).unwrap_err());
    });
}

criterion_group!(benches, bench_token_operations);
criterion_main!(benches);
