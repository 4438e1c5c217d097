use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use multibase::*;
use rand::{rngs::SmallRng, RngCore, SeedableRng};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = SmallRng::from_entropy();

    for encoding in ["base10", "base16_lower", "base32_lower", "base58_btc", "base64_url"] {
        c.bench_function(&format!("round-trip 32 {encoding}"), |b| {
            let setup = || {
                let mut data = [0; 32];
                rng.fill_bytes(&mut data);
                data
            };
            let routine = |bytes| {
                let encoded = encode(bytes, encoding);
                let decoded = encoded.as_deref().map(decode);
                (encoded, decoded)
            };
            b.iter_batched(setup, routine, BatchSize::SmallInput)
        });
    }

    c.bench_function("codec", |b| {
        let encoded = strict::encode(b"aftersun", "base58_btc");
        b.iter(|| codec(&encoded))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
