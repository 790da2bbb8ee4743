use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use kuznyechik_core::Kuznyechik;
use kuznyechik_modes::{apply_gamma, generate_tag};

fn bench_block(c: &mut Criterion) {
    let cipher = Kuznyechik::new();
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key = [0u8; 32];
    rng.fill_bytes(&mut key);
    let keys = cipher.derive_round_keys(&key).expect("32-byte key");

    let mut group = c.benchmark_group("block");
    group.bench_function("derive_round_keys", |b| {
        b.iter(|| cipher.derive_round_keys(&key).expect("32-byte key"));
    });
    group.bench_function("encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| cipher.encrypt_block(&block, &keys).expect("16-byte block"));
    });
    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let cipher = Kuznyechik::new();
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut key = [0u8; 32];
    rng.fill_bytes(&mut key);
    let keys = cipher.derive_round_keys(&key).expect("32-byte key");

    let mut data = vec![0u8; 1024];
    rng.fill_bytes(&mut data);
    let mut sync = [0u8; 8];
    rng.fill_bytes(&mut sync);

    let mut group = c.benchmark_group("modes");
    group.sample_size(20);
    group.bench_function("gamma_1k", |b| {
        b.iter(|| apply_gamma(&cipher, &data, &sync, &keys).expect("aligned data"));
    });
    group.bench_function("imito_1k", |b| {
        b.iter(|| generate_tag(&cipher, &data, &keys).expect("aligned data"));
    });
    group.finish();
}

criterion_group!(benches, bench_block, bench_modes);
criterion_main!(benches);
