use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use aes::Aes;
use cipher_modes::{CipherModes, Mode};
use des::Des;

fn bench_blocks(c: &mut Criterion) {
    let aes128 = Aes::new(&[0x2b; 16]).unwrap();
    let aes256 = Aes::new(&[0x2b; 32]).unwrap();
    let des = Des::new(b"8bytekey").unwrap();

    let mut group = c.benchmark_group("single_block");
    group.bench_function("aes128_encrypt", |b| b.iter(|| aes128.encrypt_block(black_box(&[0x11; 16]))));
    group.bench_function("aes128_decrypt", |b| b.iter(|| aes128.decrypt_block(black_box(&[0x11; 16]))));
    group.bench_function("aes256_encrypt", |b| b.iter(|| aes256.encrypt_block(black_box(&[0x11; 16]))));
    group.bench_function("des_encrypt", |b| b.iter(|| des.encrypt_block(black_box(&[0x11; 8]))));
    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let cipher = Aes::new(&[0x2b; 16]).unwrap();
    let iv = [0x42u8; 16];
    let message = vec![0x5au8; 4096];

    let mut group = c.benchmark_group("aes128_4k");
    group.throughput(Throughput::Bytes(message.len() as u64));
    for mode in [Mode::Ecb, Mode::Cbc] {
        group.bench_function(mode.to_string(), |b| {
            b.iter(|| CipherModes::encrypt(&cipher, black_box(&message), mode, Some(&iv)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_blocks, bench_modes);
criterion_main!(benches);
