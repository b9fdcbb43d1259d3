use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;
use zune_hdc::{HdcDecoder, HdcEncoder};

const WIDTH: usize = 512;
const HEIGHT: usize = 512;

fn synthetic_image() -> Vec<u8> {
    (0..HEIGHT)
        .flat_map(|y| {
            (0..WIDTH).flat_map(move |x| {
                [
                    ((x * 3 + y) % 256) as u8,
                    ((x ^ y) & 0xF0) as u8,
                    ((x * y) >> 8) as u8
                ]
            })
        })
        .collect()
}

fn encode_zune_hdc(pixels: &[u8]) -> Vec<u8> {
    let mut sink = vec![];
    HdcEncoder::new(pixels, EncoderOptions::new(WIDTH, HEIGHT, ColorSpace::RGB))
        .encode(&mut sink)
        .unwrap();
    sink
}

fn decode_zune_hdc(data: &[u8]) -> Vec<u8> {
    HdcDecoder::new(ZCursor::new(data)).decode().unwrap()
}

fn bench_encode_decode(c: &mut Criterion) {
    let pixels = synthetic_image();
    let encoded = encode_zune_hdc(&pixels);

    let mut group = c.benchmark_group("hdc: Synthetic 512x512");

    group.throughput(Throughput::Bytes(pixels.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| black_box(encode_zune_hdc(pixels.as_slice())))
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(decode_zune_hdc(encoded.as_slice())))
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_encode_decode);

criterion_main!(benches);
