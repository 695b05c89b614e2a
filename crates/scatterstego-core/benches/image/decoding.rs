use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba};
use scatterstego_core::{decode, ScatterEncoder};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let plain_image = ImageBuffer::from_fn(512, 512, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255])
        });
        let mut encoder = ScatterEncoder::new(plain_image);
        encoder
            .encode_text(&"Hello World!".repeat(100))
            .expect("Cannot write secret message");
        let img = encoder.into_carrier();

        b.iter(|| {
            assert_eq!(decode(&img).len(), 1200);
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
