use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba};
use scatterstego_core::{CodecOptions, ScatterEncoder};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let plain_image = ImageBuffer::from_fn(512, 512, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255])
        });
        let secret_message = "Hello World!".repeat(100);

        b.iter(|| {
            ScatterEncoder::with_options(plain_image.clone(), &CodecOptions::with_gap_seed(1))
                .encode_text(&secret_message)
                .map(|_| ())
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
