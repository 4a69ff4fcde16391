use criterion::{criterion_group, criterion_main, Criterion};
use ninepatch::{NinePatch, Pixmap, Rgba8, Sampling};

fn framed_patch() -> NinePatch {
    let mut img = Pixmap::new(34, 34);
    for y in 1..33 {
        for x in 1..33 {
            img.set_pixel(x, y, Rgba8::new((x * 7) as u8, (y * 7) as u8, 128, 255));
        }
    }
    for i in 9..25 {
        img.set_pixel(i, 0, Rgba8::BLACK);
        img.set_pixel(0, i, Rgba8::BLACK);
    }
    NinePatch::from_pixmap(img, true, false).unwrap()
}

fn bench_draw(c: &mut Criterion) {
    let np = framed_patch();

    c.bench_function("draw_256x256_nearest", |b| {
        let mut target = Pixmap::new(256, 256);
        b.iter(|| np.draw(&mut target, 0, 0, 256, 256, Sampling::Nearest));
    });

    c.bench_function("draw_256x256_bilinear", |b| {
        let mut target = Pixmap::new(256, 256);
        b.iter(|| np.draw(&mut target, 0, 0, 256, 256, Sampling::Bilinear));
    });

    c.bench_function("decode_34x34", |b| {
        b.iter(|| {
            let mut img = Pixmap::new(34, 34);
            for i in 9..25 {
                img.set_pixel(i, 0, Rgba8::BLACK);
                img.set_pixel(0, i, Rgba8::BLACK);
            }
            NinePatch::from_pixmap(img, true, false).unwrap()
        });
    });
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
