use criterion::{black_box, criterion_group, criterion_main, Criterion};
use soiree_foundation::{CardGeometry, Carousel, CarouselConfig, RevealGroup, RevealSpec};

fn carousel_drag_and_settle(c: &mut Criterion) {
    let geometry = CardGeometry::new(280.0, 20.0, 12, 3);

    c.bench_function("carousel_drag_and_settle", |b| {
        b.iter(|| {
            let mut carousel = Carousel::new(geometry, CarouselConfig::default());
            carousel.pointer_down(600.0, 0.0);
            for frame in 1..=30u32 {
                let t = f64::from(frame) * 16.0;
                carousel.pointer_move(600.0 - frame as f32 * 12.0, t);
            }
            carousel.pointer_up(480.0);
            let mut now = 480.0;
            while carousel.tick(now).is_some() {
                now += 16.0;
            }
            black_box(carousel.offset())
        });
    });
}

fn reveal_schedule(c: &mut Criterion) {
    c.bench_function("reveal_schedule_faq", |b| {
        b.iter(|| {
            let mut group = RevealGroup::new(RevealSpec::faq(), black_box(12));
            black_box(group.on_intersection(true))
        });
    });
}

criterion_group!(benches, carousel_drag_and_settle, reveal_schedule);
criterion_main!(benches);
