use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use kyros_portal::api::{PortalConfig, PortalEngine};
use kyros_portal::core::{Viewport, layout};
use kyros_portal::interaction::ActiveField;
use kyros_portal::render::NullRenderer;
use kyros_portal::scene::GoldDust;

fn bench_fragment_layout(c: &mut Criterion) {
    c.bench_function("fragment_layout_sweep_1k", |b| {
        b.iter(|| {
            for step in 0..1_000 {
                let progress = f64::from(step) / 1_000.0;
                for index in 0..4 {
                    black_box(layout(index, black_box(progress)));
                }
            }
        })
    });
}

fn bench_gold_dust_update(c: &mut Criterion) {
    let mut dust = GoldDust::new(600, 1);
    let mut time = 0.0;
    c.bench_function("gold_dust_update_600", |b| {
        b.iter(|| {
            time += 1.0 / 60.0;
            dust.update(black_box(time), Default::default());
        })
    });
}

fn bench_login_frame(c: &mut Criterion) {
    let config = PortalConfig::new(Viewport::new(1920, 1080));
    let mut engine = PortalEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.focus(ActiveField::Username);
    engine.set_username("paracelsus");

    c.bench_function("login_advance_and_render", |b| {
        b.iter(|| {
            let _ = engine.advance(Duration::from_millis(16));
            engine.render().expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_fragment_layout,
    bench_gold_dust_update,
    bench_login_frame
);
criterion_main!(benches);
