// Example: a drag that stops half-way through the large header, then auto-snaps.
use collapsible_header::{HeaderEngine, HeaderOptions, LayoutRect, ScrollEvent, Tween};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut engine = HeaderEngine::new(HeaderOptions::new().with_large_header_exists(true));
    engine.on_large_header_layout(LayoutRect::from_size(390.0, 120.0), 0);

    // Simulate a 60fps finger drag from 0 to 80.
    let mut now_ms = 0u64;
    engine.on_scroll_begin_drag();
    for step in 1..=10 {
        now_ms += 16;
        engine.on_scroll(&ScrollEvent::at(step as f32 * 8.0), now_ms);
        engine.tick(now_ms);
    }
    engine.on_scroll_end_drag(now_ms);
    println!("released: {:?}", engine.snapshot());

    // Frame loop: wait for the settle window, then play the host's animated scroll.
    let mut scroll: Option<Tween> = None;
    for _ in 0..40 {
        now_ms += 16;
        if let Some(cmd) = engine.tick(now_ms) {
            println!("t={now_ms}ms snap to {}", cmd.offset);
            scroll = Some(Tween::new(
                engine.scroll_offset(),
                cmd.offset,
                now_ms,
                300,
                Default::default(),
            ));
        }
        if let Some(tween) = scroll {
            engine.on_scroll(&ScrollEvent::at(tween.sample(now_ms)), now_ms);
            if tween.is_done(now_ms) {
                scroll = None;
            }
        }
        if now_ms % 80 == 0 {
            println!(
                "t={now_ms}ms off={:.1} nav={:.2} large={:.2}",
                engine.scroll_offset(),
                engine.nav_bar_visibility(),
                engine.large_header_opacity_value()
            );
        }
    }

    println!("done: {:?} snap={:?}", engine.snapshot(), engine.snap_state());
}
