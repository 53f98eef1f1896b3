use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

fn measured_engine(height: f32) -> HeaderEngine {
    let mut e = HeaderEngine::new(HeaderOptions::new().with_large_header_exists(true));
    e.on_large_header_layout(LayoutRect::from_size(390.0, height), 0);
    e
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn threshold_boundary_biases_toward_large_header() {
    let mut e = measured_engine(100.0);
    assert_eq!(e.phase(), HeaderPhase::Expanded);

    e.on_scroll(&ScrollEvent::at(95.0), 0);
    assert_eq!(e.target_nav_bar_visibility(), 0.0);
    assert_eq!(e.phase(), HeaderPhase::Expanded);

    // 100 * 1.0 - 4 = 96: exactly at the threshold still counts as expanded.
    e.on_scroll(&ScrollEvent::at(96.0), 0);
    assert_eq!(e.target_nav_bar_visibility(), 0.0);

    e.on_scroll(&ScrollEvent::at(97.0), 0);
    assert_eq!(e.target_nav_bar_visibility(), 1.0);
    assert_eq!(e.phase(), HeaderPhase::Collapsed);
}

#[test]
fn fade_in_threshold_scales_with_header_height() {
    let mut e = HeaderEngine::new(
        HeaderOptions::new()
            .with_large_header_exists(true)
            .with_header_fade_in_threshold(0.5),
    );
    e.on_large_header_layout(LayoutRect::from_size(390.0, 200.0), 0);

    e.on_scroll(&ScrollEvent::at(96.0), 0);
    assert_eq!(e.phase(), HeaderPhase::Expanded);
    e.on_scroll(&ScrollEvent::at(96.5), 0);
    assert_eq!(e.phase(), HeaderPhase::Collapsed);
}

#[test]
fn unmeasured_large_header_forces_hidden_nav_bar() {
    let mut e = HeaderEngine::new(HeaderOptions::new().with_large_header_exists(true));
    assert_eq!(e.phase(), HeaderPhase::Unmeasured);

    for (now_ms, off) in [(0u64, 0.0f32), (16, 500.0), (300, 10_000.0)] {
        e.on_scroll(&ScrollEvent::at(off), now_ms);
        e.tick(now_ms);
        assert_eq!(e.nav_bar_visibility(), 0.0);
        assert_eq!(e.large_header_opacity_value(), 1.0);
    }

    // Below the adjustment offset still counts as unmeasured.
    e.on_large_header_layout(LayoutRect::from_size(390.0, 3.0), 400);
    e.tick(1_000);
    assert_eq!(e.phase(), HeaderPhase::Unmeasured);
    assert_eq!(e.nav_bar_visibility(), 0.0);
}

#[test]
fn collapsing_drops_to_zero_when_header_becomes_unmeasured() {
    let mut e = measured_engine(100.0);
    e.on_scroll(&ScrollEvent::at(300.0), 0);
    e.tick(250);
    assert_eq!(e.nav_bar_visibility(), 1.0);

    e.on_large_header_layout(LayoutRect::from_size(390.0, 0.0), 260);
    assert_eq!(e.phase(), HeaderPhase::Unmeasured);
    assert_eq!(e.nav_bar_visibility(), 0.0);
    assert!(!e.is_animating());
}

#[test]
fn nav_bar_eases_over_fade_duration() {
    let mut e = measured_engine(100.0);
    e.on_scroll(&ScrollEvent::at(150.0), 1_000);
    assert_eq!(e.nav_bar_visibility(), 0.0);
    assert!(e.is_animating());

    e.tick(1_125);
    assert!(approx(e.nav_bar_visibility(), 0.5));

    e.tick(1_249);
    assert!(e.nav_bar_visibility() < 1.0);

    e.tick(1_250);
    assert_eq!(e.nav_bar_visibility(), 1.0);
    assert_eq!(e.large_header_opacity_value(), 0.0);
    assert!(!e.is_animating());
}

#[test]
fn reversing_mid_fade_starts_from_current_value() {
    let mut e = measured_engine(100.0);
    e.on_scroll(&ScrollEvent::at(150.0), 0);
    e.tick(125);
    let mid = e.nav_bar_visibility();

    e.on_scroll(&ScrollEvent::at(10.0), 125);
    assert_eq!(e.target_nav_bar_visibility(), 0.0);
    assert!(approx(e.nav_bar_visibility(), mid));

    e.tick(375);
    assert_eq!(e.nav_bar_visibility(), 0.0);
}

#[test]
fn scroll_jitter_does_not_restart_fade() {
    let mut e = measured_engine(100.0);
    e.on_scroll(&ScrollEvent::at(150.0), 0);
    e.on_scroll(&ScrollEvent::at(151.0), 100);
    e.on_scroll(&ScrollEvent::at(150.5), 200);
    e.tick(250);
    assert_eq!(e.nav_bar_visibility(), 1.0);
}

#[test]
fn opacity_and_visibility_are_complements() {
    let mut e = measured_engine(120.0);
    let offsets = [0.0f32, 40.0, 130.0, 90.0, 500.0, 116.0, 117.0, -20.0, 60.0, 200.0];
    let mut now_ms = 0u64;
    for off in offsets {
        e.on_scroll(&ScrollEvent::at(off), now_ms);
        for _ in 0..6 {
            now_ms += 16;
            e.tick(now_ms);
            let vis = e.nav_bar_visibility();
            assert!((0.0..=1.0).contains(&vis));
            assert!(approx(vis + e.large_header_opacity_value(), 1.0));
            assert!(approx(e.show_nav_bar().get() + e.large_header_opacity().get(), 1.0));
        }
    }
}

#[test]
fn without_large_header_any_scroll_reveals_nav_bar_and_returns() {
    let mut e = HeaderEngine::new(HeaderOptions::new());
    assert_eq!(e.phase(), HeaderPhase::Expanded);

    e.on_scroll(&ScrollEvent::at(0.5), 0);
    e.tick(250);
    assert_eq!(e.nav_bar_visibility(), 1.0);

    e.on_scroll(&ScrollEvent::at(0.0), 300);
    e.tick(400);
    assert!(e.nav_bar_visibility() > 0.0);
    e.tick(550);
    assert_eq!(e.nav_bar_visibility(), 0.0);
    assert_eq!(e.large_header_opacity_value(), 1.0);
}

#[test]
fn layout_measurement_is_visible_to_the_next_offset_update() {
    let mut e = HeaderEngine::new(HeaderOptions::new().with_large_header_exists(true));
    e.on_scroll(&ScrollEvent::at(150.0), 0);
    assert_eq!(e.phase(), HeaderPhase::Unmeasured);

    // The measurement alone re-derives against the current offset.
    e.on_large_header_layout(LayoutRect::from_size(390.0, 100.0), 10);
    assert_eq!(e.phase(), HeaderPhase::Collapsed);

    e.on_large_header_layout(LayoutRect::from_size(390.0, 300.0), 20);
    e.on_scroll(&ScrollEvent::at(150.0), 20);
    assert_eq!(e.phase(), HeaderPhase::Expanded);
    assert_eq!(e.target_nav_bar_visibility(), 0.0);
}

#[test]
fn large_header_shown_side_channel_mirrors_visibility() {
    let shown = ValueWriter::new(0.0);
    let observer = shown.reader();
    let mut e = HeaderEngine::new(HeaderOptions::new().with_large_header_exists(true))
        .with_large_header_shown(shown);

    e.on_scroll(&ScrollEvent::at(500.0), 0);
    e.tick(250);
    assert_eq!(observer.get(), 0.0, "not written while unmeasured");

    e.on_large_header_layout(LayoutRect::from_size(390.0, 100.0), 300);
    e.tick(425);
    assert_eq!(observer.get(), e.nav_bar_visibility());
    e.tick(550);
    assert_eq!(observer.get(), 1.0);
}

#[test]
fn worklet_sees_every_native_scroll_event() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut e = HeaderEngine::new(HeaderOptions::new()).with_scroll_worklet(Some(
        move |ev: &ScrollEvent| sink.lock().unwrap().push(ev.content_offset.y),
    ));

    e.on_scroll(&ScrollEvent::at(1.0), 0);
    e.on_scroll(&ScrollEvent::at(2.5), 16);
    // Polled offsets are not native events.
    e.set_scroll_offset(9.0, 32);

    assert_eq!(*seen.lock().unwrap(), [1.0, 2.5]);
    assert_eq!(e.scroll_y().get(), 9.0);
}

#[test]
fn auto_snap_resolves_to_nearest_endpoint() {
    for (settle, expected) in [(60.0f32, Some(0.0f32)), (140.0, Some(200.0)), (250.0, None)] {
        let mut e = measured_engine(200.0);
        e.on_scroll_begin_drag();
        e.on_scroll(&ScrollEvent::at(settle), 1_000);
        e.on_scroll_end_drag(1_000);

        assert_eq!(e.tick(1_049), None);
        let cmd = e.tick(1_050);
        assert_eq!(cmd.map(|c| c.offset), expected, "settle at {settle}");
        if let Some(cmd) = cmd {
            assert!(cmd.animated);
        }
        assert_eq!(e.tick(2_000), None, "fires at most once per settle");
    }
}

#[test]
fn auto_snap_boundaries() {
    assert_eq!(snap_target(0.0, 200.0), Some(0.0));
    assert_eq!(snap_target(99.9, 200.0), Some(0.0));
    assert_eq!(snap_target(100.0, 200.0), Some(200.0));
    assert_eq!(snap_target(199.9, 200.0), Some(200.0));
    assert_eq!(snap_target(200.0, 200.0), None);
    assert_eq!(snap_target(-5.0, 200.0), None);
    assert_eq!(snap_target(50.0, 0.0), None);
}

#[test]
fn new_drag_cancels_pending_snap() {
    let mut e = measured_engine(200.0);
    e.on_scroll(&ScrollEvent::at(60.0), 0);
    e.on_scroll_end_drag(0);
    assert!(matches!(e.snap_state(), SnapState::Pending { .. }));

    e.on_scroll_begin_drag();
    assert_eq!(e.snap_state(), SnapState::Idle);
    for now_ms in [30u64, 50, 100, 1_000] {
        assert_eq!(e.tick(now_ms), None);
    }
}

#[test]
fn momentum_begin_cancels_and_momentum_end_restarts_the_window() {
    let mut e = measured_engine(200.0);
    e.on_scroll(&ScrollEvent::at(150.0), 0);
    e.on_scroll_end_drag(0);
    e.on_momentum_scroll_begin();
    assert_eq!(e.tick(60), None);

    e.on_scroll(&ScrollEvent::at(120.0), 80);
    e.on_momentum_scroll_end(80);
    assert_eq!(e.tick(129), None);
    assert_eq!(
        e.tick(130),
        Some(ScrollCommand {
            offset: 200.0,
            animated: true
        })
    );
}

#[test]
fn repeated_end_events_debounce() {
    let mut e = measured_engine(200.0);
    e.on_scroll(&ScrollEvent::at(40.0), 0);
    e.on_scroll_end_drag(0);
    e.on_momentum_scroll_end(40);
    assert_eq!(e.tick(60), None);
    assert_eq!(e.tick(90).map(|c| c.offset), Some(0.0));
}

#[test]
fn disabled_auto_fix_scroll_never_snaps() {
    let mut e = HeaderEngine::new(
        HeaderOptions::new()
            .with_large_header_exists(true)
            .with_disable_auto_fix_scroll(true),
    );
    e.on_large_header_layout(LayoutRect::from_size(390.0, 200.0), 0);
    for settle in [0.0f32, 60.0, 140.0, 199.0] {
        e.on_scroll(&ScrollEvent::at(settle), 0);
        e.on_scroll_end_drag(0);
        e.on_momentum_scroll_end(10);
        assert_eq!(e.snap_state(), SnapState::Idle);
        assert_eq!(e.tick(1_000), None);
    }
}

#[test]
fn unmeasured_header_never_snaps() {
    let mut e = HeaderEngine::new(HeaderOptions::new().with_large_header_exists(true));
    e.on_scroll(&ScrollEvent::at(10.0), 0);
    e.on_scroll_end_drag(0);
    assert_eq!(e.tick(100), None);
    assert_eq!(e.snap_state(), SnapState::Idle);
}

#[test]
fn correction_completes_when_offset_reaches_target() {
    let mut e = measured_engine(200.0);
    e.on_scroll(&ScrollEvent::at(140.0), 0);
    e.on_momentum_scroll_end(0);
    let cmd = e.tick(50).unwrap();
    assert_eq!(e.snap_state(), SnapState::Correcting { target: 200.0 });

    // The host animates the scroll; intermediate offsets keep the correction in flight.
    e.on_scroll(&ScrollEvent::at(170.0), 60);
    assert_eq!(e.snap_state(), SnapState::Correcting { target: 200.0 });
    e.on_scroll(&ScrollEvent::at(cmd.offset), 80);
    assert_eq!(e.snap_state(), SnapState::Idle);
}

#[test]
fn absolute_header_insets_follow_measurement_and_inversion() {
    let mut e = HeaderEngine::new(
        HeaderOptions::new()
            .with_absolute_header(true)
            .with_initial_absolute_header_height(44.0),
    );
    let adj = e.scroll_view_adjustments();
    assert_eq!(adj.content_padding.top, 44.0);
    assert_eq!(adj.scroll_indicator_insets.top, 44.0);

    e.on_absolute_header_layout(LayoutRect::from_size(390.0, 91.0));
    let adj = e.scroll_view_adjustments();
    assert_eq!(adj.content_padding.top, 91.0);
    assert_eq!(adj.scroll_indicator_insets.top, 91.0);
    assert_eq!(adj.content_padding.bottom, 0.0);

    let mut inv = HeaderEngine::new(
        HeaderOptions::new()
            .with_absolute_header(true)
            .with_inverted(true),
    );
    inv.on_absolute_header_layout(LayoutRect::from_size(390.0, 91.0));
    let adj = inv.scroll_view_adjustments();
    assert_eq!(adj.content_padding.bottom, 91.0);
    assert_eq!(adj.scroll_indicator_insets.bottom, 91.0);
    assert_eq!(adj.content_padding.top, 0.0);
}

#[test]
fn inline_header_has_no_adjustments() {
    let mut e = HeaderEngine::new(HeaderOptions::new().with_initial_absolute_header_height(44.0));
    e.on_absolute_header_layout(LayoutRect::from_size(390.0, 91.0));
    assert_eq!(e.scroll_view_adjustments(), ScrollViewAdjustments::default());
}

#[test]
fn snapshot_reports_engine_state() {
    let mut e = measured_engine(100.0);
    e.on_scroll(&ScrollEvent::at(300.0), 0);
    e.tick(250);
    let s = e.snapshot();
    assert_eq!(s.scroll_offset, 300.0);
    assert_eq!(s.large_header_height, 100.0);
    assert_eq!(s.nav_bar_visibility, 1.0);
    assert_eq!(s.large_header_opacity, 0.0);
    assert_eq!(s.phase, HeaderPhase::Collapsed);
}

#[test]
fn options_validation_rejects_nonsense() {
    assert_eq!(HeaderOptions::default().validate(), Ok(()));
    assert!(matches!(
        HeaderOptions::new()
            .with_header_fade_in_threshold(f32::NAN)
            .validate(),
        Err(HeaderError::InvalidOption {
            name: "header_fade_in_threshold",
            ..
        })
    ));
    assert!(matches!(
        HeaderOptions::new().with_adjustment_offset(-1.0).validate(),
        Err(HeaderError::InvalidOption {
            name: "adjustment_offset",
            ..
        })
    ));
    assert!(matches!(
        HeaderOptions::new()
            .with_initial_absolute_header_height(f32::INFINITY)
            .validate(),
        Err(HeaderError::InvalidOption { .. })
    ));
}

#[test]
fn writer_replays_subscribers_and_readers_share_the_cell() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut w = ValueWriter::new(1.0);
    let r1 = w.reader();
    let r2 = r1.clone();
    {
        let calls = Arc::clone(&calls);
        w.subscribe(move |_| {
            calls.fetch_add(1, Ordering::Relaxed);
        });
    }

    w.set(2.0);
    assert!(!w.set_if_changed(2.0));
    assert!(w.set_if_changed(3.0));
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    assert_eq!(r1.get(), 3.0);
    assert!(r1.same_cell(&r2));
    assert!(!r1.same_cell(&SharedValue::constant(3.0)));
}

#[test]
fn scroll_signal_reads_primary_axis() {
    let mut s = ScrollSignal::default();
    let reader = s.offset();
    assert_eq!(reader.get(), 0.0);

    let mut ev = ScrollEvent::at(12.0);
    ev.content_offset.x = 99.0;
    assert_eq!(s.apply_event(&ev), 12.0);
    assert_eq!(reader.get(), 12.0);

    assert_eq!(s.apply_polled(None), None);
    assert_eq!(reader.get(), 12.0);

    let mut h = ScrollSignal::new(ScrollAxis::Horizontal);
    assert_eq!(h.apply_event(&ev), 99.0);
}

#[test]
fn interpolate_extends_or_clamps() {
    assert_eq!(interpolate(0.25, (0.0, 1.0), (1.0, 0.0), Extrapolation::Extend), 0.75);
    assert_eq!(interpolate(2.0, (0.0, 1.0), (0.0, 10.0), Extrapolation::Extend), 20.0);
    assert_eq!(interpolate(2.0, (0.0, 1.0), (0.0, 10.0), Extrapolation::Clamp), 10.0);
    assert_eq!(interpolate(-1.0, (0.0, 1.0), (0.0, 10.0), Extrapolation::Clamp), 0.0);
    assert_eq!(interpolate(5.0, (3.0, 3.0), (7.0, 9.0), Extrapolation::Clamp), 7.0);
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseInOutQuad,
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert!(approx(easing.sample(0.5), 0.5));
    }
}
