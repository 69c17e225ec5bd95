// Host-side tests for the scroll parallax driver.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod parallax {
    include!("../src/core/parallax.rs");
}

use parallax::*;

// Canvas occupying the first screen of an 800px viewport
fn in_view() -> ViewportSample {
    ViewportSample {
        viewport_height: 800.0,
        element_top: 0.0,
        element_bottom: 800.0,
    }
}

fn far_below() -> ViewportSample {
    ViewportSample {
        viewport_height: 800.0,
        element_top: 5000.0,
        element_bottom: 5800.0,
    }
}

#[test]
fn ease_step_converges_monotonically() {
    let mut s = ScrollState {
        current: 0.0,
        target: 400.0,
        ease: SCROLL_EASE,
    };
    let mut prev = s.current;
    for _ in 0..10_000 {
        let c = s.step();
        assert!(c >= prev, "current moved away from target");
        assert!(c <= s.target, "current overshot target");
        prev = c;
    }
    assert!((s.target - s.current) < 400.0 * 0.01);
}

#[test]
fn ease_step_converges_downward_after_target_drops() {
    let mut s = ScrollState {
        current: 300.0,
        target: 100.0,
        ease: 0.1,
    };
    let mut prev = s.current;
    for _ in 0..200 {
        let c = s.step();
        assert!(c <= prev);
        assert!(c >= s.target);
        prev = c;
    }
    assert!((s.current - 100.0).abs() < 1e-3);
}

#[test]
fn scales_never_drop_below_one_for_non_negative_scroll() {
    for offset in [0.0, 1.0, 250.0, 4000.0] {
        let s = ScrollState {
            current: offset,
            target: offset,
            ease: SCROLL_EASE,
        };
        let sc = s.scales();
        assert!(sc.front >= 1.0);
        assert!(sc.back >= 1.0);
        assert!(sc.front >= sc.back, "front layer scales faster");
    }
    let rest = ScrollState::default().scales();
    assert_eq!(rest.front, 1.0);
    assert_eq!(rest.back, 1.0);
}

#[test]
fn scale_css_is_a_transform_value() {
    let sc = ParallaxScales {
        front: 1.5,
        back: 1.25,
    };
    assert_eq!(sc.front_css(), "scale(1.5)");
    assert_eq!(sc.back_css(), "scale(1.25)");
}

#[test]
fn band_intersection_edges() {
    let v = ViewportSample {
        viewport_height: 100.0,
        element_top: 200.0,
        element_bottom: 300.0,
    };
    assert!(!v.intersects_band(99.0));
    assert!(v.intersects_band(100.0)); // band bottom touches element top
    assert!(v.intersects_band(250.0));
    assert!(v.intersects_band(300.0)); // band top touches element bottom
    assert!(!v.intersects_band(300.5));
}

#[test]
fn sample_from_client_rect_offsets_by_scroll() {
    let v = ViewportSample::from_client_rect(1000.0, 700.0, -50.0, 650.0);
    assert_eq!(v.element_top, 950.0);
    assert_eq!(v.element_bottom, 1650.0);
    assert_eq!(v.viewport_height, 700.0);
}

#[test]
fn tick_runs_while_in_view() {
    let mut d = ParallaxDriver::new();
    assert!(d.start());
    d.on_scroll(200.0);
    let sc = d.tick(in_view()).expect("in view ticks");
    assert!(sc.front > 1.0);
    assert_eq!(d.task(), TaskState::Running);
}

#[test]
fn guard_miss_stops_until_next_scroll() {
    let mut d = ParallaxDriver::new();
    d.start();
    d.on_scroll(0.0);
    assert!(d.tick(far_below()).is_none());
    assert_eq!(d.task(), TaskState::Stopped);

    // No scroll event: further ticks produce no transforms even once the
    // element would be in view again.
    assert!(d.tick(in_view()).is_none());
    assert!(d.tick(in_view()).is_none());
    assert_eq!(d.scroll.current, 0.0);

    // A scroll event restarts the task.
    assert!(d.on_scroll(10.0));
    assert!(d.tick(in_view()).is_some());
}

#[test]
fn scroll_while_running_does_not_start_a_second_task() {
    let mut d = ParallaxDriver::new();
    assert!(d.on_scroll(50.0));
    assert!(!d.on_scroll(60.0));
    assert!(!d.on_scroll(70.0));
    assert_eq!(d.scroll.target, 70.0);
    assert!(!d.start());
}

#[test]
fn stopped_after_failed_schedule_restarts_on_scroll() {
    let mut d = ParallaxDriver::new();
    assert!(d.on_scroll(20.0));
    // The timer could not be queued, so the glue stops the task
    d.stop();
    assert_eq!(d.task(), TaskState::Stopped);
    assert!(d.tick(in_view()).is_none());
    assert!(d.on_scroll(30.0), "scroll must be able to start it again");
    assert!(d.tick(in_view()).is_some());
}

#[test]
fn scroll_sequence_converges_to_latest_target() {
    let mut d = ParallaxDriver::new();
    d.scroll.ease = 0.2;
    for target in [100.0, 400.0, 250.0] {
        d.on_scroll(target);
        for _ in 0..20 {
            d.tick(in_view());
        }
    }
    for _ in 0..200 {
        d.tick(in_view());
    }
    assert!((d.scroll.current - 250.0).abs() < 1e-3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_sane() {
    assert!(SCROLL_EASE > 0.0 && SCROLL_EASE <= 1.0);
    assert!(PARALLAX_SCALE_FRONT > PARALLAX_SCALE_BACK);
    assert_eq!(PARALLAX_TICK_MS, 16);
}
