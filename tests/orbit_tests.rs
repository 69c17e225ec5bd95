// Host-side tests for the damped orbit controls.

#![allow(dead_code)]
mod orbit {
    include!("../src/core/orbit.rs");
}

use glam::Vec3;
use orbit::*;

const START: Vec3 = Vec3::new(0.0, 0.0, 10.0);

fn settle(c: &mut OrbitControls, eye: &mut Vec3, frames: usize) {
    for _ in 0..frames {
        c.update(eye);
    }
}

#[test]
fn spherical_round_trip() {
    let v = Vec3::new(3.0, 4.0, -2.0);
    let back = Spherical::from_offset(v).to_offset();
    assert!((back - v).length() < 1e-5);
}

#[test]
fn idle_update_keeps_eye_still() {
    let mut c = OrbitControls::default();
    let mut eye = START;
    assert!(!c.update(&mut eye));
    assert!((eye - START).length() < 1e-4);
}

#[test]
fn rotation_decays_and_preserves_distance() {
    let mut c = OrbitControls::default();
    let mut eye = START;
    c.rotate_left(1.0);

    let mut steps = Vec::new();
    let mut prev = Spherical::from_offset(eye).theta;
    for _ in 0..6 {
        c.update(&mut eye);
        let theta = Spherical::from_offset(eye).theta;
        steps.push((theta - prev).abs());
        prev = theta;
        assert!((eye.length() - 10.0).abs() < 1e-3);
    }
    for w in steps.windows(2) {
        assert!(w[1] < w[0], "damped steps must shrink: {steps:?}");
    }

    settle(&mut c, &mut eye, 200);
    let theta = Spherical::from_offset(eye).theta;
    assert!((theta + 1.0).abs() < 1e-3, "theta settled at {theta}");
}

#[test]
fn polar_angle_never_passes_horizon() {
    let mut c = OrbitControls::default();
    let mut eye = Vec3::new(0.0, 6.0, 8.0);
    // Drag hard downward to try to orbit under the model
    c.drag(0.0, -5000.0, 600.0);
    settle(&mut c, &mut eye, 100);
    assert!(eye.y >= -1e-3, "eye went below the horizon: {eye}");
    assert!(Spherical::from_offset(eye).phi <= std::f32::consts::FRAC_PI_2 + 1e-4);
    assert!((eye.length() - 10.0).abs() < 1e-3);
}

#[test]
fn upward_drag_raises_eye() {
    let mut c = OrbitControls::default();
    let mut eye = START;
    c.drag(0.0, 60.0, 600.0);
    settle(&mut c, &mut eye, 50);
    assert!(eye.y > 1.0);
}

#[test]
fn wheel_dollies_once_per_event() {
    let mut c = OrbitControls::default();
    let mut eye = START;
    c.wheel(120.0);
    assert!(c.update(&mut eye));
    assert!((eye.length() - 10.0 / 0.95).abs() < 1e-3);
    // Scale does not carry over to later frames
    assert!(!c.update(&mut eye));

    c.wheel(-120.0);
    c.update(&mut eye);
    assert!((eye.length() - 10.0).abs() < 1e-3);
}

#[test]
fn distance_limits_are_respected() {
    let mut c = OrbitControls::default();
    c.max_distance = 11.0;
    let mut eye = START;
    for _ in 0..10 {
        c.wheel(1.0);
        c.update(&mut eye);
    }
    assert!(eye.length() <= 11.0 + 1e-4);
}
