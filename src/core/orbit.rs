// Damped orbit controls.
//
// Orbits an eye position around a fixed target using spherical coordinates.
// Pointer input accumulates rotation/dolly deltas; `update` applies a
// fraction of the pending delta each frame and decays the rest, which gives
// the trailing "inertia" feel. Panning is not supported.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const EPS: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    /// Polar angle from +Y.
    pub phi: f32,
    /// Azimuth around +Y, measured from +Z.
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius < EPS {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    pub fn to_offset(&self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }

    /// Keep phi strictly inside (0, PI) so the up vector stays defined.
    pub fn make_safe(&mut self) {
        self.phi = self.phi.clamp(EPS, PI - EPS);
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping_factor: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pending: Spherical,
    pending_scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            damping_factor: 0.25,
            min_polar_angle: 0.0,
            max_polar_angle: FRAC_PI_2,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pending: Spherical {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            },
            pending_scale: 1.0,
        }
    }
}

impl OrbitControls {
    pub fn rotate_left(&mut self, angle: f32) {
        self.pending.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.pending.phi -= angle;
    }

    /// Convert a pointer drag (CSS pixels) into rotation. A drag across the
    /// full element height turns a full revolution.
    pub fn drag(&mut self, dx: f32, dy: f32, element_height: f32) {
        let h = element_height.max(1.0);
        self.rotate_left(TAU * dx / h * self.rotate_speed);
        self.rotate_up(TAU * dy / h * self.rotate_speed);
    }

    /// Wheel input: positive `delta_y` moves the eye away from the target.
    pub fn wheel(&mut self, delta_y: f32) {
        if delta_y.abs() < EPS {
            return;
        }
        let step = 0.95_f32.powf(self.zoom_speed);
        if delta_y > 0.0 {
            self.pending_scale /= step;
        } else {
            self.pending_scale *= step;
        }
    }

    /// Advance one frame. Returns `true` when the eye moved noticeably.
    pub fn update(&mut self, eye: &mut Vec3) -> bool {
        let offset = *eye - self.target;
        let mut sph = Spherical::from_offset(offset);

        sph.theta += self.pending.theta * self.damping_factor;
        sph.phi += self.pending.phi * self.damping_factor;
        sph.phi = sph.phi.clamp(self.min_polar_angle, self.max_polar_angle);
        sph.make_safe();
        sph.radius = (sph.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);

        let new_eye = self.target + sph.to_offset();

        let keep = 1.0 - self.damping_factor;
        self.pending.theta *= keep;
        self.pending.phi *= keep;
        self.pending_scale = 1.0;

        let moved = (new_eye - *eye).length_squared() > EPS;
        *eye = new_eye;
        moved
    }
}
