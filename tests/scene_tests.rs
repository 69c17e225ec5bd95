// Host-side tests for the scene description.

#![allow(dead_code)]
mod obj {
    include!("../src/core/obj.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use glam::Vec3;
use scene::*;

fn triangle() -> obj::Mesh {
    obj::parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n", &obj::MaterialLibrary::default())
        .expect("triangle")
}

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn camera_sits_in_the_offset_rig() {
    let s = SceneGraph::new(1.5);
    assert!(close(s.camera_eye(), Vec3::new(10.0, 0.0, 10.0)));
    assert_eq!(s.camera.fov_y_degrees, 25.0);
    assert_eq!(s.camera.near, 0.1);
    assert_eq!(s.camera.far, 1000.0);
}

#[test]
fn lights_follow_the_rig() {
    let s = SceneGraph::new(1.0);
    assert!(close(s.light_world_position(0).expect("light 0"), Vec3::new(5.0, 0.0, 2.0)));
    assert!(close(s.light_world_position(1).expect("light 1"), Vec3::new(2.0, 0.0, -5.0)));
    assert!(close(s.light_world_position(2).expect("light 2"), Vec3::new(10.0, 0.0, 0.0)));
    assert!(s.light_world_position(3).is_none());
}

#[test]
fn model_attaches_once() {
    let mut s = SceneGraph::new(1.0);
    let attached = s.attach_model(triangle(), MODEL_SCALE).expect("first attach");
    assert_eq!(attached.triangle_count(), 1);
    assert_eq!(
        s.attach_model(triangle(), MODEL_SCALE).unwrap_err(),
        SceneError::ModelAlreadyAttached
    );
}

#[test]
fn model_matrix_applies_scale_and_group_rotation() {
    let mut s = SceneGraph::new(1.0);
    s.attach_model(triangle(), 3.0).expect("attach");
    let p = s.model_matrix().transform_point3(Vec3::X);
    assert!(close(p, Vec3::new(3.0, 0.0, 0.0)));

    s.model_group.rotation.z = std::f32::consts::FRAC_PI_2;
    let p = s.model_matrix().transform_point3(Vec3::X);
    assert!(close(p, Vec3::new(0.0, 3.0, 0.0)));
}

#[test]
fn viewport_updates_aspect() {
    let mut s = SceneGraph::new(1.0);
    s.camera.set_viewport(1600.0, 800.0);
    assert_eq!(s.camera.aspect, 2.0);
    // Zero-sized viewports are ignored
    s.camera.set_viewport(0.0, 800.0);
    assert_eq!(s.camera.aspect, 2.0);
}

#[test]
fn origin_projects_to_screen_centre() {
    let s = SceneGraph::new(1.0);
    let clip = s.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
}

#[test]
fn fog_and_light_colours() {
    let s = SceneGraph::new(1.0);
    assert!(close(s.fog.color, hex_color(0x11151c)));
    assert_eq!(s.fog.density, 0.001);
    let c = hex_color(0x9f85cc);
    assert!(close(c, Vec3::new(159.0, 133.0, 204.0) / 255.0));
}
