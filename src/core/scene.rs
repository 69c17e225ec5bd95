// Scene description shared by the frame loop and the renderer: camera,
// lights, the two transform groups, fog and the loaded model.

use super::obj::Mesh;
use glam::{EulerRot, Mat4, Vec3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("model already attached to the scene")]
    ModelAlreadyAttached,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Position inside the rig group.
    pub position: Vec3,
}

impl PerspectiveCamera {
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = (width / height) as f32;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
    pub intensity: f32,
    /// Cut-off distance; 0 means unbounded.
    pub distance: f32,
    /// Position inside the rig group.
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Vec3,
    pub density: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles, XYZ order.
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

#[inline]
pub fn hex_color(rgb: u32) -> Vec3 {
    Vec3::new(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    )
}

pub const CAMERA_FOV_Y_DEGREES: f32 = 25.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const RIG_OFFSET: Vec3 = Vec3::new(10.0, 0.0, 0.0);
pub const MODEL_SCALE: f32 = 3.0;
pub const FOG_COLOR: u32 = 0x11151c;
pub const FOG_DENSITY: f32 = 0.001;

pub fn default_lights() -> [PointLight; 3] {
    [
        PointLight {
            color: hex_color(0xffffff),
            intensity: 100.0,
            distance: 60.0,
            position: Vec3::new(-5.0, 0.0, 2.0),
        },
        PointLight {
            color: hex_color(0x9f85cc),
            intensity: 112.5,
            distance: 20.0,
            position: Vec3::new(-8.0, 0.0, -5.0),
        },
        PointLight {
            color: hex_color(0xffffff),
            intensity: 200.0,
            distance: 60.0,
            position: Vec3::ZERO,
        },
    ]
}

#[derive(Clone, Debug)]
pub struct SceneGraph {
    pub camera: PerspectiveCamera,
    pub lights: [PointLight; 3],
    /// Group holding the camera and lights.
    pub rig: Transform,
    /// Group holding the loaded model.
    pub model_group: Transform,
    pub fog: Fog,
    model: Option<Mesh>,
    model_scale: f32,
}

impl SceneGraph {
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: PerspectiveCamera {
                fov_y_degrees: CAMERA_FOV_Y_DEGREES,
                aspect,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                position: CAMERA_START,
            },
            lights: default_lights(),
            rig: Transform {
                position: RIG_OFFSET,
                ..Transform::default()
            },
            model_group: Transform::default(),
            fog: Fog {
                color: hex_color(FOG_COLOR),
                density: FOG_DENSITY,
            },
            model: None,
            model_scale: 1.0,
        }
    }

    /// Attach the loaded model. Succeeds at most once.
    pub fn attach_model(&mut self, mesh: Mesh, scale: f32) -> Result<&Mesh, SceneError> {
        if self.model.is_some() {
            return Err(SceneError::ModelAlreadyAttached);
        }
        self.model_scale = scale;
        Ok(self.model.insert(mesh))
    }

    pub fn camera_eye(&self) -> Vec3 {
        self.rig.matrix().transform_point3(self.camera.position)
    }

    /// View matrix with the camera pointed at the world origin.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.camera_eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.camera.projection_matrix() * self.view_matrix()
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.model_group.matrix() * Mat4::from_scale(Vec3::splat(self.model_scale))
    }

    pub fn light_world_position(&self, index: usize) -> Option<Vec3> {
        let rig = self.rig.matrix();
        self.lights
            .get(index)
            .map(|l| rig.transform_point3(l.position))
    }
}
