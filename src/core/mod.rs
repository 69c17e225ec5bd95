pub mod gate;
pub mod loader;
pub mod menu;
pub mod obj;
pub mod orbit;
pub mod parallax;
pub mod playback;
pub mod scene;

pub use gate::*;
pub use loader::*;
pub use menu::*;
pub use obj::*;
pub use orbit::*;
pub use parallax::*;
pub use playback::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
