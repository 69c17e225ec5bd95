//! Page wiring: element ids/classes and asset paths.
//!
//! Tuning values for each subsystem live next to their logic in `core`;
//! this module only names the things the page markup provides.

// Scene canvas, also the element tracked by the parallax guard
pub const CANVAS_ID: &str = "canvas";
// Two text layers scaled by the parallax effect (first two matches)
pub const TEXT_LAYER_CLASS: &str = "text-front";

pub const LOADING_SCREEN_ID: &str = "loading-screen";

// Menu widgets
pub const TOGGLE_BUTTON_ID: &str = "toggleButton";
pub const MENU_CONTAINER_ID: &str = "menuContainer";
pub const PLAYER_ICON_ID: &str = "spotify-icon";
pub const BACK_BUTTON_ID: &str = "backButton";
pub const ACTIVE_CLASS: &str = "active";

// Embedded player iframe
pub const PLAYER_IFRAME_ID: &str = "iframe";

// Model assets, relative to the page
pub const MATERIAL_PATH: &str = "models/CD.mtl";
pub const GEOMETRY_PATH: &str = "models/CD.obj";
