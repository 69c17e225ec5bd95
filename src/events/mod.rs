pub mod menu;
pub mod pointer;

pub use menu::wire_menu;
pub use pointer::{wire_orbit_handlers, OrbitWiring};
