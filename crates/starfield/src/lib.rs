//! Animated starfield background.
//!
//! A headless simulation of twinkling stars that drift, link up and bounce off
//! each other (leaving ripples), plus the odd shooting star. It produces a
//! `DrawList` per frame; hosts rasterize it through the `Surface` trait and
//! drive it through `Lifecycle` with their own `FrameScheduler`.

pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::SimConfig;
pub use api::types::DeviceProfile;
pub use components::ripple::Ripple;
pub use components::shooting_star::ShootingStar;
pub use components::star::Star;
pub use crate::core::lifecycle::{FrameScheduler, Lifecycle, LoopState};
pub use crate::core::simulation::Simulation;
pub use crate::core::time::FrameClock;
pub use renderer::draw_list::{DrawCommand, DrawKind, DrawList};
pub use renderer::traits::Surface;
pub use systems::collision::{resolve_collisions, Link};
pub use systems::rng::Rng;
