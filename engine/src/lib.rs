//! Ledge Runner Engine
//!
//! A kinematic 2D platformer character controller. Movement is resolved by
//! casting fans of rays from the body's edges against static geometry; on
//! top of that sits a player locomotion layer with derived jump kinematics,
//! smoothed horizontal movement, facing, health and coins.
//!
//! # Modules
//!
//! - [`physics`] - Raycast motion controller, bounds, spatial query seam
//! - [`player`] - Locomotion, player state, contact reactions
//! - [`input`] - Windowing-agnostic input frames with jump edge detection
//! - [`world`] - Bundled static geometry + trigger volumes and level files
//!
//! # Example
//!
//! ```ignore
//! use ledge_runner_engine::input::InputState;
//! use ledge_runner_engine::physics::{Bounds2, MotionConfig};
//! use ledge_runner_engine::player::{LocomotionConfig, PlayerLocomotion};
//! use ledge_runner_engine::world::LevelData;
//! use glam::Vec2;
//!
//! let level = LevelData::from_json(include_str!("level.json"))?;
//! let world = level.build();
//!
//! let bounds = Bounds2::from_center_size(level.spawn, Vec2::new(1.0, 2.0));
//! let mut player =
//!     PlayerLocomotion::new(bounds, MotionConfig::default(), LocomotionConfig::default())?;
//! let mut input = InputState::new();
//!
//! // Fixed-step loop owned by the application:
//! let dt = 1.0 / 60.0;
//! loop {
//!     input.set_right(true);
//!     let report = player.tick(input.sample(), dt, &world);
//!     println!("{:?} at {}", report.mode, report.position);
//! }
//! ```

pub mod input;
pub mod physics;
pub mod player;
pub mod world;

// Game-layer modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the core types at crate level for convenience
pub use input::{InputFrame, InputState};
pub use physics::{
    Bounds2, CollisionInfo, LayerMask, MotionConfig, MotionError, RaycastMotionController,
    SpatialQuery,
};
pub use player::{LocomotionConfig, PlayerLocomotion, TickReport};
pub use world::{LevelData, TileWorld};
