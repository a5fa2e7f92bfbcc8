//! Game module
//!
//! The embedding application layer built on top of the engine: entities
//! attached to trigger volumes, the fixed-step playground simulation that
//! owns level lifecycle, and the built-in demo level.

pub mod entities;
pub mod playground;

pub use entities::Enemy;
pub use playground::{
    ENEMY_HEALTH, PLAYER_HEIGHT, PLAYER_WIDTH, Playground, demo_level,
};
