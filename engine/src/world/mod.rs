//! World module
//!
//! The bundled spatial collaborator: static collision geometry and trigger
//! volumes ([`TileWorld`]), plus the JSON level format that describes them
//! ([`LevelData`]). Anything that satisfies
//! [`crate::physics::SpatialQuery`] can stand in for `TileWorld`; the
//! controller core never depends on this module.

pub mod level;
pub mod tiles;

pub use level::{LevelData, LevelError, TriggerData};
pub use tiles::{StaticCollider, TileWorld, TriggerVolume};
