//! Physics module
//!
//! Raycast-based kinematic collision resolution for axis-aligned bodies.
//! No rigid-body dynamics: bodies are moved by explicit displacement
//! requests, clamped against static geometry supplied through the
//! [`raycast::SpatialQuery`] seam.
//!
//! # Submodules
//!
//! - [`bounds`] - Axis-aligned rectangle type shared by bodies and geometry
//! - [`raycast`] - Spatial query trait, layer masks, slab intersection test
//! - [`motion`] - The raycast motion controller and its contact flags

pub mod bounds;
pub mod motion;
pub mod raycast;

pub use bounds::Bounds2;
pub use motion::{
    CollisionInfo, MIN_RAY_COUNT, MotionConfig, MotionError, RaycastMotionController, SKIN_WIDTH,
};
pub use raycast::{LayerMask, RayHit, SpatialQuery, ray_aabb_intersect_2d};
