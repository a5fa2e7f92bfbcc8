//! Raycast queries
//!
//! The `SpatialQuery` trait is the seam between kinematic bodies and the
//! static collision geometry they move against. The bundled implementation
//! lives in [`crate::world`]; the slab intersection test here is the
//! primitive it is built on.
//!
//! # Ray-AABB Intersection
//!
//! The slab method finds the intersection interval by computing entry and
//! exit times against each axis pair of the rectangle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds2;

/// Bitmask selecting which collision layers a query can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    /// Matches nothing.
    pub const NONE: LayerMask = LayerMask(0);

    pub fn contains(&self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}

/// Result of a successful raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec2,
}

/// Synchronous raycast queries against static collision geometry.
///
/// A `None` return is a normal miss, not an error; implementations must be
/// deterministic for a given geometry set.
pub trait SpatialQuery {
    /// Cast a ray and return the nearest hit within `max_distance`,
    /// considering only geometry on layers selected by `mask`.
    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;
}

/// Ray-rectangle intersection using the slab method.
///
/// # Arguments
///
/// * `origin` - Starting point of the ray
/// * `direction` - Direction of the ray (must be normalized)
/// * `bounds` - The rectangle to test against
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the entry point (`t >= 0`);
///   a ray starting inside the rectangle reports the exit distance
/// * `None` - No intersection, or the rectangle is behind the origin
pub fn ray_aabb_intersect_2d(origin: Vec2, direction: Vec2, bounds: &Bounds2) -> Option<f32> {
    // Inverse direction, with near-zero components pushed to huge values so
    // the slab degenerates to a min/max test on that axis.
    let inv_dir = Vec2::new(
        if direction.x.abs() > 1e-10 {
            1.0 / direction.x
        } else {
            f32::MAX * direction.x.signum()
        },
        if direction.y.abs() > 1e-10 {
            1.0 / direction.y
        } else {
            f32::MAX * direction.y.signum()
        },
    );

    let t1 = (bounds.min.x - origin.x) * inv_dir.x;
    let t2 = (bounds.max.x - origin.x) * inv_dir.x;

    let mut t_min = t1.min(t2);
    let mut t_max = t1.max(t2);

    let t3 = (bounds.min.y - origin.y) * inv_dir.y;
    let t4 = (bounds.max.y - origin.y) * inv_dir.y;

    t_min = t_min.max(t3.min(t4));
    t_max = t_max.min(t3.max(t4));

    if t_max < t_min || t_max < 0.0 {
        return None;
    }

    // Entry behind the origin means the ray starts inside; report the exit.
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Bounds2 {
        Bounds2::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0))
    }

    #[test]
    fn test_ray_hits_box_from_left() {
        let t = ray_aabb_intersect_2d(Vec2::new(-5.0, 0.0), Vec2::X, &unit_box());
        assert!(t.is_some());
        let t = t.unwrap();
        assert!((t - 4.0).abs() < 0.001, "Expected t=4.0, got t={}", t);
    }

    #[test]
    fn test_ray_misses_box() {
        let t = ray_aabb_intersect_2d(Vec2::new(-5.0, 2.0), Vec2::X, &unit_box());
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_starts_inside_box() {
        let t = ray_aabb_intersect_2d(Vec2::ZERO, Vec2::X, &unit_box());
        assert!(t.is_some());
        // Exit face at x=1
        assert!((t.unwrap() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_box_behind_origin() {
        let t = ray_aabb_intersect_2d(Vec2::new(5.0, 0.0), Vec2::X, &unit_box());
        assert!(t.is_none());
    }

    #[test]
    fn test_vertical_ray() {
        let t = ray_aabb_intersect_2d(Vec2::new(0.0, 5.0), Vec2::NEG_Y, &unit_box());
        assert!(t.is_some());
        assert!((t.unwrap() - 4.0).abs() < 0.001);
    }

    #[test]
    fn test_layer_mask() {
        let walls = LayerMask(0b01);
        let hazards = LayerMask(0b10);
        assert!(LayerMask::ALL.contains(walls));
        assert!(!walls.contains(hazards));
        assert!(!LayerMask::NONE.contains(walls));
    }
}
