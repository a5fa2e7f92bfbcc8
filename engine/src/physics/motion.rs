//! Kinematic motion controller
//!
//! Resolves requested displacements for an axis-aligned rectangular body by
//! casting fans of rays from the body's edges along each movement axis,
//! clamping travel to the nearest obstruction and reporting which sides
//! made contact.
//!
//! # Resolution order
//!
//! Within one `move_by` call the horizontal axis resolves first; the
//! vertical ray fan then originates from the already-clamped horizontal
//! position, so a diagonal move cannot tunnel into a corner.

use glam::Vec2;

use super::bounds::Bounds2;
use super::raycast::{LayerMask, SpatialQuery};

/// Inward offset applied to the body rectangle before casting, so rays do
/// not start inside the surface the body is resting against.
pub const SKIN_WIDTH: f32 = 0.015;

/// Minimum rays per fan; one ray at each end of the sampled edge.
pub const MIN_RAY_COUNT: u32 = 2;

/// Ray-fan configuration for a [`RaycastMotionController`].
#[derive(Debug, Clone, Copy)]
pub struct MotionConfig {
    /// Rays cast when moving horizontally, spread along the vertical edge.
    pub horizontal_ray_count: u32,
    /// Rays cast when moving vertically, spread along the horizontal edge.
    pub vertical_ray_count: u32,
    /// Layers the body collides with.
    pub collision_mask: LayerMask,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            horizontal_ray_count: 4,
            vertical_ray_count: 4,
            collision_mask: LayerMask::ALL,
        }
    }
}

/// Per-side contact flags from the most recent `move_by` call.
///
/// Flags reset at the start of every call. Only one direction per axis is
/// evaluated per call, so `above`/`below` never both hold, nor do
/// `left`/`right`; cross-axis combinations are normal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionInfo {
    pub above: bool,
    pub below: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionInfo {
    pub fn any(&self) -> bool {
        self.above || self.below || self.left || self.right
    }
}

/// Construction-time contract violations.
#[derive(Debug)]
pub enum MotionError {
    /// The collision rectangle has a non-positive width or height.
    DegenerateBounds { size: Vec2 },
}

impl std::fmt::Display for MotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotionError::DegenerateBounds { size } => {
                write!(
                    f,
                    "collision bounds must have positive size, got {}x{}",
                    size.x, size.y
                )
            }
        }
    }
}

impl std::error::Error for MotionError {}

/// Corner points of the skin-shrunk rectangle, rebuilt every `move_by`.
#[derive(Debug, Clone, Copy)]
struct RayOrigins {
    top_left: Vec2,
    bottom_left: Vec2,
    bottom_right: Vec2,
}

impl RayOrigins {
    fn from_bounds(bounds: &Bounds2) -> Self {
        let shrunk = bounds.expand(-SKIN_WIDTH);
        Self {
            top_left: shrunk.top_left(),
            bottom_left: shrunk.bottom_left(),
            bottom_right: shrunk.bottom_right(),
        }
    }
}

/// Kinematic body that moves by raycasting against static geometry.
///
/// Owns its collision rectangle; ray spacing is fixed at construction from
/// the rectangle size and the (clamped) ray counts.
#[derive(Debug, Clone)]
pub struct RaycastMotionController {
    bounds: Bounds2,
    collision_mask: LayerMask,
    horizontal_ray_count: u32,
    vertical_ray_count: u32,
    /// Spacing between horizontal-fan rays along the vertical edge.
    horizontal_ray_spacing: f32,
    /// Spacing between vertical-fan rays along the horizontal edge.
    vertical_ray_spacing: f32,
}

impl RaycastMotionController {
    /// Create a controller for the given body rectangle.
    ///
    /// Ray counts below [`MIN_RAY_COUNT`] are clamped up; a rectangle with
    /// non-positive width or height is rejected.
    pub fn new(bounds: Bounds2, config: MotionConfig) -> Result<Self, MotionError> {
        let size = bounds.size();
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(MotionError::DegenerateBounds { size });
        }

        let horizontal_ray_count = config.horizontal_ray_count.max(MIN_RAY_COUNT);
        let vertical_ray_count = config.vertical_ray_count.max(MIN_RAY_COUNT);

        let shrunk = bounds.expand(-SKIN_WIDTH).size();
        let horizontal_ray_spacing = shrunk.y / (horizontal_ray_count - 1) as f32;
        let vertical_ray_spacing = shrunk.x / (vertical_ray_count - 1) as f32;

        Ok(Self {
            bounds,
            collision_mask: config.collision_mask,
            horizontal_ray_count,
            vertical_ray_count,
            horizontal_ray_spacing,
            vertical_ray_spacing,
        })
    }

    /// Current collision rectangle.
    pub fn bounds(&self) -> &Bounds2 {
        &self.bounds
    }

    /// Center of the collision rectangle.
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    pub fn horizontal_ray_count(&self) -> u32 {
        self.horizontal_ray_count
    }

    pub fn vertical_ray_count(&self) -> u32 {
        self.vertical_ray_count
    }

    /// Teleport the body so its rectangle is centered at `center`.
    ///
    /// Bypasses collision resolution; used for spawning and level reloads.
    pub fn set_center(&mut self, center: Vec2) {
        self.bounds = Bounds2::from_center_size(center, self.bounds.size());
    }

    /// Move the body by up to `displacement`, clamped against geometry.
    ///
    /// Casts a fan of rays per moving axis; the body stops [`SKIN_WIDTH`]
    /// short of the nearest obstruction any ray finds. Returns the contact
    /// flags for this call. A fan that hits nothing leaves that axis of the
    /// displacement unmodified.
    pub fn move_by(&mut self, displacement: Vec2, world: &impl SpatialQuery) -> CollisionInfo {
        let origins = RayOrigins::from_bounds(&self.bounds);
        let mut info = CollisionInfo::default();
        let mut displacement = displacement;

        if displacement.x != 0.0 {
            self.resolve_horizontal(&mut displacement, &origins, world, &mut info);
        }
        if displacement.y != 0.0 {
            self.resolve_vertical(&mut displacement, &origins, world, &mut info);
        }

        self.bounds = self.bounds.translate(displacement);
        info
    }

    fn resolve_horizontal(
        &self,
        displacement: &mut Vec2,
        origins: &RayOrigins,
        world: &impl SpatialQuery,
        info: &mut CollisionInfo,
    ) {
        let direction = displacement.x.signum();
        let mut cast_length = displacement.x.abs() + SKIN_WIDTH;

        for i in 0..self.horizontal_ray_count {
            let base = if direction < 0.0 {
                origins.bottom_left
            } else {
                origins.bottom_right
            };
            let origin = base + Vec2::Y * (self.horizontal_ray_spacing * i as f32);

            if let Some(hit) = world.raycast(
                origin,
                Vec2::X * direction,
                cast_length,
                self.collision_mask,
            ) {
                displacement.x = (hit.distance - SKIN_WIDTH) * direction;
                // Later rays may only tighten the clamp.
                cast_length = hit.distance;

                info.left = direction < 0.0;
                info.right = direction > 0.0;
            }
        }
    }

    fn resolve_vertical(
        &self,
        displacement: &mut Vec2,
        origins: &RayOrigins,
        world: &impl SpatialQuery,
        info: &mut CollisionInfo,
    ) {
        let direction = displacement.y.signum();
        let mut cast_length = displacement.y.abs() + SKIN_WIDTH;

        for i in 0..self.vertical_ray_count {
            let base = if direction < 0.0 {
                origins.bottom_left
            } else {
                origins.top_left
            };
            // Offset by the already-resolved horizontal delta so the fan
            // starts from the body's post-horizontal-move position.
            let origin = base + Vec2::X * (self.vertical_ray_spacing * i as f32 + displacement.x);

            if let Some(hit) = world.raycast(
                origin,
                Vec2::Y * direction,
                cast_length,
                self.collision_mask,
            ) {
                displacement.y = (hit.distance - SKIN_WIDTH) * direction;
                cast_length = hit.distance;

                info.below = direction < 0.0;
                info.above = direction > 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::raycast::{RayHit, ray_aabb_intersect_2d};
    use approx::assert_relative_eq;

    /// Minimal spatial query over a list of rectangles, all on every layer.
    struct BoxWorld {
        boxes: Vec<Bounds2>,
    }

    impl SpatialQuery for BoxWorld {
        fn raycast(
            &self,
            origin: Vec2,
            direction: Vec2,
            max_distance: f32,
            _mask: LayerMask,
        ) -> Option<RayHit> {
            let mut nearest: Option<RayHit> = None;
            for b in &self.boxes {
                if let Some(t) = ray_aabb_intersect_2d(origin, direction, b) {
                    if t <= max_distance && nearest.map_or(true, |h| t < h.distance) {
                        nearest = Some(RayHit {
                            distance: t,
                            point: origin + direction * t,
                        });
                    }
                }
            }
            nearest
        }
    }

    fn body_at(center: Vec2) -> RaycastMotionController {
        let bounds = Bounds2::from_center_size(center, Vec2::new(1.0, 1.0));
        RaycastMotionController::new(bounds, MotionConfig::default()).unwrap()
    }

    fn empty_world() -> BoxWorld {
        BoxWorld { boxes: vec![] }
    }

    #[test]
    fn test_ray_count_clamped_to_minimum() {
        let bounds = Bounds2::from_center_size(Vec2::ZERO, Vec2::ONE);
        let config = MotionConfig {
            horizontal_ray_count: 0,
            vertical_ray_count: 1,
            collision_mask: LayerMask::ALL,
        };
        let body = RaycastMotionController::new(bounds, config).unwrap();
        assert_eq!(body.horizontal_ray_count(), 2);
        assert_eq!(body.vertical_ray_count(), 2);
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        let flat = Bounds2::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let result = RaycastMotionController::new(flat, MotionConfig::default());
        assert!(matches!(
            result,
            Err(MotionError::DegenerateBounds { .. })
        ));
    }

    #[test]
    fn test_unobstructed_move_is_exact() {
        let mut body = body_at(Vec2::ZERO);
        let info = body.move_by(Vec2::new(3.0, -2.0), &empty_world());
        assert_eq!(body.center(), Vec2::new(3.0, -2.0));
        assert!(!info.any());
    }

    #[test]
    fn test_horizontal_move_clamps_at_wall() {
        // Wall face at x=3; body right edge at x=0.5.
        let wall = Bounds2::new(Vec2::new(3.0, -10.0), Vec2::new(4.0, 10.0));
        let world = BoxWorld { boxes: vec![wall] };
        let mut body = body_at(Vec2::ZERO);

        let info = body.move_by(Vec2::new(5.0, 0.0), &world);

        assert!(info.right);
        assert!(!info.left && !info.below && !info.above);
        // Rays start SKIN_WIDTH inside the edge and stop SKIN_WIDTH short of
        // the hit, so the edge itself ends flush with the wall face.
        assert_relative_eq!(body.bounds().max.x, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_vertical_move_clamps_at_floor() {
        // Floor top at y=-2; body bottom edge at y=-0.5.
        let floor = Bounds2::new(Vec2::new(-10.0, -3.0), Vec2::new(10.0, -2.0));
        let world = BoxWorld { boxes: vec![floor] };
        let mut body = body_at(Vec2::ZERO);

        let info = body.move_by(Vec2::new(0.0, -5.0), &world);

        assert!(info.below);
        assert_relative_eq!(body.bounds().min.y, -2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_clamp_distance_matches_hit_minus_skin() {
        let wall = Bounds2::new(Vec2::new(2.0, -10.0), Vec2::new(3.0, 10.0));
        let world = BoxWorld { boxes: vec![wall] };
        let mut body = body_at(Vec2::ZERO);

        // Distance from the shrunk right edge to the wall face.
        let gap = 2.0 - (0.5 - SKIN_WIDTH);
        body.move_by(Vec2::new(5.0, 0.0), &world);
        let moved = body.center().x;
        assert_relative_eq!(moved, gap - SKIN_WIDTH, epsilon = 1e-5);
    }

    #[test]
    fn test_collision_info_resets_every_call() {
        let floor = Bounds2::new(Vec2::new(-10.0, -3.0), Vec2::new(10.0, -2.0));
        let world = BoxWorld { boxes: vec![floor] };
        let mut body = body_at(Vec2::ZERO);

        let first = body.move_by(Vec2::new(0.0, -5.0), &world);
        assert!(first.below);

        // Moving away from the floor must not retain the old flag.
        let second = body.move_by(Vec2::new(0.0, 1.0), &world);
        assert!(!second.below);
    }

    #[test]
    fn test_later_ray_tightens_clamp() {
        // A step: the far rays of the fan see the nearer face.
        let near = Bounds2::new(Vec2::new(1.5, -0.5), Vec2::new(2.5, 0.2));
        let far = Bounds2::new(Vec2::new(3.0, -10.0), Vec2::new(4.0, 10.0));
        let world = BoxWorld {
            boxes: vec![far, near],
        };
        let mut body = body_at(Vec2::ZERO);

        body.move_by(Vec2::new(5.0, 0.0), &world);
        // Stops at the near face, not the far wall.
        assert_relative_eq!(body.bounds().max.x, 1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_diagonal_move_respects_corner() {
        // Floor under the destination only: vertical rays must be offset by
        // the horizontal delta to see it.
        let floor = Bounds2::new(Vec2::new(2.0, -3.0), Vec2::new(6.0, -2.0));
        let world = BoxWorld { boxes: vec![floor] };
        let mut body = body_at(Vec2::ZERO);

        let info = body.move_by(Vec2::new(3.0, -5.0), &world);
        assert!(info.below);
        assert_relative_eq!(body.bounds().min.y, -2.0, epsilon = 1e-5);
        assert_relative_eq!(body.center().x, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_resting_body_does_not_sink() {
        let floor = Bounds2::new(Vec2::new(-10.0, -3.0), Vec2::new(10.0, -2.0));
        let world = BoxWorld { boxes: vec![floor] };
        let mut body = body_at(Vec2::ZERO);

        // Settle onto the floor, then keep pushing down.
        body.move_by(Vec2::new(0.0, -5.0), &world);
        let rest_y = body.center().y;
        for _ in 0..10 {
            let info = body.move_by(Vec2::new(0.0, -0.2), &world);
            assert!(info.below);
        }
        assert_relative_eq!(body.center().y, rest_y, epsilon = 1e-4);
    }

    #[test]
    fn test_set_center_teleports() {
        let mut body = body_at(Vec2::ZERO);
        body.set_center(Vec2::new(7.0, 3.0));
        assert_eq!(body.center(), Vec2::new(7.0, 3.0));
        assert_eq!(body.bounds().size(), Vec2::new(1.0, 1.0));
    }
}
