//! Static world geometry
//!
//! A flat collection of axis-aligned colliders and tagged trigger volumes.
//! Colliders answer raycasts through [`SpatialQuery`]; triggers answer
//! overlap queries from the embedding application's contact pass. Levels
//! here are small enough that a linear nearest-hit scan beats maintaining
//! any spatial index.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::physics::{Bounds2, LayerMask, RayHit, SpatialQuery, ray_aabb_intersect_2d};
use crate::player::ContactTag;

/// Solid, raycastable rectangle on one or more collision layers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StaticCollider {
    pub bounds: Bounds2,
    pub layers: LayerMask,
}

impl StaticCollider {
    pub fn new(bounds: Bounds2, layers: LayerMask) -> Self {
        Self { bounds, layers }
    }
}

/// Non-solid tagged volume the player can overlap.
#[derive(Debug, Clone, Copy)]
pub struct TriggerVolume {
    pub id: u32,
    pub bounds: Bounds2,
    pub tag: ContactTag,
}

impl TriggerVolume {
    /// Reference point reported in contacts (an enemy's anchor).
    pub fn position(&self) -> Vec2 {
        self.bounds.center()
    }
}

/// Static collision geometry plus trigger volumes for one level.
#[derive(Debug, Clone, Default)]
pub struct TileWorld {
    colliders: Vec<StaticCollider>,
    triggers: Vec<TriggerVolume>,
    next_trigger_id: u32,
}

impl TileWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_collider(&mut self, collider: StaticCollider) {
        self.colliders.push(collider);
    }

    /// Register a trigger volume; returns its id for later removal.
    pub fn add_trigger(&mut self, bounds: Bounds2, tag: ContactTag) -> u32 {
        let id = self.next_trigger_id;
        self.next_trigger_id += 1;
        self.triggers.push(TriggerVolume { id, bounds, tag });
        id
    }

    /// Remove a trigger (a collected coin, a dead enemy).
    pub fn remove_trigger(&mut self, id: u32) {
        self.triggers.retain(|t| t.id != id);
    }

    pub fn colliders(&self) -> &[StaticCollider] {
        &self.colliders
    }

    pub fn triggers(&self) -> &[TriggerVolume] {
        &self.triggers
    }

    /// Triggers currently overlapping `bounds`.
    pub fn overlapping_triggers<'a>(
        &'a self,
        bounds: &'a Bounds2,
    ) -> impl Iterator<Item = &'a TriggerVolume> {
        self.triggers.iter().filter(|t| t.bounds.overlaps(bounds))
    }
}

impl SpatialQuery for TileWorld {
    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;
        for collider in &self.colliders {
            if !mask.contains(collider.layers) {
                continue;
            }
            if let Some(t) = ray_aabb_intersect_2d(origin, direction, &collider.bounds) {
                if t <= max_distance && nearest.is_none_or(|hit| t < hit.distance) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const WALLS: LayerMask = LayerMask(0b01);
    const DECOR: LayerMask = LayerMask(0b10);

    fn two_layer_world() -> TileWorld {
        let mut world = TileWorld::new();
        world.add_collider(StaticCollider::new(
            Bounds2::new(Vec2::new(2.0, -1.0), Vec2::new(3.0, 1.0)),
            DECOR,
        ));
        world.add_collider(StaticCollider::new(
            Bounds2::new(Vec2::new(5.0, -1.0), Vec2::new(6.0, 1.0)),
            WALLS,
        ));
        world
    }

    #[test]
    fn test_nearest_hit_wins() {
        let world = two_layer_world();
        let hit = world
            .raycast(Vec2::ZERO, Vec2::X, 100.0, LayerMask::ALL)
            .unwrap();
        assert_relative_eq!(hit.distance, 2.0, epsilon = 1e-5);
        assert_relative_eq!(hit.point.x, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_mask_filters_layers() {
        let world = two_layer_world();
        // Rays filtered to walls pass straight through the decor box.
        let hit = world.raycast(Vec2::ZERO, Vec2::X, 100.0, WALLS).unwrap();
        assert_relative_eq!(hit.distance, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_max_distance_cuts_off() {
        let world = two_layer_world();
        assert!(world.raycast(Vec2::ZERO, Vec2::X, 1.5, LayerMask::ALL).is_none());
    }

    #[test]
    fn test_trigger_overlap_and_removal() {
        let mut world = TileWorld::new();
        let coin = world.add_trigger(
            Bounds2::from_center_size(Vec2::new(1.0, 0.0), Vec2::ONE),
            ContactTag::Coin,
        );
        let enemy = world.add_trigger(
            Bounds2::from_center_size(Vec2::new(10.0, 0.0), Vec2::ONE),
            ContactTag::Enemy,
        );

        let player = Bounds2::from_center_size(Vec2::new(1.2, 0.0), Vec2::ONE);
        let hits: Vec<u32> = world.overlapping_triggers(&player).map(|t| t.id).collect();
        assert_eq!(hits, vec![coin]);

        world.remove_trigger(coin);
        assert!(world.overlapping_triggers(&player).next().is_none());
        assert_eq!(world.triggers().len(), 1);
        assert_eq!(world.triggers()[0].id, enemy);
    }
}
