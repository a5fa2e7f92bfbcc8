//! Player status and contact reactions
//!
//! Health, coins, and the reactions to overlap contacts with tagged
//! geometry. Contacts arrive from the embedding application's trigger
//! system as a [`Contact`] value; dispatch is an exhaustive match over the
//! closed [`ContactTag`] set, and every reaction is reported back as a
//! [`ContactOutcome`] for the caller to act on (remove the coin, damage
//! the enemy, reload or advance the level).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::physics::SpatialQuery;

use super::locomotion::{Facing, PlayerLocomotion};

/// Category of a trigger volume the player can overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactTag {
    Enemy,
    Coin,
    Boundary,
    LevelEnd,
    Other,
}

/// An overlap contact delivered by the trigger system.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub tag: ContactTag,
    /// Reference position of the other object (an enemy's anchor point is
    /// what the stomp check compares against).
    pub position: Vec2,
}

impl Contact {
    pub fn new(tag: ContactTag, position: Vec2) -> Self {
        Self { tag, position }
    }
}

/// What a contact did; the caller owns the world-side consequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Stomped an enemy: apply `damage` to it, the player already bounced.
    EnemyStomped { damage: i32 },
    /// Took a hit; knockback applied, player still alive.
    PlayerHurt,
    /// Picked up a coin; remove the coin entity.
    CoinCollected,
    /// Health reached zero or a boundary was crossed; reload the level.
    Died,
    /// Reached the level end; advance.
    LevelComplete,
    Ignored,
}

impl PlayerLocomotion {
    /// React to an overlap contact.
    ///
    /// An enemy contact counts as a stomp when the player's bottom edge is
    /// above the enemy's reference position; the stomp re-applies the jump
    /// bounce immediately through another movement call within the same
    /// tick, so the player visibly rebounds without waiting a frame.
    pub fn handle_contact(
        &mut self,
        contact: Contact,
        dt: f32,
        world: &impl SpatialQuery,
    ) -> ContactOutcome {
        match contact.tag {
            ContactTag::Enemy => {
                let bottom_edge = self.body.bounds().min.y;
                if bottom_edge > contact.position.y {
                    self.velocity.y = self.jump_speed;
                    self.collisions = self.body.move_by(self.velocity * dt, world);
                    ContactOutcome::EnemyStomped { damage: 1 }
                } else if self.change_health(-1) {
                    ContactOutcome::Died
                } else {
                    ContactOutcome::PlayerHurt
                }
            }
            ContactTag::Coin => {
                self.coins += 1;
                log::debug!("coin collected, total {}", self.coins);
                ContactOutcome::CoinCollected
            }
            ContactTag::Boundary => ContactOutcome::Died,
            ContactTag::LevelEnd => ContactOutcome::LevelComplete,
            ContactTag::Other => ContactOutcome::Ignored,
        }
    }

    /// Apply a health delta; returns true when the change is lethal.
    ///
    /// A negative delta knocks the player back away from its facing.
    /// Health is ceiling-clamped to the maximum, but the lethal check runs
    /// before any floor clamp, so `health()` can read negative for the
    /// remainder of the lethal call.
    pub fn change_health(&mut self, delta: i32) -> bool {
        if delta < 0 {
            self.velocity.x = self.config.knockback_speed
                * if self.facing == Facing::Right { -1.0 } else { 1.0 };
        }

        self.health += delta;
        if self.health > self.config.max_health {
            self.health = self.config.max_health;
        }

        if self.health <= 0 {
            log::info!("player died at {}", self.body.center());
            return true;
        }
        false
    }
}
