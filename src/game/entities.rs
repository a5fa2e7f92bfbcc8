//! Level entities
//!
//! Gameplay-side state attached to trigger volumes. The engine only knows
//! trigger ids and tags; hit points and other per-entity data live here.

/// An enemy anchored to a trigger volume.
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    /// Id of the trigger volume this enemy occupies.
    pub trigger_id: u32,
    pub health: i32,
}

impl Enemy {
    pub fn new(trigger_id: u32, health: i32) -> Self {
        Self { trigger_id, health }
    }

    /// Apply stomp damage; returns true once defeated.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        self.health -= amount;
        self.health <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_defeat() {
        let mut enemy = Enemy::new(7, 2);
        assert!(!enemy.apply_damage(1));
        assert!(enemy.apply_damage(1));
        assert_eq!(enemy.health, 0);
    }
}
