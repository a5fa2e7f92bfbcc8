//! Playground simulation
//!
//! The embedding application layer: owns the level, the world built from
//! it, the player, and the per-entity state, and drives everything from an
//! explicit fixed-step loop. Also the level-management collaborator: a
//! death rebuilds the world from the level data (collected coins and
//! defeated enemies come back), reaching the level end advances the level
//! counter and does the same.

use std::collections::HashSet;

use glam::Vec2;

use crate::input::InputFrame;
use crate::physics::{Bounds2, LayerMask, MotionConfig, MotionError};
use crate::player::{
    Contact, ContactOutcome, ContactTag, LocomotionConfig, PlayerLocomotion, PlayerMode,
    TickReport,
};
use crate::world::{LevelData, StaticCollider, TileWorld, TriggerData};

use super::entities::Enemy;

/// Player body width in world units.
pub const PLAYER_WIDTH: f32 = 1.0;
/// Player body height in world units.
pub const PLAYER_HEIGHT: f32 = 2.0;
/// Hit points per enemy.
pub const ENEMY_HEALTH: i32 = 1;

/// One playable level plus the player running through it.
pub struct Playground {
    level: LevelData,
    world: TileWorld,
    player: PlayerLocomotion,
    enemies: Vec<Enemy>,
    /// Trigger ids the player overlapped last step; contacts fire on entry
    /// only, like a trigger-enter callback.
    active_overlaps: HashSet<u32>,
    last_mode: PlayerMode,
    deaths: u32,
    levels_completed: u32,
}

impl Playground {
    pub fn new(level: LevelData) -> Result<Self, MotionError> {
        let world = level.build();
        let enemies = spawn_enemies(&world);
        let bounds = Bounds2::from_center_size(
            level.spawn,
            Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        );
        let player =
            PlayerLocomotion::new(bounds, MotionConfig::default(), LocomotionConfig::default())?;

        Ok(Self {
            level,
            world,
            player,
            enemies,
            active_overlaps: HashSet::new(),
            last_mode: PlayerMode::Idle,
            deaths: 0,
            levels_completed: 0,
        })
    }

    pub fn player(&self) -> &PlayerLocomotion {
        &self.player
    }

    pub fn world(&self) -> &TileWorld {
        &self.world
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    pub fn levels_completed(&self) -> u32 {
        self.levels_completed
    }

    /// Advance the simulation one fixed step.
    pub fn step(&mut self, input: InputFrame, dt: f32) -> TickReport {
        let report = self.player.tick(input, dt, &self.world);

        if report.mode != self.last_mode {
            log::debug!("player {:?} -> {:?}", self.last_mode, report.mode);
            self.last_mode = report.mode;
        }

        // Trigger pass: gather current overlaps, dispatch entries only.
        let overlaps: Vec<(u32, ContactTag, Vec2)> = self
            .world
            .overlapping_triggers(self.player.bounds())
            .map(|t| (t.id, t.tag, t.position()))
            .collect();

        let mut reloaded = false;
        for &(id, tag, position) in &overlaps {
            if self.active_overlaps.contains(&id) {
                continue;
            }
            let outcome =
                self.player
                    .handle_contact(Contact::new(tag, position), dt, &self.world);
            match outcome {
                ContactOutcome::CoinCollected => {
                    self.world.remove_trigger(id);
                }
                ContactOutcome::EnemyStomped { damage } => {
                    if let Some(enemy) = self.enemies.iter_mut().find(|e| e.trigger_id == id) {
                        if enemy.apply_damage(damage) {
                            log::info!("enemy {} defeated", id);
                            self.world.remove_trigger(id);
                            self.enemies.retain(|e| e.trigger_id != id);
                        }
                    }
                }
                ContactOutcome::PlayerHurt => {
                    log::info!("player hurt, health {}", self.player.health());
                }
                ContactOutcome::Died => {
                    self.deaths += 1;
                    self.reload();
                    reloaded = true;
                }
                ContactOutcome::LevelComplete => {
                    self.levels_completed += 1;
                    log::info!("level complete ({} total)", self.levels_completed);
                    self.reload();
                    reloaded = true;
                }
                ContactOutcome::Ignored => {}
            }
            if reloaded {
                break;
            }
        }

        if !reloaded {
            self.active_overlaps = overlaps.into_iter().map(|(id, _, _)| id).collect();
        }

        report
    }

    /// Rebuild the level from its data and respawn the player.
    fn reload(&mut self) {
        self.world = self.level.build();
        self.enemies = spawn_enemies(&self.world);
        self.active_overlaps.clear();
        self.last_mode = PlayerMode::Idle;
        self.player.reset(self.level.spawn);
        log::debug!("level reloaded, spawn {}", self.level.spawn);
    }
}

fn spawn_enemies(world: &TileWorld) -> Vec<Enemy> {
    world
        .triggers()
        .iter()
        .filter(|t| t.tag == ContactTag::Enemy)
        .map(|t| Enemy::new(t.id, ENEMY_HEALTH))
        .collect()
}

/// Built-in demo level: a run to the right over a pit, with a coin, an
/// enemy, and a goal flag at the end.
pub fn demo_level() -> LevelData {
    let solid = LayerMask(0b1);
    LevelData {
        spawn: Vec2::new(0.0, 2.0),
        colliders: vec![
            // Main floor, split around a pit at x 14..18
            StaticCollider::new(
                Bounds2::new(Vec2::new(-3.0, -1.0), Vec2::new(14.0, 0.0)),
                solid,
            ),
            StaticCollider::new(
                Bounds2::new(Vec2::new(18.0, -1.0), Vec2::new(32.0, 0.0)),
                solid,
            ),
            // Platform over the pit
            StaticCollider::new(
                Bounds2::new(Vec2::new(14.5, 2.0), Vec2::new(17.5, 2.5)),
                solid,
            ),
            // End wall
            StaticCollider::new(
                Bounds2::new(Vec2::new(32.0, 0.0), Vec2::new(33.0, 8.0)),
                solid,
            ),
        ],
        triggers: vec![
            TriggerData {
                bounds: Bounds2::from_center_size(Vec2::new(6.0, 1.0), Vec2::ONE),
                tag: ContactTag::Coin,
            },
            TriggerData {
                bounds: Bounds2::from_center_size(Vec2::new(10.0, 1.0), Vec2::new(1.0, 2.0)),
                tag: ContactTag::Enemy,
            },
            // Kill plane under the pit
            TriggerData {
                bounds: Bounds2::new(Vec2::new(13.0, -8.0), Vec2::new(19.0, -6.0)),
                tag: ContactTag::Boundary,
            },
            TriggerData {
                bounds: Bounds2::from_center_size(Vec2::new(30.0, 1.5), Vec2::new(1.0, 3.0)),
                tag: ContactTag::LevelEnd,
            },
        ],
    }
}
