//! Player locomotion
//!
//! Converts per-tick input into a velocity and drives the raycast motion
//! controller with it. Gravity and jump speed are not tuned directly:
//! they are derived once from a designer-specified jump height and
//! time-to-apex using constant-acceleration kinematics
//! (`h = v0*t - g*t^2/2` with `v = 0` at the apex).
//!
//! # Usage
//!
//! ```ignore
//! use ledge_runner_engine::physics::{Bounds2, MotionConfig};
//! use ledge_runner_engine::player::{LocomotionConfig, PlayerLocomotion};
//! use glam::Vec2;
//!
//! let bounds = Bounds2::from_center_size(Vec2::ZERO, Vec2::new(1.0, 2.0));
//! let mut player =
//!     PlayerLocomotion::new(bounds, MotionConfig::default(), LocomotionConfig::default())?;
//!
//! // Each fixed step:
//! let report = player.tick(input_state.sample(), dt, &world);
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::input::InputFrame;
use crate::physics::{
    Bounds2, CollisionInfo, MotionConfig, MotionError, RaycastMotionController, SpatialQuery,
};

/// Designer-tuned locomotion parameters.
///
/// Defaults match the reference tuning: a 4-unit jump reaching its apex in
/// 0.4 s works out to a gravity of -50 and a takeoff speed of 20.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocomotionConfig {
    /// Peak height of a full jump, world units.
    pub jump_height: f32,
    /// Time to reach the jump apex, seconds.
    pub time_to_apex: f32,
    /// Horizontal smoothing time while grounded, seconds.
    pub ground_accel_time: f32,
    /// Horizontal smoothing time while airborne, seconds.
    pub air_accel_time: f32,
    /// Target horizontal speed at full input, units/second.
    pub move_speed: f32,
    /// Starting and maximum health.
    pub max_health: i32,
    /// Horizontal speed applied away from facing when hurt.
    pub knockback_speed: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            jump_height: 4.0,
            time_to_apex: 0.4,
            ground_accel_time: 0.1,
            air_accel_time: 0.2,
            move_speed: 20.0,
            max_health: 3,
            knockback_speed: 30.0,
        }
    }
}

/// Horizontal facing of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Discrete animation-facing mode, derived every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerMode {
    #[default]
    Idle,
    Walking,
    Jumping,
}

impl PlayerMode {
    /// Pure mode derivation from vertical velocity and the input axis.
    ///
    /// Any vertical motion counts as jumping; otherwise the axis decides
    /// between walking and idle.
    pub fn derive(velocity_y: f32, horizontal: f32) -> Self {
        if velocity_y != 0.0 {
            PlayerMode::Jumping
        } else if horizontal == 0.0 {
            PlayerMode::Idle
        } else {
            PlayerMode::Walking
        }
    }
}

/// Immutable per-tick output, consumed by the embedding application.
#[derive(Debug, Clone, Copy)]
pub struct TickReport {
    pub mode: PlayerMode,
    pub facing: Facing,
    /// Downward contact registered by this tick's movement.
    pub grounded: bool,
    /// Body center after movement.
    pub position: Vec2,
    pub velocity: Vec2,
    pub collisions: CollisionInfo,
    /// Horizontal visual scale sign; flips with facing for sprite mirroring.
    pub scale_x: f32,
}

/// Player character: a raycast-driven body plus velocity, facing, health
/// and coin state. Health and contact reactions live in
/// [`super::status`].
#[derive(Debug, Clone)]
pub struct PlayerLocomotion {
    pub(super) body: RaycastMotionController,
    pub(super) config: LocomotionConfig,
    /// Derived, negative (downward).
    gravity: f32,
    pub(super) jump_speed: f32,
    pub(super) velocity: Vec2,
    /// SmoothDamp internal rate for the horizontal axis.
    x_smoothing: f32,
    pub(super) collisions: CollisionInfo,
    pub(super) facing: Facing,
    pub(super) scale_x: f32,
    pub(super) health: i32,
    pub(super) coins: u32,
}

impl PlayerLocomotion {
    /// Create a player from its collision rectangle and tuning.
    ///
    /// Fails only on a degenerate collision rectangle; ray-count
    /// misconfiguration is corrected by clamping inside the motion
    /// controller.
    pub fn new(
        bounds: Bounds2,
        motion: MotionConfig,
        config: LocomotionConfig,
    ) -> Result<Self, MotionError> {
        let body = RaycastMotionController::new(bounds, motion)?;

        let gravity = -(2.0 * config.jump_height) / (config.time_to_apex * config.time_to_apex);
        let jump_speed = gravity.abs() * config.time_to_apex;
        log::debug!(
            "locomotion tuning: gravity={:.2} jump_speed={:.2}",
            gravity,
            jump_speed
        );

        Ok(Self {
            body,
            config,
            gravity,
            jump_speed,
            velocity: Vec2::ZERO,
            x_smoothing: 0.0,
            collisions: CollisionInfo::default(),
            facing: Facing::Right,
            scale_x: 1.0,
            health: config.max_health,
            coins: 0,
        })
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn jump_speed(&self) -> f32 {
        self.jump_speed
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn position(&self) -> Vec2 {
        self.body.center()
    }

    /// Current collision rectangle, for overlap queries.
    pub fn bounds(&self) -> &Bounds2 {
        self.body.bounds()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn grounded(&self) -> bool {
        self.collisions.below
    }

    /// Advance the player one fixed step.
    pub fn tick(
        &mut self,
        input: InputFrame,
        dt: f32,
        world: &impl SpatialQuery,
    ) -> TickReport {
        // Resting on a floor or bumping a ceiling stops vertical velocity
        // from accumulating into the surface.
        if self.collisions.below || self.collisions.above {
            self.velocity.y = 0.0;
        }
        let grounded = self.collisions.below;

        if input.jump_pressed && grounded {
            self.velocity.y = self.jump_speed;
        }

        // Mode is derived before gravity accumulates, otherwise a grounded
        // player would always read as jumping.
        let mode = PlayerMode::derive(self.velocity.y, input.horizontal);

        let target_x = input.horizontal * self.config.move_speed;
        let smooth_time = if grounded {
            self.config.ground_accel_time
        } else {
            self.config.air_accel_time
        };
        self.velocity.x = smooth_damp(
            self.velocity.x,
            target_x,
            &mut self.x_smoothing,
            smooth_time,
            dt,
        );

        self.velocity.y += self.gravity * dt;

        self.collisions = self.body.move_by(self.velocity * dt, world);
        self.update_facing(input.horizontal);

        TickReport {
            mode,
            facing: self.facing,
            grounded: self.collisions.below,
            position: self.body.center(),
            velocity: self.velocity,
            collisions: self.collisions,
            scale_x: self.scale_x,
        }
    }

    /// Restore spawn state: full health, no coins, facing right, at rest.
    ///
    /// Equivalent to a fresh level load; used by the level manager after a
    /// death or level advance.
    pub fn reset(&mut self, spawn: Vec2) {
        self.body.set_center(spawn);
        self.velocity = Vec2::ZERO;
        self.x_smoothing = 0.0;
        self.collisions = CollisionInfo::default();
        self.facing = Facing::Right;
        self.scale_x = 1.0;
        self.health = self.config.max_health;
        self.coins = 0;
    }

    /// Flip facing only on an actual change of pressed direction; holding
    /// or releasing does not re-flip.
    fn update_facing(&mut self, horizontal: f32) {
        if horizontal == 1.0 && self.facing != Facing::Right {
            self.facing = Facing::Right;
            self.scale_x = -self.scale_x;
        } else if horizontal == -1.0 && self.facing != Facing::Left {
            self.facing = Facing::Left;
            self.scale_x = -self.scale_x;
        }
    }
}

/// Critically-damped smoothing toward a target, matching the classic
/// SmoothDamp formulation: softens direction reversals instead of snapping,
/// with `rate` carrying the smoother's internal velocity between calls.
pub(super) fn smooth_damp(
    current: f32,
    target: f32,
    rate: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;

    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*rate + omega * change) * dt;
    *rate = (*rate - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    // Clamp overshoot past the target.
    if (target - current > 0.0) == (output > target) {
        output = target;
        *rate = (output - target) / dt;
    }
    output
}
