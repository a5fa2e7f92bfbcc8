//! Player module
//!
//! The player-facing half of the controller: locomotion on top of the
//! raycast motion controller, plus health/coin state and contact
//! reactions.
//!
//! # Components
//!
//! - [`PlayerLocomotion`] - Input-to-velocity conversion, derived jump
//!   kinematics, smoothed horizontal movement, facing and mode tracking
//! - [`ContactTag`] / [`ContactOutcome`] - Closed set of overlap categories
//!   and the reported reactions
//! - [`LocomotionConfig`] - Designer tuning with reference defaults

pub mod locomotion;
pub mod status;

pub use locomotion::{
    Facing, LocomotionConfig, PlayerLocomotion, PlayerMode, TickReport,
};
pub use status::{Contact, ContactOutcome, ContactTag};
