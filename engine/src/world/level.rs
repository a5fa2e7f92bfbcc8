//! Level files
//!
//! JSON description of a level: spawn point, solid colliders, and tagged
//! trigger volumes. A `LevelData` is the persistent form; `build` turns it
//! into a fresh `TileWorld`, which is also how a level reload works.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::physics::Bounds2;
use crate::player::ContactTag;

use super::tiles::{StaticCollider, TileWorld};

/// A trigger volume as stored in a level file (ids are assigned on build).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TriggerData {
    pub bounds: Bounds2,
    pub tag: ContactTag,
}

/// Serializable level description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    /// Player spawn point (body center).
    pub spawn: Vec2,
    pub colliders: Vec<StaticCollider>,
    #[serde(default)]
    pub triggers: Vec<TriggerData>,
}

impl LevelData {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Materialize the level into a world. Called again on every reload so
    /// collected coins and defeated enemies come back.
    pub fn build(&self) -> TileWorld {
        let mut world = TileWorld::new();
        for collider in &self.colliders {
            world.add_collider(*collider);
        }
        for trigger in &self.triggers {
            world.add_trigger(trigger.bounds, trigger.tag);
        }
        world
    }
}

/// Errors from reading a level file.
#[derive(Debug)]
pub enum LevelError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON (de)serialization error.
    Json(serde_json::Error),
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Io(e) => write!(f, "IO error: {e}"),
            LevelError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for LevelError {}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::Io(e)
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(e: serde_json::Error) -> Self {
        LevelError::Json(e)
    }
}
