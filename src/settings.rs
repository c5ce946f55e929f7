//! Runtime toggles
//!
//! Game speed, spawn rate and resolution scale used to be flipped by debug
//! keys. They are plain enumerated values here, handed to the simulation and
//! driver explicitly.

use serde::{Deserialize, Serialize};

/// Simulation speed multiplier presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl GameSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameSpeed::Slow => "Slow",
            GameSpeed::Normal => "Normal",
            GameSpeed::Fast => "Fast",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" => Some(GameSpeed::Slow),
            "normal" => Some(GameSpeed::Normal),
            "fast" => Some(GameSpeed::Fast),
            _ => None,
        }
    }

    /// Cycle to the next preset
    pub fn next(&self) -> Self {
        match self {
            GameSpeed::Slow => GameSpeed::Normal,
            GameSpeed::Normal => GameSpeed::Fast,
            GameSpeed::Fast => GameSpeed::Slow,
        }
    }

    /// Factor applied to simulated time
    pub fn multiplier(&self) -> f32 {
        match self {
            GameSpeed::Slow => 0.5,
            GameSpeed::Normal => 1.0,
            GameSpeed::Fast => 2.0,
        }
    }
}

/// Which base spawn interval a fresh game starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpawnRate {
    #[default]
    Normal,
    Fast,
}

impl SpawnRate {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnRate::Normal => "Normal",
            SpawnRate::Fast => "Fast",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(SpawnRate::Normal),
            "fast" => Some(SpawnRate::Fast),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SpawnRate::Normal => SpawnRate::Fast,
            SpawnRate::Fast => SpawnRate::Normal,
        }
    }
}

/// Render target scale relative to the playfield (renderer only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ResolutionScale {
    Half,
    #[default]
    Full,
    Double,
}

impl ResolutionScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionScale::Half => "Half",
            ResolutionScale::Full => "Full",
            ResolutionScale::Double => "Double",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "half" | "0.5" => Some(ResolutionScale::Half),
            "full" | "1" => Some(ResolutionScale::Full),
            "double" | "2" => Some(ResolutionScale::Double),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ResolutionScale::Half => ResolutionScale::Full,
            ResolutionScale::Full => ResolutionScale::Double,
            ResolutionScale::Double => ResolutionScale::Half,
        }
    }

    pub fn factor(&self) -> f32 {
        match self {
            ResolutionScale::Half => 0.5,
            ResolutionScale::Full => 1.0,
            ResolutionScale::Double => 2.0,
        }
    }
}

/// Runtime toggles
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub speed: GameSpeed,
    pub spawn_rate: SpawnRate,
    pub resolution: ResolutionScale,
}

impl Settings {
    /// Effective simulation speed multiplier
    pub fn speed_multiplier(&self) -> f32 {
        self.speed.multiplier()
    }

    pub fn fast_spawn(&self) -> bool {
        self.spawn_rate == SpawnRate::Fast
    }
}
