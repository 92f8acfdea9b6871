//! Game tuning
//!
//! Every number the simulation uses lives here, loadable from a JSON file.
//! Rates are per second; the simulation multiplies them by the step length.

use std::io;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entities::EnemyKind;

/// A stat that grows with the wave number: `base + wave * per_wave`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaled {
    pub base: f32,
    #[serde(default)]
    pub per_wave: f32,
}

impl Scaled {
    pub const fn flat(base: f32) -> Self {
        Self { base, per_wave: 0.0 }
    }

    pub const fn new(base: f32, per_wave: f32) -> Self {
        Self { base, per_wave }
    }

    pub fn at(&self, wave: u32) -> f32 {
        self.base + wave as f32 * self.per_wave
    }
}

/// One row of the enemy type table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub size: Scaled,
    pub hp: Scaled,
    /// Units per second
    pub speed: Scaled,
    /// Hit points drained from the player per second of contact
    pub damage: Scaled,
    /// Points awarded for the kill
    pub score: u32,
}

/// Declarative enemy type table, consulted by the spawner and the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTable {
    pub zombie: EnemyProfile,
    pub official: EnemyProfile,
    pub monster: EnemyProfile,
}

impl Default for EnemyTable {
    fn default() -> Self {
        Self {
            zombie: EnemyProfile {
                size: Scaled::flat(26.0),
                hp: Scaled::new(40.0, 5.0),
                speed: Scaled::flat(48.0),
                damage: Scaled::flat(15.0),
                score: 10,
            },
            official: EnemyProfile {
                size: Scaled::flat(18.0),
                hp: Scaled::new(30.0, 4.0),
                speed: Scaled::flat(84.0),
                damage: Scaled::flat(21.0),
                score: 10,
            },
            monster: EnemyProfile {
                size: Scaled::flat(32.0),
                hp: Scaled::new(80.0, 10.0),
                speed: Scaled::flat(36.0),
                damage: Scaled::flat(36.0),
                score: 30,
            },
        }
    }
}

impl EnemyTable {
    pub fn get(&self, kind: EnemyKind) -> &EnemyProfile {
        match kind {
            EnemyKind::Zombie => &self.zombie,
            EnemyKind::Official => &self.official,
            EnemyKind::Monster => &self.monster,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub size: f32,
    /// Units per second (5 per frame at 60 Hz)
    pub speed: f32,
    pub hp: f32,
    /// Shift of the collision box from the drawn top-left corner
    pub hitbox_offset: Vec2,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: "Mr. Freeman".to_string(),
            size: 22.0,
            speed: 300.0,
            hp: 100.0,
            hitbox_offset: Vec2::new(10.0, 10.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Units per second (7 per frame at 60 Hz)
    pub speed: f32,
    /// Hit points removed from an enemy per hit
    pub damage: f32,
    /// Side of the projectile's square
    pub size: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self { speed: 420.0, damage: 20.0, size: 4.0 }
    }
}

/// Wave timer and the cumulative thresholds for the type draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub interval_secs: f32,
    /// Draws below this are zombies
    pub zombie_threshold: f32,
    /// Draws below this (and not zombies) are officials; the rest are monsters
    pub official_threshold: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval_secs: 3.0,
            zombie_threshold: 0.55,
            official_threshold: 0.8,
        }
    }
}

impl SpawnConfig {
    /// Map a uniform draw in `[0, 1)` to an enemy type.
    pub fn kind_for(&self, r: f32) -> EnemyKind {
        if r < self.zombie_threshold {
            EnemyKind::Zombie
        } else if r < self.official_threshold {
            EnemyKind::Official
        } else {
            EnemyKind::Monster
        }
    }
}

/// Complete game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub playfield: PlayfieldConfig,
    pub player: PlayerConfig,
    pub projectile: ProjectileConfig,
    pub spawn: SpawnConfig,
    pub enemies: EnemyTable,
}

impl GameConfig {
    /// Environment variable naming a JSON tuning file
    pub const ENV_PATH: &'static str = "SURVIVAL_CONFIG";

    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> io::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Reject tunings the simulation cannot run with.
    pub fn validate(&self) -> io::Result<()> {
        fn invalid(msg: String) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::InvalidInput, msg))
        }

        let field = &self.playfield;
        if !(field.width > 0.0 && field.height > 0.0) {
            return invalid(format!("playfield must be positive, got {}x{}", field.width, field.height));
        }
        if !(self.player.size > 0.0 && self.player.size <= field.width.min(field.height)) {
            return invalid(format!("player size {} does not fit the playfield", self.player.size));
        }
        if !(self.player.hp > 0.0 && self.player.speed >= 0.0) {
            return invalid(format!(
                "player needs positive hp and non-negative speed, got {} and {}",
                self.player.hp, self.player.speed
            ));
        }
        let shot = &self.projectile;
        if !(shot.size > 0.0 && shot.speed >= 0.0 && shot.damage > 0.0) {
            return invalid(format!(
                "projectile needs positive size and damage and non-negative speed, got {}, {} and {}",
                shot.size, shot.damage, shot.speed
            ));
        }
        if !(self.spawn.interval_secs > 0.0) {
            return invalid(format!("spawn interval must be positive, got {}", self.spawn.interval_secs));
        }
        let (z, o) = (self.spawn.zombie_threshold, self.spawn.official_threshold);
        if !(0.0..=1.0).contains(&z) || !(0.0..=1.0).contains(&o) || z > o {
            return invalid(format!("spawn thresholds must ascend within [0, 1], got {z} and {o}"));
        }
        for kind in EnemyKind::ALL {
            let name = kind.as_str();
            let profile = self.enemies.get(kind);
            let stats = [
                ("size", profile.size),
                ("hp", profile.hp),
                ("speed", profile.speed),
                ("damage", profile.damage),
            ];
            // With no shrinking stats, wave 1 is the weakest an enemy gets.
            for (stat, scaled) in stats {
                if !(scaled.per_wave >= 0.0) {
                    return invalid(format!("{name} {stat} must not shrink per wave, got {}", scaled.per_wave));
                }
                if !(scaled.base >= 0.0) {
                    return invalid(format!("{name} {stat} must not be negative, got {}", scaled.base));
                }
            }
            if !(profile.size.at(1) > 0.0 && profile.hp.at(1) > 0.0) {
                return invalid(format!("{name} must spawn with positive size and hp"));
            }
        }
        Ok(())
    }
}
