//! Survival - a top-down terminal survival shooter
//!
//! Core modules:
//! - `entities`: pure game data
//! - `config`: tuning values and the enemy type table
//! - `input`: key map and movement polling
//! - `viewport`: playfield units <-> terminal cells
//! - `compute`: spawner and fixed-timestep simulation step

pub mod compute;
pub mod config;
pub mod entities;
pub mod input;
pub mod viewport;

pub use config::GameConfig;
pub use entities::GameState;

/// Simulation timing constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one step per reference frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
