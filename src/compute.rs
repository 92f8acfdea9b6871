//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (plus the tuning and, where needed, an RNG handle) and returns
//! a brand-new `GameState`.  Side effects are limited to the injected RNG.

use glam::Vec2;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Enemy, GameState, GameStatus, Player, Projectile, Rect};
use crate::input::TickInput;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: player in the middle, wave 1, nothing else.
pub fn init_state(config: &GameConfig) -> GameState {
    let field = &config.playfield;
    let p = &config.player;
    GameState {
        player: Player {
            name: p.name.clone(),
            pos: Vec2::new(field.width / 2.0, field.height / 2.0),
            size: p.size,
            speed: p.speed,
            hp: p.hp,
        },
        enemies: Vec::new(),
        projectiles: Vec::new(),
        score: 0,
        wave: 1,
        status: GameStatus::Playing,
        ticks: 0,
        width: field.width,
        height: field.height,
    }
}

// ── HUD helpers ──────────────────────────────────────────────────────────────

/// Hit points as shown on screen: floored, never below zero.
pub fn displayed_hp(state: &GameState) -> u32 {
    state.player.hp.floor().max(0.0) as u32
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Fire one projectile from the player's centre towards `target`.
///
/// `target` is in playfield units.  Ignored once the game is over.
pub fn fire_projectile(state: &GameState, config: &GameConfig, target: Vec2) -> GameState {
    if state.is_over() {
        return state.clone();
    }
    let origin = state.player.center();
    let delta = target - origin;
    let angle = delta.y.atan2(delta.x);
    let mut projectiles = state.projectiles.clone();
    projectiles.push(Projectile {
        pos: origin,
        vel: Vec2::new(angle.cos(), angle.sin()) * config.projectile.speed,
    });
    GameState {
        projectiles,
        ..state.clone()
    }
}

// ── Spawner ──────────────────────────────────────────────────────────────────

/// Append a batch of `wave` enemies and bump the wave counter.
///
/// Each enemy's type comes from its own draw against the configured
/// thresholds; its stats come from the type table at the current wave.
pub fn spawn_wave(state: &GameState, config: &GameConfig, rng: &mut impl Rng) -> GameState {
    if state.is_over() {
        return state.clone();
    }
    let wave = state.wave;
    let mut enemies = state.enemies.clone();
    enemies.reserve(wave as usize);

    for _ in 0..wave {
        let kind = config.spawn.kind_for(rng.gen::<f32>());
        let profile = config.enemies.get(kind);
        let size = profile.size.at(wave);
        let x = rng.gen_range(0.0..=(state.width - size).max(0.0));
        let y = rng.gen_range(0.0..=(state.height - size).max(0.0));
        enemies.push(Enemy {
            pos: Vec2::new(x, y),
            size,
            hp: profile.hp.at(wave),
            speed: profile.speed.at(wave),
            damage: profile.damage.at(wave),
            kind,
        });
    }
    log::debug!("wave {} spawned, {} enemies alive", wave, enemies.len());

    GameState {
        enemies,
        wave: wave + 1,
        ..state.clone()
    }
}

/// Fires the spawner on a fixed period of simulated time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnTimer {
    interval: f32,
    elapsed: f32,
}

impl SpawnTimer {
    pub fn new(interval: f32) -> Self {
        SpawnTimer { interval, elapsed: 0.0 }
    }

    /// Advance by `dt` seconds, returning how many spawns came due.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.elapsed += dt;
        let mut due = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            due += 1;
        }
        due
    }
}

// ── Per-step simulation (pure) ───────────────────────────────────────────────

/// Advance the simulation by one fixed step of `dt` seconds.
///
/// A dead player ends the game here; after that the state never changes.
pub fn tick(state: &GameState, input: &TickInput, config: &GameConfig, dt: f32) -> GameState {
    // ── 1. Terminal state ────────────────────────────────────────────────────
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    if state.player.hp <= 0.0 {
        log::info!("{} has fallen, final score {}", state.player.name, state.score);
        return GameState {
            status: GameStatus::GameOver,
            ..state.clone()
        };
    }

    // ── 2. Move the player ───────────────────────────────────────────────────
    let mut dir = Vec2::ZERO;
    if input.up {
        dir.y -= 1.0;
    }
    if input.down {
        dir.y += 1.0;
    }
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }
    let max = Vec2::new(state.width, state.height) - Vec2::splat(state.player.size);
    let pos = (state.player.pos + dir * state.player.speed * dt).clamp(Vec2::ZERO, max.max(Vec2::ZERO));

    // ── 3. Move projectiles, dropping those that leave the playfield ─────────
    let projectiles: Vec<Projectile> = state
        .projectiles
        .iter()
        .map(|p| Projectile { pos: p.pos + p.vel * dt, vel: p.vel })
        .filter(|p| state.in_bounds(p.pos))
        .collect();

    // ── 4. Enemies chase the player ──────────────────────────────────────────
    let mut enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| {
            let toward = (pos - e.pos).normalize_or_zero();
            Enemy {
                pos: e.pos + toward * e.speed * dt,
                ..e.clone()
            }
        })
        .collect();

    // ── 5. Contact damage ────────────────────────────────────────────────────
    let moved = Player {
        pos,
        ..state.player.clone()
    };
    let hitbox = moved.hitbox(config.player.hitbox_offset);
    let drained: f32 = enemies
        .iter()
        .filter(|e| hitbox.overlaps(&e.rect()))
        .map(|e| e.damage * dt)
        .sum();

    // ── 6. Collision: projectiles ↔ enemies ──────────────────────────────────
    let mut dead = vec![false; enemies.len()];
    let mut used = vec![false; projectiles.len()];
    let mut score_gain: u32 = 0;

    for (pi, p) in projectiles.iter().enumerate() {
        let shot = Rect::square(p.pos, config.projectile.size);
        let target = (0..enemies.len()).find(|&ei| !dead[ei] && shot.overlaps(&enemies[ei].rect()));
        if let Some(ei) = target {
            used[pi] = true;
            let enemy = &mut enemies[ei];
            enemy.hp -= config.projectile.damage;
            if enemy.hp <= 0.0 {
                dead[ei] = true;
                score_gain += config.enemies.get(enemy.kind).score;
            }
        }
    }

    let enemies: Vec<Enemy> = enemies
        .into_iter()
        .zip(dead)
        .filter(|(_, dead)| !dead)
        .map(|(e, _)| e)
        .collect();

    let projectiles: Vec<Projectile> = projectiles
        .into_iter()
        .zip(used)
        .filter(|(_, used)| !used)
        .map(|(p, _)| p)
        .collect();

    // ── 7. Assemble ──────────────────────────────────────────────────────────
    GameState {
        player: Player {
            hp: moved.hp - drained,
            ..moved
        },
        enemies,
        projectiles,
        score: state.score + score_gain,
        ticks: state.ticks + 1,
        ..state.clone()
    }
}
