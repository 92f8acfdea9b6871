//! All game entity types — pure data, no logic.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Zombie,
    Official,
    Monster,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Zombie, EnemyKind::Official, EnemyKind::Monster];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Zombie => "zombie",
            EnemyKind::Official => "official",
            EnemyKind::Monster => "monster",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in playfield units, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn square(origin: Vec2, size: f32) -> Self {
        Rect { x: origin.x, y: origin.y, w: size, h: size }
    }

    /// Strict overlap: touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    /// Units per second.
    pub vel: Vec2,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub name: String,
    /// Top-left corner.
    pub pos: Vec2,
    pub size: f32,
    /// Units per second.
    pub speed: f32,
    /// May go negative before the step that ends the game.
    pub hp: f32,
}

impl Player {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Collision rectangle, shifted from the drawn origin by `offset`.
    pub fn hitbox(&self, offset: Vec2) -> Rect {
        Rect::square(self.pos + offset, self.size)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: f32,
    pub hp: f32,
    /// Units per second.
    pub speed: f32,
    /// Hit points drained per second of contact.
    pub damage: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub score: u32,
    /// Size of the next spawn batch; starts at 1.
    pub wave: u32,
    pub status: GameStatus,
    /// Number of simulation steps taken.
    pub ticks: u64,
    pub width: f32,
    pub height: f32,
}

impl GameState {
    /// True once the player is dead, whether or not a step has noticed yet.
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver || self.player.hp <= 0.0
    }

    pub fn in_bounds(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}
