//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands, so drawing the game-over screen any number
//! of times leaves the state untouched.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use survival_game::compute::displayed_hp;
use survival_game::entities::{Enemy, EnemyKind, GameState, GameStatus, Projectile};
use survival_game::viewport::Viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::White;
const C_HUD_HP: Color = Color::Red;
const C_PLAYER: Color = Color::Cyan;
const C_ZOMBIE: Color = Color::Green;
const C_OFFICIAL: Color = Color::Red;
const C_MONSTER: Color = Color::Magenta;
const C_PROJECTILE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::Red;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, view)?;
    } else {
        draw_player(out, state, view)?;
        for projectile in &state.projectiles {
            draw_projectile(out, projectile, view)?;
        }
        for enemy in &state.enemies {
            draw_enemy(out, enemy, view)?;
        }
        draw_hud(out, state)?;
        draw_controls_hint(out, view)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.top + view.rows))?;
    out.flush()?;
    Ok(())
}

/// Fill the cells under a playfield rectangle with `glyph`.
fn fill_rect<W: Write>(
    out: &mut W,
    view: &Viewport,
    pos: glam::Vec2,
    w: f32,
    h: f32,
    glyph: char,
) -> std::io::Result<()> {
    let (col, row, cols, rows) = view.cover(pos, w, h);
    let line: String = std::iter::repeat(glyph).take(cols as usize).collect();
    for r in row..row + rows {
        out.queue(cursor::MoveTo(col, r))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HP))?;
    out.queue(Print(format!("HP: {:>3}", displayed_hp(state))))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("   Score: {}   Wave: {}", state.score, state.wave)))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let p = &state.player;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    // Sprite is drawn larger than the hitbox, as the artwork was.
    fill_rect(out, view, p.pos, p.size * 1.5, p.size * 1.8, '@')
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, view: &Viewport) -> std::io::Result<()> {
    match enemy.kind {
        EnemyKind::Zombie => {
            out.queue(style::SetForegroundColor(C_ZOMBIE))?;
            fill_rect(out, view, enemy.pos, enemy.size * 1.6, enemy.size * 1.6, 'Z')
        }
        EnemyKind::Official => {
            out.queue(style::SetForegroundColor(C_OFFICIAL))?;
            fill_rect(out, view, enemy.pos, enemy.size, enemy.size, '█')
        }
        EnemyKind::Monster => {
            out.queue(style::SetForegroundColor(C_MONSTER))?;
            fill_rect(out, view, enemy.pos, enemy.size, enemy.size, '█')
        }
    }
}

fn draw_projectile<W: Write>(out: &mut W, projectile: &Projectile, view: &Viewport) -> std::io::Result<()> {
    let (col, row) = view.to_cell(projectile.pos);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_PROJECTILE))?;
    out.queue(Print("•"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.top + view.rows))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("W A S D / arrows : Move   Click : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over screen ──────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let lines = [
        ("GAME OVER".to_string(), C_GAME_OVER),
        (format!("Final Score: {}", state.score), C_GAME_OVER),
        (format!("{} has fallen", state.player.name), C_GAME_OVER),
        ("R - Play Again  Q - Quit".to_string(), C_HUD),
    ];

    let cx = view.cols / 2;
    let start_row = (view.top + view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}
