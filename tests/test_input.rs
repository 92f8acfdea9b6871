use crossterm::event::KeyCode;
use glam::Vec2;
use survival_game::input::*;
use survival_game::viewport::Viewport;

// ── Key map ───────────────────────────────────────────────────────────────────

#[test]
fn keys_are_lowercased() {
    let mut input = InputState::new();
    input.press("W", 1);
    assert!(input.is_pressed("w"));
    input.release("w");
    assert!(!input.is_pressed("w"));
}

#[test]
fn unknown_key_is_released() {
    let input = InputState::new();
    assert!(!input.is_pressed("x"));
}

#[test]
fn held_keys_become_movement() {
    let mut input = InputState::new();
    input.press("w", 1);
    input.press("arrowright", 1);
    assert_eq!(
        input.tick_input(),
        TickInput { up: true, right: true, ..TickInput::default() }
    );
    input.release("w");
    input.press("s", 2);
    input.press("a", 2);
    assert_eq!(
        input.tick_input(),
        TickInput { down: true, left: true, right: true, up: false }
    );
}

#[test]
fn stale_keys_expire() {
    let mut input = InputState::new();
    input.press("a", 10);
    input.press("d", 13);
    input.expire(14, 3);
    assert!(!input.is_pressed("a"));
    assert!(input.is_pressed("d"));
}

#[test]
fn repeat_refreshes_hold() {
    let mut input = InputState::new();
    input.press("a", 10);
    input.press("a", 14);
    input.expire(16, 3);
    assert!(input.is_pressed("a"));
}

#[test]
fn clear_releases_everything() {
    let mut input = InputState::new();
    input.press("a", 1);
    input.press("w", 1);
    input.clear();
    assert_eq!(input.tick_input(), TickInput::default());
}

#[test]
fn key_names_follow_lowercase_convention() {
    assert_eq!(key_name(&KeyCode::Char('A')).as_deref(), Some("a"));
    assert_eq!(key_name(&KeyCode::Char(' ')).as_deref(), Some(" "));
    assert_eq!(key_name(&KeyCode::Up).as_deref(), Some("arrowup"));
    assert_eq!(key_name(&KeyCode::Left).as_deref(), Some("arrowleft"));
    assert_eq!(key_name(&KeyCode::Esc).as_deref(), Some("escape"));
    assert_eq!(key_name(&KeyCode::F(1)), None);
}

// ── Viewport ──────────────────────────────────────────────────────────────────

// 80×32 terminal: HUD row, 30 playfield rows, hint row.  Cells are 10×20 units.
fn view() -> Viewport {
    Viewport::new(80, 32, 800.0, 600.0)
}

#[test]
fn viewport_reserves_hud_and_hint_rows() {
    let v = view();
    assert_eq!(v.top, 1);
    assert_eq!(v.cols, 80);
    assert_eq!(v.rows, 30);
}

#[test]
fn click_maps_to_cell_centre() {
    let v = view();
    assert_eq!(v.to_world(0, 1), Some(Vec2::new(5.0, 10.0)));
    assert_eq!(v.to_world(79, 30), Some(Vec2::new(795.0, 590.0)));
    assert_eq!(v.to_world(40, 16), Some(Vec2::new(405.0, 310.0)));
}

#[test]
fn clicks_outside_playfield_are_ignored() {
    let v = view();
    assert_eq!(v.to_world(10, 0), None);
    assert_eq!(v.to_world(10, 31), None);
    assert_eq!(v.to_world(80, 5), None);
}

#[test]
fn points_map_back_to_their_cell() {
    let v = view();
    assert_eq!(v.to_cell(Vec2::new(5.0, 10.0)), (0, 1));
    assert_eq!(v.to_cell(Vec2::new(405.0, 310.0)), (40, 16));
    // Off-field points clamp to the edge cells.
    assert_eq!(v.to_cell(Vec2::new(-50.0, 900.0)), (0, 30));
}

#[test]
fn rect_covers_whole_cells() {
    let v = view();
    assert_eq!(v.cover(Vec2::new(0.0, 0.0), 20.0, 40.0), (0, 1, 2, 2));
    assert_eq!(v.cover(Vec2::new(15.0, 25.0), 2.0, 2.0), (1, 2, 1, 1));
}
