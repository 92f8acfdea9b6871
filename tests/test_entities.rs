use glam::Vec2;
use survival_game::entities::*;

fn make_player() -> Player {
    Player {
        name: "Mr. Freeman".to_string(),
        pos: Vec2::new(100.0, 50.0),
        size: 22.0,
        speed: 300.0,
        hp: 100.0,
    }
}

#[test]
fn rect_overlap_is_strict() {
    let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
    let inside = Rect { x: 5.0, y: 5.0, w: 10.0, h: 10.0 };
    let touching = Rect { x: 10.0, y: 0.0, w: 10.0, h: 10.0 };
    let apart = Rect { x: 0.0, y: 20.0, w: 10.0, h: 10.0 };
    assert!(a.overlaps(&inside));
    assert!(inside.overlaps(&a));
    assert!(!a.overlaps(&touching));
    assert!(!a.overlaps(&apart));
}

#[test]
fn player_centre_and_hitbox() {
    let p = make_player();
    assert_eq!(p.center(), Vec2::new(111.0, 61.0));
    let hb = p.hitbox(Vec2::new(10.0, 10.0));
    assert_eq!(hb, Rect { x: 110.0, y: 60.0, w: 22.0, h: 22.0 });
}

#[test]
fn enemy_kind_names() {
    assert_eq!(EnemyKind::Zombie.as_str(), "zombie");
    assert_eq!(EnemyKind::Official.as_str(), "official");
    assert_eq!(EnemyKind::Monster.as_str(), "monster");
}

#[test]
fn game_over_detected_before_status_flips() {
    let mut s = GameState {
        player: make_player(),
        enemies: Vec::new(),
        projectiles: Vec::new(),
        score: 0,
        wave: 1,
        status: GameStatus::Playing,
        ticks: 0,
        width: 800.0,
        height: 600.0,
    };
    assert!(!s.is_over());
    s.player.hp = 0.0;
    assert!(s.is_over());
    s.player.hp = 50.0;
    s.status = GameStatus::GameOver;
    assert!(s.is_over());
}

#[test]
fn bounds_include_edges() {
    let s = GameState {
        player: make_player(),
        enemies: Vec::new(),
        projectiles: Vec::new(),
        score: 0,
        wave: 1,
        status: GameStatus::Playing,
        ticks: 0,
        width: 800.0,
        height: 600.0,
    };
    assert!(s.in_bounds(Vec2::new(0.0, 0.0)));
    assert!(s.in_bounds(Vec2::new(800.0, 600.0)));
    assert!(!s.in_bounds(Vec2::new(-0.1, 10.0)));
    assert!(!s.in_bounds(Vec2::new(10.0, 600.1)));
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: make_player(),
        enemies: Vec::new(),
        projectiles: Vec::new(),
        score: 0,
        wave: 1,
        status: GameStatus::Playing,
        ticks: 0,
        width: 800.0,
        height: 600.0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.pos.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy {
        pos: Vec2::new(5.0, 5.0),
        size: 26.0,
        hp: 45.0,
        speed: 48.0,
        damage: 15.0,
        kind: EnemyKind::Zombie,
    });

    assert_eq!(original.player.pos.x, 100.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
