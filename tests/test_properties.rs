use glam::Vec2;
use proptest::prelude::*;

use survival_game::compute::{fire_projectile, init_state, tick};
use survival_game::config::GameConfig;
use survival_game::consts::SIM_DT;
use survival_game::input::TickInput;

fn arb_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(up, down, left, right)| TickInput { up, down, left, right })
}

proptest! {
    #[test]
    fn player_never_leaves_playfield(
        start_x in 0.0f32..778.0,
        start_y in 0.0f32..578.0,
        inputs in prop::collection::vec(arb_input(), 1..200),
    ) {
        let config = GameConfig::default();
        let mut s = init_state(&config);
        s.player.pos = Vec2::new(start_x, start_y);
        let max_x = s.width - s.player.size;
        let max_y = s.height - s.player.size;

        for input in &inputs {
            s = tick(&s, input, &config, SIM_DT);
            prop_assert!(s.player.pos.x >= 0.0 && s.player.pos.x <= max_x);
            prop_assert!(s.player.pos.y >= 0.0 && s.player.pos.y <= max_y);
        }
    }

    #[test]
    fn projectile_travels_in_a_straight_line(
        angle in -std::f32::consts::PI..std::f32::consts::PI,
        steps in 1usize..120,
    ) {
        let config = GameConfig::default();
        let s = init_state(&config);
        let origin = s.player.center();
        let target = origin + Vec2::new(angle.cos(), angle.sin()) * 100.0;
        let mut s = fire_projectile(&s, &config, target);
        let dir = s.projectiles[0].vel.normalize();

        for _ in 0..steps {
            s = tick(&s, &TickInput::default(), &config, SIM_DT);
            let Some(p) = s.projectiles.first() else {
                break;
            };
            let offset = p.pos - origin;
            // Perpendicular distance from the firing line.
            prop_assert!(offset.perp_dot(dir).abs() < 0.05);
            prop_assert!(offset.dot(dir) >= 0.0);
        }
    }
}
