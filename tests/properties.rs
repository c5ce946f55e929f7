//! Invariants that must hold for any input sequence

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use rock_drift::Config;
use rock_drift::normalize_angle;
use rock_drift::consts::FRAME_MS;
use rock_drift::sim::{FrameTime, GameState, Playfield, TickInput, reset, spawn_asteroid, step};

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(rotate_left, rotate_right, thrust, fire)| TickInput {
            rotate_left,
            rotate_right,
            thrust,
            fire,
            restart: false,
        },
    )
}

fn started(seed: u64, config: &Config) -> GameState {
    let mut state = GameState::new(seed, Playfield::new(800.0, 600.0));
    reset(&mut state, config, 0.0);
    state
}

proptest! {
    #[test]
    fn normalized_angle_in_half_open_range(angle in -100.0f32..100.0) {
        use std::f32::consts::PI;
        let a = normalize_angle(angle);
        prop_assert!((-PI..PI).contains(&a), "{} -> {}", angle, a);
        // Same direction as the input
        prop_assert!((a.cos() - angle.cos()).abs() < 1e-3);
        prop_assert!((a.sin() - angle.sin()).abs() < 1e-3);
    }

    #[test]
    fn spawn_is_deterministic(seed in any::<u64>(), w in 100.0f32..2000.0, h in 100.0f32..2000.0) {
        let field = Playfield::new(w, h);
        let tuning = Config::default().tuning;
        let a = spawn_asteroid(&field, &tuning, &mut Pcg32::seed_from_u64(seed));
        let b = spawn_asteroid(&field, &tuning, &mut Pcg32::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn spawned_asteroids_head_inward(seed in any::<u64>()) {
        let field = Playfield::new(800.0, 600.0);
        let tuning = Config::default().tuning;
        let rock = spawn_asteroid(&field, &tuning, &mut Pcg32::seed_from_u64(seed));
        // Whichever edge it sits outside of, it moves back across that edge
        if rock.pos.y < 0.0 {
            prop_assert!(rock.vel.y >= tuning.spawn_min_inward_speed);
        } else if rock.pos.y > field.height {
            prop_assert!(rock.vel.y <= -tuning.spawn_min_inward_speed);
        } else if rock.pos.x < 0.0 {
            prop_assert!(rock.vel.x >= tuning.spawn_min_inward_speed);
        } else {
            prop_assert!(rock.pos.x > field.width);
            prop_assert!(rock.vel.x <= -tuning.spawn_min_inward_speed);
        }
        prop_assert!(rock.radius >= tuning.asteroid_min_radius);
        prop_assert!(rock.radius <= tuning.asteroid_max_radius);
    }

    #[test]
    fn ship_stays_within_wrap_margin(
        x in -50.0f32..850.0,
        y in -50.0f32..650.0,
        vx in -30.0f32..30.0,
        vy in -30.0f32..30.0,
        dt in 0.0f32..40.0,
    ) {
        let config = Config::default();
        let mut state = started(1, &config);
        {
            let ship = state.ship.as_mut().unwrap();
            ship.pos = Vec2::new(x, y);
            ship.vel = Vec2::new(vx, vy);
        }
        step(&mut state, &TickInput::default(), FrameTime::new(1.0, dt), &config);
        let pos = state.ship.as_ref().unwrap().pos;
        prop_assert!((-50.0..=850.0).contains(&pos.x));
        prop_assert!((-50.0..=650.0).contains(&pos.y));
    }

    #[test]
    fn spawn_interval_never_below_floor(frames in 1usize..400, gap in 1.0f64..3000.0) {
        let config = Config::default();
        let mut state = started(7, &config);
        let mut last = state.spawn_interval_ms;
        for i in 1..=frames {
            step(&mut state, &TickInput::default(), FrameTime::new(i as f64 * gap, 16.0), &config);
            if state.game_over {
                break;
            }
            prop_assert!(state.spawn_interval_ms >= config.tuning.spawn_interval_floor_ms);
            prop_assert!(state.spawn_interval_ms <= last);
            last = state.spawn_interval_ms;
        }
    }

    #[test]
    fn score_never_decreases(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..300),
    ) {
        let config = Config::default();
        let mut state = started(seed, &config);
        let mut score = 0;
        for (i, input) in inputs.iter().enumerate() {
            let now = (i + 1) as f64 * 50.0;
            step(&mut state, input, FrameTime::new(now, 40.0), &config);
            prop_assert!(state.score >= score);
            score = state.score;
        }
    }

    #[test]
    fn game_over_freezes_everything(
        inputs in prop::collection::vec(input_strategy(), 1..50),
    ) {
        let config = Config::default();
        let mut state = started(3, &config);
        state.game_over = true;
        state.score = 123;

        let ship = state.ship.clone();
        let bullets = state.bullets.clone();
        let asteroids = state.asteroids.clone();
        for (i, input) in inputs.iter().enumerate() {
            step(&mut state, input, FrameTime::new(10_000.0 + i as f64 * FRAME_MS as f64, 16.0), &config);
        }
        prop_assert_eq!(&state.ship, &ship);
        prop_assert_eq!(&state.bullets, &bullets);
        prop_assert_eq!(&state.asteroids, &asteroids);
        prop_assert_eq!(state.score, 123);
        prop_assert!(state.game_over);
    }
}
