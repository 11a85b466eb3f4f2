//! Scenario and property tests for the simulation engine

use glam::Vec2;
use proptest::prelude::*;

use hand_breakout::consts::*;
use hand_breakout::sim::{
    tick, Ball, Field, FrameOutcome, GameEvent, GamePhase, GameState, PowerUp, PowerUpKind,
    TickInput,
};

/// Replace the session's balls with a single hand-placed ball
fn set_single_ball(state: &mut GameState, pos: Vec2, vel: Vec2) {
    state.balls.clear();
    state.balls.push(Ball {
        pos,
        vel,
        radius: BALL_RADIUS,
        active: true,
    });
}

#[test]
fn paddle_bounce_flips_velocity_exactly_once() {
    let mut state = GameState::new(11);
    let paddle_center_x = state.paddle.pos.x + state.paddle.width / 2.0;
    // Ball straight down at the paddle's x-center, paddle stationary
    set_single_ball(
        &mut state,
        Vec2::new(paddle_center_x, 600.0),
        Vec2::new(0.0, BALL_SPEED),
    );

    let mut flips = 0;
    let mut paddle_hits = 0;
    let mut prev_dy = state.balls[0].vel.y;
    for _ in 0..30 {
        tick(&mut state, &TickInput::default());
        let dy = state.balls[0].vel.y;
        if dy.signum() != prev_dy.signum() {
            flips += 1;
        }
        prev_dy = dy;
        paddle_hits += state
            .drain_events()
            .iter()
            .filter(|e| **e == GameEvent::PaddleHit)
            .count();
    }

    assert_eq!(flips, 1);
    assert_eq!(paddle_hits, 1);
    assert_eq!(state.score, 0);
}

#[test]
fn brick_hit_scores_and_bursts_particles() {
    let mut state = GameState::new(22);
    // One tick of straight-down motion lands the ball center inside the
    // brick at (80, 80, 90, 30)
    set_single_ball(&mut state, Vec2::new(125.0, 89.0), Vec2::new(0.0, BALL_SPEED));

    tick(&mut state, &TickInput::default());

    assert!(!state.bricks[0].active);
    assert_eq!(state.score, BRICK_SCORE);
    let events = state.drain_events();
    assert_eq!(
        events.iter().filter(|e| **e == GameEvent::BrickBreak).count(),
        1
    );
    // 15 particles burst from the brick center (one step of drift by
    // the time the frame ends)
    assert_eq!(state.particles.len(), PARTICLE_BURST);
    let center = Vec2::new(125.0, 95.0);
    for particle in &state.particles {
        assert!((particle.pos - center).length() <= 3.0);
    }
    // Colliding ball reflects upward
    assert!(state.balls[0].vel.y < 0.0);
    assert_eq!(state.screen_shake, SHAKE_PULSE);
}

#[test]
fn brick_hit_by_two_balls_processed_once() {
    let mut state = GameState::new(23);
    state.balls.clear();
    // Both balls step into the same brick this frame. Note the hit test
    // checks only the ball center against the brick rectangle, not true
    // circle-rect intersection, so rim grazes are intentionally missed.
    for x in [120.0, 130.0] {
        state.balls.push(Ball {
            pos: Vec2::new(x, 89.0),
            vel: Vec2::new(0.0, BALL_SPEED),
            radius: BALL_RADIUS,
            active: true,
        });
    }

    tick(&mut state, &TickInput::default());

    assert_eq!(state.score, BRICK_SCORE);
    let breaks = state
        .drain_events()
        .iter()
        .filter(|e| **e == GameEvent::BrickBreak)
        .count();
    assert_eq!(breaks, 1);
    assert_eq!(state.particles.len(), PARTICLE_BURST);
}

#[test]
fn bricks_never_reactivate_within_level() {
    let mut state = GameState::new(24);
    set_single_ball(&mut state, Vec2::new(125.0, 89.0), Vec2::new(0.0, BALL_SPEED));
    tick(&mut state, &TickInput::default());
    let mut prev_active = state.active_brick_count();
    assert_eq!(prev_active, 47);

    for _ in 0..600 {
        tick(&mut state, &TickInput::default());
        if state.phase == GamePhase::GameOver || state.level > 1 {
            break;
        }
        let active = state.active_brick_count();
        assert!(active <= prev_active);
        prev_active = active;
    }
}

#[test]
fn level_clear_rebuilds_grid_with_one_centered_ball() {
    let mut state = GameState::new(33);
    for brick in state.bricks.iter_mut() {
        brick.active = false;
    }

    tick(&mut state, &TickInput::default());

    assert_eq!(state.level, 2);
    assert_eq!(state.active_brick_count(), BRICK_ROWS * BRICK_COLS);
    assert_eq!(state.balls.len(), 1);
    assert_eq!(state.balls[0].pos, state.field.center());
}

#[test]
fn multi_ball_yields_three_active_balls() {
    let mut state = GameState::new(44);
    assert_eq!(state.balls.len(), 1);
    let catch_x = state.paddle.pos.x + state.paddle.width / 2.0;
    let catch_y = state.field.paddle_top() - 2.0;
    state
        .power_ups
        .push(PowerUp::new(Vec2::new(catch_x, catch_y), PowerUpKind::MultiBall));

    tick(&mut state, &TickInput::default());

    assert_eq!(state.balls.len(), 3);
    assert!(state.power_ups.is_empty());
    assert!(state.drain_events().contains(&GameEvent::PowerUpCollect));
}

#[test]
fn enlarge_widens_paddle_and_slow_stacks() {
    let mut state = GameState::new(45);
    let catch_x = state.paddle.pos.x + state.paddle.width / 2.0;
    let catch_y = state.field.paddle_top() - 2.0;
    state.power_ups.push(PowerUp::new(
        Vec2::new(catch_x, catch_y),
        PowerUpKind::EnlargePaddle,
    ));
    tick(&mut state, &TickInput::default());
    assert_eq!(state.paddle.width, PADDLE_WIDTH + PADDLE_GROW_AMOUNT);

    let speed_before = state.balls[0].speed();
    let catch_x = state.paddle.pos.x + state.paddle.width / 2.0;
    state
        .power_ups
        .push(PowerUp::new(Vec2::new(catch_x, catch_y), PowerUpKind::SlowBalls));
    tick(&mut state, &TickInput::default());
    assert!((state.balls[0].speed() - speed_before * SLOW_FACTOR).abs() < 1e-3);
}

#[test]
fn lives_count_down_to_game_over() {
    let mut state = GameState::new(55);

    state.balls.clear();
    assert_eq!(tick(&mut state, &TickInput::default()), FrameOutcome::Playing);
    assert_eq!(state.lives, 2);
    assert_eq!(state.balls.len(), 1);

    state.balls.clear();
    assert_eq!(tick(&mut state, &TickInput::default()), FrameOutcome::Playing);
    assert_eq!(state.lives, 1);

    state.balls.clear();
    let bricks_before = state.active_brick_count();
    assert_eq!(tick(&mut state, &TickInput::default()), FrameOutcome::GameOver);
    assert_eq!(state.lives, 0);
    assert_eq!(state.phase, GamePhase::GameOver);
    // GameOver short-circuits the rest of the frame: no respawn, no
    // brick processing
    assert!(state.balls.is_empty());
    assert_eq!(state.active_brick_count(), bricks_before);
}

proptest! {
    #[test]
    fn prop_paddle_stays_in_field(target in -1.0e4f32..1.0e4) {
        let field = Field::default();
        let mut state = GameState::new(0);
        for _ in 0..60 {
            tick(&mut state, &TickInput { target_x: Some(target) });
            prop_assert!(state.paddle.pos.x >= 0.0);
            prop_assert!(state.paddle.pos.x <= field.width - state.paddle.width);
        }
    }

    #[test]
    fn prop_ball_contained_by_reflection(
        x in 10.0f32..890.0,
        y in 10.0f32..300.0,
        angle in 0.0f32..std::f32::consts::TAU,
    ) {
        let field = Field::default();
        let mut ball = Ball {
            pos: Vec2::new(x, y),
            vel: BALL_SPEED * Vec2::new(angle.cos(), angle.sin()),
            radius: BALL_RADIUS,
            active: true,
        };
        for _ in 0..400 {
            ball.step(&field);
            if !ball.active {
                break;
            }
            prop_assert!(ball.pos.x >= ball.radius - 1e-3);
            prop_assert!(ball.pos.x <= field.width - ball.radius + 1e-3);
            prop_assert!(ball.pos.y >= ball.radius - 1e-3);
        }
    }

    #[test]
    fn prop_score_rises_in_tens_and_lives_fall(seed in 0u64..500) {
        let mut state = GameState::new(seed);
        let mut prev_score = 0u32;
        let mut prev_lives = state.lives;
        for _ in 0..1200 {
            // Chase the first ball so some bricks actually get hit
            let target = state.balls.first().map(|b| b.pos.x);
            tick(&mut state, &TickInput { target_x: target });
            prop_assert!(state.score >= prev_score);
            prop_assert_eq!((state.score - prev_score) % BRICK_SCORE, 0);
            prop_assert!(state.lives <= prev_lives);
            prev_score = state.score;
            prev_lives = state.lives;
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
    }
}
