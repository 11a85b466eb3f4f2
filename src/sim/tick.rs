//! Fixed timestep simulation tick
//!
//! Core per-frame update that advances the simulation deterministically.
//! Step ordering matters for reproducibility and must be preserved:
//! paddle, balls/walls/paddle bounce, ball loss, brick hits, level
//! clear, particles, power-ups.

use super::state::{Ball, GameEvent, GamePhase, GameState, Particle, PowerUp, PowerUpKind};
use crate::consts::*;
use glam::Vec2;
use rand::Rng;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Target paddle x (field units, from the smoothed pointer).
    /// `None` leaves the paddle where it is.
    pub target_x: Option<f32>,
}

/// Outcome of one frame, consumed by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Playing,
    GameOver,
}

/// Advance the game state by one fixed timestep.
///
/// Once the state is in `GamePhase::GameOver` this is a no-op.
pub fn tick(state: &mut GameState, input: &TickInput) -> FrameOutcome {
    if state.phase == GamePhase::GameOver {
        return FrameOutcome::GameOver;
    }

    state.time_ticks += 1;
    if state.screen_shake > 0.0 {
        state.screen_shake = (state.screen_shake - 1.0).max(0.0);
    }

    let field = state.field;

    // 1. Apply external paddle-target input
    if let Some(target_x) = input.target_x {
        state.paddle.move_toward(target_x, field.width);
    }

    // 2. Advance balls, resolve walls, then paddle bounce. The bounce
    // only fires while the ball moves downward so one contact cannot
    // flip the velocity twice across consecutive frames.
    let paddle_rect = state.paddle.rect();
    for ball in state.balls.iter_mut() {
        ball.step(&field);
        if !ball.active {
            continue;
        }
        let in_band = ball.pos.y >= paddle_rect.top() - ball.radius
            && ball.pos.y <= paddle_rect.top() + PADDLE_HIT_BAND;
        let in_span = ball.pos.x >= paddle_rect.left() && ball.pos.x <= paddle_rect.right();
        if in_band && in_span && ball.vel.y > 0.0 {
            ball.bounce_off_paddle();
            state.events.push(GameEvent::PaddleHit);
        }
    }

    // 3. Drop lost balls; an empty set costs a life
    state.balls.retain(|b| b.active);
    if state.balls.is_empty() {
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::LifeLost);
        if state.lives == 0 {
            log::info!("Game over at score {} (level {})", state.score, state.level);
            state.phase = GamePhase::GameOver;
            return FrameOutcome::GameOver;
        }
        log::info!("Ball lost, {} lives remain", state.lives);
        state.spawn_center_ball();
    }

    // 4. Brick hits. The hit test checks only the ball center against
    // the brick rectangle (the defined behavior; edge grazes can miss).
    // Deactivating on the first match suppresses a second ball hitting
    // the same brick in the same frame.
    for brick in state.bricks.iter_mut() {
        if !brick.active {
            continue;
        }
        let rect = brick.rect();
        for ball in state.balls.iter_mut() {
            if !rect.contains(ball.pos) {
                continue;
            }
            brick.active = false;
            ball.bounce_off_paddle();
            state.score += BRICK_SCORE;
            state.events.push(GameEvent::BrickBreak);
            state.screen_shake = SHAKE_PULSE;
            let center = rect.center();
            for _ in 0..PARTICLE_BURST {
                state.particles.push(Particle::new(center, &mut state.rng));
            }
            if state.rng.random_bool(POWER_UP_CHANCE) {
                let kind = PowerUpKind::roll(&mut state.rng);
                state
                    .power_ups
                    .push(PowerUp::new(rect.pos + Vec2::new(20.0, 10.0), kind));
            }
            break;
        }
    }

    // 5. Level clear: fresh grid, single fresh centered ball. The new
    // grid is fully active, so this cannot cascade within one tick.
    if state.active_brick_count() == 0 {
        state.level += 1;
        log::info!("Level clear, advancing to level {}", state.level);
        state.rebuild_bricks();
        state.balls.clear();
        state.spawn_center_ball();
    }

    // 6. Advance particles, drop expired ones
    for particle in state.particles.iter_mut() {
        particle.step();
    }
    state.particles.retain(|p| p.life > 0 && p.size > 0.0);

    // 7. Advance power-ups, drop off-field ones, apply caught ones
    let paddle_rect = state.paddle.rect();
    let mut caught: Vec<PowerUpKind> = Vec::new();
    for power_up in state.power_ups.iter_mut() {
        power_up.step(&field);
    }
    state.power_ups.retain(|p| {
        if !p.active {
            return false;
        }
        let in_band =
            p.pos.y >= paddle_rect.top() && p.pos.y <= paddle_rect.top() + POWER_UP_CATCH_BAND;
        let in_span = p.pos.x >= paddle_rect.left() && p.pos.x <= paddle_rect.right();
        if in_band && in_span {
            caught.push(p.kind);
            return false;
        }
        true
    });
    for kind in caught {
        apply_power_up(state, kind);
        state.events.push(GameEvent::PowerUpCollect);
    }

    FrameOutcome::Playing
}

/// Apply one collected power-up effect
fn apply_power_up(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::EnlargePaddle => {
            state
                .paddle
                .grow(PADDLE_GROW_AMOUNT, PADDLE_MAX_WIDTH, state.field.width);
        }
        PowerUpKind::SlowBalls => {
            // Stacks multiplicatively with no cap
            for ball in state.balls.iter_mut() {
                ball.vel *= SLOW_FACTOR;
            }
        }
        PowerUpKind::MultiBall => {
            // Two extra balls at the first ball's position, each with a
            // freshly randomized trajectory
            if let Some(pos) = state.balls.first().map(|b| b.pos) {
                for _ in 0..2 {
                    let ball = Ball::spawn(pos, &mut state.rng);
                    state.balls.push(ball);
                }
            }
        }
    }
}
