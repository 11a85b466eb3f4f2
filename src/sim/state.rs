//! Game state and core simulation types
//!
//! The `GameState` aggregate owns every entity collection and session
//! counter for the duration of one game; a new session reconstructs all
//! of it. No module-level globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_4;

use super::geometry::Rect;
use crate::consts::*;

/// Current phase of the simulation itself (the outer Menu state lives
/// in `session::Mode`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted; ticks are no-ops
    GameOver,
}

/// Audio cues emitted by the simulation, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the paddle
    PaddleHit,
    /// A brick was destroyed
    BrickBreak,
    /// The last active ball fell out of the field
    LifeLost,
    /// A falling power-up was caught by the paddle
    PowerUpCollect,
}

/// The logical play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Y coordinate of the paddle's top edge
    pub fn paddle_top(&self) -> f32 {
        self.height - PADDLE_BOTTOM_OFFSET
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal speed cap (units per tick)
    pub speed: f32,
}

impl Paddle {
    pub fn new(field: &Field) -> Self {
        Self {
            pos: Vec2::new(field.width / 2.0 - PADDLE_WIDTH / 2.0, field.paddle_top()),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Step toward `target_x` by at most one speed increment, then
    /// clamp into field bounds. Out-of-range targets are fine; the
    /// paddle never leaves the visible field.
    pub fn move_toward(&mut self, target_x: f32, field_width: f32) {
        let delta = (target_x - self.pos.x).clamp(-self.speed, self.speed);
        self.pos.x += delta;
        self.clamp_x(field_width);
    }

    /// Widen the paddle, clamped to `cap` no matter how many pickups
    /// were collected, then re-clamp position so the paddle stays in
    /// the field.
    pub fn grow(&mut self, amount: f32, cap: f32, field_width: f32) {
        self.width = (self.width + amount).min(cap);
        self.clamp_x(field_width);
    }

    fn clamp_x(&mut self, field_width: f32) {
        self.pos.x = self.pos.x.clamp(0.0, field_width - self.width);
    }
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl Ball {
    /// Spawn at `pos` with a fresh trajectory: fixed speed, direction
    /// uniform in a +/-45 degree cone around straight up.
    pub fn spawn(pos: Vec2, rng: &mut Pcg32) -> Self {
        let theta = rng.random_range(-FRAC_PI_4..=FRAC_PI_4);
        Self {
            pos,
            vel: Vec2::new(BALL_SPEED * theta.sin(), -BALL_SPEED * theta.cos()),
            radius: BALL_RADIUS,
            active: true,
        }
    }

    pub fn spawn_center(field: &Field, rng: &mut Pcg32) -> Self {
        Self::spawn(field.center(), rng)
    }

    /// Advance one tick: apply velocity, reflect off the side and top
    /// walls, deactivate once past the loss margin below the field.
    ///
    /// Wall contact mirrors the position across the wall plane and
    /// negates the velocity component, so after every step the center
    /// stays within `[radius, extent - radius]` on contained axes.
    pub fn step(&mut self, field: &Field) {
        self.pos = super::geometry::advance(self.pos, self.vel, 1.0);

        if self.pos.x <= self.radius {
            self.pos.x = 2.0 * self.radius - self.pos.x;
            self.vel = super::geometry::reflect_x(self.vel);
        } else if self.pos.x >= field.width - self.radius {
            self.pos.x = 2.0 * (field.width - self.radius) - self.pos.x;
            self.vel = super::geometry::reflect_x(self.vel);
        }
        if self.pos.y <= self.radius {
            self.pos.y = 2.0 * self.radius - self.pos.y;
            self.vel = super::geometry::reflect_y(self.vel);
        }
        // Small margin past the visible edge avoids mid-frame ambiguity
        if self.pos.y >= field.height + BALL_LOSS_MARGIN {
            self.active = false;
        }
    }

    /// Paddle bounce: plain vertical sign flip, independent of where
    /// on the paddle the ball lands (no spin response)
    pub fn bounce_off_paddle(&mut self) {
        self.vel = super::geometry::reflect_y(self.vel);
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A brick in the fixed grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    /// Palette index, assigned by row modulo palette size
    pub color: usize,
    pub active: bool,
}

impl Brick {
    pub fn new(x: f32, y: f32, color: usize) -> Self {
        Self {
            pos: Vec2::new(x, y),
            color,
            active: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BRICK_WIDTH, BRICK_HEIGHT)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }
}

/// A cosmetic particle from a brick burst
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Remaining lifetime in ticks
    pub life: u32,
    /// Palette index into `PARTICLE_PALETTE`
    pub color: usize,
}

impl Particle {
    pub fn new(pos: Vec2, rng: &mut Pcg32) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-2.0..=2.0), rng.random_range(-2.0..=2.0)),
            size: rng.random_range(3..=6) as f32,
            life: PARTICLE_LIFE,
            color: rng.random_range(0..PARTICLE_PALETTE.len()),
        }
    }

    pub fn step(&mut self) {
        self.pos += self.vel;
        self.size = (self.size - PARTICLE_SHRINK).max(0.0);
        self.life = self.life.saturating_sub(1);
    }
}

/// Power-up kinds, dispatched through exhaustive matches so a new kind
/// cannot be silently unhandled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Widen the paddle by 40, capped at 250
    EnlargePaddle,
    /// Multiply every active ball's velocity by 0.7. Stacks with no
    /// cap or decay; repeated pickups can drive speed toward zero.
    SlowBalls,
    /// Spawn two extra balls at the first ball's position
    MultiBall,
}

impl PowerUpKind {
    pub fn roll(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..3) {
            0 => PowerUpKind::EnlargePaddle,
            1 => PowerUpKind::SlowBalls,
            _ => PowerUpKind::MultiBall,
        }
    }
}

/// A falling power-up capsule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub active: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            pos,
            kind,
            active: true,
        }
    }

    /// Fall one tick; deactivate once below the field
    pub fn step(&mut self, field: &Field) {
        self.pos.y += POWER_UP_FALL_SPEED;
        if self.pos.y > field.height {
            self.active = false;
        }
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub field: Field,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    /// Screen-shake pulse for the renderer, decays by 1 per tick
    pub screen_shake: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub balls: Vec<Ball>,
    pub bricks: Vec<Brick>,
    pub particles: Vec<Particle>,
    pub power_ups: Vec<PowerUp>,
    /// Audio cues queued this frame, drained by the session
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new session on the reference 900x700 field
    pub fn new(seed: u64) -> Self {
        Self::with_field(seed, Field::default())
    }

    /// Create a new session on an arbitrary field
    pub fn with_field(seed: u64, field: Field) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::new(&field);
        let ball = Ball::spawn_center(&field, &mut rng);
        let mut state = Self {
            seed,
            field,
            phase: GamePhase::Playing,
            score: 0,
            lives: START_LIVES,
            level: 1,
            screen_shake: 0.0,
            time_ticks: 0,
            paddle,
            balls: vec![ball],
            bricks: Vec::new(),
            particles: Vec::new(),
            power_ups: Vec::new(),
            events: Vec::new(),
            rng,
        };
        state.rebuild_bricks();
        state
    }

    /// Regenerate the full brick grid at fixed spacing. Colors cycle by
    /// row so levels beyond the palette size reuse colors.
    pub fn rebuild_bricks(&mut self) {
        self.bricks.clear();
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                let x = GRID_ORIGIN_X + col as f32 * BRICK_SPACING_X;
                let y = GRID_ORIGIN_Y + row as f32 * BRICK_SPACING_Y;
                self.bricks.push(Brick::new(x, y, row % BRICK_PALETTE.len()));
            }
        }
    }

    /// Spawn a fresh ball at field center with a new random trajectory
    pub fn spawn_center_ball(&mut self) {
        let ball = Ball::spawn_center(&self.field, &mut self.rng);
        self.balls.push(ball);
    }

    pub fn active_brick_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    /// Take the audio cues queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
