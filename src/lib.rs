//! Hand Breakout - a brick-breaking game steered by a tracked hand
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `session`: Menu / Playing / GameOver state machine and render snapshot
//! - `pointer`: Hand-tracking pointer source boundary and smoothing filter
//! - `audio`: Fire-and-forget audio cue boundary

pub mod audio;
pub mod pointer;
pub mod session;
pub mod sim;

pub use audio::{AudioSink, LogAudio, NullAudio};
pub use pointer::{PointerFilter, PointerSource};
pub use session::{Command, Mode, Session, SessionStatus, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (one tick per rendered frame)
    pub const TICK_RATE_HZ: u32 = 60;

    /// Logical field dimensions (reference layout)
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 700.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Distance of the paddle top from the field bottom
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;
    /// Horizontal speed cap (units per tick)
    pub const PADDLE_SPEED: f32 = 25.0;
    /// Width added per Enlarge pickup, and the hard width cap
    pub const PADDLE_GROW_AMOUNT: f32 = 40.0;
    pub const PADDLE_MAX_WIDTH: f32 = 250.0;
    /// Vertical band below the paddle top that still counts as a hit
    pub const PADDLE_HIT_BAND: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Speed magnitude (units per tick); changed only by explicit events
    pub const BALL_SPEED: f32 = 6.0;
    /// Margin past the bottom edge before a ball counts as lost
    pub const BALL_LOSS_MARGIN: f32 = 50.0;

    /// Brick grid (6 rows x 8 columns in the reference layout)
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 8;
    pub const BRICK_WIDTH: f32 = 90.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_SPACING_X: f32 = 100.0;
    pub const BRICK_SPACING_Y: f32 = 40.0;
    pub const GRID_ORIGIN_X: f32 = 80.0;
    pub const GRID_ORIGIN_Y: f32 = 80.0;
    /// Score awarded per destroyed brick
    pub const BRICK_SCORE: u32 = 10;

    /// Particle burst on brick destruction
    pub const PARTICLE_BURST: usize = 15;
    /// Particle lifetime in ticks
    pub const PARTICLE_LIFE: u32 = 30;
    /// Size lost per tick
    pub const PARTICLE_SHRINK: f32 = 0.1;

    /// Power-ups
    pub const POWER_UP_CHANCE: f64 = 0.08;
    pub const POWER_UP_SIZE: f32 = 22.0;
    /// Fall speed (units per tick)
    pub const POWER_UP_FALL_SPEED: f32 = 3.0;
    /// Vertical band below the paddle top that still counts as a catch
    pub const POWER_UP_CATCH_BAND: f32 = 20.0;
    /// Velocity multiplier applied by the Slow pickup (stacks without cap)
    pub const SLOW_FACTOR: f32 = 0.7;

    /// Screen shake pulse on brick destruction (decays by 1 per tick)
    pub const SHAKE_PULSE: f32 = 6.0;

    /// Exponential smoothing factor for the raw pointer coordinate
    pub const POINTER_ALPHA: f32 = 0.8;

    /// Session defaults
    pub const START_LIVES: u8 = 3;

    /// Brick colors by row index (cyclic beyond the palette size)
    pub const BRICK_PALETTE: [[u8; 3]; 6] = [
        [240, 90, 90],
        [250, 160, 80],
        [250, 220, 80],
        [150, 220, 90],
        [80, 180, 220],
        [180, 120, 220],
    ];

    /// Particle colors, picked at random per particle
    pub const PARTICLE_PALETTE: [[u8; 3]; 3] =
        [[255, 200, 100], [255, 100, 100], [100, 200, 255]];
}
