//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one step per rendered frame)
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod geometry;
pub mod state;
pub mod tick;

pub use geometry::{advance, circle_intersects_rect, reflect_x, reflect_y, Circle, Rect};
pub use state::{
    Ball, Brick, Field, GameEvent, GamePhase, GameState, Paddle, Particle, PowerUp, PowerUpKind,
};
pub use tick::{tick, FrameOutcome, TickInput};
