//! Session state machine
//!
//! Drives Menu -> Playing -> GameOver around the simulation engine.
//! Each frame the session samples the pointer source, smooths it into a
//! paddle target, runs one simulation tick, and forwards queued audio
//! cues to the sink. The render adapter reads a `Snapshot`.

use serde::Serialize;

use crate::audio::AudioSink;
use crate::pointer::{PointerFilter, PointerSource};
use crate::sim::geometry::Rect;
use crate::sim::{tick, Ball, Brick, Field, FrameOutcome, GameState, Particle, PowerUp, TickInput};

/// Outer game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// Waiting for a hand to appear; no simulation updates
    Menu,
    /// One simulation tick per frame
    Playing,
    /// Frozen display of the final score
    GameOver,
}

/// Commands from the input boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a fresh session (honored only in GameOver)
    Restart,
    /// Tear down and exit (honored in any mode)
    Quit,
}

/// Whether the caller should keep running frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Terminated,
}

/// Read-only per-frame view for the render surface
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub mode: Mode,
    pub paddle: Rect,
    pub balls: &'a [Ball],
    pub bricks: &'a [Brick],
    pub particles: &'a [Particle],
    pub power_ups: &'a [PowerUp],
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    pub screen_shake: f32,
}

/// One full game from Menu through GameOver
pub struct Session {
    state: GameState,
    mode: Mode,
    filter: PointerFilter,
    /// Last known paddle target; persists across sensor gaps
    target: Option<f32>,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::with_field(seed, Field::default())
    }

    pub fn with_field(seed: u64, field: Field) -> Self {
        let filter = PointerFilter::new(field.width / 2.0);
        Self {
            state: GameState::with_field(seed, field),
            mode: Mode::Menu,
            filter,
            target: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            mode: self.mode,
            paddle: self.state.paddle.rect(),
            balls: &self.state.balls,
            bricks: &self.state.bricks,
            particles: &self.state.particles,
            power_ups: &self.state.power_ups,
            score: self.state.score,
            lives: self.state.lives,
            level: self.state.level,
            screen_shake: self.state.screen_shake,
        }
    }

    /// Run one frame of the outer loop.
    ///
    /// `command` carries at most one restart/quit keypress for this
    /// frame; quit is honored in any mode.
    pub fn frame(
        &mut self,
        pointer: &mut dyn PointerSource,
        audio: &mut dyn AudioSink,
        command: Option<Command>,
    ) -> SessionStatus {
        if command == Some(Command::Quit) {
            log::info!("Quit requested");
            return SessionStatus::Terminated;
        }

        match self.mode {
            Mode::Menu => {
                // Presence is a boolean gate, independent of position
                if pointer.presence_detected() {
                    log::info!("Hand detected, starting play");
                    self.mode = Mode::Playing;
                }
            }
            Mode::Playing => {
                // A missed sample leaves the last known target in place
                if let Some(raw) = pointer.sample() {
                    let raw_x = raw.clamp(0.0, 1.0) * self.state.field.width;
                    self.target = Some(self.filter.apply(raw_x));
                }
                let input = TickInput {
                    target_x: self.target,
                };
                let outcome = tick(&mut self.state, &input);
                for event in self.state.drain_events() {
                    audio.play(event);
                }
                if outcome == FrameOutcome::GameOver {
                    self.mode = Mode::GameOver;
                }
            }
            Mode::GameOver => {
                if command == Some(Command::Restart) {
                    log::info!("Restarting session");
                    *self = Session::with_field(
                        self.state.seed.wrapping_add(1),
                        self.state.field,
                    );
                }
            }
        }

        SessionStatus::Running
    }
}
