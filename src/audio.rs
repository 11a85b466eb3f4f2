//! Audio cue boundary
//!
//! The simulation queues `GameEvent`s; the session forwards them to an
//! `AudioSink` once per frame. Playback is fire-and-forget: a sink must
//! never block the frame or surface an error back to the engine.

use crate::sim::GameEvent;

/// Receiver for audio cues
pub trait AudioSink {
    /// Play the cue for one event. Infallible by contract; a sink that
    /// cannot play simply drops the cue.
    fn play(&mut self, event: GameEvent);
}

/// Sink that discards every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _event: GameEvent) {}
}

/// Sink that logs each cue, for headless runs and debugging
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, event: GameEvent) {
        let name = match event {
            GameEvent::PaddleHit => "paddle-hit",
            GameEvent::BrickBreak => "brick-break",
            GameEvent::LifeLost => "life-lost",
            GameEvent::PowerUpCollect => "powerup",
        };
        log::debug!("audio cue: {name}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_accepts_all_events() {
        let mut sink = NullAudio;
        for event in [
            GameEvent::PaddleHit,
            GameEvent::BrickBreak,
            GameEvent::LifeLost,
            GameEvent::PowerUpCollect,
        ] {
            sink.play(event);
        }
    }
}
