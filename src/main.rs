//! Hand Breakout entry point
//!
//! Headless demo loop: a scripted pointer sweeps the paddle back and
//! forth at the fixed tick rate until the session ends. Real deployments
//! plug in a camera-backed `PointerSource` and a real `AudioSink`.

use std::time::{Duration, Instant};

use hand_breakout::consts::TICK_RATE_HZ;
use hand_breakout::{LogAudio, Mode, PointerSource, Session, SessionStatus};

/// Pointer source that sweeps a sine wave across the field
struct SweepPointer {
    tick: u32,
}

impl PointerSource for SweepPointer {
    fn sample(&mut self) -> Option<f32> {
        self.tick += 1;
        let phase = self.tick as f32 / 90.0;
        Some(0.5 + 0.45 * phase.sin())
    }

    fn presence_detected(&mut self) -> bool {
        true
    }
}

fn main() {
    env_logger::init();
    log::info!("Hand Breakout (headless demo) starting");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut session = Session::new(seed);
    let mut pointer = SweepPointer { tick: 0 };
    let mut audio = LogAudio;

    let frame_budget = Duration::from_secs(1) / TICK_RATE_HZ;
    let max_frames = TICK_RATE_HZ * 60 * 5; // 5 minute cap

    for _ in 0..max_frames {
        let frame_start = Instant::now();
        if session.frame(&mut pointer, &mut audio, None) == SessionStatus::Terminated {
            break;
        }
        if session.mode() == Mode::GameOver {
            break;
        }
        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    let snapshot = session.snapshot();
    log::info!(
        "Session ended: score {}, level {}, lives {}",
        snapshot.score,
        snapshot.level,
        snapshot.lives
    );
}
