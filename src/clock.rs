//! Generation clock: turns frame callbacks into generation advances.

use std::time::Duration;

use crate::config::ClockMode;

/// Most generations a fixed-period clock will release in one callback.
/// Anything beyond is dropped so a stalled host cannot trigger a burst.
pub const MAX_CATCH_UP: u32 = 3;

#[derive(Clone, Debug)]
pub struct GenerationClock {
    mode: ClockMode,
    frame_count: u32,
    accumulator: Duration,
}

impl GenerationClock {
    pub fn new(mode: ClockMode) -> Self {
        GenerationClock {
            mode,
            frame_count: 0,
            accumulator: Duration::ZERO,
        }
    }

    /// Forget partial progress toward the next generation.
    pub fn reset(&mut self) {
        self.frame_count = 0;
        self.accumulator = Duration::ZERO;
    }

    /// Register one frame callback. Returns how many generations are due.
    ///
    /// The frame-counted clock ignores `dt`.
    pub fn on_frame(&mut self, dt: Duration) -> u32 {
        match self.mode {
            ClockMode::FrameCounted {
                frames_per_generation,
            } => {
                self.frame_count += 1;
                if self.frame_count >= frames_per_generation.max(1) {
                    self.frame_count = 0;
                    1
                } else {
                    0
                }
            }
            ClockMode::FixedPeriod { period_ms } => {
                let period = Duration::from_millis(period_ms.max(1));
                self.accumulator += dt;

                if self.accumulator >= period * MAX_CATCH_UP {
                    self.accumulator = Duration::ZERO;
                    return MAX_CATCH_UP;
                }

                let mut due = 0;
                while self.accumulator >= period {
                    self.accumulator -= period;
                    due += 1;
                }
                due
            }
        }
    }
}
