//! Match countdown clock
//!
//! Time is measured in accumulated tick steps, not wall clock; if the host
//! scheduler stalls, game time simply does not advance.

use serde::{Deserialize, Serialize};

use crate::consts::GAME_DURATION;

/// Session phase, evaluated from elapsed time rather than stored redundantly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Active,
    Ended,
}

/// Monotonic elapsed-time accumulator driving the countdown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MatchClock {
    elapsed: f32,
}

impl MatchClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick step and report the phase. Sticky once ended:
    /// further ticks are no-ops until `reset()`.
    pub fn tick(&mut self, dt: f32) -> MatchPhase {
        if self.phase() == MatchPhase::Ended {
            return MatchPhase::Ended;
        }
        self.elapsed += dt;
        self.phase()
    }

    pub fn phase(&self) -> MatchPhase {
        if self.elapsed >= GAME_DURATION {
            MatchPhase::Ended
        } else {
            MatchPhase::Active
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Countdown remainder, floored at zero
    pub fn remaining(&self) -> f32 {
        (GAME_DURATION - self.elapsed).max(0.0)
    }

    /// Remaining time as (minutes, seconds) for the HUD
    pub fn remaining_display(&self) -> (u32, u32) {
        let total = self.remaining() as u32;
        (total / 60, total % 60)
    }

    /// Zero the clock and reactivate the session
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    #[cfg(test)]
    fn with_elapsed(elapsed: f32) -> Self {
        Self { elapsed }
    }
}
