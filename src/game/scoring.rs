//! Time-based scoring and the per-stage countdown display.

use std::time::{Duration, Instant};

use super::Difficulty;

/// Points for an instant answer.
pub const MAX_POINTS: f64 = 1000.0;
/// Points never drop below this for a correct answer.
pub const MIN_POINTS: f64 = 100.0;
/// Points lost per second of thinking time.
pub const POINTS_PER_SECOND: f64 = 20.0;
/// Time budget shown by the progress bar.
pub const STAGE_TIME_LIMIT: Duration = Duration::from_secs(15);

/// Points for a correct answer after `elapsed` thinking time.
///
/// `round(max(1000 - 20 * seconds, 100) * multiplier)`
pub fn calculate_points(difficulty: Difficulty, elapsed: Duration) -> u32 {
    let base = (MAX_POINTS - elapsed.as_secs_f64() * POINTS_PER_SECOND).max(MIN_POINTS);
    (base * difficulty.multiplier()).round() as u32
}

/// Colour band of the countdown bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Up to 5 seconds.
    Normal,
    /// Over 5 and up to 10 seconds.
    Warning,
    /// Over 10 seconds.
    Danger,
}

impl TimerPhase {
    pub fn for_elapsed(elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        if secs > 10.0 {
            TimerPhase::Danger
        } else if secs > 5.0 {
            TimerPhase::Warning
        } else {
            TimerPhase::Normal
        }
    }
}

/// Share of `limit` used so far, capped at 100.
pub fn progress_percent(elapsed: Duration, limit: Duration) -> f64 {
    if limit.is_zero() {
        return 100.0;
    }
    (elapsed.as_secs_f64() / limit.as_secs_f64() * 100.0).min(100.0)
}

/// Measures thinking time for the current stage.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
