//! # Price Tween
//!
//! Easing for the animated final-price figure. When the final price changes
//! the front-end counts from the old value to the new one instead of
//! jumping.
//!
//! ```text
//!   value
//!     to ┤            ╭──────────
//!        │        ╭───╯
//!        │     ╭──╯          ease-out cubic: fast start, soft landing
//!        │   ╭─╯
//!   from ┼───╯
//!        └────────────────────── elapsed
//!        0                duration
//! ```

use std::time::Duration;

/// Default length of the count-up.
pub const DEFAULT_TWEEN_DURATION: Duration = Duration::from_millis(600);

/// Ease-out cubic over `t` in `[0, 1]` (clamped).
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
    1.0 - (1.0 - t).powi(3)
}

/// Interpolation between two prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTween {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
}

impl PriceTween {
    pub fn new(from: f64, to: f64) -> Self {
        PriceTween {
            from,
            to,
            duration: DEFAULT_TWEEN_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Value shown `elapsed` after the tween started.
    ///
    /// Exactly `from` at zero and exactly `to` once `elapsed >= duration`.
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if elapsed >= self.duration || self.from == self.to {
            return self.to;
        }
        if elapsed.is_zero() {
            return self.from;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// Whether the tween has reached its target.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
