//! Touch gesture arithmetic
//!
//! A pull is classified from the start point and the current point of one
//! touch sequence. Horizontal-ish moves are ignored, vertical ones are damped
//! and clamped.

use serde::{Deserialize, Serialize};

/// Touches starting above this y are header-pull candidates
pub const HEADER_ZONE: f64 = 200.0;
/// |dx| / |dy| at or above this counts as horizontal scrolling
pub const DEVIATION_X: f64 = 0.30;
/// Damped distance that arms a header refresh
pub const TRIGGER_DISTANCE: f64 = 60.0;
/// Upper bound of the damped distance
pub const MAX_PULL: f64 = 100.0;
/// Divisor applied to the raw distance
pub const DAMPING: f64 = 3.0;
/// Size of the pull-down spinner
pub const INDICATOR_SIZE: f64 = 30.0;
/// Resting offset of the pull-down spinner (hidden above the list)
pub const INDICATOR_INIT_TOP: f64 = -(INDICATOR_SIZE + 10.0);
/// Resting height of the footer rows
pub const FOOTER_HEIGHT: f64 = 30.0;

/// Touch coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Classified vertical pull, carrying the damped distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pull {
    Down(f64),
    Up(f64),
}

impl Pull {
    pub fn distance(self) -> f64 {
        match self {
            Pull::Down(d) | Pull::Up(d) => d,
        }
    }
}

/// Gesture thresholds, overridable from options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub header_zone: f64,
    pub deviation_x: f64,
    pub trigger_distance: f64,
    pub max_pull: f64,
    pub damping: f64,
    pub indicator_size: f64,
    pub indicator_init_top: f64,
    pub footer_height: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            header_zone: HEADER_ZONE,
            deviation_x: DEVIATION_X,
            trigger_distance: TRIGGER_DISTANCE,
            max_pull: MAX_PULL,
            damping: DAMPING,
            indicator_size: INDICATOR_SIZE,
            indicator_init_top: INDICATOR_INIT_TOP,
            footer_height: FOOTER_HEIGHT,
        }
    }
}

impl GestureConfig {
    /// Whether a touch starting at `start` may become a header pull
    pub fn in_header_zone(&self, start: Point) -> bool {
        start.y < self.header_zone
    }

    /// Damped, clamped distance for a raw vertical delta
    pub fn damped(&self, dy: f64) -> f64 {
        (dy.abs() / self.damping).min(self.max_pull)
    }

    /// Classify the move from `start` to `current`.
    ///
    /// Returns `None` when the move is too horizontal (or did not move at
    /// all, where the ratio is NaN).
    pub fn classify(&self, start: Point, current: Point) -> Option<Pull> {
        let dx = current.x - start.x;
        let dy = current.y - start.y;

        let ratio = dx.abs() / dy.abs();
        if ratio.is_nan() || ratio >= self.deviation_x {
            return None;
        }

        let distance = self.damped(dy);
        if dy > 0.0 {
            Some(Pull::Down(distance))
        } else {
            Some(Pull::Up(distance))
        }
    }

    /// Whether a damped pull-down distance arms the header refresh
    pub fn arms(&self, distance: f64) -> bool {
        distance > self.trigger_distance
    }
}
