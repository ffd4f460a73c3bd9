//! Scroll position events and the lower-edge / back-to-top checks

use serde::{Deserialize, Serialize};

/// Distance from the bottom that counts as "reached the lower edge"
pub const LOWER_THRESHOLD: f64 = 50.0;
/// BackTop threshold used before the viewport height is known
pub const BACK_TOP_FALLBACK: f64 = 400.0;

/// Snapshot of a scroll region's position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollEvent {
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub scroll_height: f64,
    pub scroll_width: f64,
    pub client_height: f64,
}

impl ScrollEvent {
    /// Whether the visible bottom is within `threshold` of the content end
    pub fn at_lower_edge(&self, threshold: f64) -> bool {
        self.scroll_height > 0.0
            && self.scroll_top + self.client_height >= self.scroll_height - threshold
    }
}

/// Whether the back-to-top control should show for the last scroll event
pub fn back_top_visible(event: Option<&ScrollEvent>, threshold: f64) -> bool {
    event.map_or(false, |e| e.scroll_top > threshold)
}
