//! Gesture-driven style offsets for the pull-down indicator and footer rows

use serde::{Deserialize, Serialize};

use crate::gesture::GestureConfig;

/// Vertical offset of the pull-down indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragDownStyle {
    pub top: f64,
}

impl DragDownStyle {
    /// Resting position, hidden above the list
    pub fn initial(config: &GestureConfig) -> Self {
        Self { top: config.indicator_init_top }
    }

    /// Offset for a damped pull-down distance
    pub fn pulled(config: &GestureConfig, distance: f64) -> Self {
        Self { top: distance - config.indicator_size }
    }

    pub fn to_css(&self) -> String {
        format!("top: {}px;", self.top)
    }
}

/// Height of the footer rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FooterStyle {
    pub height: f64,
}

impl FooterStyle {
    pub fn initial(config: &GestureConfig) -> Self {
        Self { height: config.footer_height }
    }

    pub fn pulled(distance: f64) -> Self {
        Self { height: distance }
    }

    pub fn to_css(&self) -> String {
        format!("height: {}px;", self.height)
    }
}

/// Join inline style fragments, later fragments winning on conflicts
pub fn merge_style<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.trim_end_matches(';'))
        .collect::<Vec<_>>()
        .join("; ")
}
