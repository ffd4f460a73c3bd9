//! Container options
//!
//! Options can be built in code, or loaded from TOML or JSON. Missing keys
//! fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::gesture::GestureConfig;
use crate::scroll::{BACK_TOP_FALLBACK, LOWER_THRESHOLD};
use crate::{Error, Result};

pub const DEFAULT_LOADING_MORE_TEXT: &str = "玩命加载中...";
pub const DEFAULT_EMPTY_DATA_TEXT: &str = "暂无数据!";
pub const DEFAULT_NO_MORE_DATA_TEXT: &str = "暂无更多";
pub const DEFAULT_THEME_COLOR: &str = "#999";

/// Display and behavior options for a refresh list container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerOptions {
    /// Scroll region options
    pub scroll_y: bool,
    pub scroll_x: bool,
    pub scroll_with_animation: bool,
    pub enable_back_to_top: bool,
    /// Show a search shortcut next to the back-to-top control
    pub has_search: bool,
    pub loading_more_text: String,
    pub empty_data_text: String,
    pub no_more_data_text: String,
    pub empty_data_img: Option<String>,
    pub theme_color: String,
    pub class_name: Option<String>,
    pub style: Option<String>,
    /// Distance from the bottom that triggers load-more
    pub lower_threshold: f64,
    /// Scroll offset after which back-to-top shows (viewport height if unset)
    pub back_top_threshold: Option<f64>,
    pub gesture: GestureConfig,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            scroll_y: true,
            scroll_x: false,
            scroll_with_animation: true,
            enable_back_to_top: true,
            has_search: false,
            loading_more_text: DEFAULT_LOADING_MORE_TEXT.to_string(),
            empty_data_text: DEFAULT_EMPTY_DATA_TEXT.to_string(),
            no_more_data_text: DEFAULT_NO_MORE_DATA_TEXT.to_string(),
            empty_data_img: None,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            class_name: None,
            style: None,
            lower_threshold: LOWER_THRESHOLD,
            back_top_threshold: None,
            gesture: GestureConfig::default(),
        }
    }
}

impl ContainerOptions {
    /// Parse options from TOML
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let options: Self = toml::from_str(contents).map_err(|e| Error::Parse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Parse options from JSON
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(contents).map_err(|e| Error::Parse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Reject thresholds the gesture arithmetic cannot work with
    pub fn validate(&self) -> Result<()> {
        let g = &self.gesture;

        if !(g.damping.is_finite() && g.damping > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "damping must be positive, got {}",
                g.damping
            )));
        }

        let thresholds = [
            ("header_zone", g.header_zone),
            ("deviation_x", g.deviation_x),
            ("trigger_distance", g.trigger_distance),
            ("max_pull", g.max_pull),
            ("indicator_size", g.indicator_size),
            ("footer_height", g.footer_height),
            ("lower_threshold", self.lower_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if g.trigger_distance > g.max_pull {
            return Err(Error::InvalidConfig(format!(
                "trigger_distance ({}) exceeds max_pull ({}), pull-down could never refresh",
                g.trigger_distance, g.max_pull
            )));
        }

        if let Some(threshold) = self.back_top_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "back_top_threshold must be a non-negative number, got {}",
                    threshold
                )));
            }
        }

        Ok(())
    }

    /// Threshold for back-to-top given the cached viewport height
    pub fn effective_back_top_threshold(&self, win_height: f64) -> f64 {
        match self.back_top_threshold {
            Some(threshold) => threshold,
            None if win_height > 0.0 => win_height,
            None => BACK_TOP_FALLBACK,
        }
    }
}
