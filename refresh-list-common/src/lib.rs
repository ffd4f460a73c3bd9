//! Core types and state machine shared by the refresh list renderers
//!
//! Everything here is host-independent: the gesture arithmetic, the display
//! state, the options and the async controller compile and run natively.
//! Renderers (see `refresh-list-mobile`) feed events in and draw the result.

pub mod container;
pub mod gesture;
pub mod host;
pub mod options;
pub mod scroll;
pub mod style;

pub use container::{Activity, ContainerState, Decoration, FooterPull, HeaderPull, Phase, TouchEndAction};
pub use gesture::{GestureConfig, Point, Pull};
pub use host::{NoRefresh, RefreshController, RefreshHandler, ScrollHost};
pub use options::ContainerOptions;
pub use scroll::ScrollEvent;
pub use style::{DragDownStyle, FooterStyle};

use serde::{Deserialize, Serialize};

/// Anchor id rendered at the top of the scroll region
pub const TOP_ANCHOR: &str = "top";

/// Display mode of the container, driven by the caller and by gestures
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RefreshState {
    #[default]
    Normal,         // nothing to show
    HeaderRefresh,  // pull-down refresh
    FooterRefresh,  // loading more
    NoMoreData,     // list exhausted
    EmptyData,      // nothing to list
    Failure,        // last refresh was rejected
}

impl RefreshState {
    /// Numeric code used by hosts that pass the state as an integer
    pub fn code(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::HeaderRefresh => 1,
            Self::FooterRefresh => 2,
            Self::NoMoreData => 3,
            Self::EmptyData => 4,
            Self::Failure => 5,
        }
    }

    /// Whether a header or footer refresh is being displayed
    pub fn is_refreshing(self) -> bool {
        matches!(self, Self::HeaderRefresh | Self::FooterRefresh)
    }
}

impl TryFrom<u8> for RefreshState {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Normal),
            1 => Ok(Self::HeaderRefresh),
            2 => Ok(Self::FooterRefresh),
            3 => Ok(Self::NoMoreData),
            4 => Ok(Self::EmptyData),
            5 => Ok(Self::Failure),
            other => Err(Error::Parse(format!("unknown refresh state code {}", other))),
        }
    }
}

impl std::fmt::Display for RefreshState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::HeaderRefresh => write!(f, "header_refresh"),
            Self::FooterRefresh => write!(f, "footer_refresh"),
            Self::NoMoreData => write!(f, "no_more_data"),
            Self::EmptyData => write!(f, "empty_data"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// Rejection returned by caller-supplied refresh callbacks
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshError {
    #[error("Refresh failed: {0}")]
    Failed(String),

    #[error("Refresh cancelled")]
    Cancelled,
}

/// Crate error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Refresh(#[from] RefreshError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_codes() {
        for code in 0..=5u8 {
            let state = RefreshState::try_from(code).unwrap();
            assert_eq!(state.code(), code);
        }
        assert!(matches!(RefreshState::try_from(6), Err(Error::Parse(_))));
    }

    #[test]
    fn test_state_serde_names() {
        let json = serde_json::to_string(&RefreshState::NoMoreData).unwrap();
        assert_eq!(json, "\"no_more_data\"");
        assert_eq!(RefreshState::NoMoreData.to_string(), "no_more_data");

        let parsed: RefreshState = serde_json::from_str("\"header_refresh\"").unwrap();
        assert_eq!(parsed, RefreshState::HeaderRefresh);
    }

    #[test]
    fn test_is_refreshing() {
        assert!(RefreshState::HeaderRefresh.is_refreshing());
        assert!(RefreshState::FooterRefresh.is_refreshing());
        assert!(!RefreshState::Failure.is_refreshing());
        assert!(!RefreshState::Normal.is_refreshing());
    }
}
