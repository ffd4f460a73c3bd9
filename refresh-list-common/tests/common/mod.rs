//! Common test utilities and helpers

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use refresh_list_common::{RefreshError, RefreshHandler, ScrollEvent, ScrollHost};
use tokio::time::sleep;

pub const VIEWPORT_HEIGHT: f64 = 640.0;

/// Install a fmt subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Scroll host that records scroll-into-view requests
#[derive(Default)]
pub struct RecordingHost {
    pub scrolled_to: RefCell<Vec<(String, bool)>>,
}

impl ScrollHost for RecordingHost {
    fn viewport_height(&self) -> f64 {
        VIEWPORT_HEIGHT
    }

    fn scroll_into_view(&self, anchor: &str, animated: bool) {
        self.scrolled_to.borrow_mut().push((anchor.to_string(), animated));
    }
}

/// Refresh handler that counts calls and replays scripted outcomes
#[derive(Default)]
pub struct ScriptedHandler {
    pub header_calls: Cell<u32>,
    pub footer_calls: Cell<u32>,
    pub footer_results: RefCell<VecDeque<Result<(), RefreshError>>>,
    pub delay: Option<Duration>,
}

impl ScriptedHandler {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn push_footer_result(&self, result: Result<(), RefreshError>) {
        self.footer_results.borrow_mut().push_back(result);
    }
}

#[async_trait(?Send)]
impl RefreshHandler for ScriptedHandler {
    async fn on_header_refresh(&self) -> Result<(), RefreshError> {
        self.header_calls.set(self.header_calls.get() + 1);
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        Ok(())
    }

    async fn on_footer_refresh(&self) -> Result<(), RefreshError> {
        self.footer_calls.set(self.footer_calls.get() + 1);
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        self.footer_results.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

/// Scroll event positioned `from_bottom` units above the end of the content
pub fn scrolled_near_bottom(from_bottom: f64) -> ScrollEvent {
    ScrollEvent {
        scroll_top: 2000.0 - VIEWPORT_HEIGHT - from_bottom,
        scroll_height: 2000.0,
        client_height: VIEWPORT_HEIGHT,
        ..Default::default()
    }
}
