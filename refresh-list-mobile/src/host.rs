//! Browser implementation of the scroll host

use refresh_list_common::{ScrollEvent, ScrollHost};
use tracing::debug;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::NodeRef;

/// Scroll host bound to one container's scroll region
#[derive(Clone, PartialEq)]
pub struct WebScrollHost {
    region: NodeRef,
}

impl WebScrollHost {
    pub fn new(region: NodeRef) -> Self {
        Self { region }
    }

    /// Current scroll metrics of the region
    pub fn scroll_event(&self) -> Option<ScrollEvent> {
        let element = self.region.cast::<Element>()?;

        Some(ScrollEvent {
            scroll_top: element.scroll_top() as f64,
            scroll_left: element.scroll_left() as f64,
            scroll_height: element.scroll_height() as f64,
            scroll_width: element.scroll_width() as f64,
            client_height: element.client_height() as f64,
        })
    }

}

impl ScrollHost for WebScrollHost {
    fn viewport_height(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.inner_height().ok())
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_into_view(&self, anchor: &str, animated: bool) {
        let Some(region) = self.region.cast::<Element>() else {
            debug!(anchor, "scroll region not mounted");
            return;
        };

        let target = match region.query_selector(&format!("#{}", anchor)) {
            Ok(Some(target)) => target,
            _ => {
                debug!(anchor, "anchor not found");
                return;
            }
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if animated {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        });
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
