//! Host capabilities and the async refresh controller
//!
//! A host UI toolkit implements `ScrollHost` for its scroll region and passes
//! its touch/scroll events to a `RefreshController`. The controller awaits
//! the caller's `RefreshHandler` and feeds the outcome back into the state.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use tracing::debug;

use crate::container::{ContainerState, TouchEndAction};
use crate::gesture::Point;
use crate::options::ContainerOptions;
use crate::scroll::ScrollEvent;
use crate::{RefreshError, RefreshState};

/// Scroll region primitives the host must provide
pub trait ScrollHost {
    /// Height of the device viewport
    fn viewport_height(&self) -> f64;

    /// Scroll the element with the given anchor id into view
    fn scroll_into_view(&self, anchor: &str, animated: bool);
}

/// Caller-supplied refresh callbacks. Missing callbacks resolve immediately.
#[async_trait(?Send)]
pub trait RefreshHandler {
    async fn on_header_refresh(&self) -> Result<(), RefreshError> {
        Ok(())
    }

    async fn on_footer_refresh(&self) -> Result<(), RefreshError> {
        Ok(())
    }
}

/// No-op handler
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRefresh;

#[async_trait(?Send)]
impl RefreshHandler for NoRefresh {}

/// Drives a `ContainerState` from host events.
///
/// All methods take `&self`, so events may interleave while a callback is
/// awaited on a single-threaded executor. The state is never borrowed across
/// an await point. The handler can be swapped between events; a callback
/// already in flight finishes on the handler it started with.
pub struct RefreshController<H, R> {
    host: H,
    handler: RefCell<Rc<R>>,
    state: RefCell<ContainerState>,
}

impl<H: ScrollHost, R: RefreshHandler> RefreshController<H, R> {
    /// Create a controller and mount it on the host
    pub fn new(host: H, handler: R, options: ContainerOptions) -> Self {
        let mut state = ContainerState::new(options);
        state.mount(host.viewport_height());

        Self {
            host,
            handler: RefCell::new(Rc::new(handler)),
            state: RefCell::new(state),
        }
    }

    pub fn state(&self) -> Ref<'_, ContainerState> {
        self.state.borrow()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn handler(&self) -> Rc<R> {
        self.handler.borrow().clone()
    }

    /// Replace the refresh callbacks used by later gestures
    pub fn set_handler(&self, handler: R) {
        *self.handler.borrow_mut() = Rc::new(handler);
    }

    /// Replace the options if they changed
    pub fn set_options(&self, options: ContainerOptions) {
        let mut state = self.state.borrow_mut();
        if state.options() != &options {
            debug!("container options changed");
            state.set_options(options);
        }
    }

    /// Apply a new externally driven refresh state
    pub fn set_refresh_state(&self, next: RefreshState) {
        self.state.borrow_mut().reconcile(next);
        self.flush_into_view();
    }

    pub fn on_touch_start(&self, point: Point) {
        self.state.borrow_mut().touch_start(point);
    }

    pub fn on_touch_move(&self, point: Point) {
        self.state.borrow_mut().touch_move(point);
    }

    /// Release the touch, awaiting the header refresh if the pull was armed
    pub async fn on_touch_end(&self) -> TouchEndAction {
        let action = self.state.borrow_mut().touch_end();

        if action == TouchEndAction::InvokeHeaderRefresh {
            let handler = self.handler();
            let result = handler.on_header_refresh().await;
            self.state.borrow_mut().finish_header_refresh(result);
            self.flush_into_view();
        }

        action
    }

    /// Record a scroll event; entering the lower edge triggers load-more.
    ///
    /// Returns whether the footer refresh callback ran.
    pub async fn on_scroll(&self, event: ScrollEvent) -> bool {
        let entered = self.state.borrow_mut().scroll(event);
        if entered {
            self.on_scroll_to_lower_edge().await
        } else {
            false
        }
    }

    /// Load more if the current state allows it. Returns whether the footer
    /// refresh callback ran.
    pub async fn on_scroll_to_lower_edge(&self) -> bool {
        let allowed = self.state.borrow_mut().scroll_to_lower();
        if !allowed {
            return false;
        }

        let handler = self.handler();
        let result = handler.on_footer_refresh().await;
        self.state.borrow_mut().finish_footer_refresh(result);
        self.flush_into_view();
        true
    }

    /// Back-to-top click
    pub fn on_back_to_top(&self) {
        self.state.borrow_mut().back_to_top();
        self.flush_into_view();
    }

    fn flush_into_view(&self) {
        let (anchor, animated) = {
            let mut state = self.state.borrow_mut();
            let animated = state.options().scroll_with_animation;
            (state.take_into_view(), animated)
        };

        if let Some(anchor) = anchor {
            debug!(anchor = %anchor, "scrolling into view");
            self.host.scroll_into_view(&anchor, animated);
        }
    }
}
