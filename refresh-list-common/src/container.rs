//! Refresh list container state machine
//!
//! `ContainerState` is owned by one container instance and only changes
//! through the handlers below. The display mode is a single `RefreshState`;
//! the touch/refresh activity is a single tagged `Activity`, so a gesture
//! cannot be a header pull and a footer pull at once, and only an active
//! header pull can be armed.

use tracing::{debug, trace, warn};

use crate::gesture::{Point, Pull};
use crate::options::ContainerOptions;
use crate::scroll::{self, ScrollEvent};
use crate::style::{DragDownStyle, FooterStyle};
use crate::{RefreshError, RefreshState, TOP_ANCHOR};

/// Pull-down gesture that started inside the header zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderPull {
    pub start: Point,
    /// The damped distance crossed the trigger threshold
    pub can_refresh: bool,
}

/// Gesture that started below the header zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterPull {
    pub start: Point,
}

/// What the container is doing with the current touch sequence or callback
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Activity {
    #[default]
    Idle,
    HeaderPull(HeaderPull),
    FooterPull(FooterPull),
    AwaitingHeaderRefresh,
    AwaitingFooterRefresh,
}

impl Activity {
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Activity::AwaitingHeaderRefresh | Activity::AwaitingFooterRefresh)
    }
}

/// Combined view of display mode and activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    TrackingHeaderPull,
    TrackingFooterPull,
    AwaitingHeaderRefresh,
    AwaitingFooterRefresh,
    Empty,
    NoMore,
    Failed,
}

/// Result of releasing a touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEndAction {
    /// Nothing to do
    None,
    /// The header pull was armed; call the header refresh callback, then
    /// `finish_header_refresh`
    InvokeHeaderRefresh,
    /// The header pull was released early and the display went back to Normal
    Reverted,
}

/// The one decoration rendered for the current display mode
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    PullDownIndicator { top: f64, color: String },
    EmptyData { image: Option<String>, text: String },
    LoadingMore { text: String, height: f64 },
    NoMoreData { text: String, height: f64 },
}

/// State of one refresh list container
#[derive(Debug, Clone)]
pub struct ContainerState {
    options: ContainerOptions,
    display: RefreshState,
    /// Last value received through `reconcile`
    prop_state: RefreshState,
    activity: Activity,
    drag_down_style: DragDownStyle,
    footer_style: FooterStyle,
    win_height: f64,
    into_view: Option<String>,
    scroll_event: Option<ScrollEvent>,
    at_lower_edge: bool,
}

impl Default for ContainerState {
    fn default() -> Self {
        Self::new(ContainerOptions::default())
    }
}

impl ContainerState {
    pub fn new(options: ContainerOptions) -> Self {
        let drag_down_style = DragDownStyle::initial(&options.gesture);
        let footer_style = FooterStyle::initial(&options.gesture);

        Self {
            options,
            display: RefreshState::Normal,
            prop_state: RefreshState::Normal,
            activity: Activity::Idle,
            drag_down_style,
            footer_style,
            win_height: 0.0,
            into_view: None,
            scroll_event: None,
            at_lower_edge: false,
        }
    }

    pub fn options(&self) -> &ContainerOptions {
        &self.options
    }

    /// Replace the options, keeping display and gesture state
    pub fn set_options(&mut self, options: ContainerOptions) {
        self.options = options;
    }

    pub fn display(&self) -> RefreshState {
        self.display
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn can_refresh(&self) -> bool {
        matches!(self.activity, Activity::HeaderPull(pull) if pull.can_refresh)
    }

    pub fn is_header_refresh(&self) -> bool {
        matches!(self.activity, Activity::HeaderPull(_))
    }

    pub fn is_footer_refresh(&self) -> bool {
        matches!(self.activity, Activity::FooterPull(_))
    }

    pub fn drag_down_style(&self) -> DragDownStyle {
        self.drag_down_style
    }

    pub fn footer_style(&self) -> FooterStyle {
        self.footer_style
    }

    pub fn win_height(&self) -> f64 {
        self.win_height
    }

    pub fn into_view(&self) -> Option<&str> {
        self.into_view.as_deref()
    }

    /// Take the pending scroll-into-view anchor, if any
    pub fn take_into_view(&mut self) -> Option<String> {
        self.into_view.take()
    }

    pub fn scroll_event(&self) -> Option<&ScrollEvent> {
        self.scroll_event.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match self.activity {
            Activity::HeaderPull(_) => Phase::TrackingHeaderPull,
            Activity::FooterPull(_) => Phase::TrackingFooterPull,
            Activity::AwaitingHeaderRefresh => Phase::AwaitingHeaderRefresh,
            Activity::AwaitingFooterRefresh => Phase::AwaitingFooterRefresh,
            Activity::Idle => match self.display {
                RefreshState::Normal => Phase::Idle,
                // refreshes driven by the caller
                RefreshState::HeaderRefresh => Phase::AwaitingHeaderRefresh,
                RefreshState::FooterRefresh => Phase::AwaitingFooterRefresh,
                RefreshState::NoMoreData => Phase::NoMore,
                RefreshState::EmptyData => Phase::Empty,
                RefreshState::Failure => Phase::Failed,
            },
        }
    }

    /// Cache the viewport height used to size the scroll region
    pub fn mount(&mut self, viewport_height: f64) {
        debug!(viewport_height, "refresh list mounted");
        self.win_height = viewport_height;
    }

    /// Adopt a new externally driven display mode
    pub fn reconcile(&mut self, next: RefreshState) {
        debug!(from = %self.display, to = %next, "reconciling refresh state");

        self.prop_state = next;
        if let Activity::HeaderPull(pull) = &mut self.activity {
            pull.can_refresh = false;
        }

        match next {
            RefreshState::HeaderRefresh => {
                self.into_view = Some(TOP_ANCHOR.to_string());
            }
            RefreshState::FooterRefresh => {
                if !matches!(self.activity, Activity::HeaderPull(_) | Activity::FooterPull(_)) {
                    self.footer_style = FooterStyle::initial(&self.options.gesture);
                }
            }
            _ => self.reset_styles(),
        }

        self.display = next;
    }

    pub fn touch_start(&mut self, point: Point) {
        if self.activity.is_awaiting() {
            trace!("touch start ignored, refresh in flight");
            return;
        }
        if self.display == RefreshState::EmptyData {
            trace!("touch start ignored, list is empty");
            return;
        }

        self.activity = if self.options.gesture.in_header_zone(point) {
            Activity::HeaderPull(HeaderPull {
                start: point,
                can_refresh: false,
            })
        } else {
            Activity::FooterPull(FooterPull { start: point })
        };
        trace!(x = point.x, y = point.y, phase = ?self.phase(), "touch start");
    }

    pub fn touch_move(&mut self, point: Point) {
        let start = match self.activity {
            Activity::HeaderPull(pull) => pull.start,
            Activity::FooterPull(pull) => pull.start,
            _ => return,
        };

        if self.is_header_refresh() && self.display != RefreshState::HeaderRefresh {
            debug!("header pull started");
            self.display = RefreshState::HeaderRefresh;
        }

        let gesture = &self.options.gesture;
        match gesture.classify(start, point) {
            Some(Pull::Down(distance)) => {
                if let Activity::HeaderPull(pull) = &mut self.activity {
                    if gesture.arms(distance) && !pull.can_refresh {
                        debug!(distance, "header refresh armed");
                        pull.can_refresh = true;
                    }
                    self.drag_down_style = DragDownStyle::pulled(gesture, distance);
                }
            }
            Some(Pull::Up(distance)) => {
                self.footer_style = FooterStyle::pulled(distance);
            }
            None => trace!(x = point.x, y = point.y, "horizontal move ignored"),
        }
    }

    pub fn touch_end(&mut self) -> TouchEndAction {
        match self.activity {
            Activity::HeaderPull(pull) if pull.can_refresh => {
                debug!("header refresh triggered");
                self.activity = Activity::AwaitingHeaderRefresh;
                TouchEndAction::InvokeHeaderRefresh
            }
            Activity::HeaderPull(_) => {
                debug!("header pull released early");
                self.activity = Activity::Idle;
                self.display = RefreshState::Normal;
                self.drag_down_style = DragDownStyle::initial(&self.options.gesture);
                TouchEndAction::Reverted
            }
            Activity::FooterPull(_) => {
                self.activity = Activity::Idle;
                self.footer_style = FooterStyle::initial(&self.options.gesture);
                TouchEndAction::None
            }
            _ => TouchEndAction::None,
        }
    }

    /// Record the outcome of the header refresh callback
    pub fn finish_header_refresh(&mut self, result: Result<(), RefreshError>) {
        if self.activity != Activity::AwaitingHeaderRefresh {
            warn!(activity = ?self.activity, "header refresh finished while not awaiting it");
        }
        self.activity = Activity::Idle;
        self.settle(result, "header");
    }

    /// Record the outcome of the footer refresh callback
    pub fn finish_footer_refresh(&mut self, result: Result<(), RefreshError>) {
        if self.activity != Activity::AwaitingFooterRefresh {
            warn!(activity = ?self.activity, "footer refresh finished while not awaiting it");
        }
        self.activity = Activity::Idle;
        self.settle(result, "footer");
    }

    fn settle(&mut self, result: Result<(), RefreshError>, kind: &str) {
        match result {
            Ok(()) => {
                debug!(kind, "refresh completed");
                // the gesture may have left the display ahead of the caller
                if self.display != self.prop_state {
                    self.reconcile(self.prop_state);
                }
            }
            Err(e) => {
                warn!(kind, error = %e, "refresh callback rejected");
                self.display = RefreshState::Failure;
                self.reset_styles();
            }
        }
    }

    /// Record a scroll event. Returns true when the lower edge was just reached.
    pub fn scroll(&mut self, event: ScrollEvent) -> bool {
        self.into_view = None;

        let at_edge = event.at_lower_edge(self.options.lower_threshold);
        let entered = at_edge && !self.at_lower_edge;
        self.at_lower_edge = at_edge;
        self.scroll_event = Some(event);

        if entered {
            trace!(scroll_top = event.scroll_top, "lower edge reached");
        }
        entered
    }

    /// Whether reaching the lower edge should call the footer refresh callback.
    ///
    /// On `true` the container is awaiting the footer refresh; report the
    /// outcome with `finish_footer_refresh`.
    pub fn scroll_to_lower(&mut self) -> bool {
        let display_allows = matches!(self.display, RefreshState::Normal | RefreshState::Failure);
        let activity_allows = matches!(self.activity, Activity::Idle | Activity::FooterPull(_));

        if !(display_allows && activity_allows) {
            trace!(display = %self.display, activity = ?self.activity, "load more skipped");
            return false;
        }

        debug!(display = %self.display, "load more triggered");
        // retrying after a rejection shows whatever the caller last asked for
        if self.display == RefreshState::Failure && self.prop_state != RefreshState::Failure {
            self.reconcile(self.prop_state);
        }
        self.activity = Activity::AwaitingFooterRefresh;
        true
    }

    /// Scroll back to the top anchor
    pub fn back_to_top(&mut self) {
        self.into_view = Some(TOP_ANCHOR.to_string());
    }

    pub fn scroll_y_enabled(&self) -> bool {
        self.display != RefreshState::EmptyData && self.options.scroll_y
    }

    pub fn back_top_visible(&self) -> bool {
        let threshold = self.options.effective_back_top_threshold(self.win_height);
        scroll::back_top_visible(self.scroll_event.as_ref(), threshold)
    }

    /// Decoration for the current display mode
    pub fn decoration(&self) -> Option<Decoration> {
        let options = &self.options;
        match self.display {
            RefreshState::HeaderRefresh => Some(Decoration::PullDownIndicator {
                top: self.drag_down_style.top,
                color: options.theme_color.clone(),
            }),
            RefreshState::EmptyData => Some(Decoration::EmptyData {
                image: options.empty_data_img.clone(),
                text: options.empty_data_text.clone(),
            }),
            RefreshState::FooterRefresh => Some(Decoration::LoadingMore {
                text: options.loading_more_text.clone(),
                height: self.footer_style.height,
            }),
            RefreshState::NoMoreData => Some(Decoration::NoMoreData {
                text: options.no_more_data_text.clone(),
                height: self.footer_style.height,
            }),
            RefreshState::Normal | RefreshState::Failure => None,
        }
    }

    fn reset_styles(&mut self) {
        self.drag_down_style = DragDownStyle::initial(&self.options.gesture);
        self.footer_style = FooterStyle::initial(&self.options.gesture);
    }
}
