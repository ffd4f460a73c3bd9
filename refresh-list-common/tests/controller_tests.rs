//! Controller tests: gestures and scrolling driving the refresh callbacks

mod common;

use std::time::Duration;

use common::*;
use refresh_list_common::{
    Activity, ContainerOptions, Decoration, Point, RefreshController, RefreshError, RefreshState,
    TouchEndAction,
};
use tokio::time::sleep;

fn controller(handler: ScriptedHandler) -> RefreshController<RecordingHost, ScriptedHandler> {
    init_tracing();
    RefreshController::new(RecordingHost::default(), handler, ContainerOptions::default())
}

#[tokio::test]
async fn test_mount_caches_viewport_height() {
    let c = controller(ScriptedHandler::default());
    assert_eq!(c.state().win_height(), VIEWPORT_HEIGHT);
}

#[tokio::test]
async fn test_long_pull_invokes_header_refresh_once() {
    let c = controller(ScriptedHandler::default());

    c.on_touch_start(Point::new(10.0, 50.0));
    c.on_touch_move(Point::new(12.0, 260.0));
    assert!(c.state().can_refresh());

    assert_eq!(c.on_touch_end().await, TouchEndAction::InvokeHeaderRefresh);
    assert_eq!(c.handler().header_calls.get(), 1);
    assert_eq!(c.state().activity(), Activity::Idle);
    assert_eq!(c.state().display(), RefreshState::Normal);

    // releasing again does not call it a second time
    assert_eq!(c.on_touch_end().await, TouchEndAction::None);
    assert_eq!(c.handler().header_calls.get(), 1);
}

#[tokio::test]
async fn test_short_pull_does_not_refresh() {
    let c = controller(ScriptedHandler::default());

    c.on_touch_start(Point::new(10.0, 50.0));
    c.on_touch_move(Point::new(12.0, 130.0));
    assert!(!c.state().can_refresh());

    assert_eq!(c.on_touch_end().await, TouchEndAction::Reverted);
    assert_eq!(c.handler().header_calls.get(), 0);
    assert_eq!(c.state().display(), RefreshState::Normal);
}

#[tokio::test]
async fn test_pull_starting_below_header_zone_never_refreshes() {
    let c = controller(ScriptedHandler::default());

    c.on_touch_start(Point::new(10.0, 250.0));
    c.on_touch_move(Point::new(10.0, 600.0));
    assert_eq!(c.on_touch_end().await, TouchEndAction::None);
    assert_eq!(c.handler().header_calls.get(), 0);
}

#[tokio::test]
async fn test_header_refresh_prop_scrolls_to_top() {
    let c = controller(ScriptedHandler::default());

    c.set_refresh_state(RefreshState::HeaderRefresh);
    assert_eq!(
        c.host().scrolled_to.borrow().as_slice(),
        &[("top".to_string(), true)]
    );

    c.set_refresh_state(RefreshState::Normal);
    assert_eq!(c.host().scrolled_to.borrow().len(), 1);
    assert_eq!(c.state().drag_down_style().top, -40.0);
}

#[tokio::test]
async fn test_back_to_top_respects_animation_option() {
    init_tracing();
    let options = ContainerOptions {
        scroll_with_animation: false,
        ..Default::default()
    };
    let c = RefreshController::new(RecordingHost::default(), ScriptedHandler::default(), options);

    c.on_back_to_top();
    assert_eq!(
        c.host().scrolled_to.borrow().as_slice(),
        &[("top".to_string(), false)]
    );
}

#[tokio::test]
async fn test_scroll_to_bottom_loads_more() {
    let c = controller(ScriptedHandler::default());

    assert!(!c.on_scroll(scrolled_near_bottom(500.0)).await);
    assert!(c.on_scroll(scrolled_near_bottom(10.0)).await);
    assert_eq!(c.handler().footer_calls.get(), 1);

    // still inside the edge zone
    assert!(!c.on_scroll(scrolled_near_bottom(5.0)).await);
    assert_eq!(c.handler().footer_calls.get(), 1);
}

#[tokio::test]
async fn test_scroll_to_bottom_is_noop_when_busy_or_exhausted() {
    for state in [
        RefreshState::FooterRefresh,
        RefreshState::NoMoreData,
        RefreshState::EmptyData,
        RefreshState::HeaderRefresh,
    ] {
        let c = controller(ScriptedHandler::default());
        c.set_refresh_state(state);

        assert!(!c.on_scroll_to_lower_edge().await, "state {}", state);
        assert_eq!(c.handler().footer_calls.get(), 0);
    }
}

#[tokio::test]
async fn test_only_one_load_more_in_flight() {
    let c = controller(ScriptedHandler::with_delay(Duration::from_millis(20)));

    let (first, second) = tokio::join!(c.on_scroll_to_lower_edge(), c.on_scroll_to_lower_edge());

    assert!(first);
    assert!(!second);
    assert_eq!(c.handler().footer_calls.get(), 1);
    assert_eq!(c.state().activity(), Activity::Idle);
}

#[tokio::test]
async fn test_touches_ignored_while_header_refresh_in_flight() {
    let c = controller(ScriptedHandler::with_delay(Duration::from_millis(30)));

    c.on_touch_start(Point::new(10.0, 50.0));
    c.on_touch_move(Point::new(12.0, 260.0));

    let (action, _) = tokio::join!(c.on_touch_end(), async {
        sleep(Duration::from_millis(5)).await;
        c.on_touch_start(Point::new(10.0, 40.0));
        c.on_touch_move(Point::new(10.0, 400.0));
        assert_eq!(c.state().activity(), Activity::AwaitingHeaderRefresh);
        assert!(!c.on_scroll_to_lower_edge().await);
    });

    assert_eq!(action, TouchEndAction::InvokeHeaderRefresh);
    assert_eq!(c.handler().header_calls.get(), 1);
    assert_eq!(c.handler().footer_calls.get(), 0);
}

#[tokio::test]
async fn test_rejected_load_more_shows_failure_and_retries() {
    let handler = ScriptedHandler::default();
    handler.push_footer_result(Err(RefreshError::Failed("timeout".to_string())));
    let c = controller(handler);

    assert!(c.on_scroll(scrolled_near_bottom(0.0)).await);
    assert_eq!(c.state().display(), RefreshState::Failure);
    assert_eq!(c.state().decoration(), None);

    // leave the edge and come back
    assert!(!c.on_scroll(scrolled_near_bottom(400.0)).await);
    assert!(c.on_scroll(scrolled_near_bottom(0.0)).await);
    assert_eq!(c.handler().footer_calls.get(), 2);
    assert_eq!(c.state().display(), RefreshState::Normal);
}

#[tokio::test]
async fn test_empty_data_disables_scrolling() {
    init_tracing();
    let options = ContainerOptions {
        empty_data_img: Some("/static/empty.png".to_string()),
        empty_data_text: "Nothing here".to_string(),
        ..Default::default()
    };
    let c = RefreshController::new(RecordingHost::default(), ScriptedHandler::default(), options);

    c.set_refresh_state(RefreshState::EmptyData);
    assert!(!c.state().scroll_y_enabled());
    assert_eq!(
        c.state().decoration(),
        Some(Decoration::EmptyData {
            image: Some("/static/empty.png".to_string()),
            text: "Nothing here".to_string(),
        })
    );

    c.on_touch_start(Point::new(10.0, 50.0));
    c.on_touch_move(Point::new(10.0, 400.0));
    assert_eq!(c.on_touch_end().await, TouchEndAction::None);
    assert_eq!(c.state().display(), RefreshState::EmptyData);
}

#[tokio::test]
async fn test_retry_keeps_loading_row_when_caller_holds_footer_refresh() {
    let handler = ScriptedHandler::with_delay(Duration::from_millis(20));
    handler.push_footer_result(Err(RefreshError::Failed("timeout".to_string())));
    let c = controller(handler);

    let (loaded, _) = tokio::join!(c.on_scroll(scrolled_near_bottom(0.0)), async {
        sleep(Duration::from_millis(5)).await;
        c.set_refresh_state(RefreshState::FooterRefresh);
    });
    assert!(loaded);
    assert_eq!(c.state().display(), RefreshState::Failure);

    assert!(!c.on_scroll(scrolled_near_bottom(400.0)).await);
    let (retried, _) = tokio::join!(c.on_scroll(scrolled_near_bottom(0.0)), async {
        sleep(Duration::from_millis(5)).await;
        assert_eq!(c.state().display(), RefreshState::FooterRefresh);
        assert!(matches!(c.state().decoration(), Some(Decoration::LoadingMore { .. })));
    });
    assert!(retried);
    assert_eq!(c.handler().footer_calls.get(), 2);
    assert_eq!(c.state().display(), RefreshState::FooterRefresh);
}

#[tokio::test]
async fn test_replaced_handler_serves_later_gestures() {
    let c = controller(ScriptedHandler::default());

    assert!(c.on_scroll_to_lower_edge().await);
    assert_eq!(c.handler().footer_calls.get(), 1);

    c.set_handler(ScriptedHandler::default());
    assert_eq!(c.handler().footer_calls.get(), 0);
    assert!(c.on_scroll_to_lower_edge().await);
    assert_eq!(c.handler().footer_calls.get(), 1);
}

#[tokio::test]
async fn test_set_options_keeps_gesture_state() {
    let c = controller(ScriptedHandler::default());

    c.on_touch_start(Point::new(10.0, 50.0));
    c.on_touch_move(Point::new(12.0, 260.0));
    c.set_options(ContainerOptions {
        theme_color: "#f60".to_string(),
        ..Default::default()
    });

    assert!(c.state().can_refresh());
    assert_eq!(c.state().options().theme_color, "#f60");
    assert_eq!(
        c.state().decoration(),
        Some(Decoration::PullDownIndicator { top: 40.0, color: "#f60".to_string() })
    );
}
