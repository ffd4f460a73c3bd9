//! Refresh List Mobile UI
//!
//! Yew rendering of the pull-to-refresh / load-more list container.
//! Touch and scroll events from the browser drive the headless state in
//! `refresh-list-common`; this crate draws the decorations and awaits the
//! caller's refresh callbacks.

pub mod callback;
pub mod components;
pub mod host;
mod pages;

pub use callback::AsyncCallback;
pub use components::{ActivityIndicator, BackTop, RefreshListContainer};
pub use refresh_list_common::{RefreshError, RefreshState};

use yew::prelude::*;

/// Demo application showing the container over a simulated feed
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="mobile-app">
            <pages::feed::FeedPage />
        </div>
    }
}

/// Entry point for WASM
#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    yew::Renderer::<App>::new().render();
}
