//! Demo feed page with simulated paging

use gloo_timers::future::TimeoutFuture;
use refresh_list_common::RefreshState;
use tracing::info;
use yew::prelude::*;

use crate::callback::AsyncCallback;
use crate::components::RefreshListContainer;

const PAGE_SIZE: u32 = 10;
const LAST_PAGE: u32 = 4;
const LOAD_DELAY_MS: u32 = 800;

fn page_items(page: u32) -> Vec<String> {
    (0..PAGE_SIZE)
        .map(|i| format!("Item {}", page * PAGE_SIZE + i + 1))
        .collect()
}

#[function_component(FeedPage)]
pub fn feed_page() -> Html {
    let items = use_state(|| page_items(0));
    let page = use_state(|| 0u32);
    let refresh_state = use_state(RefreshState::default);

    let on_header_refresh = {
        let items = items.clone();
        let page = page.clone();
        let refresh_state = refresh_state.clone();

        AsyncCallback::new(move || {
            let items = items.clone();
            let page = page.clone();
            let refresh_state = refresh_state.clone();

            async move {
                refresh_state.set(RefreshState::HeaderRefresh);
                TimeoutFuture::new(LOAD_DELAY_MS).await;

                items.set(page_items(0));
                page.set(0);
                refresh_state.set(RefreshState::Normal);
                Ok(())
            }
        })
    };

    let on_footer_refresh = {
        let items = items.clone();
        let page = page.clone();
        let refresh_state = refresh_state.clone();

        AsyncCallback::new(move || {
            let items = items.clone();
            let page = page.clone();
            let refresh_state = refresh_state.clone();

            async move {
                refresh_state.set(RefreshState::FooterRefresh);
                TimeoutFuture::new(LOAD_DELAY_MS).await;

                let next = *page + 1;
                let mut all = (*items).clone();
                all.extend(page_items(next));
                items.set(all);
                page.set(next);

                refresh_state.set(if next >= LAST_PAGE {
                    RefreshState::NoMoreData
                } else {
                    RefreshState::Normal
                });
                Ok(())
            }
        })
    };

    let toggle_empty = {
        let items = items.clone();
        let page = page.clone();
        let refresh_state = refresh_state.clone();

        Callback::from(move |_: MouseEvent| {
            if items.is_empty() {
                items.set(page_items(0));
                page.set(0);
                refresh_state.set(RefreshState::Normal);
            } else {
                items.set(Vec::new());
                refresh_state.set(RefreshState::EmptyData);
            }
        })
    };

    let on_search_click = Callback::from(|_: ()| info!("search shortcut clicked"));

    html! {
        <div class="feed-page">
            <header class="mobile-header">
                <h1 class="header-title">{"Feed"}</h1>
                <button class="header-action" onclick={toggle_empty}>
                    {if items.is_empty() { "Reload" } else { "Clear" }}
                </button>
            </header>

            <RefreshListContainer
                refresh_state={*refresh_state}
                on_header_refresh={on_header_refresh}
                on_footer_refresh={on_footer_refresh}
                has_search={true}
                on_search_click={on_search_click}
            >
                {items.iter().map(|item| html! {
                    <div class="feed-item" key={item.clone()}>{item}</div>
                }).collect::<Html>()}
            </RefreshListContainer>
        </div>
    }
}
