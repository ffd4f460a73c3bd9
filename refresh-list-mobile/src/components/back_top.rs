//! Floating back-to-top control with an optional search shortcut

use refresh_list_common::scroll::back_top_visible;
use refresh_list_common::ScrollEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackTopProps {
    /// Last scroll position of the list
    #[prop_or_default]
    pub scroll_event: Option<ScrollEvent>,
    /// Scroll offset after which the button shows
    pub threshold: f64,
    #[prop_or(false)]
    pub has_search: bool,
    #[prop_or_default]
    pub on_search_click: Option<Callback<()>>,
    pub on_click: Callback<()>,
}

#[function_component(BackTop)]
pub fn back_top(props: &BackTopProps) -> Html {
    let visible = back_top_visible(props.scroll_event.as_ref(), props.threshold);

    let on_click = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };

    let on_search = {
        let on_search_click = props.on_search_click.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(ref callback) = on_search_click {
                callback.emit(());
            }
        })
    };

    if !visible && !props.has_search {
        return html! {};
    }

    html! {
        <div class="back-top">
            {if props.has_search {
                html! {
                    <button class="back-top-search" onclick={on_search}>
                        {"🔍"}
                    </button>
                }
            } else {
                html! {}
            }}
            {if visible {
                html! {
                    <button class="back-top-button" onclick={on_click}>
                        {"↑"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
