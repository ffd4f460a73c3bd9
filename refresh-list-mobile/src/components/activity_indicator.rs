//! Activity indicator (spinner) component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityIndicatorProps {
    #[prop_or_default]
    pub color: Option<AttrValue>,
    #[prop_or_default]
    pub content: Option<AttrValue>,
    #[prop_or(24)]
    pub size: u32,
}

#[function_component(ActivityIndicator)]
pub fn activity_indicator(props: &ActivityIndicatorProps) -> Html {
    let mut style = format!("width: {0}px; height: {0}px;", props.size);
    if let Some(ref color) = props.color {
        style.push_str(&format!(" border-top-color: {};", color));
    }

    html! {
        <div class="activity-indicator">
            <div class="spinner" style={style}></div>
            {if let Some(ref content) = props.content {
                html! { <span class="activity-indicator-content">{content}</span> }
            } else {
                html! {}
            }}
        </div>
    }
}
