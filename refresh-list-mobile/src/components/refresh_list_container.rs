//! Pull-to-refresh / load-more list container

use refresh_list_common::options::{
    DEFAULT_EMPTY_DATA_TEXT, DEFAULT_LOADING_MORE_TEXT, DEFAULT_NO_MORE_DATA_TEXT,
    DEFAULT_THEME_COLOR,
};
use refresh_list_common::scroll::LOWER_THRESHOLD;
use refresh_list_common::style::merge_style;
use refresh_list_common::{
    ContainerOptions, Decoration, DragDownStyle, FooterStyle, GestureConfig, Point,
    RefreshController, RefreshState, TOP_ANCHOR,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::TouchEvent;
use yew::prelude::*;

use crate::callback::{AsyncCallback, PropHandler};
use crate::components::{ActivityIndicator, BackTop};
use crate::host::WebScrollHost;

const PULL_DOWN_STYLE: &str = "position: absolute; left: 50%; transform: translateX(-50%); \
    width: 30px; height: 30px; z-index: 999; border-radius: 50%; background: #fff; \
    box-shadow: 0 0 10px 0 #ddd; display: flex; align-items: center; justify-content: center;";

#[derive(Properties, PartialEq)]
pub struct RefreshListContainerProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class_name: Option<AttrValue>,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or(true)]
    pub scroll_y: bool,
    #[prop_or(false)]
    pub scroll_x: bool,
    #[prop_or(true)]
    pub scroll_with_animation: bool,
    #[prop_or(true)]
    pub enable_back_to_top: bool,
    #[prop_or(false)]
    pub has_search: bool,
    #[prop_or_default]
    pub on_search_click: Option<Callback<()>>,
    #[prop_or_default]
    pub on_header_refresh: Option<AsyncCallback>,
    #[prop_or_default]
    pub on_footer_refresh: Option<AsyncCallback>,
    #[prop_or_default]
    pub refresh_state: RefreshState,
    #[prop_or(AttrValue::Static(DEFAULT_LOADING_MORE_TEXT))]
    pub loading_more_text: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_EMPTY_DATA_TEXT))]
    pub empty_data_text: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_NO_MORE_DATA_TEXT))]
    pub no_more_data_text: AttrValue,
    #[prop_or_default]
    pub empty_data_img: Option<AttrValue>,
    #[prop_or(AttrValue::Static(DEFAULT_THEME_COLOR))]
    pub theme_color: AttrValue,
    #[prop_or(LOWER_THRESHOLD)]
    pub lower_threshold: f64,
    #[prop_or_default]
    pub back_top_threshold: Option<f64>,
    #[prop_or_default]
    pub gesture: GestureConfig,
}

impl RefreshListContainerProps {
    fn options(&self) -> ContainerOptions {
        ContainerOptions {
            scroll_y: self.scroll_y,
            scroll_x: self.scroll_x,
            scroll_with_animation: self.scroll_with_animation,
            enable_back_to_top: self.enable_back_to_top,
            has_search: self.has_search,
            loading_more_text: self.loading_more_text.to_string(),
            empty_data_text: self.empty_data_text.to_string(),
            no_more_data_text: self.no_more_data_text.to_string(),
            empty_data_img: self.empty_data_img.as_ref().map(|img| img.to_string()),
            theme_color: self.theme_color.to_string(),
            class_name: self.class_name.as_ref().map(|c| c.to_string()),
            style: self.style.as_ref().map(|s| s.to_string()),
            lower_threshold: self.lower_threshold,
            back_top_threshold: self.back_top_threshold,
            gesture: self.gesture.clone(),
        }
    }

    fn handler(&self) -> PropHandler {
        PropHandler {
            header: self.on_header_refresh.clone(),
            footer: self.on_footer_refresh.clone(),
        }
    }
}

type Controller = RefreshController<WebScrollHost, PropHandler>;

fn touch_point(e: &TouchEvent) -> Option<Point> {
    e.touches()
        .get(0)
        .map(|touch| Point::new(touch.client_x() as f64, touch.client_y() as f64))
}

#[function_component(RefreshListContainer)]
pub fn refresh_list_container(props: &RefreshListContainerProps) -> Html {
    let options = props.options();
    let force_update = use_force_update();
    let region = use_node_ref();

    // Created once; mounting caches the viewport height
    let controller = {
        let region = region.clone();
        let options = options.clone();
        use_memo((), move |_| {
            Controller::new(WebScrollHost::new(region), PropHandler::default(), options)
        })
    };
    controller.set_options(options.clone());
    controller.set_handler(props.handler());

    // Reconcile the externally driven refresh state
    {
        let controller = controller.clone();
        let force_update = force_update.clone();

        use_effect_with(props.refresh_state, move |next| {
            controller.set_refresh_state(*next);
            force_update.force_update();
            || ()
        });
    }

    let on_touch_start = {
        let controller = controller.clone();

        Callback::from(move |e: TouchEvent| {
            if let Some(point) = touch_point(&e) {
                controller.on_touch_start(point);
            }
        })
    };

    let on_touch_move = {
        let controller = controller.clone();
        let force_update = force_update.clone();

        Callback::from(move |e: TouchEvent| {
            if let Some(point) = touch_point(&e) {
                controller.on_touch_move(point);
                force_update.force_update();
            }
        })
    };

    let on_touch_end = {
        let controller = controller.clone();
        let force_update = force_update.clone();

        Callback::from(move |_: TouchEvent| {
            let controller = controller.clone();
            let force_update_async = force_update.clone();

            spawn_local(async move {
                controller.on_touch_end().await;
                force_update_async.force_update();
            });
            force_update.force_update();
        })
    };

    let on_scroll = {
        let controller = controller.clone();
        let force_update = force_update.clone();

        Callback::from(move |_: Event| {
            let Some(event) = controller.host().scroll_event() else {
                return;
            };
            let controller = controller.clone();
            let force_update_async = force_update.clone();

            spawn_local(async move {
                controller.on_scroll(event).await;
                force_update_async.force_update();
            });
            force_update.force_update();
        })
    };

    let on_back_top = {
        let controller = controller.clone();
        let force_update = force_update.clone();

        Callback::from(move |_: ()| {
            controller.on_back_to_top();
            force_update.force_update();
        })
    };

    let current = controller.state();
    let region_style = format!(
        "position: relative; height: {}px; overflow-y: {}; overflow-x: {};{}",
        current.win_height(),
        if current.scroll_y_enabled() { "auto" } else { "hidden" },
        if options.scroll_x { "auto" } else { "hidden" },
        if options.scroll_with_animation { " scroll-behavior: smooth;" } else { "" },
    );
    let style = merge_style([
        region_style.as_str(),
        props.style.as_deref().unwrap_or_default(),
    ]);
    let class = classes!(
        "refresh-list-container",
        props.class_name.as_ref().map(|c| c.to_string())
    );

    let (header, footer) = match current.decoration() {
        Some(Decoration::PullDownIndicator { top, color }) => {
            (render_header_refresh(top, color), html! {})
        }
        Some(decoration) => (html! {}, render_footer(decoration)),
        None => (html! {}, html! {}),
    };

    let scroll_event = current.scroll_event().copied();
    let back_top_threshold = options.effective_back_top_threshold(current.win_height());

    html! {
        <div
            ref={region}
            class={class}
            style={style}
            data-enable-back-to-top={options.enable_back_to_top.to_string()}
            ontouchstart={on_touch_start}
            ontouchmove={on_touch_move}
            ontouchend={on_touch_end}
            onscroll={on_scroll}
        >
            <span id={TOP_ANCHOR}></span>
            {header}
            {props.children.clone()}
            {footer}
            <BackTop
                scroll_event={scroll_event}
                threshold={back_top_threshold}
                has_search={options.has_search}
                on_search_click={props.on_search_click.clone()}
                on_click={on_back_top}
            />
        </div>
    }
}

fn render_header_refresh(top: f64, color: String) -> Html {
    let style = merge_style([PULL_DOWN_STYLE, DragDownStyle { top }.to_css().as_str()]);

    html! {
        <div class="pull-down-refresh" style={style}>
            <ActivityIndicator color={AttrValue::from(color)} />
        </div>
    }
}

fn render_footer(decoration: Decoration) -> Html {
    match decoration {
        Decoration::EmptyData { image, text } => html! {
            <div class="empty-data">
                {if let Some(src) = image {
                    html! {
                        <img
                            class="empty-data-img"
                            src={src}
                            style="width: 150px; height: 150px; object-fit: cover;"
                        />
                    }
                } else {
                    html! {}
                }}
                <div><span class="empty-data-text">{text}</span></div>
            </div>
        },
        Decoration::LoadingMore { text, height } => html! {
            <div class="loading-more" style={FooterStyle { height }.to_css()}>
                <ActivityIndicator content={AttrValue::from(text)} size={24} />
            </div>
        },
        Decoration::NoMoreData { text, height } => html! {
            <div class="no-more-data" style={FooterStyle { height }.to_css()}>
                <span class="no-more-data-text">{text}</span>
            </div>
        },
        Decoration::PullDownIndicator { .. } => html! {},
    }
}
