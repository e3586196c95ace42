use yew::prelude::*;

use crate::observe::use_visible_once;

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Priority images skip observation and load eagerly (above the fold).
    #[prop_or(false)]
    pub priority: bool,
}

/// Image that only fetches its resource once it scrolls into view. Until the
/// fetch completes the wrapper pulses as a placeholder; a failed fetch just
/// leaves the placeholder in place.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let wrapper = use_node_ref();
    let resolved_src = use_state(|| props.priority.then(|| props.src.clone()));
    let loaded = use_state(|| false);

    let reveal = {
        let resolved_src = resolved_src.clone();
        let src = props.src.clone();
        Callback::from(move |_| {
            if resolved_src.is_none() {
                resolved_src.set(Some(src.clone()));
            }
        })
    };
    use_visible_once(wrapper.clone(), props.priority, reveal);

    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    html! {
        <div
            ref={wrapper}
            class={classes!("lazy-image", (!*loaded).then_some("loading"), props.class.clone())}
        >
            {
                if let Some(src) = (*resolved_src).clone() {
                    html! {
                        <img
                            {src}
                            alt={props.alt.clone()}
                            loading={if props.priority { "eager" } else { "lazy" }}
                            decoding="async"
                            {onload}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
