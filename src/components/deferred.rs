use yew::prelude::*;

use crate::observe::use_visible_once;

#[derive(Properties, PartialEq)]
pub struct DeferredSectionProps {
    #[prop_or(AttrValue::Static("Carregando..."))]
    pub label: AttrValue,
    pub children: Children,
}

/// Holds a lightweight placeholder until the wrapper first scrolls near the
/// viewport, then mounts its children permanently. Used for everything below
/// the fold so the first screen renders without the heavy sections.
#[function_component(DeferredSection)]
pub fn deferred_section(props: &DeferredSectionProps) -> Html {
    let wrapper = use_node_ref();
    let mounted = use_state(|| false);

    let on_visible = {
        let mounted = mounted.clone();
        Callback::from(move |_| mounted.set(true))
    };
    use_visible_once(wrapper.clone(), false, on_visible);

    html! {
        <div ref={wrapper}>
            {
                if *mounted {
                    html! { <>{ for props.children.iter() }</> }
                } else {
                    html! {
                        <div class="section-loading">
                            <span>{ props.label.clone() }</span>
                        </div>
                    }
                }
            }
        </div>
    }
}
