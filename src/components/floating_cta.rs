use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// Anchor id of the offer box the button scrolls to.
pub const OFFER_ANCHOR: &str = "#offer-box";

/// Fixed call-to-action button that smooth-scrolls to the offer. A missing
/// target element is a silent no-op.
#[function_component(FloatingCta)]
pub fn floating_cta() -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        let target = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(OFFER_ANCHOR).ok().flatten());
        if let Some(element) = target {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    html! {
        <div class="floating-cta">
            <button {onclick} aria-label="Entrar no Propósito Agora">
                <span class="cta-main">{"Entrar no Propósito Agora"}</span>
                <span class="cta-sub">{"Clique aqui e inicie o Jejum com Café Preto"}</span>
            </button>
            <style>
                {r#"
                .floating-cta {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 45;
                }
                .floating-cta button {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.15rem;
                    background: linear-gradient(to right, #ea580c, #f97316);
                    color: #fff;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.9rem 1.5rem;
                    cursor: pointer;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
                    transition: transform 0.3s ease, filter 0.3s ease;
                }
                .floating-cta button:hover {
                    transform: scale(1.05);
                    filter: brightness(1.1);
                }
                .cta-main {
                    font-size: 0.9rem;
                    font-weight: 700;
                }
                .cta-sub {
                    font-size: 0.7rem;
                    opacity: 0.9;
                }
                @media (max-width: 768px) {
                    .floating-cta {
                        left: 1rem;
                        right: 1rem;
                        bottom: 5.5rem;
                        display: flex;
                        justify-content: center;
                    }
                    .floating-cta button { width: 100%; }
                }
                "#}
            </style>
        </div>
    }
}
