use yew::prelude::*;

use crate::content::{FaqEntry, FAQS};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", is_open.then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span>{ props.entry.question }</span>
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{ props.entry.answer }</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section class="section faq-section">
            <div class="container">
                <h2 class="section-title">
                    {"PERGUNTAS "}<span class="accent">{"FREQUENTES"}</span>
                </h2>

                <div class="faq-list">
                    { for FAQS.iter().map(|entry| html! {
                        <FaqItem entry={entry.clone()} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .faq-list {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .faq-item {
                    background: rgba(17, 24, 39, 0.5);
                    border: 1px solid rgba(249, 115, 22, 0.2);
                    border-radius: 1rem;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .faq-item:hover {
                    border-color: rgba(249, 115, 22, 0.45);
                }
                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #f97316;
                    font-size: 1.15rem;
                    font-weight: 700;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }
                .toggle-icon {
                    color: #fdba74;
                    font-size: 1.4rem;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.5rem;
                }
                .faq-item.open .faq-answer {
                    max-height: 20rem;
                    padding-bottom: 1.25rem;
                }
                .faq-answer p {
                    color: #fff;
                    font-size: 1.05rem;
                    line-height: 1.6;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
