use web_sys::TouchEvent;
use yew::prelude::*;

use crate::carousel::{CarouselState, SwipeDirection, SwipeTracker};
use crate::components::lazy_image::LazyImage;
use crate::content::BEFORE_AFTER;

/// Before/after carousel. Arrows and indicator dots on desktop, swipe
/// gestures on touch devices; the track offset is purely a function of the
/// current index.
#[function_component(ResultsSection)]
pub fn results_section() -> Html {
    let state = use_state(|| CarouselState::new(BEFORE_AFTER.len()));
    let swipe = use_mut_ref(SwipeTracker::new);

    let next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = *state;
            updated.next();
            state.set(updated);
        })
    };

    let previous = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = *state;
            updated.previous();
            state.set(updated);
        })
    };

    let ontouchstart = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                swipe.borrow_mut().begin(touch.client_x());
            }
        })
    };

    let ontouchmove = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                swipe.borrow_mut().track(touch.client_x());
            }
        })
    };

    let ontouchend = {
        let swipe = swipe.clone();
        let state = state.clone();
        Callback::from(move |_: TouchEvent| {
            let mut updated = *state;
            match swipe.borrow_mut().finish() {
                Some(SwipeDirection::Forward) => updated.next(),
                Some(SwipeDirection::Backward) => updated.previous(),
                None => return,
            }
            state.set(updated);
        })
    };

    let track_style = format!("transform: translateX({}%);", state.offset_percent());

    html! {
        <section class="section results-section">
            <div class="container">
                <h2 class="section-title">
                    {"RESULTADOS "}<span class="accent">{"REAIS"}</span>
                </h2>

                <div class="carousel">
                    <div class="carousel-viewport" {ontouchstart} {ontouchmove} {ontouchend}>
                        <div class="carousel-track" style={track_style}>
                            { for BEFORE_AFTER.iter().map(|item| html! {
                                <div class="carousel-slide">
                                    <div class="slide-card">
                                        <LazyImage
                                            src={item.src}
                                            alt={item.alt}
                                            class="slide-image"
                                        />
                                        <p class="slide-result">{ item.result }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <button class="carousel-arrow prev" onclick={previous} aria-label="Resultado anterior">
                        {"‹"}
                    </button>
                    <button class="carousel-arrow next" onclick={next} aria-label="Próximo resultado">
                        {"›"}
                    </button>

                    <div class="carousel-dots">
                        { for (0..BEFORE_AFTER.len()).map(|i| {
                            let jump = {
                                let state = state.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let mut updated = *state;
                                    updated.jump_to(i);
                                    state.set(updated);
                                })
                            };
                            html! {
                                <button
                                    class={classes!("carousel-dot", (i == state.index()).then_some("active"))}
                                    onclick={jump}
                                    aria-label={format!("Ir para resultado {}", i + 1)}
                                />
                            }
                        }) }
                    </div>

                    <p class="swipe-hint">{"👆 Deslize para ver mais resultados"}</p>
                </div>
            </div>
            <style>
                {r#"
                .carousel {
                    position: relative;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .carousel-viewport {
                    overflow: hidden;
                    border-radius: 1rem;
                    cursor: grab;
                }
                .carousel-viewport:active {
                    cursor: grabbing;
                }
                .carousel-track {
                    display: flex;
                    transition: transform 0.5s ease-in-out;
                }
                .carousel-slide {
                    width: 100%;
                    flex-shrink: 0;
                    padding: 0 1rem;
                    box-sizing: border-box;
                }
                .slide-card {
                    background: rgba(17, 24, 39, 0.5);
                    border: 1px solid rgba(249, 115, 22, 0.2);
                    border-radius: 1rem;
                    padding: 1.5rem;
                    text-align: center;
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.4);
                }
                .slide-image img {
                    width: 100%;
                    max-height: 24rem;
                    object-fit: cover;
                    border-radius: 0.75rem;
                    margin-bottom: 1rem;
                }
                .slide-result {
                    color: #f97316;
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0;
                }
                .carousel-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: #ea580c;
                    color: #fff;
                    border: none;
                    border-radius: 50%;
                    width: 2.75rem;
                    height: 2.75rem;
                    font-size: 1.5rem;
                    line-height: 1;
                    cursor: pointer;
                    opacity: 0.9;
                    z-index: 10;
                    transition: background 0.3s ease, opacity 0.3s ease;
                }
                .carousel-arrow:hover {
                    background: #f97316;
                    opacity: 1;
                }
                .carousel-arrow.prev { left: 0.5rem; }
                .carousel-arrow.next { right: 0.5rem; }
                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .carousel-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border: none;
                    border-radius: 50%;
                    background: #4b5563;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .carousel-dot.active {
                    background: #f97316;
                }
                .swipe-hint {
                    display: none;
                    text-align: center;
                    color: #f97316;
                    font-size: 0.85rem;
                    margin-top: 1rem;
                }
                @media (max-width: 768px) {
                    .swipe-hint { display: block; }
                    .carousel-arrow { display: none; }
                }
                "#}
            </style>
        </section>
    }
}
