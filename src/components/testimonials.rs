use yew::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::content::TESTIMONIALS;

/// Static testimonial grid, no interaction.
#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    html! {
        <section class="section testimonials-section tinted">
            <div class="container">
                <h2 class="section-title">
                    {"TESTEMUNHOS DE "}<span class="accent">{"FÉ E RESULTADO"}</span>
                </h2>
                <p class="section-lead">
                    {"Mulheres comuns, com fé firme, que transformaram o corpo com um ato de obediência diária."}
                </p>

                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <div class="testimonial-card">
                            <LazyImage
                                src={t.image}
                                alt={format!("Depoimento {}", i + 1)}
                                class="testimonial-image"
                            />
                            <div class="testimonial-stars">
                                { for (0..t.rating).map(|_| html! { <span class="star">{"★"}</span> }) }
                            </div>
                            <p class="testimonial-text">{"\""}{ t.text }{"\""}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .testimonial-card {
                    background: rgba(17, 24, 39, 0.5);
                    border: 1px solid rgba(249, 115, 22, 0.2);
                    border-radius: 1rem;
                    padding: 1.5rem;
                    text-align: center;
                    transition: transform 0.3s ease;
                }
                .testimonial-card:hover {
                    transform: scale(1.03);
                }
                .testimonial-image img {
                    width: 100%;
                    border-radius: 0.75rem;
                    margin-bottom: 1rem;
                }
                .testimonial-stars {
                    margin-bottom: 1rem;
                }
                .star {
                    color: #f97316;
                    font-size: 1.4rem;
                }
                .testimonial-text {
                    color: #fff;
                    font-size: 1.05rem;
                    line-height: 1.6;
                    margin: 0;
                }
                @media (max-width: 768px) {
                    .testimonial-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
