use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::consent::{self, ConsentStatus};
use crate::Route;

/// Cookie consent banner. The persisted flag is read once on mount;
/// accepting writes it back with a one year expiry, closing without
/// accepting only hides the banner for this session.
#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let status = use_state(consent::load_status);

    let accept = {
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            consent::persist_acceptance();
            info!("cookie consent accepted");
            status.set(ConsentStatus::Accepted);
        })
    };

    let dismiss = {
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            status.set(ConsentStatus::Dismissed);
        })
    };

    if !status.banner_visible() {
        return html! {};
    }

    html! {
        <div class="cookie-banner">
            <div class="cookie-content">
                <p>
                    {"Este site utiliza cookies para garantir que você tenha a melhor experiência. \
                      Ao continuar, você aceita o uso de cookies conforme nossa "}
                    <Link<Route> to={Route::Privacy}>{"Política de Privacidade"}</Link<Route>>
                    {"."}
                </p>
                <div class="cookie-actions">
                    <button class="cookie-accept" onclick={accept}>{"Aceitar"}</button>
                    <button class="cookie-close" onclick={dismiss} aria-label="Fechar banner de cookies">
                        {"×"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .cookie-banner {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(17, 24, 39, 0.95);
                    border-top: 1px solid rgba(249, 115, 22, 0.3);
                    backdrop-filter: blur(6px);
                    padding: 1rem;
                    box-shadow: 0 -10px 30px rgba(0, 0, 0, 0.4);
                }
                .cookie-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .cookie-content p {
                    margin: 0;
                    color: #fff;
                    font-size: 0.95rem;
                }
                .cookie-content a {
                    color: #fdba74;
                }
                .cookie-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .cookie-accept {
                    background: #ea580c;
                    color: #fff;
                    font-weight: 700;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.5rem 1.5rem;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .cookie-accept:hover {
                    background: #f97316;
                }
                .cookie-close {
                    background: none;
                    border: none;
                    color: #fb923c;
                    font-size: 1.4rem;
                    line-height: 1;
                    cursor: pointer;
                }
                .cookie-close:hover {
                    color: #fff;
                }
                @media (max-width: 768px) {
                    .cookie-content { flex-direction: column; text-align: center; }
                }
                "#}
            </style>
        </div>
    }
}
