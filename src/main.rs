use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod consent;
mod content;
mod observe;

mod components {
    pub mod cookie_banner;
    pub mod deferred;
    pub mod faq;
    pub mod floating_cta;
    pub mod lazy_image;
    pub mod notification;
    pub mod results;
    pub mod testimonials;
}

mod pages {
    pub mod home;
    pub mod termsprivacy;
}

use pages::home::Home;
use pages::termsprivacy::{PrivacyPolicy, TermsAndConditions};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering funnel page");
            html! { <Home /> }
        }
        Route::Terms => {
            info!("Rendering terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
