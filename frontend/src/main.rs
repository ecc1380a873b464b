use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod contact;
mod meta;
mod visibility;
mod components {
    pub mod animated_section;
    pub mod faq;
}
mod pages {
    pub mod home;
    pub mod contact_us;
}

use pages::{
    home::Home,
    contact_us::ContactUs,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contactUs")]
    ContactUs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::ContactUs => {
            info!("Rendering Contact page");
            html! { <ContactUs /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>
                        {"Back to the home page"}
                    </Link<Route>>
                </div>
            }
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
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if let Err(e) = meta::apply_site_metadata() {
        log::warn!("Failed to apply site metadata: {:?}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
