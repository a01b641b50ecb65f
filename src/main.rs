use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod apply {
    pub mod controller;
    pub mod destinations;
    pub mod draft;
    pub mod step;
    pub mod submit;
    pub mod validation;
}
mod components {
    pub mod floating_apply_button;
    pub mod toast;
    pub mod university_card;
}
mod data {
    pub mod countries;
}
mod pages {
    pub mod apply_modal;
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
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
