use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod install_info;
mod motion;
mod components {
    pub mod about;
    pub mod faq;
    pub mod features;
    pub mod footer;
    pub mod icons;
    pub mod image_section;
    pub mod install_link;
    pub mod navbar;
    pub mod top_nav;
    pub mod effects {
        pub mod design;
        pub mod gradients;
        pub mod shades;
        pub mod text;
    }
}
mod pages {
    pub mod home;
    pub mod legal;
}

use components::{
    install_link::InstallLinkProvider,
    top_nav::TopNav,
};
use pages::{
    home::Home,
    legal::{PrivacyPolicy, TermsOfService},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
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
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <InstallLinkProvider>
                <TopNav />
                <Switch<Route> render={switch} />
            </InstallLinkProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting BrainlyBot landing page, backend at {}", config::get_backend_url());
    yew::Renderer::<App>::new().render();
}
