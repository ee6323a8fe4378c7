use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info, warn};

mod config;
mod controller;
mod debounce;
mod effects;
mod error;
mod observer;
mod behavior {
    pub mod accordion;
    pub mod analytics;
    pub mod anchor;
    pub mod contact;
    pub mod counter;
    pub mod device;
    pub mod header;
    pub mod navigation;
    pub mod notification;
    pub mod submit;
}
mod components {
    pub mod contact_form;
    pub mod faq;
    pub mod nav;
    pub mod reveal;
    pub mod stat_counter;
}
mod pages {
    pub mod home;
}

use behavior::navigation::MenuState;
use components::nav::SiteHeader;
use controller::PageController;
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
            // single-page site: unknown paths still get the page
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub controller: PageController,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let controller = props.controller.clone();
    let menu = use_reducer(MenuState::default);

    effects::use_error_log();
    effects::use_focus_indicator(controller.clone());
    effects::use_preloader(controller.clone());
    effects::use_click_tracking(controller.clone());
    effects::use_anchor_scrolling(controller.clone(), menu.clone());

    html! {
        <ContextProvider<PageController> context={controller.clone()}>
            <BrowserRouter>
                <SiteHeader controller={controller} menu={menu} />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<PageController>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    let controller = match PageController::from_browser() {
        Ok(controller) => controller,
        Err(e) => {
            error!("Cannot start: {}", e);
            return;
        }
    };

    controller.apply_device_classes();
    if let Err(e) = controller.install_global() {
        warn!("{}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { controller }).render();
}
