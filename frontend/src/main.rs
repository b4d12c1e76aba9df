use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod scroll;
mod sections;
mod styles;
#[cfg(test)]
mod testing;

mod components {
    pub mod icons;
    pub mod nav_state;
    pub mod navbar;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use config::SiteConfig;
use pages::home::Home;
use scroll::ScrollHandle;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct RoutesProps {
    config: Rc<SiteConfig>,
    scroll: ScrollHandle,
}

#[function_component(Routes)]
fn routes(props: &RoutesProps) -> Html {
    let config = props.config.clone();
    let scroll = props.scroll.clone();
    let render = move |route: Route| match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home config={config.clone()} scroll={scroll.clone()} /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    };

    html! { <Switch<Route> render={render} /> }
}

#[function_component]
fn App() -> Html {
    // Loaded once; the page never changes its content set.
    let config = use_memo(|_| config::load(), ());
    let scroll = use_memo(|_| ScrollHandle::window(), ());

    html! {
        <BrowserRouter>
            <Routes config={config} scroll={(*scroll).clone()} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::warn_1(&format!("logging unavailable: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
