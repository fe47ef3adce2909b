use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod animation;
mod config;
mod content;
mod parallax;
mod pointer;
mod components {
    pub mod card;
    pub mod footer;
    pub mod icons;
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use components::{footer::Footer, nav::Header};
use content::SiteContent;
use pages::landing::{Backdrop, Landing};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub site: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <div class="site">
            <Backdrop />
            <Header site={props.site.clone()} />
            <Landing site={props.site.clone()} />
            <Footer site={props.site.clone()} />
        </div>
    }
}

#[function_component]
fn Unavailable() -> Html {
    html! {
        <div style="padding: 4rem 1rem; text-align: center; font-family: system-ui, sans-serif;">
            <p>{"This page is temporarily unavailable."}</p>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::embedded() {
        Ok(site) => {
            yew::Renderer::<App>::with_props(AppProps { site: Rc::new(site) }).render();
        }
        Err(err) => {
            error!("could not load site content: {}", err);
            yew::Renderer::<Unavailable>::new().render();
        }
    }
}
