use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::content::SiteContent;

const SECTIONS: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#services", "Services"),
    ("#socials", "Connect"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub site: Rc<SiteContent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new({
                    let window = window.clone();
                    move || {
                        if let Some(scroll_y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                            is_scrolled.set(scroll_y > 8.0);
                        }
                    }
                });

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container nav-content">
                <a href="#" class="nav-logo">{ &props.site.brand }</a>
                <nav class="nav-links">
                    { for SECTIONS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{ *label }</a>
                    }) }
                </nav>
                <a href="#contact">
                    <button class="button">{"Get in Touch"}</button>
                </a>
            </div>
        </header>
    }
}
