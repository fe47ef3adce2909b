use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub site: Rc<SiteContent>,
}

pub fn copyright(brand: &str, year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, brand)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let site = &props.site;
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <div class="footer-brand">
                    <h2>{ &site.brand }</h2>
                    <p>{ &site.tagline }</p>
                </div>
                <div class="footer-legal">
                    <p>{ copyright(&site.brand, year) }</p>
                    <p>{ site.contact.registration() }</p>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #111827;
                        color: #fff;
                        padding: 3rem 0;
                    }

                    .footer-content {
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .footer-brand h2 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0;
                    }

                    .footer-brand p {
                        color: #9ca3af;
                        margin-top: 0.5rem;
                    }

                    .footer-legal {
                        color: #9ca3af;
                        font-size: 0.875rem;
                    }

                    .footer-legal p {
                        margin: 0.25rem 0;
                    }

                    @media (min-width: 768px) {
                        .footer-content {
                            flex-direction: row;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line() {
        assert_eq!(copyright("Minimal Code", 2026), "© 2026 Minimal Code. All rights reserved.");
    }
}
