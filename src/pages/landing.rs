use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::animation::{self, LoopTween, BLOBS, DOTS, GLYPHS, SCROLL_HINT};
use crate::components::card::Card;
use crate::components::icons::{Icon, IconKind};
use crate::content::SiteContent;
use crate::parallax::{layer_offsets, Point, Rect, HERO_LAYERS};
use crate::pointer::{PointerFeed, WindowListener};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub site: Rc<SiteContent>,
}

/// Slow glowing blobs behind the whole page.
#[function_component(Backdrop)]
pub fn backdrop() -> Html {
    let classes = ["blob blob-purple", "blob blob-blue", "blob blob-teal"];
    html! {
        <div class="backdrop">
            <div class="noise"></div>
            { for classes.iter().zip(BLOBS.iter()).map(|(class, tween)| html! {
                <div class={*class} style={tween.style()}></div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FloaterProps {
    class: &'static str,
    tween: LoopTween,
    #[prop_or_default]
    children: Children,
}

#[function_component(Floater)]
fn floater(props: &FloaterProps) -> Html {
    html! {
        <div class={props.class} style={props.tween.style()}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(Hero)]
fn hero(props: &LandingProps) -> Html {
    let hero_ref = use_node_ref();
    let pointer = use_state(|| None::<Point>);

    {
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |_| {
                let listener = match web_sys::window() {
                    Some(window) => WindowListener::attach(
                        window,
                        PointerFeed::new(move |p| pointer.set(Some(p))),
                    ),
                    None => {
                        warn!("no window, parallax disabled");
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }

    // measured every render; the hero moves with scroll and resize
    let viewport = hero_ref
        .cast::<Element>()
        .map(|el| Rect::measure(&el))
        .unwrap_or_default();
    let offsets = layer_offsets(*pointer, viewport, &HERO_LAYERS);

    html! {
        <section ref={hero_ref} class="hero">
            <div class="hero-wash"></div>
            <div class="hero-layers">
                { for HERO_LAYERS.iter().zip(offsets).map(|(layer, offset)| html! {
                    <div class={layer.class} style={offset.to_transform()}></div>
                }) }
            </div>

            <div class="floaters">
                <Floater class="dot dot-purple" tween={DOTS[0]} />
                <Floater class="dot dot-blue" tween={DOTS[1]} />
                <Floater class="dot dot-teal" tween={DOTS[2]} />
                <Floater class="glyph glyph-open" tween={GLYPHS[0]}>{"<div>"}</Floater>
                <Floater class="glyph glyph-close" tween={GLYPHS[1]}>{"</code>"}</Floater>
            </div>

            <div class="container hero-content">
                <h1 class="hero-title" style={animation::HERO_TITLE.style()}>
                    <span>{ &props.site.brand }</span>
                </h1>
                <p class="hero-tagline" style={animation::HERO_TAGLINE.style()}>
                    { &props.site.tagline }
                </p>
                <div class="hero-actions" style={animation::HERO_ACTIONS.style()}>
                    <a href="#services">
                        <button class="button wide">{"Our Services"}</button>
                    </a>
                    <a href="#contact">
                        <button class="button outline wide">{"Contact Us"}</button>
                    </a>
                </div>

                <div class="scroll-hint" style={animation::HERO_HINT.style()}>
                    <p style={SCROLL_HINT.style()}>{"Scroll to explore"}</p>
                    <div style={SCROLL_HINT.style()}>
                        <Icon kind={IconKind::ChevronDown} size={20} />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about(props: &LandingProps) -> Html {
    let site = &props.site;
    html! {
        <section id="about" class="section">
            <div class="section-rule"></div>
            <div class="container">
                <h2 class="section-title">{"About"}</h2>
                <div class="about-body">
                    <p class="about-lead">
                        {"Hello, I'm "}<strong>{ &site.founder }</strong>
                        {format!(", the founder of {}.", site.brand)}
                    </p>
                    <p class="muted">{ &site.about }</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services(props: &LandingProps) -> Html {
    html! {
        <section id="services" class="section">
            <div class="section-rule"></div>
            <div class="container">
                <h2 class="section-title">{"Services"}</h2>
                <div class="grid services-grid">
                    { for props.site.services.iter().map(|service| html! {
                        <Card>
                            <div class="card-icon">
                                <Icon kind={IconKind::from(service.icon)} size={48} />
                            </div>
                            <h3>{ &service.title }</h3>
                            <p class="muted">{ &service.description }</p>
                        </Card>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Socials)]
fn socials(props: &LandingProps) -> Html {
    html! {
        <section id="socials" class="section">
            <div class="section-rule"></div>
            <div class="container">
                <h2 class="section-title">{"Connect With Me"}</h2>
                <div class="grid socials-grid">
                    { for props.site.socials.iter().map(|link| {
                        let (target, rel) = if link.opens_new_context() {
                            (Some("_blank"), Some("noopener noreferrer"))
                        } else {
                            (None, None)
                        };
                        html! {
                            <a href={link.url.clone()} target={target} rel={rel} class="social-link">
                                <Card class={classes!("social-card")}>
                                    <div class={classes!("social-badge", format!("badge-{:?}", link.kind).to_lowercase())}>
                                        <Icon kind={IconKind::from(link.kind)} size={32} />
                                    </div>
                                    <h3>{ &link.label }</h3>
                                    <p class="caption">{ &link.caption }</p>
                                </Card>
                            </a>
                        }
                    }) }
                </div>
                <div class="connect-note muted">
                    { for props.site.connect_note.iter().map(|line| html! { <p>{ line }</p> }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section(props: &LandingProps) -> Html {
    let contact = &props.site.contact;
    html! {
        <section id="contact" class="section">
            <div class="section-rule"></div>
            <div class="container">
                <h2 class="section-title">{"Contact"}</h2>
                <div class="grid contact-grid">
                    <div>
                        <h3>{"Get in Touch"}</h3>
                        <div class="contact-row">
                            <Icon kind={IconKind::Mail} size={20} class={classes!("muted")} />
                            <div>
                                <p class="label">{"Email"}</p>
                                <a href={contact.mailto()} class="muted">{ &contact.email }</a>
                            </div>
                        </div>
                        <div class="contact-row">
                            <Icon kind={IconKind::MapPin} size={20} class={classes!("muted")} />
                            <div>
                                <p class="label">{"Address"}</p>
                                { for contact.address.iter().map(|line| html! {
                                    <p class="muted">{ line }</p>
                                }) }
                            </div>
                        </div>
                        <div class="company-info">
                            <p class="label">{"Company Information"}</p>
                            <p class="muted">{ format!("ID: {}", contact.company_id) }</p>
                            <p class="muted">{ format!("VAT: {}", contact.vat) }</p>
                        </div>
                    </div>
                    <div>
                        <h3>{"Send a Message"}</h3>
                        <div class="message-box">
                            <p>
                                {"Ready to discuss your project? Click the button below to open your email client and send me a message."}
                            </p>
                            <a href={contact.mailto_with_subject()}>
                                <button class="button full">
                                    <Icon kind={IconKind::Mail} size={16} />
                                    {"Send Email"}
                                </button>
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let site = props.site.clone();

    html! {
        <main class="landing-page">
            <Hero site={site.clone()} />
            <About site={site.clone()} />
            <Services site={site.clone()} />
            <Socials site={site.clone()} />
            <ContactSection site={site} />
            <style>{ animation::stylesheet() }</style>
            <style>
                {r#"
                    .site {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        position: relative;
                        background: linear-gradient(135deg, #f9fafb, #ffffff 50%, #f3f4f6);
                        color: #111827;
                        font-family: system-ui, -apple-system, sans-serif;
                    }

                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }

                    .muted {
                        color: #4b5563;
                    }

                    .backdrop {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }

                    .noise {
                        position: absolute;
                        inset: 0;
                        background: url('/noise.png');
                        opacity: 0.03;
                    }

                    .blob {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(120px);
                    }

                    .blob-purple { top: -30%; left: -10%; width: 70%; height: 70%; background: #f3e8ff; }
                    .blob-blue { top: 60%; right: -10%; width: 60%; height: 60%; background: #dbeafe; }
                    .blob-teal { top: 20%; right: 30%; width: 40%; height: 40%; background: #ccfbf1; }

                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 10;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(4px);
                        border-bottom: 1px solid #e5e7eb;
                        transition: box-shadow 0.3s ease;
                    }

                    .top-nav.scrolled {
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.06);
                    }

                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding-top: 1rem;
                        padding-bottom: 1rem;
                    }

                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: inherit;
                        text-decoration: none;
                    }

                    .nav-links {
                        display: none;
                        gap: 1.5rem;
                    }

                    .nav-link {
                        color: inherit;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #4b5563;
                    }

                    .button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.6rem 1.2rem;
                        border-radius: 0.375rem;
                        border: 1px solid #111827;
                        background: #111827;
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                    }

                    .button.outline {
                        background: #fff;
                        color: #111827;
                        border-color: #e5e7eb;
                    }

                    .button.wide { min-width: 150px; }
                    .button.full { width: 100%; }

                    .hero {
                        position: relative;
                        overflow: hidden;
                        padding: 5rem 0;
                    }

                    .hero-wash {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, rgba(249, 250, 251, 0.8), rgba(255, 255, 255, 0.9), rgba(243, 244, 246, 0.8));
                    }

                    .hero-layers, .floaters {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }

                    .hero-glow {
                        position: absolute;
                        width: 100%;
                        height: 100%;
                        will-change: transform;
                    }

                    .hero-glow-top-right {
                        top: 0;
                        right: 0;
                        background: radial-gradient(circle at top right, rgba(120, 119, 198, 0.15), transparent 60%);
                    }

                    .hero-glow-bottom-left {
                        bottom: 0;
                        left: 0;
                        background: radial-gradient(circle at bottom left, rgba(120, 219, 198, 0.1), transparent 60%);
                    }

                    .hero-orb {
                        position: absolute;
                        width: 40rem;
                        height: 40rem;
                        top: -10rem;
                        left: -20rem;
                        background: radial-gradient(circle, rgba(220, 220, 255, 0.2), transparent 50%);
                        will-change: transform;
                    }

                    .dot {
                        position: absolute;
                        border-radius: 9999px;
                    }

                    .dot-purple { top: 20%; left: 15%; width: 1rem; height: 1rem; background: #e9d5ff; }
                    .dot-blue { top: 30%; right: 25%; width: 1.5rem; height: 1.5rem; background: #bfdbfe; }
                    .dot-teal { top: 70%; left: 30%; width: 0.75rem; height: 0.75rem; background: #99f6e4; }

                    .glyph {
                        position: absolute;
                        color: rgba(229, 231, 235, 0.2);
                        font-family: ui-monospace, monospace;
                        font-size: 0.75rem;
                    }

                    .glyph-open { top: 25%; left: 10%; }
                    .glyph-close { top: 60%; right: 15%; }

                    .hero-content {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                    }

                    .hero-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }

                    .hero-title span {
                        background: linear-gradient(to right, #1f2937, #6b7280);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .hero-tagline {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                    }

                    .hero-actions {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        justify-content: center;
                    }

                    .scroll-hint {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        margin-top: 6rem;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }

                    .scroll-hint p {
                        margin-bottom: 0.5rem;
                    }

                    @media (max-height: 700px) {
                        .scroll-hint {
                            display: none;
                        }
                    }

                    .section {
                        position: relative;
                        padding: 5rem 0;
                        border-top: 1px solid #f3f4f6;
                    }

                    .section-rule {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 1px;
                        background: linear-gradient(to right, transparent, #e5e7eb, transparent);
                    }

                    .section-title {
                        font-size: 1.875rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .about-body {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .about-lead {
                        font-size: 1.25rem;
                        margin-bottom: 1.5rem;
                    }

                    .grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        margin: 0 auto;
                    }

                    .services-grid { max-width: 64rem; }
                    .socials-grid { max-width: 56rem; gap: 1.5rem; }
                    .contact-grid { max-width: 56rem; gap: 3rem; }

                    .card {
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        border-radius: 0.5rem;
                        padding: 1.5rem;
                        text-align: center;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }

                    .card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }

                    .card-icon {
                        display: flex;
                        justify-content: center;
                        margin-bottom: 1rem;
                        color: #374151;
                    }

                    .social-link {
                        color: inherit;
                        text-decoration: none;
                    }

                    .social-card {
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        transition: all 0.3s ease;
                    }

                    .social-link:hover .social-card {
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transform: translateY(-4px);
                    }

                    .social-badge {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1rem;
                        transition: background 0.2s ease;
                    }

                    .badge-linkedin { background: #eff6ff; color: #2563eb; }
                    .badge-github { background: #f9fafb; color: #1f2937; }
                    .badge-instagram { background: #fdf2f8; color: #db2777; }
                    .badge-email { background: #f0fdf4; color: #16a34a; }

                    .social-link:hover .badge-linkedin { background: #dbeafe; }
                    .social-link:hover .badge-github { background: #f3f4f6; }
                    .social-link:hover .badge-instagram { background: #fce7f3; }
                    .social-link:hover .badge-email { background: #dcfce7; }

                    .caption {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }

                    .connect-note {
                        margin-top: 3rem;
                        text-align: center;
                    }

                    .contact-grid h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 1.5rem;
                    }

                    .contact-row {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }

                    .contact-row p, .company-info p {
                        margin: 0;
                    }

                    .label {
                        font-weight: 500;
                    }

                    .company-info {
                        padding-top: 1rem;
                    }

                    .message-box {
                        padding: 1.5rem;
                        border: 1px solid #e5e7eb;
                        border-radius: 0.5rem;
                        background: #f9fafb;
                    }

                    @media (min-width: 768px) {
                        .nav-links { display: flex; }
                        .hero { padding: 8rem 0; }
                        .hero-title { font-size: 3.75rem; }
                        .hero-tagline { font-size: 1.5rem; }
                        .hero-actions { flex-direction: row; }
                        .scroll-hint { margin-top: 4rem; }
                        .services-grid { grid-template-columns: repeat(3, 1fr); }
                        .socials-grid { grid-template-columns: repeat(2, 1fr); }
                        .contact-grid { grid-template-columns: repeat(2, 1fr); }
                    }

                    @media (min-width: 1024px) {
                        .socials-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
        </main>
    }
}
