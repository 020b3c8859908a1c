use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::cta::Cta;
use crate::contact::ContactForm;
use crate::scroll::dom::scroll_to_anchor;

const SERVICES: [(&str, &str, &str); 4] = [
    ("fa-solar-panel", "Solar Installations", "Utility-scale and rooftop solar designed, built and maintained by one team."),
    ("fa-oil-well", "Upstream Support", "Field services, well maintenance and asset integrity for onshore operators."),
    ("fa-bolt", "Power Distribution", "Substation, grid tie-in and backup power for industrial sites."),
    ("fa-leaf", "Energy Audits", "Consumption studies that turn into a concrete efficiency roadmap."),
];

const VALUES: [(&str, &str); 3] = [
    ("Integrity", "We report what we find, including what clients would rather not hear."),
    ("Safety", "Zero-harm operations on every site, every shift."),
    ("Stewardship", "Projects that leave the land and communities better off."),
];

const REASONS: [(&str, &str); 4] = [
    ("Local expertise", "Engineers who have worked the region for over a decade."),
    ("End-to-end delivery", "From feasibility study to commissioning under one contract."),
    ("Certified crews", "Internationally certified technicians on every deployment."),
    ("Transparent pricing", "Fixed quotes with no surprise change orders."),
];

#[function_component]
pub fn Home() -> Html {
    let on_scroll_hint = Callback::from(|_: MouseEvent| {
        scroll_to_anchor("#about");
    });

    html! {
        <main class="main">
            <style>{PAGE_CSS}</style>

            <section id="home" class="hero">
                <div class="hero__content container">
                    <h1 class="hero__title">{"Powering Africa's Next Generation of Energy"}</h1>
                    <p class="hero__description">
                        {"Black Terra Energies delivers oil, gas and renewable projects with the discipline of an engineering firm and the care of a local partner."}
                    </p>
                    <div class="hero__buttons">
                        <Cta href="#contact" label="Get a Quote" />
                        <Cta href="#services" label="Our Services" secondary={true} />
                    </div>
                </div>
                <div class="hero__scroll" onclick={on_scroll_hint}>
                    <i class="fas fa-chevron-down"></i>
                </div>
            </section>

            <section id="about" class="about section">
                <div class="container">
                    <h2 class="section__title">{"About Us"}</h2>
                    <div class="mission-vision">
                        <div class="mission-vision__item">
                            <h3>{"Our Mission"}</h3>
                            <p>{"Deliver reliable, affordable energy infrastructure that communities can depend on."}</p>
                        </div>
                        <div class="mission-vision__item">
                            <h3>{"Our Vision"}</h3>
                            <p>{"To be the partner of choice for the continent's energy transition."}</p>
                        </div>
                    </div>
                    <div class="values">
                        { for VALUES.iter().map(|(title, text)| html! {
                            <div class="values__item">
                                <h4>{*title}</h4>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="services" class="services section">
                <div class="container">
                    <h2 class="section__title">{"Our Services"}</h2>
                    <div class="services__grid">
                        { for SERVICES.iter().map(|(icon, title, text)| html! {
                            <div class="services__card">
                                <i class={classes!("fas", *icon)}></i>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="why-choose" class="why-choose section">
                <div class="container">
                    <h2 class="section__title">{"Why Choose Us"}</h2>
                    <div class="why-choose__grid">
                        { for REASONS.iter().map(|(title, text)| html! {
                            <div class="why-choose__item">
                                <h4>{*title}</h4>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                    <img src="images/hero-energy-facility.png" alt="Energy facility" class="why-choose__img" loading="lazy" />
                    <div class="why-choose__cta">
                        <Cta href="#contact" label="Start Your Project" />
                    </div>
                </div>
            </section>

            <section id="contact" class="contact section">
                <div class="container">
                    <h2 class="section__title">{"Contact Us"}</h2>
                    <p class="contact__subtitle">{"Tell us about your project and we'll get back to you."}</p>
                    <ContactForm />
                </div>
            </section>
        </main>
    }
}

const PAGE_CSS: &str = r#"
    .nav__menu.show { right: 0; }
    .nav__link.active-link { color: #c8a24a; }
    .nav__link.active-link::after { width: 100%; }
    .back-to-top {
        position: fixed;
        right: 1.5rem;
        bottom: -3rem;
        opacity: 0;
        visibility: hidden;
        transition: all 0.3s ease;
    }
    .back-to-top.show {
        bottom: 1.5rem;
        opacity: 1;
        visibility: visible;
    }
    .fade-in-up {
        animation: fadeInUp 0.6s ease forwards;
    }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .form__message {
        display: none;
        margin-top: 1rem;
        padding: 0.75rem 1rem;
        border-radius: 6px;
    }
    .form__message.success {
        background: rgba(46, 160, 67, 0.12);
        color: #1f7a35;
    }
    .form__message.error {
        background: rgba(218, 54, 51, 0.12);
        color: #a12622;
    }
    .form__submit:disabled {
        opacity: 0.7;
        cursor: not-allowed;
    }
    .hero__scroll { cursor: pointer; }
"#;
