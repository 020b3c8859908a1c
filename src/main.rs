use yew::prelude::*;
use log::{info, Level};
use web_sys::{window, ErrorEvent};
use wasm_bindgen::JsCast;

mod analytics;
mod config;
mod events;
mod media;
mod throttle;
mod timer;
mod contact;
mod scroll;
mod components {
    pub mod back_to_top;
    pub mod cta;
    pub mod header;
}
mod pages {
    pub mod home;
}

use components::{back_to_top::BackToTop, header::Header};
use config::SiteConfig;
use events::EventListener;
use pages::home::Home;
use scroll::controller::use_scroll_state;

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| SiteConfig::default(), ());
    let scroll = use_scroll_state((*config).clone());

    // Page enhancements that only need the rendered DOM.
    use_effect_with_deps(
        move |config: &SiteConfig| {
            let document = window().and_then(|w| w.document());
            let mut observers = Vec::new();
            if let Some(document) = document {
                match media::observe_entrance_animations(&document) {
                    Ok(observer) => observers.push(observer),
                    Err(e) => log::warn!("Entrance animations disabled: {:?}", e),
                }
                match media::observe_lazy_images(&document) {
                    Ok(observer) => observers.push(observer),
                    Err(e) => log::warn!("Lazy image loading disabled: {:?}", e),
                }
                if let Err(e) = media::preload_images(&document, &config.critical_images) {
                    log::warn!("Could not preload images: {:?}", e);
                }
            }
            info!("Black Terra Energies website loaded successfully!");
            info!("All interactive features initialized.");
            move || drop(observers)
        },
        (*config).clone(),
    );

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <Header scroll={scroll.clone()} />
            <Home />
            <BackToTop visible={scroll.back_to_top_visible} />
        </ContextProvider<SiteConfig>>
    }
}

fn log_window_errors() {
    let Some(window) = window() else {
        return;
    };
    let listener = EventListener::new(&window, "error", |event| {
        match event.dyn_ref::<ErrorEvent>() {
            Some(error) => log::error!("JavaScript error: {} ({}:{})", error.message(), error.filename(), error.lineno()),
            None => log::error!("JavaScript error: {:?}", event.type_()),
        }
    });
    match listener {
        Ok(listener) => listener.forget(),
        Err(e) => log::warn!("Could not install error listener: {:?}", e),
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    log_window_errors();
    yew::Renderer::<App>::new().render();
}
