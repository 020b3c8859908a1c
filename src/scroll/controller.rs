use std::rc::{Rc, Weak};

use wasm_bindgen::JsValue;
use yew::prelude::*;

use super::dom::DomLayout;
use super::{compute_scroll_state, LayoutProbe, ScrollState, ScrollThresholds};
use crate::config::SiteConfig;
use crate::events::EventListener;
use crate::throttle::Throttle;
use crate::timer::{BrowserScheduler, Scheduler};

/// Recomputes [`ScrollState`] from a layout probe and hands it to `apply`.
pub struct ScrollTicker<L: LayoutProbe> {
    layout: L,
    thresholds: ScrollThresholds,
    apply: Box<dyn Fn(ScrollState, &L)>,
}

impl<L: LayoutProbe> ScrollTicker<L> {
    pub fn new(layout: L, thresholds: ScrollThresholds, apply: impl Fn(ScrollState, &L) + 'static) -> Self {
        Self {
            layout,
            thresholds,
            apply: Box::new(apply),
        }
    }

    pub fn tick(&self) {
        let state = compute_scroll_state(self.layout.sample(), &self.layout.sections(), &self.thresholds);
        (self.apply)(state, &self.layout);
    }
}

/// Scroll subscription: raw events go through the throttle and every
/// trailing call runs one tick. Dropping the controller unsubscribes.
pub struct ScrollController<S: Scheduler + 'static> {
    throttle: Rc<Throttle<(), S>>,
    _listener: Option<EventListener>,
}

impl<S: Scheduler + 'static> ScrollController<S> {
    pub fn new<L: LayoutProbe + 'static>(ticker: ScrollTicker<L>, scheduler: S, interval_ms: u32) -> Self {
        let ticker = Rc::new(ticker);
        // Initial state before the first scroll event.
        ticker.tick();
        let throttle = Rc::new(Throttle::new(scheduler, interval_ms, move |()| ticker.tick()));
        Self {
            throttle,
            _listener: None,
        }
    }

    /// Entry point for raw scroll events. It goes quiet once the controller
    /// is dropped.
    pub fn feed(&self) -> ScrollFeed<S> {
        ScrollFeed {
            throttle: Rc::downgrade(&self.throttle),
        }
    }
}

pub struct ScrollFeed<S: Scheduler + 'static> {
    throttle: Weak<Throttle<(), S>>,
}

impl<S: Scheduler + 'static> ScrollFeed<S> {
    pub fn on_scroll(&self) {
        if let Some(throttle) = self.throttle.upgrade() {
            throttle.call(());
        }
    }
}

impl ScrollController<BrowserScheduler> {
    pub fn attach_to_window(ticker: ScrollTicker<DomLayout>, interval_ms: u32) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let mut controller = Self::new(ticker, BrowserScheduler, interval_ms);
        let feed = controller.feed();
        let listener = EventListener::new(&window, "scroll", move |_| feed.on_scroll())?;
        controller._listener = Some(listener);
        Ok(controller)
    }
}

/// Tracks the page's [`ScrollState`] for the lifetime of the component.
#[hook]
pub fn use_scroll_state(config: SiteConfig) -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |config: &SiteConfig| {
                let reveal_offset = config.reveal_offset;
                let controller = DomLayout::new().and_then(|layout| {
                    let ticker = ScrollTicker::new(layout, ScrollThresholds::from(config), move |next, layout: &DomLayout| {
                        state.set(next);
                        layout.reveal_visible(reveal_offset);
                    });
                    ScrollController::attach_to_window(ticker, config.scroll_throttle_ms)
                });
                let controller = match controller {
                    Ok(controller) => Some(controller),
                    Err(e) => {
                        log::error!("Scroll tracking unavailable: {:?}", e);
                        None
                    }
                };
                move || drop(controller)
            },
            config,
        );
    }

    (*state).clone()
}
