use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::events::EventListener;
use crate::scroll::dom::ANIMATED_SELECTOR;

const LAZY_IMAGE_SELECTOR: &str = r#"img[src*="images/"]"#;

/// An IntersectionObserver together with its callback. Dropping it
/// disconnects the observer.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    fn new<F>(init: Option<&IntersectionObserverInit>, mut on_visible: F) -> Result<Self, JsValue>
    where
        F: FnMut(HtmlElement, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
                    on_visible(element, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = match init {
            Some(init) => IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)?,
            None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
        };
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn observe_all(&self, document: &Document, selector: &str, mut prepare: impl FnMut(&HtmlElement)) -> Result<u32, JsValue> {
        let nodes = document.query_selector_all(selector)?;
        let mut count = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                prepare(&element);
                self.observer.observe(&element);
                count += 1;
            }
        }
        Ok(count)
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("Could not set {} on element: {:?}", property, e);
    }
}

/// Hides the animated cards and fades each one in once it scrolls into view.
pub fn observe_entrance_animations(document: &Document) -> Result<Observer, JsValue> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(0.1));
    init.set_root_margin("0px 0px -50px 0px");

    let observer = Observer::new(Some(&init), |element, _| {
        set_style(&element, "opacity", "1");
        set_style(&element, "transform", "translateY(0)");
    })?;
    let count = observer.observe_all(document, ANIMATED_SELECTOR, |element| {
        set_style(element, "opacity", "0");
        set_style(element, "transform", "translateY(30px)");
        set_style(element, "transition", "opacity 0.6s ease, transform 0.6s ease");
    })?;
    log::debug!("Observing {} animated elements", count);
    Ok(observer)
}

/// Fades site images in once they are visible and loaded.
pub fn observe_lazy_images(document: &Document) -> Result<Observer, JsValue> {
    let observer = Observer::new(None, |element, observer| {
        set_style(&element, "opacity", "0");
        set_style(&element, "transition", "opacity 0.3s ease");

        if let Ok(image) = element.clone().dyn_into::<HtmlImageElement>() {
            if image.complete() {
                set_style(&element, "opacity", "1");
            } else {
                let target = element.clone();
                match EventListener::new(&image, "load", move |_| set_style(&target, "opacity", "1")) {
                    // The image element owns its load handler from here on.
                    Ok(listener) => listener.forget(),
                    Err(e) => log::warn!("Could not watch image load: {:?}", e),
                }
            }
        }
        observer.unobserve(&element);
    })?;
    observer.observe_all(document, LAZY_IMAGE_SELECTOR, |_| {})?;
    Ok(observer)
}

/// Adds `<link rel="preload" as="image">` hints for above-the-fold images.
pub fn preload_images(document: &Document, sources: &[&str]) -> Result<(), JsValue> {
    let head = document.head().ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    for src in sources {
        let link: Element = document.create_element("link")?;
        link.set_attribute("rel", "preload")?;
        link.set_attribute("as", "image")?;
        link.set_attribute("href", src)?;
        head.append_child(&link)?;
    }
    Ok(())
}
