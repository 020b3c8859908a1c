use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{anchor_target, scroll_target, should_reveal, LayoutProbe, SectionGeometry};

pub const HEADER_ID: &str = "header";

/// Classes of the cards that slide in while scrolling.
pub const ANIMATED_SELECTOR: &str =
    ".values__item, .why-choose__item, .services__card, .mission-vision__item";

/// [`LayoutProbe`] over the live document.
pub struct DomLayout {
    window: Window,
    document: Document,
}

impl DomLayout {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self { window, document })
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    /// Smoothly scrolls so the section sits just below the header.
    /// Unknown ids are ignored.
    pub fn scroll_to_section(&self, section_id: &str) {
        let Some(section) = self.html_element(section_id) else {
            log::warn!("No section with id '{}' to scroll to", section_id);
            return;
        };
        let top = scroll_target(f64::from(section.offset_top()), self.header_height());
        self.smooth_scroll_to(top);
    }

    pub fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    /// Marks animated cards that have entered the viewport.
    pub fn reveal_visible(&self, reveal_offset: f64) {
        let viewport = self.viewport_height();
        let Ok(nodes) = self.document.query_selector_all(ANIMATED_SELECTOR) else {
            return;
        };
        for i in 0..nodes.length() {
            let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            let top = element.get_bounding_client_rect().top();
            if should_reveal(top, viewport, reveal_offset) {
                let _ = element.class_list().add_1("fade-in-up");
            }
        }
    }
}

impl LayoutProbe for DomLayout {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn header_height(&self) -> f64 {
        self.html_element(HEADER_ID)
            .map(|header| f64::from(header.offset_height()))
            .unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn sections(&self) -> Vec<SectionGeometry> {
        let Ok(nodes) = self.document.query_selector_all("section[id]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|section| SectionGeometry {
                id: section.id(),
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
            .collect()
    }
}

/// Smooth-scrolls to the section an in-page link points at. Returns false
/// for links that are not `#fragment`s so the browser can follow them.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    match DomLayout::new() {
        Ok(layout) => layout.scroll_to_section(id),
        Err(e) => log::warn!("Cannot scroll to #{}: {:?}", id, e),
    }
    true
}

pub fn scroll_to_top() {
    match DomLayout::new() {
        Ok(layout) => layout.smooth_scroll_to(0.0),
        Err(e) => log::warn!("Cannot scroll to top: {:?}", e),
    }
}
