
#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("FORM_ENDPOINT") {
        Some(url) => url,
        None => "http://localhost:3001/f/contact",  // Local mock of the form backend
    }
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("FORM_ENDPOINT") {
        Some(url) => url,
        None => "https://formspree.io/f/xblkterra",
    }
}

/// Tunables shared by the scroll controller, the contact form and the
/// startup helpers.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Scroll offset at which the header switches to its elevated style.
    pub header_elevation_threshold: f64,
    /// Scroll offset at which the back-to-top button appears.
    pub back_to_top_threshold: f64,
    /// Extra distance subtracted from every section top so a link turns
    /// active slightly before its section reaches the header.
    pub section_lookahead: f64,
    pub scroll_throttle_ms: u32,
    pub feedback_visible_ms: u32,
    /// Elements closer than this to the viewport bottom are not revealed yet.
    pub reveal_offset: f64,
    pub critical_images: Vec<&'static str>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_elevation_threshold: 50.0,
            back_to_top_threshold: 500.0,
            section_lookahead: 100.0,
            scroll_throttle_ms: 16, // ~60fps
            feedback_visible_ms: 5_000,
            reveal_offset: 150.0,
            critical_images: vec![
                "images/logo-black-terra.png",
                "images/hero-energy-facility.png",
            ],
        }
    }
}
