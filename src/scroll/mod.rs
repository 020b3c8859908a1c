pub mod controller;
pub mod dom;

use crate::config::SiteConfig;

/// Current vertical scroll position together with the fixed header height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub header_height: f64,
}

/// Layout of one `section[id]`, read fresh on every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderMode {
    #[default]
    Flat,
    Elevated,
}

impl HeaderMode {
    pub fn style(self) -> &'static str {
        match self {
            HeaderMode::Flat => {
                "background: rgba(255, 255, 255, 0.95); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);"
            }
            HeaderMode::Elevated => {
                "background: rgba(255, 255, 255, 0.98); box-shadow: 0 2px 25px rgba(0, 0, 0, 0.15);"
            }
        }
    }
}

/// Everything the page derives from the scroll position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub active_section: Option<String>,
    pub header_mode: HeaderMode,
    pub back_to_top_visible: bool,
}

impl ScrollState {
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub header_elevation: f64,
    pub back_to_top: f64,
    pub section_lookahead: f64,
}

impl From<&SiteConfig> for ScrollThresholds {
    fn from(config: &SiteConfig) -> Self {
        Self {
            header_elevation: config.header_elevation_threshold,
            back_to_top: config.back_to_top_threshold,
            section_lookahead: config.section_lookahead,
        }
    }
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

/// Read-only view of the page layout.
pub trait LayoutProbe {
    fn scroll_offset(&self) -> f64;
    fn header_height(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn sections(&self) -> Vec<SectionGeometry>;

    fn sample(&self) -> ScrollSample {
        ScrollSample {
            offset: self.scroll_offset(),
            header_height: self.header_height(),
        }
    }
}

/// Whether the offset falls in the section's band, which is shifted up by
/// the header height and the lookahead margin.
pub fn in_active_band(sample: ScrollSample, section: &SectionGeometry, lookahead: f64) -> bool {
    let top = section.top - sample.header_height - lookahead;
    sample.offset > top && sample.offset <= top + section.height
}

/// Section whose shifted band `(top, top + height]` contains the offset.
///
/// Sections are checked in document order and a later match replaces an
/// earlier one, so with overlapping sections the last one wins.
pub fn active_section<'a>(
    sample: ScrollSample,
    sections: &'a [SectionGeometry],
    lookahead: f64,
) -> Option<&'a str> {
    let mut active = None;
    for section in sections.iter().filter(|s| in_active_band(sample, s, lookahead)) {
        active = Some(section.id.as_str());
    }
    active
}

pub fn header_mode(offset: f64, thresholds: &ScrollThresholds) -> HeaderMode {
    if offset >= thresholds.header_elevation {
        HeaderMode::Elevated
    } else {
        HeaderMode::Flat
    }
}

pub fn compute_scroll_state(
    sample: ScrollSample,
    sections: &[SectionGeometry],
    thresholds: &ScrollThresholds,
) -> ScrollState {
    ScrollState {
        active_section: active_section(sample, sections, thresholds.section_lookahead)
            .map(str::to_owned),
        header_mode: header_mode(sample.offset, thresholds),
        back_to_top_visible: sample.offset >= thresholds.back_to_top,
    }
}

/// Scroll position that puts a section's top right under the fixed header.
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

/// Section id named by an in-page link such as `#about`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether an element whose bounding top is `element_top` is far enough
/// into the viewport to play its entrance animation.
pub fn should_reveal(element_top: f64, viewport_height: f64, reveal_offset: f64) -> bool {
    element_top < viewport_height - reveal_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionGeometry {
        SectionGeometry {
            id: id.to_string(),
            top,
            height,
        }
    }

    fn page() -> Vec<SectionGeometry> {
        vec![
            section("home", 0.0, 800.0),
            section("about", 800.0, 600.0),
            section("services", 1400.0, 900.0),
            section("contact", 2300.0, 700.0),
        ]
    }

    fn at(offset: f64) -> ScrollSample {
        ScrollSample {
            offset,
            header_height: 80.0,
        }
    }

    #[test]
    fn header_elevates_exactly_at_fifty() {
        let t = ScrollThresholds::default();
        assert_eq!(header_mode(0.0, &t), HeaderMode::Flat);
        assert_eq!(header_mode(49.0, &t), HeaderMode::Flat);
        assert_eq!(header_mode(49.999, &t), HeaderMode::Flat);
        assert_eq!(header_mode(50.0, &t), HeaderMode::Elevated);
        assert_eq!(header_mode(5000.0, &t), HeaderMode::Elevated);
    }

    #[test]
    fn back_to_top_appears_at_five_hundred() {
        let t = ScrollThresholds::default();
        for (offset, visible) in [(0.0, false), (499.0, false), (500.0, true), (2000.0, true)] {
            let state = compute_scroll_state(at(offset), &page(), &t);
            assert_eq!(state.back_to_top_visible, visible, "offset {}", offset);
        }
    }

    #[test]
    fn active_band_is_shifted_by_header_and_lookahead() {
        let sections = page();
        // about: 800 - 80 - 100 = 620, band (620, 1220]
        assert_eq!(active_section(at(620.0), &sections, 100.0), Some("home"));
        assert_eq!(active_section(at(621.0), &sections, 100.0), Some("about"));
        assert_eq!(active_section(at(1220.0), &sections, 100.0), Some("about"));
        assert_eq!(active_section(at(1221.0), &sections, 100.0), Some("services"));
    }

    #[test]
    fn at_most_one_link_is_active_for_adjacent_sections() {
        let sections = page();
        let mut offset = 0.0;
        while offset < 3500.0 {
            let matches = sections
                .iter()
                .filter(|s| in_active_band(at(offset), s, 100.0))
                .count();
            assert!(matches <= 1, "offset {} matched {} sections", offset, matches);
            offset += 7.0;
        }
    }

    #[test]
    fn nothing_active_past_the_last_section() {
        let sections = page();
        // contact band ends at 2300 - 180 + 700 = 2820
        assert_eq!(active_section(at(2820.0), &sections, 100.0), Some("contact"));
        assert_eq!(active_section(at(2821.0), &sections, 100.0), None);
        assert_eq!(active_section(at(0.0), &[], 100.0), None);
    }

    #[test]
    fn overlapping_sections_resolve_to_the_last_one() {
        let sections = vec![section("a", 0.0, 1000.0), section("b", 200.0, 1000.0)];
        assert_eq!(active_section(at(300.0), &sections, 100.0), Some("b"));
    }

    #[test]
    fn recomputing_gives_the_same_state() {
        let t = ScrollThresholds::default();
        let first = compute_scroll_state(at(900.0), &page(), &t);
        let second = compute_scroll_state(at(900.0), &page(), &t);
        assert_eq!(first, second);
        assert!(first.is_active("about"));
        assert_eq!(first.header_mode, HeaderMode::Elevated);
        assert!(first.back_to_top_visible);
    }

    #[test]
    fn scroll_target_and_reveal_helpers() {
        assert_eq!(scroll_target(800.0, 80.0), 720.0);
        assert!(should_reveal(500.0, 800.0, 150.0));
        assert!(!should_reveal(650.0, 800.0, 150.0));
    }

    #[test]
    fn only_fragment_links_have_anchor_targets() {
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#contact"), None);
        assert_eq!(anchor_target("careers.html"), None);
    }
}
