use crate::config;

/// A page region targeted by in-page navigation. `top` and `height` are
/// document coordinates read from the live layout, so callers rebuild the
/// tracker from fresh measurements rather than holding one across reflows.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

pub enum TrackerEvent {
    /// Window scroll offset changed; payload is the raw `scrollY`.
    ScrollChanged(f64),
    /// A nav link was clicked; payload is the fragment id it points at.
    NavLinkActivated(String),
}

/// Side effects the caller should carry out against the page. The tracker
/// itself never touches the DOM.
#[derive(Debug, Default, PartialEq)]
pub struct Effects {
    /// Target for a smooth scroll. May be negative; the host scroll API
    /// clamps at the document edges.
    pub scroll_to: Option<f64>,
    /// Navigation happened, so a mobile menu should collapse.
    pub close_menu: bool,
}

/// Maps the scroll position to the one "current" section and answers nav
/// link clicks with a scroll target. At most one section is active at a
/// time; none is active when the scroll position sits outside every
/// section's extent.
pub struct SectionTracker {
    sections: Vec<Section>,
    header_offset: f64,
    scroll_lead: f64,
    active: Option<String>,
}

impl SectionTracker {
    pub fn new(sections: Vec<Section>, header_offset: f64) -> Self {
        Self {
            sections,
            header_offset,
            scroll_lead: config::SCROLL_LEAD_PX,
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Both event kinds overwrite the active selection outright, so
    /// replaying an event is harmless.
    pub fn handle(&mut self, event: TrackerEvent) -> Effects {
        match event {
            TrackerEvent::ScrollChanged(scroll_y) => {
                let effective = scroll_y + self.scroll_lead;
                // First section in document order wins if extents overlap.
                self.active = self
                    .sections
                    .iter()
                    .find(|section| section.contains(effective))
                    .map(|section| section.id.clone());
                Effects::default()
            }
            TrackerEvent::NavLinkActivated(id) => {
                let Some(section) = self.sections.iter().find(|s| s.id == id) else {
                    // Unknown fragment: leave state alone so the click falls
                    // through to default browser navigation.
                    return Effects::default();
                };
                let target = section.top - self.header_offset;
                // Optimistic: reflects the user's intent, not the progress
                // of the scroll animation.
                self.active = Some(id);
                Effects {
                    scroll_to: Some(target),
                    close_menu: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> Section {
        Section {
            id: id.to_string(),
            top,
            height,
        }
    }

    fn three_sections() -> Vec<Section> {
        vec![
            section("a", 0.0, 300.0),
            section("b", 300.0, 400.0),
            section("c", 700.0, 500.0),
        ]
    }

    #[test]
    fn scroll_inside_a_section_activates_its_link() {
        let mut tracker = SectionTracker::new(three_sections(), 150.0);
        // 200 + 150 lead = 350, inside b's [300, 700).
        let effects = tracker.handle(TrackerEvent::ScrollChanged(200.0));
        assert_eq!(tracker.active(), Some("b"));
        assert_eq!(effects, Effects::default());
    }

    #[test]
    fn scroll_outside_every_section_clears_the_active_link() {
        let mut tracker = SectionTracker::new(three_sections(), 150.0);
        tracker.handle(TrackerEvent::ScrollChanged(200.0));
        assert_eq!(tracker.active(), Some("b"));
        // 1200 + 150 = 1350, past c's end at 1200: prior state is cleared,
        // not retained.
        tracker.handle(TrackerEvent::ScrollChanged(1200.0));
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn repeated_scroll_events_are_idempotent() {
        let mut tracker = SectionTracker::new(three_sections(), 150.0);
        tracker.handle(TrackerEvent::ScrollChanged(200.0));
        let first = tracker.active().map(str::to_string);
        tracker.handle(TrackerEvent::ScrollChanged(200.0));
        assert_eq!(tracker.active().map(str::to_string), first);
    }

    #[test]
    fn link_activation_scrolls_to_top_minus_header_offset() {
        let mut tracker = SectionTracker::new(three_sections(), 150.0);
        let effects = tracker.handle(TrackerEvent::NavLinkActivated("c".to_string()));
        assert_eq!(effects.scroll_to, Some(700.0 - 150.0));
        assert!(effects.close_menu);
        assert_eq!(tracker.active(), Some("c"));
    }

    #[test]
    fn every_resolved_activation_requests_menu_collapse() {
        // The collapse signal accompanies navigation from any anchor that
        // resolves to a section: nav entries, hero CTAs, footer links.
        let mut tracker = SectionTracker::new(three_sections(), 150.0);
        for id in ["a", "b", "c"] {
            let effects = tracker.handle(TrackerEvent::NavLinkActivated(id.to_string()));
            assert!(effects.close_menu, "activating {id} should collapse the menu");
        }
        let effects = tracker.handle(TrackerEvent::NavLinkActivated("elsewhere".to_string()));
        assert!(!effects.close_menu);
    }

    #[test]
    fn unknown_link_is_a_no_op() {
        let mut tracker = SectionTracker::new(three_sections(), 150.0);
        tracker.handle(TrackerEvent::ScrollChanged(200.0));
        let effects = tracker.handle(TrackerEvent::NavLinkActivated("elsewhere".to_string()));
        assert_eq!(effects, Effects::default());
        assert_eq!(tracker.active(), Some("b"));
    }

    #[test]
    fn scroll_then_activate_matches_the_documented_scenario() {
        // A:[0,300), B:[300,700), C:[700,1200), lead 150.
        let mut tracker = SectionTracker::new(three_sections(), 150.0);
        tracker.handle(TrackerEvent::ScrollChanged(200.0));
        assert_eq!(tracker.active(), Some("b"));

        let effects = tracker.handle(TrackerEvent::NavLinkActivated("a".to_string()));
        // Target goes negative; the DOM layer clamps before scrolling.
        assert_eq!(effects.scroll_to, Some(-150.0));
        assert_eq!(tracker.active(), Some("a"));
    }

    #[test]
    fn overlapping_extents_resolve_to_the_first_in_document_order() {
        let sections = vec![
            section("first", 0.0, 500.0),
            section("second", 200.0, 500.0),
        ];
        let mut tracker = SectionTracker::new(sections, 150.0);
        tracker.handle(TrackerEvent::ScrollChanged(150.0));
        assert_eq!(tracker.active(), Some("first"));
    }

    #[test]
    fn no_sections_means_nothing_ever_activates() {
        let mut tracker = SectionTracker::new(Vec::new(), 150.0);
        tracker.handle(TrackerEvent::ScrollChanged(0.0));
        assert_eq!(tracker.active(), None);
        let effects = tracker.handle(TrackerEvent::NavLinkActivated("a".to_string()));
        assert_eq!(effects, Effects::default());
    }
}
