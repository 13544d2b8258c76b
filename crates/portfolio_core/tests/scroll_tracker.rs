use portfolio_core::config::ScrollConfig;
use portfolio_core::{
    HostError, ListenerId, MemoryHost, PageHost, ScrollTracker, SectionBounds, SectionId,
};

fn id(value: &str) -> SectionId {
    SectionId::parse(value).unwrap()
}

/// Host reporting fixed viewport-relative boxes, independent of any offset.
struct FixedLayout {
    offset: f64,
    boxes: Vec<(SectionId, SectionBounds)>,
}

impl PageHost for FixedLayout {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn section_bounds(&self, id: &SectionId) -> Option<SectionBounds> {
        self.boxes
            .iter()
            .find(|(section, _)| section == id)
            .map(|(_, bounds)| *bounds)
    }

    fn scroll_into_view(&self, _id: &SectionId) -> bool {
        false
    }

    fn subscribe_scroll(&mut self) -> Result<ListenerId, HostError> {
        Ok(ListenerId(1))
    }

    fn unsubscribe_scroll(&mut self, _listener: ListenerId) {}

    fn observe_section(&mut self, _id: &SectionId, _amount: f64) -> Result<(), HostError> {
        Ok(())
    }

    fn unobserve_section(&mut self, _id: &SectionId) {}
}

fn tracker(sections: &[&str]) -> ScrollTracker {
    ScrollTracker::new(
        ScrollConfig::default(),
        sections.iter().map(|value| id(value)).collect(),
    )
}

#[test]
fn threshold_boundary_is_exclusive() {
    let mut tracker = tracker(&["home"]);
    let host = MemoryHost::new(800.0).with_section(id("home"), 0.0, 5_000.0);

    for (offset, expected) in [
        (0.0, false),
        (49.0, false),
        (50.0, false),
        (51.0, true),
        (900.0, true),
    ] {
        host.set_offset(offset);
        tracker.update(&host);
        assert_eq!(
            tracker.state().is_past_threshold,
            expected,
            "offset {offset} should give {expected}"
        );
    }
}

#[test]
fn section_containing_probe_line_becomes_active() {
    let mut tracker = tracker(&["a", "b"]);
    let host = FixedLayout {
        offset: 0.0,
        boxes: vec![
            (id("a"), SectionBounds::new(0.0, 120.0)),
            (id("b"), SectionBounds::new(130.0, 300.0)),
        ],
    };

    tracker.update(&host);
    assert_eq!(tracker.state().active_section, Some(id("a")));
}

#[test]
fn overlapping_sections_resolve_to_first_declared() {
    let mut tracker = tracker(&["a", "b"]);
    let host = FixedLayout {
        offset: 0.0,
        boxes: vec![
            (id("a"), SectionBounds::new(90.0, 110.0)),
            (id("b"), SectionBounds::new(95.0, 115.0)),
        ],
    };

    tracker.update(&host);
    assert_eq!(tracker.state().active_section, Some(id("a")));

    let mut reversed = ScrollTracker::new(ScrollConfig::default(), vec![id("b"), id("a")]);
    reversed.update(&host);
    assert_eq!(reversed.state().active_section, Some(id("b")));
}

#[test]
fn no_match_keeps_previous_active_section() {
    let mut tracker = tracker(&["home", "about"]);
    let mut host = FixedLayout {
        offset: 700.0,
        boxes: vec![
            (id("home"), SectionBounds::new(-700.0, -100.0)),
            (id("about"), SectionBounds::new(-100.0, 500.0)),
        ],
    };
    tracker.update(&host);
    assert_eq!(tracker.state().active_section, Some(id("about")));

    // A gap between sections straddles the probe line.
    host.boxes = vec![
        (id("home"), SectionBounds::new(-900.0, -300.0)),
        (id("about"), SectionBounds::new(150.0, 750.0)),
    ];
    tracker.update(&host);
    assert_eq!(tracker.state().active_section, Some(id("about")));
}

#[test]
fn missing_section_elements_are_skipped() {
    let mut tracker = tracker(&["home", "about", "projects"]);
    let mut host = MemoryHost::new(800.0).with_stacked_sections(&[
        (id("home"), 800.0),
        (id("about"), 800.0),
        (id("projects"), 800.0),
    ]);
    host.remove_section(&id("about"));
    host.set_offset(900.0);

    tracker.update(&host);
    assert_eq!(tracker.state().active_section, Some(id("home")));

    host.set_offset(1_650.0);
    tracker.update(&host);
    assert_eq!(tracker.state().active_section, Some(id("projects")));
}

#[test]
fn update_is_idempotent_for_fixed_inputs() {
    let mut tracker = tracker(&["home", "about"]);
    let host = MemoryHost::new(800.0)
        .with_stacked_sections(&[(id("home"), 800.0), (id("about"), 800.0)]);
    host.set_offset(820.0);

    tracker.update(&host);
    let first = tracker.state().clone();
    for _ in 0..5 {
        assert!(!tracker.update(&host));
        assert_eq!(tracker.state(), &first);
    }
}

#[test]
fn custom_probe_and_threshold_are_honoured() {
    let config = ScrollConfig {
        threshold_px: 0.0,
        probe_px: 10.0,
    };
    let mut tracker = ScrollTracker::new(config, vec![id("a"), id("b")]);
    let host = FixedLayout {
        offset: 1.0,
        boxes: vec![
            (id("a"), SectionBounds::new(-200.0, 5.0)),
            (id("b"), SectionBounds::new(5.0, 400.0)),
        ],
    };

    tracker.update(&host);
    assert!(tracker.state().is_past_threshold);
    assert_eq!(tracker.state().active_section, Some(id("b")));
}
