//! Scroll-driven navigation state.
//!
//! # Responsibility
//! - Derive the "scrolled past threshold" chrome flag from the scroll offset.
//! - Derive the active section from the sections' current bounding boxes.
//!
//! # Invariants
//! - `is_past_threshold == offset > threshold_px`, recomputed statelessly.
//! - The active section is the first section, in declaration order, whose box
//!   contains the probe line (`top <= probe && bottom >= probe`).
//! - When no section contains the probe line the previous active section is
//!   kept; the tracker never flickers back to `None`.
//! - `update` is idempotent for a fixed offset and layout.

use crate::config::ScrollConfig;
use crate::host::PageHost;
use crate::model::section::SectionId;
use log::debug;
use serde::{Deserialize, Serialize};

/// Read-only snapshot consumed by the navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollState {
    pub is_past_threshold: bool,
    pub active_section: Option<SectionId>,
}

/// Owner of `ScrollState`.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    config: ScrollConfig,
    sections: Vec<SectionId>,
    state: ScrollState,
}

impl ScrollTracker {
    /// Creates a tracker over `sections` in declaration order.
    ///
    /// The first declared section starts active.
    pub fn new(config: ScrollConfig, sections: Vec<SectionId>) -> Self {
        let state = ScrollState {
            is_past_threshold: false,
            active_section: sections.first().cloned(),
        };
        Self {
            config,
            sections,
            state,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// Recomputes the state from the host's current offset and layout.
    ///
    /// Returns `true` when the snapshot changed.
    pub fn update(&mut self, host: &impl PageHost) -> bool {
        let next = ScrollState {
            is_past_threshold: self.is_past_threshold(host.scroll_offset()),
            active_section: self
                .find_active(host)
                .or_else(|| self.state.active_section.clone()),
        };

        if next == self.state {
            return false;
        }
        if next.active_section != self.state.active_section {
            debug!(
                "event=active_section_changed module=scroll status=ok from={} to={}",
                section_label(self.state.active_section.as_ref()),
                section_label(next.active_section.as_ref()),
            );
        }
        self.state = next;
        true
    }

    /// Returns whether `offset` lies strictly beyond the chrome threshold.
    pub fn is_past_threshold(&self, offset: f64) -> bool {
        offset > self.config.threshold_px
    }

    fn find_active(&self, host: &impl PageHost) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|id| match host.section_bounds(id) {
                Some(bounds) => bounds.contains(self.config.probe_px),
                None => {
                    debug!("event=section_missing module=scroll status=skip section={id}");
                    false
                }
            })
            .cloned()
    }
}

fn section_label(id: Option<&SectionId>) -> &str {
    id.map(SectionId::as_str).unwrap_or("none")
}

#[cfg(test)]
mod tests {
    use super::ScrollTracker;
    use crate::config::ScrollConfig;
    use crate::host::memory::MemoryHost;
    use crate::model::section::SectionId;

    fn id(value: &str) -> SectionId {
        SectionId::parse(value).unwrap()
    }

    #[test]
    fn threshold_is_strict() {
        let tracker = ScrollTracker::new(ScrollConfig::default(), Vec::new());
        assert!(!tracker.is_past_threshold(0.0));
        assert!(!tracker.is_past_threshold(50.0));
        assert!(tracker.is_past_threshold(50.5));
        assert!(tracker.is_past_threshold(51.0));
    }

    #[test]
    fn starts_with_first_section_active_and_not_scrolled() {
        let tracker = ScrollTracker::new(ScrollConfig::default(), vec![id("home"), id("about")]);
        assert!(!tracker.state().is_past_threshold);
        assert_eq!(tracker.state().active_section, Some(id("home")));
    }

    #[test]
    fn update_reports_change_only_once() {
        let host = MemoryHost::new(600.0)
            .with_stacked_sections(&[(id("home"), 600.0), (id("about"), 600.0)]);
        let mut tracker = ScrollTracker::new(ScrollConfig::default(), vec![id("home"), id("about")]);

        host.set_offset(700.0);
        assert!(tracker.update(&host));
        assert_eq!(tracker.state().active_section, Some(id("about")));
        assert!(tracker.state().is_past_threshold);
        assert!(!tracker.update(&host));
    }
}
