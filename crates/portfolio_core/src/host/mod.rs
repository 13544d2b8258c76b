//! Host environment contract.
//!
//! # Responsibility
//! - Describe the layout/scroll primitives the trackers read.
//! - Describe the subscribe/unsubscribe pair for scroll and visibility events.
//!
//! # Invariants
//! - Every successful `subscribe_scroll` is matched by exactly one
//!   `unsubscribe_scroll` from the owning controller.
//! - Hosts deliver events to the controller on the single UI thread; they
//!   never call back into the controller from inside a trait method.

pub mod memory;

use crate::model::section::{SectionBounds, SectionId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Handle of one scroll/resize listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Layout, scroll and event-subscription primitives of the rendering host.
pub trait PageHost {
    /// Current vertical scroll offset of the document in CSS pixels.
    fn scroll_offset(&self) -> f64;

    /// Viewport-relative box of the section element, `None` when missing.
    fn section_bounds(&self, id: &SectionId) -> Option<SectionBounds>;

    /// Requests a smooth scroll to the section element.
    ///
    /// Returns `false` when the element does not exist.
    fn scroll_into_view(&self, id: &SectionId) -> bool;

    /// Starts delivering scroll and resize notifications.
    fn subscribe_scroll(&mut self) -> Result<ListenerId, HostError>;

    /// Stops a listener registered by `subscribe_scroll`.
    fn unsubscribe_scroll(&mut self, listener: ListenerId);

    /// Starts delivering intersection signals for one section.
    fn observe_section(&mut self, id: &SectionId, amount: f64) -> Result<(), HostError>;

    /// Stops intersection signals for one section. Unknown ids are ignored.
    fn unobserve_section(&mut self, id: &SectionId);
}

impl<T: PageHost + ?Sized> PageHost for &mut T {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn section_bounds(&self, id: &SectionId) -> Option<SectionBounds> {
        (**self).section_bounds(id)
    }

    fn scroll_into_view(&self, id: &SectionId) -> bool {
        (**self).scroll_into_view(id)
    }

    fn subscribe_scroll(&mut self) -> Result<ListenerId, HostError> {
        (**self).subscribe_scroll()
    }

    fn unsubscribe_scroll(&mut self, listener: ListenerId) {
        (**self).unsubscribe_scroll(listener)
    }

    fn observe_section(&mut self, id: &SectionId, amount: f64) -> Result<(), HostError> {
        (**self).observe_section(id, amount)
    }

    fn unobserve_section(&mut self, id: &SectionId) {
        (**self).unobserve_section(id)
    }
}

/// Visibility notification for one observed section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionSignal {
    pub section: SectionId,
    pub is_intersecting: bool,
    /// Visible fraction of the section's area, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionSignal {
    pub fn new(section: SectionId, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            section,
            is_intersecting,
            ratio,
        }
    }

    /// Returns whether this signal satisfies a reveal threshold.
    pub fn meets(&self, amount: f64) -> bool {
        self.is_intersecting && self.ratio >= amount
    }
}

/// Event delivered by the host to the page controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    Scroll,
    Resize,
    Intersection(IntersectionSignal),
}

/// Host primitive failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    Unavailable(&'static str),
    Subscription(String),
}

impl Display for HostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(what) => write!(f, "host primitive unavailable: {what}"),
            Self::Subscription(message) => write!(f, "host subscription failed: {message}"),
        }
    }
}

impl Error for HostError {}

#[cfg(test)]
mod tests {
    use super::{HostEvent, IntersectionSignal};
    use crate::model::section::SectionId;

    #[test]
    fn signal_meets_requires_intersection_and_ratio() {
        let id = SectionId::parse("about").unwrap();
        assert!(IntersectionSignal::new(id.clone(), true, 0.3).meets(0.3));
        assert!(!IntersectionSignal::new(id.clone(), true, 0.29).meets(0.3));
        assert!(!IntersectionSignal::new(id, false, 0.9).meets(0.3));
    }

    #[test]
    fn host_event_uses_type_tag() {
        let event: HostEvent = serde_json::from_str(
            r#"{"type":"intersection","section":"skills","is_intersecting":true,"ratio":0.5}"#,
        )
        .expect("intersection event parses");
        assert!(matches!(event, HostEvent::Intersection(ref signal) if signal.ratio == 0.5));

        let event: HostEvent = serde_json::from_str(r#"{"type":"scroll"}"#).unwrap();
        assert_eq!(event, HostEvent::Scroll);
    }
}
