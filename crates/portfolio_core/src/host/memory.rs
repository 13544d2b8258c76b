//! In-memory page host.
//!
//! Lays sections out in document coordinates and derives viewport-relative
//! boxes and intersection ratios from a settable scroll offset. Used by the
//! trace replayer and by tests.

use crate::host::{HostError, IntersectionSignal, ListenerId, PageHost};
use crate::model::section::{SectionBounds, SectionId};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

/// One section placed in document coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutSection {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug)]
pub struct MemoryHost {
    viewport_height: f64,
    offset: Cell<f64>,
    sections: Vec<LaidOutSection>,
    listeners: BTreeSet<u64>,
    next_listener: u64,
    observed: BTreeMap<SectionId, f64>,
    scroll_requests: RefCell<Vec<SectionId>>,
    refuse_subscriptions: bool,
}

impl MemoryHost {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            offset: Cell::new(0.0),
            sections: Vec::new(),
            listeners: BTreeSet::new(),
            next_listener: 1,
            observed: BTreeMap::new(),
            scroll_requests: RefCell::new(Vec::new()),
            refuse_subscriptions: false,
        }
    }

    /// Appends one section at a fixed document position.
    pub fn with_section(mut self, id: SectionId, top: f64, height: f64) -> Self {
        self.sections.push(LaidOutSection { id, top, height });
        self
    }

    /// Appends sections stacked back to back from the document top.
    pub fn with_stacked_sections(mut self, layout: &[(SectionId, f64)]) -> Self {
        let mut top = self
            .sections
            .last()
            .map(|section| section.top + section.height)
            .unwrap_or(0.0);
        for (id, height) in layout {
            self.sections.push(LaidOutSection {
                id: id.clone(),
                top,
                height: *height,
            });
            top += height;
        }
        self
    }

    /// Makes every later `subscribe_scroll` call fail.
    pub fn refusing_subscriptions(mut self) -> Self {
        self.refuse_subscriptions = true;
        self
    }

    pub fn set_offset(&self, offset: f64) {
        self.offset.set(offset.max(0.0));
    }

    /// Removes a section element, as if it were detached from the document.
    pub fn remove_section(&mut self, id: &SectionId) {
        self.sections.retain(|section| &section.id != id);
    }

    pub fn active_listeners(&self) -> usize {
        self.listeners.len()
    }

    pub fn observed_sections(&self) -> Vec<SectionId> {
        self.observed.keys().cloned().collect()
    }

    /// Sections requested through `scroll_into_view`, oldest first.
    pub fn scroll_requests(&self) -> Vec<SectionId> {
        self.scroll_requests.borrow().clone()
    }

    /// Computes one signal per observed section for the current offset.
    pub fn intersection_signals(&self) -> Vec<IntersectionSignal> {
        self.observed
            .keys()
            .filter_map(|id| {
                let section = self.find(id)?;
                let ratio = self.visible_ratio(section);
                Some(IntersectionSignal::new(id.clone(), ratio > 0.0, ratio))
            })
            .collect()
    }

    fn find(&self, id: &SectionId) -> Option<&LaidOutSection> {
        self.sections.iter().find(|section| &section.id == id)
    }

    fn visible_ratio(&self, section: &LaidOutSection) -> f64 {
        if section.height <= 0.0 {
            return 0.0;
        }
        let viewport_top = self.offset.get();
        let viewport_bottom = viewport_top + self.viewport_height;
        let overlap = (section.top + section.height).min(viewport_bottom)
            - section.top.max(viewport_top);
        overlap.max(0.0) / section.height
    }
}

impl PageHost for MemoryHost {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn section_bounds(&self, id: &SectionId) -> Option<SectionBounds> {
        let offset = self.offset.get();
        self.find(id).map(|section| {
            SectionBounds::new(section.top - offset, section.top + section.height - offset)
        })
    }

    fn scroll_into_view(&self, id: &SectionId) -> bool {
        let Some(top) = self.find(id).map(|section| section.top) else {
            return false;
        };
        self.scroll_requests.borrow_mut().push(id.clone());
        self.set_offset(top);
        true
    }

    fn subscribe_scroll(&mut self) -> Result<ListenerId, HostError> {
        if self.refuse_subscriptions {
            return Err(HostError::Subscription(
                "memory host refuses subscriptions".to_string(),
            ));
        }
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.insert(id);
        Ok(ListenerId(id))
    }

    fn unsubscribe_scroll(&mut self, listener: ListenerId) {
        self.listeners.remove(&listener.0);
    }

    fn observe_section(&mut self, id: &SectionId, amount: f64) -> Result<(), HostError> {
        self.observed.insert(id.clone(), amount);
        Ok(())
    }

    fn unobserve_section(&mut self, id: &SectionId) {
        self.observed.remove(id);
    }
}
