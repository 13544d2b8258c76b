//! Page-lifetime controller.
//!
//! # Responsibility
//! - Own `ScrollState` and `RevealState` from mount to unmount.
//! - Translate host events into tracker updates.
//! - Hold the scroll listener and section observations as scoped resources.
//!
//! # Invariants
//! - Tracked section ids are unique; duplicates fail the mount.
//! - The scroll listener is released exactly once, by `unmount` or on drop,
//!   including when the controller is dropped during unwinding.
//! - A revealed section is unobserved immediately and never observed again.
//! - `scroll_to_section` never mutates tracker state.

use crate::config::PageConfig;
use crate::host::{HostError, HostEvent, IntersectionSignal, ListenerId, PageHost};
use crate::model::nav::{tracked_sections, NavItem};
use crate::model::section::SectionId;
use crate::tracker::reveal::{RevealOutcome, RevealState, RevealTrigger};
use crate::tracker::scroll::{ScrollState, ScrollTracker};
use log::{debug, info};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// What one host event changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageUpdate {
    pub scroll_changed: bool,
    pub revealed: bool,
}

impl PageUpdate {
    pub fn is_empty(&self) -> bool {
        !self.scroll_changed && !self.revealed
    }
}

/// Mount-time failures.
#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    DuplicateSection(SectionId),
    Host(HostError),
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateSection(id) => write!(f, "section id registered twice: {id}"),
            Self::Host(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateSection(_) => None,
            Self::Host(err) => Some(err),
        }
    }
}

impl From<HostError> for PageError {
    fn from(value: HostError) -> Self {
        Self::Host(value)
    }
}

pub type PageResult<T> = Result<T, PageError>;

/// Single owner of the page's navigation and reveal state.
pub struct PageController<H: PageHost> {
    host: H,
    nav_items: Vec<NavItem>,
    scroll: ScrollTracker,
    reveal: RevealTrigger,
    listener: Option<ListenerId>,
}

impl<H: PageHost> PageController<H> {
    /// Mounts the controller: validates sections, subscribes the scroll
    /// listener and starts observing every reveal section.
    ///
    /// # Errors
    /// - `PageError::DuplicateSection` when two nav items target one section.
    /// - `PageError::Host` when the host refuses a subscription; anything
    ///   acquired before the failure is released.
    pub fn mount(host: H, config: &PageConfig, nav_items: Vec<NavItem>) -> PageResult<Self> {
        let sections = tracked_sections(&nav_items);
        let mut seen = BTreeSet::new();
        for id in &sections {
            if !seen.insert(id) {
                return Err(PageError::DuplicateSection(id.clone()));
            }
        }

        let mut reveal = RevealTrigger::new();
        for section in &config.reveal.sections {
            reveal.register(section.id.clone(), section.amount);
        }

        let mut controller = Self {
            host,
            nav_items,
            scroll: ScrollTracker::new(config.scroll.clone(), sections),
            reveal,
            listener: None,
        };

        controller.listener = Some(controller.host.subscribe_scroll()?);
        for section in &config.reveal.sections {
            controller
                .host
                .observe_section(&section.id, section.amount)?;
        }

        info!(
            "event=page_mount module=page status=ok sections={} reveal_sections={}",
            controller.scroll.sections().len(),
            config.reveal.sections.len()
        );
        Ok(controller)
    }

    /// Dispatches one host event.
    pub fn handle_event(&mut self, event: &HostEvent) -> PageUpdate {
        match event {
            HostEvent::Scroll | HostEvent::Resize => PageUpdate {
                scroll_changed: self.on_scroll(),
                revealed: false,
            },
            HostEvent::Intersection(signal) => PageUpdate {
                scroll_changed: false,
                revealed: self.on_intersection(signal),
            },
        }
    }

    /// Recomputes `ScrollState`. Returns `true` when it changed.
    pub fn on_scroll(&mut self) -> bool {
        self.scroll.update(&self.host)
    }

    /// Applies one visibility signal. Returns `true` when a section revealed.
    pub fn on_intersection(&mut self, signal: &IntersectionSignal) -> bool {
        match self.reveal.apply(signal) {
            RevealOutcome::Revealed => {
                self.host.unobserve_section(&signal.section);
                true
            }
            RevealOutcome::AlreadyRevealed
            | RevealOutcome::BelowThreshold
            | RevealOutcome::Unregistered => false,
        }
    }

    /// Requests a smooth scroll to `id`.
    ///
    /// Returns `false`, without error, when the section element is missing.
    pub fn scroll_to_section(&self, id: &SectionId) -> bool {
        let found = self.host.scroll_into_view(id);
        if !found {
            debug!("event=scroll_to_section module=page status=skip reason=missing section={id}");
        }
        found
    }

    pub fn scroll_state(&self) -> &ScrollState {
        self.scroll.state()
    }

    pub fn reveal_state(&self) -> &RevealState {
        self.reveal.state()
    }

    pub fn is_revealed(&self, id: &SectionId) -> bool {
        self.reveal.is_revealed(id)
    }

    pub fn nav_items(&self) -> &[NavItem] {
        &self.nav_items
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Releases the scroll listener and any outstanding observations.
    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        self.host.unsubscribe_scroll(listener);
        for id in self.reveal.state().pending() {
            self.host.unobserve_section(&id);
        }
        info!("event=page_unmount module=page status=ok");
    }
}

impl<H: PageHost> Drop for PageController<H> {
    fn drop(&mut self) {
        self.release();
    }
}
