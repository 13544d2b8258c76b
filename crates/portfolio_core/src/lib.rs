//! Core page logic for the portfolio site.
//! This crate owns the navigation and reveal state; hosts only feed it events.

pub mod config;
pub mod host;
pub mod logging;
pub mod model;
pub mod service;
pub mod tracker;
pub mod typewriter;

pub use config::{ConfigError, PageConfig};
pub use host::memory::MemoryHost;
pub use host::{HostError, HostEvent, IntersectionSignal, ListenerId, PageHost};
#[cfg(not(target_arch = "wasm32"))]
pub use logging::{init_logging, logging_status};
pub use logging::{default_log_level, normalize_level};
pub use model::content::{ContentError, SiteContent};
pub use model::nav::{default_nav_items, NavItem, NavTarget};
pub use model::section::{SectionBounds, SectionId, SectionIdError};
pub use service::contact_form::{
    ContactField, ContactForm, ContactFormError, SubmissionTicket, Toast,
};
pub use service::page_controller::{PageController, PageError, PageResult, PageUpdate};
pub use tracker::reveal::{RevealOutcome, RevealState, RevealTrigger};
pub use tracker::scroll::{ScrollState, ScrollTracker};
pub use typewriter::{TimerRequest, TimerToken, Typewriter, TypewriterError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
