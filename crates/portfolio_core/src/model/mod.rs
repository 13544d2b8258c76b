//! Page domain model.
//!
//! # Responsibility
//! - Define the section identity, navigation and content shapes shared by
//!   trackers, services and host bindings.
//!
//! # Invariants
//! - Every tracked section is identified by a validated `SectionId`.
//! - Model values are immutable after mount; trackers own all mutable state.

pub mod content;
pub mod nav;
pub mod section;
