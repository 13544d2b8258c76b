//! Scroll and visibility trackers.
//!
//! # Responsibility
//! - Derive navigation state from scroll position (`scroll`).
//! - Gate entrance animations on first visibility (`reveal`).
//!
//! # Invariants
//! - The trackers are independent; neither reads the other's state.
//! - Only the owning page controller mutates tracker state.

pub mod reveal;
pub mod scroll;
