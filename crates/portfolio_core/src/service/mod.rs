//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate trackers and host primitives into page-level use cases.
//! - Keep browser/CLI bindings decoupled from tracker internals.

pub mod contact_form;
pub mod page_controller;
