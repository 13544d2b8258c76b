//! One-way reveal flags for scroll-in animations.
//!
//! # Responsibility
//! - Track, per registered section, whether its entrance animation may start.
//!
//! # Invariants
//! - `revealed` flips false→true at most once per section and never reverts.
//! - Signals for already revealed or unregistered sections are no-ops.

use crate::host::IntersectionSignal;
use crate::model::section::SectionId;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reveal flags keyed by section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealState {
    entries: BTreeMap<SectionId, bool>,
}

impl RevealState {
    /// Returns the flag for `id`; unregistered sections read as not revealed.
    pub fn is_revealed(&self, id: &SectionId) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    pub fn is_registered(&self, id: &SectionId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SectionId, bool)> {
        self.entries.iter().map(|(id, revealed)| (id, *revealed))
    }

    /// Sections that have not revealed yet.
    pub fn pending(&self) -> Vec<SectionId> {
        self.iter()
            .filter(|(_, revealed)| !revealed)
            .map(|(id, _)| id.clone())
            .collect()
    }
}

/// Result of feeding one signal to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The section just revealed; the caller should stop observing it.
    Revealed,
    AlreadyRevealed,
    BelowThreshold,
    Unregistered,
}

/// Owner of `RevealState`.
#[derive(Debug, Clone, Default)]
pub struct RevealTrigger {
    amounts: BTreeMap<SectionId, f64>,
    state: RevealState,
}

impl RevealTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a section with its reveal amount. Re-registering keeps the
    /// existing flag and only replaces the amount.
    pub fn register(&mut self, id: SectionId, amount: f64) {
        self.state.entries.entry(id.clone()).or_insert(false);
        self.amounts.insert(id, amount);
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    pub fn is_revealed(&self, id: &SectionId) -> bool {
        self.state.is_revealed(id)
    }

    pub fn amount(&self, id: &SectionId) -> Option<f64> {
        self.amounts.get(id).copied()
    }

    /// Applies one intersection signal.
    pub fn apply(&mut self, signal: &IntersectionSignal) -> RevealOutcome {
        let Some(amount) = self.amounts.get(&signal.section).copied() else {
            debug!(
                "event=reveal_signal module=reveal status=skip reason=unregistered section={}",
                signal.section
            );
            return RevealOutcome::Unregistered;
        };
        if self.state.is_revealed(&signal.section) {
            return RevealOutcome::AlreadyRevealed;
        }
        if !signal.meets(amount) {
            return RevealOutcome::BelowThreshold;
        }

        self.state.entries.insert(signal.section.clone(), true);
        info!(
            "event=section_revealed module=reveal status=ok section={} ratio={:.3}",
            signal.section, signal.ratio
        );
        RevealOutcome::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::{RevealOutcome, RevealTrigger};
    use crate::host::IntersectionSignal;
    use crate::model::section::SectionId;

    fn id(value: &str) -> SectionId {
        SectionId::parse(value).unwrap()
    }

    #[test]
    fn register_starts_unrevealed() {
        let mut trigger = RevealTrigger::new();
        trigger.register(id("about"), 0.3);
        assert!(trigger.state().is_registered(&id("about")));
        assert!(!trigger.is_revealed(&id("about")));
        assert_eq!(trigger.state().pending(), vec![id("about")]);
    }

    #[test]
    fn reregister_does_not_reset_revealed_flag() {
        let mut trigger = RevealTrigger::new();
        trigger.register(id("about"), 0.3);
        trigger.apply(&IntersectionSignal::new(id("about"), true, 0.5));
        trigger.register(id("about"), 0.9);
        assert!(trigger.is_revealed(&id("about")));
        assert_eq!(trigger.amount(&id("about")), Some(0.9));
    }

    #[test]
    fn apply_reports_each_outcome() {
        let mut trigger = RevealTrigger::new();
        trigger.register(id("skills"), 0.2);

        let below = IntersectionSignal::new(id("skills"), true, 0.1);
        let above = IntersectionSignal::new(id("skills"), true, 0.2);
        let unknown = IntersectionSignal::new(id("footer"), true, 1.0);

        assert_eq!(trigger.apply(&below), RevealOutcome::BelowThreshold);
        assert_eq!(trigger.apply(&above), RevealOutcome::Revealed);
        assert_eq!(trigger.apply(&below), RevealOutcome::AlreadyRevealed);
        assert_eq!(trigger.apply(&unknown), RevealOutcome::Unregistered);
        assert!(!trigger.is_revealed(&id("footer")));
    }
}
