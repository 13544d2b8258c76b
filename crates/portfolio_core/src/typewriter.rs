//! Hero typewriter text.
//!
//! # Responsibility
//! - Cycle through role phrases, revealing one character per tick and holding
//!   the complete phrase before moving on.
//! - Issue timer requests the host schedules; the host feeds the token back.
//!
//! # Invariants
//! - At most one timer token is live per typewriter; issuing a new token
//!   invalidates the previous one, and stale tokens are ignored.
//! - The displayed text is always a prefix of the current phrase, measured in
//!   characters.
//! - The phrase index wraps modulo the phrase count.

use crate::config::TypewriterConfig;
use log::trace;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identity of one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A timer the host must schedule, firing `on_timer(token)` after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing { cursor: usize },
    Holding,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    tick_ms: u32,
    hold_ms: u32,
    phrase_index: usize,
    phase: Phase,
    displayed: String,
    generation: u64,
    live: Option<TimerToken>,
}

impl Typewriter {
    /// Creates a typewriter over the configured phrases.
    ///
    /// # Errors
    /// - `TypewriterError::NoPhrases` when the phrase list is empty.
    pub fn new(config: &TypewriterConfig) -> Result<Self, TypewriterError> {
        if config.phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        Ok(Self {
            phrases: config.phrases.clone(),
            tick_ms: config.tick_ms,
            hold_ms: config.hold_ms,
            phrase_index: 0,
            phase: Phase::Typing { cursor: 0 },
            displayed: String::new(),
            generation: 0,
            live: None,
        })
    }

    /// Starts (or restarts) typing the current phrase from its first character.
    pub fn start(&mut self) -> TimerRequest {
        self.displayed.clear();
        self.phase = Phase::Typing { cursor: 0 };
        self.schedule(self.tick_ms)
    }

    /// Advances the animation for a fired timer.
    ///
    /// Returns the next timer to schedule, or `None` when `token` is stale.
    pub fn on_timer(&mut self, token: TimerToken) -> Option<TimerRequest> {
        if self.live != Some(token) {
            trace!("event=typewriter_timer module=typewriter status=skip reason=stale");
            return None;
        }
        self.live = None;

        match self.phase {
            Phase::Typing { cursor } => {
                let phrase = &self.phrases[self.phrase_index];
                if cursor <= phrase.chars().count() {
                    self.displayed = phrase.chars().take(cursor).collect();
                    self.phase = Phase::Typing { cursor: cursor + 1 };
                    Some(self.schedule(self.tick_ms))
                } else {
                    self.phase = Phase::Holding;
                    Some(self.schedule(self.hold_ms))
                }
            }
            Phase::Holding => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.displayed.clear();
                self.phase = Phase::Typing { cursor: 0 };
                Some(self.schedule(self.tick_ms))
            }
        }
    }

    /// Invalidates the live timer, if any, and returns it for host cancellation.
    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.generation += 1;
        self.live.take()
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    pub fn live_timer(&self) -> Option<TimerToken> {
        self.live
    }

    fn schedule(&mut self, delay_ms: u32) -> TimerRequest {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.live = Some(token);
        TimerRequest { token, delay_ms }
    }
}

/// Typewriter construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    NoPhrases,
}

impl Display for TypewriterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPhrases => write!(f, "typewriter needs at least one phrase"),
        }
    }
}

impl Error for TypewriterError {}
