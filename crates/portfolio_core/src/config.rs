//! Page behaviour configuration.
//!
//! # Responsibility
//! - Hold every tunable constant of the trackers, typewriter and contact stub.
//! - Parse host-supplied JSON overrides and validate them before mount.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object yields `PageConfig::default()`.
//! - Pixel values are finite and non-negative.
//! - Reveal amounts lie in `(0, 1]` and reveal section ids are unique.

use crate::model::section::SectionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Scroll offset beyond which the navigation chrome switches style.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;
/// Distance from the viewport top of the active-section probe line.
pub const DEFAULT_ACTIVE_PROBE_PX: f64 = 100.0;
pub const DEFAULT_TYPEWRITER_TICK_MS: u32 = 100;
pub const DEFAULT_TYPEWRITER_HOLD_MS: u32 = 2_000;
pub const DEFAULT_CONTACT_DELAY_MS: u32 = 2_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub threshold_px: f64,
    pub probe_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            probe_px: DEFAULT_ACTIVE_PROBE_PX,
        }
    }
}

/// Reveal observation for one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealSectionConfig {
    pub id: SectionId,
    /// Fraction of the section that must be visible before it reveals.
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub sections: Vec<RevealSectionConfig>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        let section = |id: &'static str, amount: f64| RevealSectionConfig {
            id: SectionId::from_static(id),
            amount,
        };
        Self {
            sections: vec![
                section("about", 0.3),
                section("projects", 0.2),
                section("skills", 0.2),
                section("contact", 0.2),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub tick_ms: u32,
    pub hold_ms: u32,
    pub phrases: Vec<String>,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TYPEWRITER_TICK_MS,
            hold_ms: DEFAULT_TYPEWRITER_HOLD_MS,
            phrases: ["Web Developer", "Graphic Designer", "UI-UX Designer"]
                .iter()
                .map(|phrase| phrase.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub simulated_delay_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: DEFAULT_CONTACT_DELAY_MS,
        }
    }
}

/// Complete page behaviour configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub typewriter: TypewriterConfig,
    pub contact: ContactConfig,
}

impl PageConfig {
    /// Parses a JSON override document and validates the result.
    ///
    /// Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str::<Self>(raw)
            .map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates cross-field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_pixels("scroll.threshold_px", self.scroll.threshold_px)?;
        require_pixels("scroll.probe_px", self.scroll.probe_px)?;

        let mut seen = BTreeSet::new();
        for section in &self.reveal.sections {
            if !(section.amount > 0.0 && section.amount <= 1.0) {
                return Err(ConfigError::InvalidRevealAmount {
                    section: section.id.clone(),
                    amount: section.amount,
                });
            }
            if !seen.insert(&section.id) {
                return Err(ConfigError::DuplicateRevealSection(section.id.clone()));
            }
        }

        if self.typewriter.tick_ms == 0 {
            return Err(ConfigError::ZeroTypewriterTick);
        }
        if self.typewriter.phrases.is_empty() {
            return Err(ConfigError::MissingPhrases);
        }
        Ok(())
    }

    /// Looks up the reveal amount configured for one section.
    pub fn reveal_amount(&self, id: &SectionId) -> Option<f64> {
        self.reveal
            .sections
            .iter()
            .find(|section| &section.id == id)
            .map(|section| section.amount)
    }
}

/// Configuration parse/validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    InvalidPixels { field: &'static str, value: f64 },
    InvalidRevealAmount { section: SectionId, amount: f64 },
    DuplicateRevealSection(SectionId),
    ZeroTypewriterTick,
    MissingPhrases,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid page config: {message}"),
            Self::InvalidPixels { field, value } => {
                write!(f, "`{field}` must be a finite non-negative pixel value, got {value}")
            }
            Self::InvalidRevealAmount { section, amount } => write!(
                f,
                "reveal amount for `{section}` must be in (0, 1], got {amount}"
            ),
            Self::DuplicateRevealSection(section) => {
                write!(f, "reveal section declared twice: {section}")
            }
            Self::ZeroTypewriterTick => write!(f, "typewriter.tick_ms must be greater than zero"),
            Self::MissingPhrases => write!(f, "typewriter.phrases must not be empty"),
        }
    }
}

impl Error for ConfigError {}

fn require_pixels(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidPixels { field, value })
    }
}
