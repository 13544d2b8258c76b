//! Section identity and layout geometry.
//!
//! # Responsibility
//! - Define the opaque `SectionId` every tracker keys its state on.
//! - Describe a section's viewport-relative vertical extent.
//!
//! # Invariants
//! - A `SectionId` is non-empty and limited to `[a-z0-9_-]`.
//! - `SectionBounds` is viewport-relative: `top` may be negative once the
//!   section has scrolled past the viewport top.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque identifier of one vertically stacked content section.
///
/// Matches the DOM element id the section is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    /// Parses and validates one section identifier.
    ///
    /// Surrounding whitespace is trimmed; casing is preserved and must
    /// already be lowercase.
    pub fn parse(value: &str) -> Result<Self, SectionIdError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(SectionIdError::Empty);
        }
        if !is_valid_section_id(normalized) {
            return Err(SectionIdError::InvalidCharacters(normalized.to_string()));
        }
        Ok(Self(normalized.to_string()))
    }

    /// Builds an id from a compile-time literal known to be valid.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(is_valid_section_id(value));
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SectionId {
    type Error = SectionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SectionId> for String {
    fn from(value: SectionId) -> Self {
        value.0
    }
}

/// Section id validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionIdError {
    Empty,
    InvalidCharacters(String),
}

impl Display for SectionIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "section id must not be empty"),
            Self::InvalidCharacters(value) => write!(
                f,
                "section id `{value}` is invalid; expected lowercase ascii, digits, `_` or `-`"
            ),
        }
    }
}

impl Error for SectionIdError {}

/// Vertical extent of a section relative to the viewport top, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Returns whether the horizontal probe line at `probe_px` crosses this box.
    ///
    /// Both edges are inclusive.
    pub fn contains(&self, probe_px: f64) -> bool {
        self.top <= probe_px && self.bottom >= probe_px
    }
}

fn is_valid_section_id(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::{SectionBounds, SectionId, SectionIdError};

    #[test]
    fn parse_trims_and_accepts_lowercase_ids() {
        let id = SectionId::parse("  projects ").expect("valid id");
        assert_eq!(id.as_str(), "projects");
        assert_eq!(id.to_string(), "projects");
    }

    #[test]
    fn parse_rejects_empty_and_uppercase_ids() {
        assert_eq!(SectionId::parse("   "), Err(SectionIdError::Empty));
        assert_eq!(
            SectionId::parse("About"),
            Err(SectionIdError::InvalidCharacters("About".to_string()))
        );
        assert!(SectionId::parse("#home").is_err());
    }

    #[test]
    fn bounds_contains_is_inclusive_on_both_edges() {
        let bounds = SectionBounds::new(100.0, 200.0);
        assert!(bounds.contains(100.0));
        assert!(bounds.contains(200.0));
        assert!(!bounds.contains(99.5));
        assert!(!bounds.contains(200.5));
    }

    #[test]
    fn section_id_deserialization_validates() {
        let ok: SectionId = serde_json::from_str("\"skills\"").expect("valid json id");
        assert_eq!(ok.as_str(), "skills");

        let err = serde_json::from_str::<SectionId>("\"Skills!\"").unwrap_err();
        assert!(err.to_string().contains("invalid"), "unexpected error: {err}");
    }
}
