//! JSON use-case API shared by the browser bindings.
//!
//! # Responsibility
//! - Shape core state into the JSON payloads handed to page scripts.
//! - Parse optional config JSON with core defaults.
//!
//! # Invariants
//! - Functions here never panic; failures are returned as UTF-8 messages.
//! - Payload field names are camelCase and stable.
//!
//! Everything in this module is target independent so it runs under the
//! native test harness.

use portfolio_core::{
    core_version as core_version_inner, NavItem, NavTarget, PageConfig, RevealState, ScrollState,
    SiteContent,
};
use serde::Serialize;

/// Snapshot pushed to `onChange` listeners and returned by `scrollState()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub is_past_threshold: bool,
    pub active_section: Option<String>,
    pub revealed: Vec<String>,
}

impl PageSnapshot {
    pub fn new(scroll: &ScrollState, reveal: &RevealState) -> Self {
        Self {
            is_past_threshold: scroll.is_past_threshold,
            active_section: scroll
                .active_section
                .as_ref()
                .map(|id| id.as_str().to_string()),
            revealed: reveal
                .iter()
                .filter(|(_, revealed)| *revealed)
                .map(|(id, _)| id.as_str().to_string())
                .collect(),
        }
    }
}

/// Nav entry as rendered by the page: either an in-page anchor or a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub label: String,
    pub href: String,
    pub section: Option<String>,
    pub download: bool,
}

impl From<&NavItem> for NavEntry {
    fn from(item: &NavItem) -> Self {
        match &item.target {
            NavTarget::Section(id) => Self {
                label: item.label.clone(),
                href: format!("#{id}"),
                section: Some(id.as_str().to_string()),
                download: false,
            },
            NavTarget::Download(path) => Self {
                label: item.label.clone(),
                href: path.clone(),
                section: None,
                download: true,
            },
        }
    }
}

pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Parses optional config JSON; blank or missing input yields defaults.
pub fn parse_config(raw: Option<&str>) -> Result<PageConfig, String> {
    match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => PageConfig::from_json(raw).map_err(|err| err.to_string()),
        _ => Ok(PageConfig::default()),
    }
}

pub fn default_config_json() -> Result<String, String> {
    to_json(&PageConfig::default())
}

pub fn site_content_json() -> Result<String, String> {
    let content = SiteContent::default();
    content.validate().map_err(|err| err.to_string())?;
    to_json(&content)
}

pub fn nav_items_json(items: &[NavItem]) -> Result<String, String> {
    let entries = items.iter().map(NavEntry::from).collect::<Vec<_>>();
    to_json(&entries)
}

pub fn snapshot_json(scroll: &ScrollState, reveal: &RevealState) -> Result<String, String> {
    to_json(&PageSnapshot::new(scroll, reveal))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|err| format!("failed to encode payload: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, default_config_json, nav_items_json, parse_config, site_content_json,
        snapshot_json,
    };
    use portfolio_core::{default_nav_items, RevealTrigger, ScrollState, SectionId};
    use serde_json::Value;

    fn id(value: &str) -> SectionId {
        SectionId::parse(value).unwrap()
    }

    #[test]
    fn core_version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn parse_config_defaults_on_blank_input() {
        let config = parse_config(None).expect("missing config should default");
        assert_eq!(config.scroll.threshold_px, 50.0);
        let config = parse_config(Some("  ")).expect("blank config should default");
        assert_eq!(config.scroll.probe_px, 100.0);
    }

    #[test]
    fn parse_config_reports_invalid_values() {
        let error = parse_config(Some(r#"{"scroll":{"threshold_px":-1}}"#))
            .expect_err("negative threshold must be rejected");
        assert!(error.contains("threshold_px"));
    }

    #[test]
    fn default_config_round_trips_through_parse() {
        let json = default_config_json().expect("default config should encode");
        let config = parse_config(Some(&json)).expect("encoded config should parse");
        assert_eq!(config.reveal.sections.len(), 4);
    }

    #[test]
    fn nav_items_render_anchors_and_download() {
        let json = nav_items_json(&default_nav_items()).expect("nav items should encode");
        let entries: Value = serde_json::from_str(&json).expect("valid json");
        let entries = entries.as_array().expect("array payload");
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0]["href"], "#home");
        assert_eq!(entries[4]["label"], "Resume");
        assert_eq!(entries[4]["href"], "/resume.pdf");
        assert_eq!(entries[4]["download"], true);
        assert!(entries[4]["section"].is_null());
    }

    #[test]
    fn snapshot_lists_only_revealed_sections() {
        let mut reveal = RevealTrigger::new();
        reveal.register(id("about"), 0.3);
        reveal.register(id("skills"), 0.2);
        reveal.apply(&portfolio_core::IntersectionSignal::new(id("skills"), true, 0.5));
        let scroll = ScrollState {
            is_past_threshold: true,
            active_section: Some(id("skills")),
        };

        let json = snapshot_json(&scroll, reveal.state()).expect("snapshot should encode");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["isPastThreshold"], true);
        assert_eq!(value["activeSection"], "skills");
        assert_eq!(value["revealed"], serde_json::json!(["skills"]));
    }

    #[test]
    fn site_content_exports_profile() {
        let json = site_content_json().expect("default content should validate");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        assert!(value["profile"]["roles"].as_array().is_some());
    }
}
