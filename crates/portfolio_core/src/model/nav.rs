//! Navigation bar entries.
//!
//! # Invariants
//! - Navigation items are created once at mount and never mutated.
//! - Only `NavTarget::Section` entries participate in active-section tracking;
//!   download links are static anchors.

use crate::model::section::SectionId;
use serde::{Deserialize, Serialize};

/// Resume download path linked from the navigation bar and hero.
pub const RESUME_DOWNLOAD_PATH: &str = "/resume.pdf";

/// Destination of one navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NavTarget {
    /// In-page anchor scrolled to smoothly.
    Section(SectionId),
    /// Static file served for download.
    Download(String),
}

/// One labelled navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub target: NavTarget,
}

impl NavItem {
    pub fn section(label: impl Into<String>, id: SectionId) -> Self {
        Self {
            label: label.into(),
            target: NavTarget::Section(id),
        }
    }

    pub fn download(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: NavTarget::Download(href.into()),
        }
    }

    /// Returns the tracked section, or `None` for download links.
    pub fn section_id(&self) -> Option<&SectionId> {
        match &self.target {
            NavTarget::Section(id) => Some(id),
            NavTarget::Download(_) => None,
        }
    }
}

/// Returns the page's navigation entries in declaration order.
pub fn default_nav_items() -> Vec<NavItem> {
    let section =
        |label: &str, id: &'static str| NavItem::section(label, SectionId::from_static(id));
    vec![
        section("Home", "home"),
        section("About", "about"),
        section("Projects", "projects"),
        section("Skills", "skills"),
        NavItem::download("Resume", RESUME_DOWNLOAD_PATH),
        section("Contact", "contact"),
    ]
}

/// Collects tracked section ids in declaration order.
pub fn tracked_sections(items: &[NavItem]) -> Vec<SectionId> {
    items
        .iter()
        .filter_map(NavItem::section_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{default_nav_items, tracked_sections, NavTarget, RESUME_DOWNLOAD_PATH};

    #[test]
    fn default_items_keep_declaration_order() {
        let labels = default_nav_items()
            .into_iter()
            .map(|item| item.label)
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["Home", "About", "Projects", "Skills", "Resume", "Contact"]
        );
    }

    #[test]
    fn tracked_sections_skip_download_links() {
        let items = default_nav_items();
        let ids = tracked_sections(&items)
            .into_iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["home", "about", "projects", "skills", "contact"]);

        let resume = items
            .iter()
            .find(|item| item.label == "Resume")
            .expect("resume item");
        assert_eq!(
            resume.target,
            NavTarget::Download(RESUME_DOWNLOAD_PATH.to_string())
        );
    }

    #[test]
    fn nav_target_serializes_with_kind_tag() {
        let items = default_nav_items();
        let json = serde_json::to_value(&items[0]).expect("serialize nav item");
        assert_eq!(json["label"], "Home");
        assert_eq!(json["target"]["kind"], "section");
        assert_eq!(json["target"]["value"], "home");
    }
}
