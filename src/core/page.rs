use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{SplashError, SplashResult};

/// An in-page anchor as registered at page-ready time.
///
/// `fragment` is the target element id (href portion after `#`). Only
/// anchors carrying the page-scroll marker get their clicks intercepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageAnchor {
    pub id: String,
    pub fragment: String,
    pub page_scroll: bool,
}

impl PageAnchor {
    /// Anchor carrying the page-scroll marker.
    #[must_use]
    pub fn marked(id: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fragment: normalize_fragment(fragment.into()),
            page_scroll: true,
        }
    }

    /// Anchor without the marker; clicks fall through to default navigation.
    #[must_use]
    pub fn unmarked(id: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fragment: normalize_fragment(fragment.into()),
            page_scroll: false,
        }
    }
}

fn normalize_fragment(raw: String) -> String {
    match raw.strip_prefix('#') {
        Some(stripped) => stripped.to_owned(),
        None => raw,
    }
}

/// Static description of the page the engine drives.
///
/// Replaces live DOM lookups: navbar presence, content sections with their
/// vertical offsets (one marked as the intro), and the registered anchors.
/// Section insertion order is preserved; re-inserting an id replaces its
/// offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageModel {
    #[serde(default = "default_navbar_present")]
    navbar_present: bool,
    #[serde(default = "default_intro_section_id")]
    intro_section_id: String,
    #[serde(default)]
    sections: IndexMap<String, f64>,
    #[serde(default)]
    anchors: Vec<PageAnchor>,
}

impl PageModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            navbar_present: default_navbar_present(),
            intro_section_id: default_intro_section_id(),
            sections: IndexMap::new(),
            anchors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_navbar(mut self, present: bool) -> Self {
        self.navbar_present = present;
        self
    }

    #[must_use]
    pub fn with_intro_section_id(mut self, id: impl Into<String>) -> Self {
        self.intro_section_id = id.into();
        self
    }

    #[must_use]
    pub fn with_section(mut self, id: impl Into<String>, top_px: f64) -> Self {
        self.sections.insert(id.into(), top_px);
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: PageAnchor) -> Self {
        self.anchors.push(anchor);
        self
    }

    pub fn validate(&self) -> SplashResult<()> {
        if self.intro_section_id.is_empty() {
            return Err(SplashError::InvalidData(
                "intro section id must not be empty".to_owned(),
            ));
        }

        for (id, top_px) in &self.sections {
            if id.is_empty() {
                return Err(SplashError::InvalidData(
                    "section id must not be empty".to_owned(),
                ));
            }
            if !top_px.is_finite() {
                return Err(SplashError::InvalidData(format!(
                    "section `{id}` top offset must be finite"
                )));
            }
        }

        for anchor in &self.anchors {
            if anchor.id.is_empty() {
                return Err(SplashError::InvalidData(
                    "anchor id must not be empty".to_owned(),
                ));
            }
            if anchor.fragment.is_empty() {
                return Err(SplashError::InvalidData(format!(
                    "anchor `{}` fragment must not be empty",
                    anchor.id
                )));
            }
            let duplicates = self
                .anchors
                .iter()
                .filter(|other| other.id == anchor.id)
                .count();
            if duplicates > 1 {
                return Err(SplashError::InvalidData(format!(
                    "duplicate anchor id `{}`",
                    anchor.id
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn has_navbar(&self) -> bool {
        self.navbar_present
    }

    #[must_use]
    pub fn intro_section_id(&self) -> &str {
        &self.intro_section_id
    }

    #[must_use]
    pub fn is_intro(&self, section_id: &str) -> bool {
        self.intro_section_id == section_id
    }

    #[must_use]
    pub fn section_top(&self, section_id: &str) -> Option<f64> {
        self.sections.get(section_id).copied()
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    #[must_use]
    pub fn anchor(&self, anchor_id: &str) -> Option<&PageAnchor> {
        self.anchors.iter().find(|anchor| anchor.id == anchor_id)
    }

    #[must_use]
    pub fn anchors(&self) -> &[PageAnchor] {
        &self.anchors
    }
}

impl Default for PageModel {
    fn default() -> Self {
        Self::new()
    }
}

fn default_navbar_present() -> bool {
    true
}

fn default_intro_section_id() -> String {
    "intro".to_owned()
}
