//! Page configuration: element ids, selectors, and tuning values.
//!
//! SYSTEM CONTEXT
//! ==============
//! The markup is owned by the site, not by this crate, so every identifier the
//! controller looks up is read from here. A page may override any subset of
//! fields by embedding JSON in `<script type="application/json" id="site-config">`;
//! omitted fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DESKTOP_BREAKPOINT_PX, HEADER_CLEARANCE_PX, INDICATOR_FADE_THRESHOLD_PX, KEYBOARD_FOCUS_LINE_PX,
    RESIZE_DEBOUNCE_MS, SECTION_LOOKAHEAD_PX,
};

/// Id of the optional inline JSON element carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Top-level controller configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub ids: ElementIds,
    pub selectors: Selectors,
    pub tuning: Tuning,
    /// Storage slot holding the explicit theme preference.
    pub storage_key: String,
    /// Intersection root margin for the reveal band.
    pub reveal_root_margin: String,
    pub reveal_threshold: f64,
    /// Images fetched eagerly at startup.
    pub preload_images: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            selectors: Selectors::default(),
            tuning: Tuning::default(),
            storage_key: "theme".to_owned(),
            reveal_root_margin: "-20% 0px -20% 0px".to_owned(),
            reveal_threshold: 0.0,
            preload_images: vec!["imgs/professional-male-data-scientist-engineer-headshot-server-room.jpg".to_owned()],
        }
    }
}

impl SiteConfig {
    /// Parse overrides from inline JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when `raw` is not a valid
    /// JSON object of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Parse overrides, falling back to defaults on missing or malformed input.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }
}

/// Ids of the singleton page elements.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub navigation: String,
    pub nav_toggle: String,
    pub nav_menu: String,
    pub scroll_indicator: String,
    pub theme_toggle: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            navigation: "navigation".to_owned(),
            nav_toggle: "nav-toggle".to_owned(),
            nav_menu: "nav-menu".to_owned(),
            scroll_indicator: "scroll-indicator".to_owned(),
            theme_toggle: "dark-mode-toggle".to_owned(),
        }
    }
}

/// CSS selectors for element groups.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_links: String,
    pub sections: String,
    pub toggle_segments: String,
    pub anchors: String,
    pub social_links: String,
    pub email_links: String,
    pub animated: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_links: ".nav-link".to_owned(),
            sections: "section[id]".to_owned(),
            toggle_segments: "span".to_owned(),
            anchors: "a[href^=\"#\"]".to_owned(),
            social_links: ".social-link".to_owned(),
            email_links: "a[href^=\"mailto:\"]".to_owned(),
            animated: ".fade-in-up, .project-card, .education-item, .highlight-card, .timeline-item".to_owned(),
        }
    }
}

/// Numeric tuning values, in CSS pixels and milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub section_lookahead: f64,
    pub header_clearance: f64,
    pub desktop_breakpoint: f64,
    pub indicator_fade_threshold: f64,
    pub keyboard_focus_line: f64,
    pub resize_debounce_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            section_lookahead: SECTION_LOOKAHEAD_PX,
            header_clearance: HEADER_CLEARANCE_PX,
            desktop_breakpoint: DESKTOP_BREAKPOINT_PX,
            indicator_fade_threshold: INDICATOR_FADE_THRESHOLD_PX,
            keyboard_focus_line: KEYBOARD_FOCUS_LINE_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}
