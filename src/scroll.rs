//! Anchor navigation targets and scroll-linked page chrome.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::NAV_SHADOW;

/// Target id of a same-page anchor, or `None` for `#` and non-fragment links.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that puts a section's top just below the fixed header.
#[must_use]
pub fn scroll_top_for(section_top: f64, header_clearance: f64) -> f64 {
    section_top - header_clearance
}

/// Scroll-indicator opacity for the current offset.
#[must_use]
pub fn indicator_opacity(scroll_y: f64, fade_threshold: f64) -> &'static str {
    if scroll_y > fade_threshold { "0" } else { "1" }
}

/// Navigation box shadow for the current offset.
#[must_use]
pub fn nav_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > 0.0 { NAV_SHADOW } else { "none" }
}
