//! Shared numeric constants and fixed class names for the page controller.

// ── Layout ──────────────────────────────────────────────────────

/// Lookahead added to the scroll offset before picking the active section.
pub const SECTION_LOOKAHEAD_PX: f64 = 150.0;

/// Clearance subtracted from a section's top to keep it below the fixed header.
pub const HEADER_CLEARANCE_PX: f64 = 80.0;

/// Viewport width at or above which the desktop navigation is shown.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

/// Scroll offset past which the scroll indicator fades out.
pub const INDICATOR_FADE_THRESHOLD_PX: f64 = 100.0;

/// Viewport-relative focus line used to find the section under the header.
pub const KEYBOARD_FOCUS_LINE_PX: f64 = 100.0;

// ── Timing ──────────────────────────────────────────────────────

/// Trailing-edge debounce window for resize handling.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// ── Classes ─────────────────────────────────────────────────────

/// Marker on the navigation link of the active section.
pub const ACTIVE_CLASS: &str = "active";

/// Added to every section at startup so the stylesheet can fade it in.
pub const FADE_IN_CLASS: &str = "fade-in-up";

/// One-way marker for elements that have scrolled into the reveal band.
pub const IN_VIEW_CLASS: &str = "in-view";

// ── Styles ──────────────────────────────────────────────────────

/// Navigation shadow while the page is scrolled.
pub const NAV_SHADOW: &str = "0 1px 3px rgba(0, 0, 0, 0.1)";
