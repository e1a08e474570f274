//! Mobile navigation menu rendering.
//!
//! The menu is a two-state toggle. Opening shows the menu and folds the
//! three-bar icon into an "X"; closing restores both. Rendering is idempotent,
//! so it is safe to call with the current state at any time.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::page::Page;

/// Inline style edits for each icon bar while the menu is open.
pub const OPEN_SEGMENT_STYLES: [(&str, &str); 3] = [
    ("transform", "rotate(45deg) translate(6px, 6px)"),
    ("opacity", "0"),
    ("transform", "rotate(-45deg) translate(6px, -6px)"),
];

/// Elements making up the mobile menu.
pub struct MenuParts<'a, E> {
    pub menu: Option<&'a E>,
    pub toggle: Option<&'a E>,
    pub segments: &'a [E],
}

/// Show or hide the menu and set the icon to match.
pub fn render<P: Page>(page: &mut P, parts: &MenuParts<'_, P::Element>, open: bool) {
    if let Some(menu) = parts.menu {
        page.set_style(menu, "display", if open { "block" } else { "none" });
    }
    if let Some(toggle) = parts.toggle {
        page.set_attribute(toggle, "aria-expanded", if open { "true" } else { "false" });
    }
    for (index, segment) in parts.segments.iter().enumerate() {
        if open {
            if let Some((property, value)) = OPEN_SEGMENT_STYLES.get(index) {
                page.set_style(segment, property, value);
            }
        } else {
            page.set_style(segment, "transform", "none");
            page.set_style(segment, "opacity", "1");
        }
    }
}

/// Hide the menu element without touching the icon.
pub fn hide<P: Page>(page: &mut P, menu: Option<&P::Element>) {
    if let Some(menu) = menu {
        page.set_style(menu, "display", "none");
    }
}
