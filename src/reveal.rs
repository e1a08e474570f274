//! One-shot reveal marking for fade-in animations.
//!
//! Elements start unrevealed and gain the `in-view` class the first time they
//! intersect the shrunk viewport band. The class is never removed, and the
//! caller stops observing an element once it reports revealed.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{FADE_IN_CLASS, IN_VIEW_CLASS};
use crate::page::Page;

/// Tag `sections` so the stylesheet hides them until revealed.
pub fn tag_sections<P: Page>(page: &mut P, sections: &[P::Element]) {
    for section in sections {
        page.add_class(section, FADE_IN_CLASS);
    }
}

#[must_use]
pub fn is_revealed<P: Page>(page: &P, element: &P::Element) -> bool {
    page.has_class(element, IN_VIEW_CLASS)
}

/// Handle an intersection notification.
///
/// Returns `true` once the element is revealed and needs no further
/// notifications.
pub fn on_intersection<P: Page>(page: &mut P, element: &P::Element, intersecting: bool) -> bool {
    if is_revealed(page, element) {
        return true;
    }
    if !intersecting {
        return false;
    }
    page.add_class(element, IN_VIEW_CLASS);
    true
}
