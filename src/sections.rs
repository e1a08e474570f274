//! Active-section tracking and keyboard section stepping.
//!
//! Both work on the vertical spans of the page sections in document order.
//! The tracker biases the scroll offset by a lookahead so a section counts as
//! active slightly before its top reaches the viewport edge.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use crate::consts::ACTIVE_CLASS;
use crate::page::Page;

/// Vertical extent of one section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    #[must_use]
    pub fn contains(self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Index of the last span containing `scroll_y + lookahead`.
#[must_use]
pub fn active_index(spans: &[Span], scroll_y: f64, lookahead: f64) -> Option<usize> {
    let position = scroll_y + lookahead;
    spans.iter().rposition(|span| span.contains(position))
}

/// Index of the first span crossing the viewport focus line.
#[must_use]
pub fn current_index(spans: &[Span], scroll_y: f64, focus_line: f64) -> Option<usize> {
    spans.iter().position(|span| {
        let top = span.top - scroll_y;
        top <= focus_line && top + span.height > focus_line
    })
}

/// Direction of a keyboard section step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// Target index for a step from `current`, clamped to `0..len`.
///
/// Without a current section both directions land on the first section.
#[must_use]
pub fn step_target(current: Option<usize>, len: usize, step: Step) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let target = match (current, step) {
        (None, _) => 0,
        (Some(index), Step::Next) => (index + 1).min(len - 1),
        (Some(index), Step::Previous) => index.saturating_sub(1),
    };
    Some(target)
}

/// Read the spans of `sections` from the page.
pub fn spans<P: Page>(page: &P, sections: &[P::Element]) -> Vec<Span> {
    sections
        .iter()
        .map(|section| Span { top: page.offset_top(section), height: page.offset_height(section) })
        .collect()
}

/// Mark the link pointing at `#active_id` and clear every other link.
pub fn highlight<P: Page>(page: &mut P, links: &[P::Element], active_id: Option<&str>) {
    for link in links {
        page.remove_class(link, ACTIVE_CLASS);
        let Some(active_id) = active_id else {
            continue;
        };
        if page.attribute(link, "href").as_deref().and_then(|href| href.strip_prefix('#')) == Some(active_id) {
            page.add_class(link, ACTIVE_CLASS);
        }
    }
}
