//! Reduced-motion override and image preloading.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::page::Page;

/// Media query for the OS reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Stylesheet collapsing every animation and transition.
pub const REDUCED_MOTION_CSS: &str = "
*, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
    scroll-behavior: auto !important;
}
";

/// Inject the override when the OS asks for reduced motion.
///
/// Returns whether the override is now active.
pub fn apply_reduced_motion<P: Page>(page: &mut P) -> bool {
    if !page.media_matches(REDUCED_MOTION_QUERY) {
        return false;
    }
    log::debug!("reduced motion requested; disabling animations");
    page.inject_style(REDUCED_MOTION_CSS);
    true
}

pub fn preload_images<P: Page>(page: &mut P, urls: &[String]) {
    for url in urls {
        page.preload_image(url);
    }
}
