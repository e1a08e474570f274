//! Abstractions over the live document and persistent storage.
//!
//! DESIGN
//! ======
//! The controller never touches browser globals directly. It drives a [`Page`]
//! and a [`PreferenceStore`], which the `browser` module implements over
//! `web-sys` and the unit tests implement in memory.

use crate::analytics::AnalyticsEvent;

/// Document and window operations the controller needs.
///
/// Mutating methods take `&mut self` so in-memory implementations can record
/// effects; browser implementations forward to the DOM and ignore failures.
pub trait Page {
    /// Cheap handle to a document element.
    type Element: Clone;

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    /// Descendants of `parent` matching `selector`, in document order.
    fn query_within(&self, parent: &Self::Element, selector: &str) -> Vec<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;
    fn add_class(&mut self, element: &Self::Element, class: &str);
    fn remove_class(&mut self, element: &Self::Element, class: &str);
    /// Set an inline style property.
    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str);

    /// Distance from the document top to the element's top edge.
    fn offset_top(&self, element: &Self::Element) -> f64;
    fn offset_height(&self, element: &Self::Element) -> f64;
    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;
    fn viewport_width(&self) -> f64;
    fn scroll_to(&mut self, top: f64, smooth: bool);

    /// Whether a media query currently matches.
    fn media_matches(&self, query: &str) -> bool;
    /// Append a `<style>` element with `css` to the document head.
    fn inject_style(&mut self, css: &str);
    /// Start fetching an image into the cache.
    fn preload_image(&mut self, url: &str);
    /// Forward an event to the analytics global.
    ///
    /// Returns `false` when no tracker is installed on the page.
    fn track(&mut self, event: &AnalyticsEvent) -> bool;
}

/// String key-value storage that survives page loads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}
