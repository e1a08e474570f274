//! [`Page`] over the live DOM via `web-sys`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use super::logged;
use crate::analytics::AnalyticsEvent;
use crate::page::Page;

/// Global analytics function looked up on the window.
const TRACKER_GLOBAL: &str = "gtag";

pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

fn html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

impl Page for WebPage {
    type Element = Element;

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        logged("querySelectorAll", self.document.query_selector_all(selector)).map_or_else(Vec::new, elements)
    }

    fn query_within(&self, parent: &Element, selector: &str) -> Vec<Element> {
        logged("querySelectorAll", parent.query_selector_all(selector)).map_or_else(Vec::new, elements)
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&mut self, element: &Element, name: &str, value: &str) {
        logged("setAttribute", element.set_attribute(name, value));
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&mut self, element: &Element, class: &str) {
        logged("classList.add", element.class_list().add_1(class));
    }

    fn remove_class(&mut self, element: &Element, class: &str) {
        logged("classList.remove", element.class_list().remove_1(class));
    }

    fn set_style(&mut self, element: &Element, property: &str, value: &str) {
        if let Some(element) = html(element) {
            logged("style.setProperty", element.style().set_property(property, value));
        }
    }

    fn offset_top(&self, element: &Element) -> f64 {
        html(element).map_or(0.0, |element| f64::from(element.offset_top()))
    }

    fn offset_height(&self, element: &Element) -> f64 {
        html(element).map_or(0.0, |element| f64::from(element.offset_height()))
    }

    fn scroll_y(&self) -> f64 {
        logged("scrollY", self.window.scroll_y()).unwrap_or(0.0)
    }

    fn viewport_width(&self) -> f64 {
        logged("innerWidth", self.window.inner_width())
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&mut self, top: f64, smooth: bool) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn media_matches(&self, query: &str) -> bool {
        logged("matchMedia", self.window.match_media(query))
            .flatten()
            .is_some_and(|list| list.matches())
    }

    fn inject_style(&mut self, css: &str) {
        let Some(head) = self.document.head() else {
            log::debug!("document has no <head>; skipping style injection");
            return;
        };
        let Some(style) = logged("createElement", self.document.create_element("style")) else {
            return;
        };
        style.set_text_content(Some(css));
        logged("appendChild", head.append_child(&style));
    }

    fn preload_image(&mut self, url: &str) {
        if let Some(image) = logged("new Image", HtmlImageElement::new()) {
            image.set_src(url);
        }
    }

    fn track(&mut self, event: &AnalyticsEvent) -> bool {
        let Some(global) = logged("window.gtag", js_sys::Reflect::get(&self.window, &JsValue::from_str(TRACKER_GLOBAL)))
        else {
            return false;
        };
        let Some(tracker) = global.dyn_ref::<js_sys::Function>() else {
            return false;
        };
        let Some(properties) = logged("JSON.parse", js_sys::JSON::parse(&event.properties().to_string())) else {
            return false;
        };
        logged(
            "gtag",
            tracker.call3(&JsValue::NULL, &JsValue::from_str("event"), &JsValue::from_str(event.name), &properties),
        )
        .is_some()
    }
}
