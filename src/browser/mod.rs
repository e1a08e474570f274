//! Browser bindings for the page controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here needs a live `window`, so the module only exists with the
//! `hydrate` feature. [`mount`] builds the controller over [`WebPage`] and
//! [`LocalStore`] and attaches the DOM listeners.

mod dom;
mod storage;
mod wiring;

pub use dom::WebPage;
pub use storage::LocalStore;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::app::App;
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::UiError;

/// Build the controller for the current document and start listening.
///
/// # Errors
///
/// Returns an error when there is no window or document to bind to.
pub fn mount() -> Result<(), UiError> {
    let window = web_sys::window().ok_or(UiError::MissingWindow)?;
    let document = window.document().ok_or(UiError::MissingDocument)?;

    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let config = SiteConfig::from_json_or_default(raw.as_deref());

    let store = LocalStore::new(&window);
    let page = WebPage::new(window.clone(), document.clone());
    let mut app = App::new(page, store, config);
    app.init();

    let app = Rc::new(RefCell::new(app));
    wiring::wire_all(&app, &window, &document);
    log::info!("portfolio-ui mounted");
    Ok(())
}

/// Log a failed JS call and continue without its result.
fn logged<T>(what: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{what} failed: {}", UiError::from(err));
            None
        }
    }
}
