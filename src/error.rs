//! Error types for theme parsing and browser glue.
//!
//! Controller operations never fail; missing elements are skipped. These
//! errors only surface while talking to the browser, and every event handler
//! logs and drops them so one failure cannot break the listeners after it.

/// A persisted theme string that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

/// Failures while binding to the live document.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// No global `window` (not running in a browser main thread).
    #[error("window is not available")]
    MissingWindow,
    /// The window has no document attached.
    #[error("document is not available")]
    MissingDocument,
    /// A JavaScript call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
