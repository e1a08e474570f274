//! Client-side interactivity for a single-page portfolio site.
//!
//! This crate is compiled to WebAssembly and attached to a static page. It
//! wires the mobile navigation menu, scroll-linked section highlighting,
//! smooth anchor scrolling, the persisted light/dark theme, fade-in reveal
//! marking, click tracking, and the reduced-motion override. All behaviour
//! lives in [`app::App`], which drives the page through the [`page::Page`]
//! and [`page::PreferenceStore`] traits so it can be tested without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Page controller and event dispatch |
//! | [`page`] | Document and storage abstractions |
//! | [`state`] | Transient UI state |
//! | [`config`] | Element ids, selectors, and tuning values |
//! | [`sections`] | Active-section tracking and keyboard stepping |
//! | [`scroll`] | Anchor targets and scroll-linked chrome |
//! | [`menu`] | Mobile menu rendering |
//! | [`theme`] | Theme resolution and application |
//! | [`reveal`] | One-shot fade-in marking |
//! | [`motion`] | Reduced-motion override and image preload |
//! | [`analytics`] | Click-tracking events |
//! | [`input`] | Keyboard input model |
//! | [`throttle`] | Frame gate and resize debouncer |
//! | [`consts`] | Shared numeric constants and class names |
//! | `browser` | `web-sys` bindings (`hydrate` feature) |

pub mod analytics;
pub mod app;
pub mod config;
pub mod consts;
pub mod error;
pub mod input;
pub mod menu;
pub mod motion;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod state;
pub mod theme;
pub mod throttle;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
mod testing;

/// WASM entry point: install logging and mount the controller.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Warn };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("logger already installed: {err}");
    }
    if let Err(err) = browser::mount() {
        log::error!("portfolio-ui failed to start: {err}");
    }
}
