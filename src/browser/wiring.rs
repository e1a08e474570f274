//! DOM event listeners feeding the controller.
//!
//! Listeners live for the whole page, so their closures are leaked with
//! `forget`. Every handler borrows the controller through [`with_app`]; a
//! failure is logged and dropped so later handlers keep running.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MediaQueryListEvent, Window,
};

use super::{LocalStore, WebPage};
use crate::app::App;
use crate::error::UiError;
use crate::input::{Key, KeyPress, is_editable_target};
use crate::page::Page;
use crate::theme::DARK_SCHEME_QUERY;
use crate::throttle::{Debouncer, try_with};

type BrowserApp = App<WebPage, LocalStore>;
type SharedApp = Rc<RefCell<BrowserApp>>;

/// Run `f` against the controller unless it is already borrowed.
fn with_app<R>(app: &SharedApp, f: impl FnOnce(&mut BrowserApp) -> R) -> Option<R> {
    try_with(app, f)
}

/// Deliver a scroll frame, retrying on the next tick while the controller is
/// busy. The frame gate only reopens once the frame has run.
fn run_frame(app: &SharedApp) {
    if with_app(app, BrowserApp::on_animation_frame).is_some() {
        return;
    }
    let app = Rc::clone(app);
    gloo_timers::callback::Timeout::new(0, move || run_frame(&app)).forget();
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), UiError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach every listener, logging each group that fails to bind.
pub fn wire_all(app: &SharedApp, window: &Window, document: &Document) {
    let groups = [
        ("menu toggle", wire_menu_toggle(app)),
        ("theme toggle", wire_theme_toggle(app)),
        ("navigation links", wire_nav_links(app)),
        ("anchor links", wire_anchor_links(app)),
        ("scroll", wire_scroll(app, window)),
        ("resize", wire_resize(app, window)),
        ("keyboard", wire_keyboard(app, document)),
        ("reveal observer", wire_reveal(app)),
        ("system theme", wire_system_theme(app, window)),
        ("analytics", wire_analytics(app)),
    ];
    for (name, result) in groups {
        if let Err(err) = result {
            log::warn!("failed to wire {name}: {err}");
        }
    }
}

fn wire_menu_toggle(app: &SharedApp) -> Result<(), UiError> {
    let Some(toggle) = app.borrow().refs().nav_toggle.clone() else {
        return Ok(());
    };
    let app = Rc::clone(app);
    listen(&toggle, "click", move |_event| {
        with_app(&app, BrowserApp::toggle_menu);
    })
}

fn wire_theme_toggle(app: &SharedApp) -> Result<(), UiError> {
    let Some(toggle) = app.borrow().refs().theme_toggle.clone() else {
        return Ok(());
    };
    let app = Rc::clone(app);
    listen(&toggle, "click", move |_event| {
        if let Some(theme) = with_app(&app, BrowserApp::toggle_theme) {
            log::debug!("theme set to {theme}");
        }
    })
}

fn wire_nav_links(app: &SharedApp) -> Result<(), UiError> {
    let links = app.borrow().refs().nav_links.clone();
    for link in links {
        let app = Rc::clone(app);
        let target = link.clone();
        listen(&link, "click", move |event| {
            let href = target.get_attribute("href");
            if with_app(&app, |app| app.on_nav_click(href.as_deref())) == Some(true) {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

/// Same-page anchors outside the navigation; navigation links have their own handler.
fn wire_anchor_links(app: &SharedApp) -> Result<(), UiError> {
    let (anchors, nav_selector) = {
        let app = app.borrow();
        let selectors = &app.config().selectors;
        (app.page().document().query_selector_all(&selectors.anchors)?, selectors.nav_links.clone())
    };
    for index in 0..anchors.length() {
        let Some(anchor) = anchors.get(index).and_then(|node| node.dyn_ref::<Element>().cloned()) else {
            continue;
        };
        if anchor.matches(&nav_selector)? {
            continue;
        }
        let app = Rc::clone(app);
        let target = anchor.clone();
        listen(&anchor, "click", move |event| {
            let href = target.get_attribute("href").unwrap_or_default();
            if with_app(&app, |app| app.on_anchor_click(&href)) == Some(true) {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

/// Scroll handling runs at most once per animation frame.
fn wire_scroll(app: &SharedApp, window: &Window) -> Result<(), UiError> {
    let app_for_frame = Rc::clone(app);
    let frame = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
        run_frame(&app_for_frame);
    });

    let app = Rc::clone(app);
    let window_for_cb = window.clone();
    listen(window, "scroll", move |_event| {
        if with_app(&app, BrowserApp::request_scroll_frame) != Some(true) {
            return;
        }
        if let Err(err) = window_for_cb.request_animation_frame(frame.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {}", UiError::from(err));
            run_frame(&app);
        }
    })
}

fn wire_resize(app: &SharedApp, window: &Window) -> Result<(), UiError> {
    let debouncer = Debouncer::new(app.borrow().config().tuning.resize_debounce_ms);
    let app = Rc::clone(app);
    listen(window, "resize", move |_event| {
        let app = Rc::clone(&app);
        debouncer.call(move || {
            with_app(&app, BrowserApp::handle_resize);
        });
    })
}

fn focus_is_editable(event: &Event) -> bool {
    event
        .target()
        .as_ref()
        .and_then(|target| target.dyn_ref::<HtmlElement>())
        .is_some_and(|element| is_editable_target(&element.tag_name(), element.is_content_editable()))
}

fn wire_keyboard(app: &SharedApp, document: &Document) -> Result<(), UiError> {
    let app = Rc::clone(app);
    listen(document, "keydown", move |event| {
        let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let press = KeyPress {
            key: Key::from_name(&keyboard.key()),
            in_editable: focus_is_editable(&event),
            with_modifier: keyboard.alt_key() || keyboard.ctrl_key() || keyboard.meta_key(),
        };
        if with_app(&app, |app| app.on_key(&press)) == Some(true) {
            event.prevent_default();
        }
    })
}

fn wire_reveal(app: &SharedApp) -> Result<(), UiError> {
    let (elements, margin, threshold) = {
        let app = app.borrow();
        let config = app.config();
        (app.animated_elements(), config.reveal_root_margin.clone(), config.reveal_threshold)
    };

    let app_for_cb = Rc::clone(app);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let intersecting = entry.is_intersecting();
                if with_app(&app_for_cb, |app| app.on_intersection(&target, intersecting)) == Some(true) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&margin);
    options.set_threshold(&threshold.into());
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            // No observer support: reveal everything up front.
            log::warn!("IntersectionObserver unavailable: {}", UiError::from(err));
            with_app(app, |app| {
                for element in &elements {
                    app.on_intersection(element, true);
                }
            });
            return Ok(());
        }
    };
    callback.forget();
    for element in &elements {
        observer.observe(element);
    }
    Ok(())
}

/// Follow OS color-scheme changes.
fn wire_system_theme(app: &SharedApp, window: &Window) -> Result<(), UiError> {
    let Some(query) = window.match_media(DARK_SCHEME_QUERY)? else {
        return Ok(());
    };
    let app = Rc::clone(app);
    listen(&query, "change", move |event| {
        let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
            return;
        };
        let prefers_dark = change.matches();
        with_app(&app, |app| app.on_system_theme_change(prefers_dark));
    })
}

fn wire_analytics(app: &SharedApp) -> Result<(), UiError> {
    let (social_links, email_links) = {
        let app = app.borrow();
        let selectors = &app.config().selectors;
        (app.page().query_all(&selectors.social_links), app.page().query_all(&selectors.email_links))
    };
    for link in social_links {
        let app = Rc::clone(app);
        let target = link.clone();
        listen(&link, "click", move |_event| {
            let href = target.get_attribute("href").unwrap_or_default();
            with_app(&app, |app| app.on_social_click(&href));
        })?;
    }
    for link in email_links {
        let app = Rc::clone(app);
        listen(&link, "click", move |_event| {
            with_app(&app, BrowserApp::on_email_click);
        })?;
    }
    Ok(())
}
