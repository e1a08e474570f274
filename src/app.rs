//! Page controller: owns the UI state and dispatches page events.
//!
//! ARCHITECTURE
//! ============
//! `App` is the single place where handlers meet state. The browser glue turns
//! DOM events into calls on this type; tests drive the same calls against an
//! in-memory page. Elements are resolved once at construction, and any that
//! are missing turn the handlers that need them into no-ops.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::analytics::{self, AnalyticsEvent};
use crate::config::SiteConfig;
use crate::input::{Key, KeyPress};
use crate::menu::{self, MenuParts};
use crate::motion;
use crate::page::{Page, PreferenceStore};
use crate::reveal;
use crate::scroll;
use crate::sections::{self, Step};
use crate::state::UiState;
use crate::theme::{self, DARK_SCHEME_QUERY, Theme};

/// Elements looked up once at startup.
pub struct PageRefs<E> {
    pub navigation: Option<E>,
    pub nav_toggle: Option<E>,
    pub nav_menu: Option<E>,
    pub scroll_indicator: Option<E>,
    pub theme_toggle: Option<E>,
    pub toggle_segments: Vec<E>,
    pub nav_links: Vec<E>,
    pub sections: Vec<E>,
}

impl<E: Clone> PageRefs<E> {
    pub fn resolve<P: Page<Element = E>>(page: &P, config: &SiteConfig) -> Self {
        let ids = &config.ids;
        let selectors = &config.selectors;
        let nav_toggle = page.element_by_id(&ids.nav_toggle);
        let toggle_segments = nav_toggle
            .as_ref()
            .map_or_else(Vec::new, |toggle| page.query_within(toggle, &selectors.toggle_segments));
        Self {
            navigation: page.element_by_id(&ids.navigation),
            nav_toggle,
            nav_menu: page.element_by_id(&ids.nav_menu),
            scroll_indicator: page.element_by_id(&ids.scroll_indicator),
            theme_toggle: page.element_by_id(&ids.theme_toggle),
            toggle_segments,
            nav_links: page.query_all(&selectors.nav_links),
            sections: page.query_all(&selectors.sections),
        }
    }
}

pub struct App<P: Page, S: PreferenceStore> {
    page: P,
    store: S,
    config: SiteConfig,
    refs: PageRefs<P::Element>,
    ui: UiState,
}

impl<P: Page, S: PreferenceStore> App<P, S> {
    pub fn new(page: P, store: S, config: SiteConfig) -> Self {
        let refs = PageRefs::resolve(&page, &config);
        log::debug!(
            "resolved {} sections and {} navigation links",
            refs.sections.len(),
            refs.nav_links.len()
        );
        Self { page, store, config, refs, ui: UiState::default() }
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn refs(&self) -> &PageRefs<P::Element> {
        &self.refs
    }

    #[must_use]
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Bring the page into its initial state.
    pub fn init(&mut self) {
        reveal::tag_sections(&mut self.page, &self.refs.sections);
        self.init_theme();
        self.ui.reduced_motion = motion::apply_reduced_motion(&mut self.page);
        if self.is_mobile() {
            menu::hide(&mut self.page, self.refs.nav_menu.as_ref());
        }
        self.update_active_section();
        motion::preload_images(&mut self.page, &self.config.preload_images);
    }

    // --- Mobile menu ---

    pub fn toggle_menu(&mut self) {
        self.ui.menu_open = !self.ui.menu_open;
        let parts = MenuParts {
            menu: self.refs.nav_menu.as_ref(),
            toggle: self.refs.nav_toggle.as_ref(),
            segments: &self.refs.toggle_segments,
        };
        menu::render(&mut self.page, &parts, self.ui.menu_open);
    }

    pub fn close_menu(&mut self) {
        if self.ui.menu_open {
            self.toggle_menu();
        }
    }

    fn is_mobile(&self) -> bool {
        self.page.viewport_width() < self.config.tuning.desktop_breakpoint
    }

    // --- Navigation ---

    /// Click on a navigation link. Returns whether to prevent the default jump.
    pub fn on_nav_click(&mut self, href: Option<&str>) -> bool {
        if let Some(id) = href.and_then(scroll::anchor_target) {
            self.scroll_to_id(id);
        }
        self.close_menu();
        self.update_active_section();
        true
    }

    /// Click on any other same-page anchor. Returns whether to prevent the default jump.
    pub fn on_anchor_click(&mut self, href: &str) -> bool {
        let Some(id) = scroll::anchor_target(href) else {
            return false;
        };
        self.scroll_to_id(id);
        true
    }

    fn scroll_to_id(&mut self, id: &str) {
        let Some(target) = self.page.element_by_id(id) else {
            log::debug!("no element #{id}; ignoring anchor");
            return;
        };
        self.scroll_to_element(&target);
    }

    fn scroll_to_element(&mut self, target: &P::Element) {
        let top = scroll::scroll_top_for(self.page.offset_top(target), self.config.tuning.header_clearance);
        self.page.scroll_to(top, !self.ui.reduced_motion);
    }

    // --- Scroll / resize ---

    /// Scroll event. Returns `true` when the caller must schedule a frame
    /// callback that ends in [`App::on_animation_frame`].
    pub fn request_scroll_frame(&mut self) -> bool {
        self.ui.scroll_frame.arm()
    }

    pub fn on_animation_frame(&mut self) {
        self.handle_scroll();
        self.ui.scroll_frame.release();
    }

    pub fn handle_scroll(&mut self) {
        self.update_active_section();

        let scroll_y = self.page.scroll_y();
        if let Some(indicator) = &self.refs.scroll_indicator {
            let opacity = scroll::indicator_opacity(scroll_y, self.config.tuning.indicator_fade_threshold);
            self.page.set_style(indicator, "opacity", opacity);
        }
        if let Some(navigation) = &self.refs.navigation {
            self.page.set_style(navigation, "box-shadow", scroll::nav_shadow(scroll_y));
        }
    }

    /// Debounced resize handling.
    pub fn handle_resize(&mut self) {
        if self.is_mobile() {
            if !self.ui.menu_open {
                menu::hide(&mut self.page, self.refs.nav_menu.as_ref());
            }
        } else {
            self.close_menu();
        }
    }

    /// Recompute the active section and highlight its navigation link.
    pub fn update_active_section(&mut self) -> Option<String> {
        let spans = sections::spans(&self.page, &self.refs.sections);
        let active = sections::active_index(&spans, self.page.scroll_y(), self.config.tuning.section_lookahead)
            .and_then(|index| self.refs.sections.get(index))
            .and_then(|section| self.page.attribute(section, "id"));
        sections::highlight(&mut self.page, &self.refs.nav_links, active.as_deref());
        active
    }

    // --- Keyboard ---

    /// Key press anywhere on the page. Returns whether to prevent the default.
    pub fn on_key(&mut self, press: &KeyPress) -> bool {
        match press.key {
            Key::Escape => {
                self.close_menu();
                false
            }
            Key::ArrowUp | Key::ArrowDown if press.steps_sections() => {
                let step = if press.key == Key::ArrowDown { Step::Next } else { Step::Previous };
                self.step_section(step)
            }
            _ => false,
        }
    }

    /// Scroll to the section adjacent to the current one. Returns `false` when
    /// the page has no sections.
    fn step_section(&mut self, step: Step) -> bool {
        let spans = sections::spans(&self.page, &self.refs.sections);
        let current = sections::current_index(&spans, self.page.scroll_y(), self.config.tuning.keyboard_focus_line);
        let Some(target) = sections::step_target(current, spans.len(), step)
            .and_then(|index| self.refs.sections.get(index))
            .cloned()
        else {
            return false;
        };
        self.scroll_to_element(&target);
        true
    }

    // --- Reveal ---

    /// Elements to observe for fade-in.
    #[must_use]
    pub fn animated_elements(&self) -> Vec<P::Element> {
        self.page.query_all(&self.config.selectors.animated)
    }

    /// Returns `true` when the element no longer needs observing.
    pub fn on_intersection(&mut self, element: &P::Element, intersecting: bool) -> bool {
        reveal::on_intersection(&mut self.page, element, intersecting)
    }

    // --- Theme ---

    fn init_theme(&mut self) {
        let stored = theme::stored_preference(&self.store, &self.config.storage_key);
        let system_dark = self.page.media_matches(DARK_SCHEME_QUERY);
        self.set_theme(theme::resolve_initial(stored, system_dark));
    }

    fn set_theme(&mut self, theme: Theme) {
        self.ui.theme = theme;
        theme::apply(&mut self.page, self.refs.theme_toggle.as_ref(), theme);
    }

    /// Flip the theme and persist it as an explicit preference.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.ui.theme.toggled();
        self.set_theme(next);
        self.store.set(&self.config.storage_key, next.as_str());
        next
    }

    /// OS color scheme changed. Followed only while no explicit preference exists.
    pub fn on_system_theme_change(&mut self, prefers_dark: bool) {
        if theme::stored_preference(&self.store, &self.config.storage_key).is_some() {
            return;
        }
        self.set_theme(Theme::from_system(prefers_dark));
    }

    // --- Analytics ---

    pub fn on_social_click(&mut self, href: &str) {
        self.track(&AnalyticsEvent::social_click(analytics::social_platform(href)));
    }

    pub fn on_email_click(&mut self) {
        self.track(&AnalyticsEvent::email_click());
    }

    fn track(&mut self, event: &AnalyticsEvent) {
        if !self.page.track(event) {
            log::debug!("no analytics tracker; dropped {}", event.name);
        }
    }
}
