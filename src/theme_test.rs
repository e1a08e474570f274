use super::*;
use crate::testing::{FakePage, MemoryStore};

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggling_twice_returns_to_start() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn parses_only_the_two_themes() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("Dark".parse::<Theme>(), Err(UnknownTheme("Dark".to_owned())));
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn display_matches_storage_form() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}

#[test]
fn toggle_label_announces_next_action() {
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
}

#[test]
fn stored_preference_wins_over_system() {
    assert_eq!(resolve_initial(Some(Theme::Light), true), Theme::Light);
    assert_eq!(resolve_initial(Some(Theme::Dark), false), Theme::Dark);
}

#[test]
fn system_preference_used_without_stored_value() {
    assert_eq!(resolve_initial(None, true), Theme::Dark);
    assert_eq!(resolve_initial(None, false), Theme::Light);
}

#[test]
fn invalid_stored_value_is_ignored() {
    let mut store = MemoryStore::default();
    store.set("theme", "sepia");
    assert_eq!(stored_preference(&store, "theme"), None);
    store.set("theme", "dark");
    assert_eq!(stored_preference(&store, "theme"), Some(Theme::Dark));
}

#[test]
fn apply_sets_root_attribute_and_label() {
    let mut page = FakePage::portfolio();
    let toggle = page.element_by_id("dark-mode-toggle");
    apply(&mut page, toggle.as_ref(), Theme::Dark);

    let root = page.root().expect("root");
    assert_eq!(page.attribute(&root, THEME_ATTRIBUTE).as_deref(), Some("dark"));
    let toggle = toggle.expect("toggle");
    assert_eq!(page.attribute(&toggle, "aria-label").as_deref(), Some("Switch to light mode"));
}

#[test]
fn apply_without_toggle_still_sets_root() {
    let mut page = FakePage::portfolio();
    apply(&mut page, None, Theme::Light);
    let root = page.root().expect("root");
    assert_eq!(page.attribute(&root, THEME_ATTRIBUTE).as_deref(), Some("light"));
}
