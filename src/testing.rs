//! In-memory [`Page`] and [`PreferenceStore`] for unit tests.
//!
//! The fake keeps a flat node arena with parent links and understands the
//! small selector subset the controller uses: `.class`, `#id`, `tag`,
//! `tag[attr]`, `tag[attr^="prefix"]`, and comma-separated lists of those.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::analytics::AnalyticsEvent;
use crate::page::{Page, PreferenceStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FakeId(usize);

#[derive(Debug, Default)]
struct FakeNode {
    tag: String,
    parent: Option<usize>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    top: f64,
    height: f64,
}

#[derive(Debug)]
pub struct FakePage {
    nodes: Vec<FakeNode>,
    media: HashSet<String>,
    pub scroll_y: f64,
    pub width: f64,
    pub scrolls: Vec<(f64, bool)>,
    pub injected_styles: Vec<String>,
    pub preloaded: Vec<String>,
    /// `None` when no analytics global is installed.
    pub tracked: Option<Vec<AnalyticsEvent>>,
}

impl Default for FakePage {
    fn default() -> Self {
        let root = FakeNode { tag: "html".to_owned(), ..FakeNode::default() };
        Self {
            nodes: vec![root],
            media: HashSet::new(),
            scroll_y: 0.0,
            width: 1280.0,
            scrolls: Vec::new(),
            injected_styles: Vec::new(),
            preloaded: Vec::new(),
            tracked: None,
        }
    }
}

impl FakePage {
    /// Append an element under `parent`.
    pub fn add_child(&mut self, parent: FakeId, tag: &str, classes: &[&str]) -> FakeId {
        self.nodes.push(FakeNode {
            tag: tag.to_owned(),
            parent: Some(parent.0),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            ..FakeNode::default()
        });
        FakeId(self.nodes.len() - 1)
    }

    /// Append an element under the root.
    pub fn add(&mut self, tag: &str, classes: &[&str]) -> FakeId {
        self.add_child(FakeId(0), tag, classes)
    }

    pub fn with_attr(&mut self, id: FakeId, name: &str, value: &str) -> FakeId {
        self.nodes[id.0].attrs.insert(name.to_owned(), value.to_owned());
        id
    }

    pub fn set_layout(&mut self, id: FakeId, top: f64, height: f64) {
        self.nodes[id.0].top = top;
        self.nodes[id.0].height = height;
    }

    pub fn set_media(&mut self, query: &str, matches: bool) {
        if matches {
            self.media.insert(query.to_owned());
        } else {
            self.media.remove(query);
        }
    }

    pub fn install_tracker(&mut self) {
        self.tracked = Some(Vec::new());
    }

    pub fn style(&self, id: FakeId, property: &str) -> Option<&str> {
        self.nodes[id.0].style.get(property).map(String::as_str)
    }

    /// Remove an element and its subtree from queries.
    pub fn detach(&mut self, id: FakeId) {
        self.nodes[id.0].parent = None;
        self.nodes[id.0].attrs.clear();
        self.nodes[id.0].classes.clear();
        self.nodes[id.0].tag.clear();
    }

    /// A page shaped like the portfolio markup.
    ///
    /// Sections: `home` 0..600, `about` 600..1400, `projects` 1400..2400,
    /// `contact` 2400..2900.
    pub fn portfolio() -> Self {
        let mut page = Self::default();
        let nav = page.add("nav", &[]);
        page.with_attr(nav, "id", "navigation");
        let toggle = page.add_child(nav, "button", &[]);
        page.with_attr(toggle, "id", "nav-toggle");
        for _ in 0..3 {
            page.add_child(toggle, "span", &[]);
        }
        let menu = page.add_child(nav, "ul", &[]);
        page.with_attr(menu, "id", "nav-menu");
        for target in ["home", "about", "projects", "contact"] {
            let link = page.add_child(menu, "a", &["nav-link"]);
            page.with_attr(link, "href", &format!("#{target}"));
        }
        let theme_toggle = page.add_child(nav, "button", &[]);
        page.with_attr(theme_toggle, "id", "dark-mode-toggle");

        let indicator = page.add("div", &[]);
        page.with_attr(indicator, "id", "scroll-indicator");

        for (id, top, height) in [
            ("home", 0.0, 600.0),
            ("about", 600.0, 800.0),
            ("projects", 1400.0, 1000.0),
            ("contact", 2400.0, 500.0),
        ] {
            let section = page.add("section", &[]);
            page.with_attr(section, "id", id);
            page.set_layout(section, top, height);
        }

        let hero_cta = page.add("a", &["btn"]);
        page.with_attr(hero_cta, "href", "#projects");
        let dead = page.add("a", &["btn"]);
        page.with_attr(dead, "href", "#");
        for _ in 0..2 {
            page.add("div", &["project-card"]);
        }
        page.add("div", &["timeline-item"]);

        let github = page.add("a", &["social-link"]);
        page.with_attr(github, "href", "https://github.com/someone");
        let linkedin = page.add("a", &["social-link"]);
        page.with_attr(linkedin, "href", "https://www.linkedin.com/in/someone");
        let email = page.add("a", &[]);
        page.with_attr(email, "href", "mailto:someone@example.com");
        page
    }

    fn is_attached(&self, index: usize) -> bool {
        let mut current = index;
        loop {
            if current == 0 {
                return true;
            }
            match self.nodes[current].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn is_descendant(&self, index: usize, ancestor: usize) -> bool {
        let mut current = self.nodes[index].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes[parent].parent;
        }
        false
    }

    fn matches(&self, index: usize, selector: &str) -> bool {
        selector.split(',').map(str::trim).any(|simple| self.matches_simple(index, simple))
    }

    fn matches_simple(&self, index: usize, selector: &str) -> bool {
        let node = &self.nodes[index];
        if let Some(class) = selector.strip_prefix('.') {
            return node.classes.iter().any(|c| c == class);
        }
        if let Some(id) = selector.strip_prefix('#') {
            return node.attrs.get("id").is_some_and(|v| v == id);
        }
        let (tag, filter) = match selector.split_once('[') {
            Some((tag, rest)) => (tag, Some(rest.trim_end_matches(']'))),
            None => (selector, None),
        };
        if !tag.is_empty() && node.tag != tag {
            return false;
        }
        match filter {
            None => true,
            Some(filter) => match filter.split_once("^=") {
                Some((attr, prefix)) => {
                    let prefix = prefix.trim_matches('"');
                    node.attrs.get(attr).is_some_and(|v| v.starts_with(prefix))
                }
                None => node.attrs.contains_key(filter),
            },
        }
    }
}

impl Page for FakePage {
    type Element = FakeId;

    fn root(&self) -> Option<FakeId> {
        Some(FakeId(0))
    }

    fn element_by_id(&self, id: &str) -> Option<FakeId> {
        (0..self.nodes.len())
            .find(|&i| self.is_attached(i) && self.nodes[i].attrs.get("id").is_some_and(|v| v == id))
            .map(FakeId)
    }

    fn query_all(&self, selector: &str) -> Vec<FakeId> {
        (1..self.nodes.len())
            .filter(|&i| self.is_attached(i) && self.matches(i, selector))
            .map(FakeId)
            .collect()
    }

    fn query_within(&self, parent: &FakeId, selector: &str) -> Vec<FakeId> {
        (0..self.nodes.len())
            .filter(|&i| self.is_descendant(i, parent.0) && self.matches(i, selector))
            .map(FakeId)
            .collect()
    }

    fn attribute(&self, element: &FakeId, name: &str) -> Option<String> {
        self.nodes[element.0].attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, element: &FakeId, name: &str, value: &str) {
        self.nodes[element.0].attrs.insert(name.to_owned(), value.to_owned());
    }

    fn has_class(&self, element: &FakeId, class: &str) -> bool {
        self.nodes[element.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, element: &FakeId, class: &str) {
        if !self.has_class(element, class) {
            self.nodes[element.0].classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, element: &FakeId, class: &str) {
        self.nodes[element.0].classes.retain(|c| c != class);
    }

    fn set_style(&mut self, element: &FakeId, property: &str, value: &str) {
        self.nodes[element.0].style.insert(property.to_owned(), value.to_owned());
    }

    fn offset_top(&self, element: &FakeId) -> f64 {
        self.nodes[element.0].top
    }

    fn offset_height(&self, element: &FakeId) -> f64 {
        self.nodes[element.0].height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn scroll_to(&mut self, top: f64, smooth: bool) {
        self.scrolls.push((top, smooth));
    }

    fn media_matches(&self, query: &str) -> bool {
        self.media.contains(query)
    }

    fn inject_style(&mut self, css: &str) {
        self.injected_styles.push(css.to_owned());
    }

    fn preload_image(&mut self, url: &str) {
        self.preloaded.push(url.to_owned());
    }

    fn track(&mut self, event: &AnalyticsEvent) -> bool {
        match self.tracked.as_mut() {
            Some(events) => {
                events.push(event.clone());
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_owned(), value.to_owned());
    }
}
