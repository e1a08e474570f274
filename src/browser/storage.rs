//! `localStorage`-backed preference store.
//!
//! Storage can be missing or throw (private browsing, disabled cookies); the
//! store then behaves as empty and drops writes.

use web_sys::{Storage, Window};

use super::logged;
use crate::page::PreferenceStore;

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = logged("localStorage", window.local_storage()).flatten();
        if storage.is_none() {
            log::debug!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        logged("localStorage.getItem", storage.get_item(key)).flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            logged("localStorage.setItem", storage.set_item(key, value));
        }
    }
}
