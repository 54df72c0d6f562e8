//! Local persistence of the chosen language.
//!
//! The browser build writes to `window.localStorage`; native builds and tests
//! use [`MemoryStore`]. Storage being unavailable is not an error for callers:
//! reads yield `None` and writes report `false`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Durable string key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Returns whether the value was stored.
    fn set(&self, key: &str, value: &str) -> bool;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }
}

/// In-process store; contents live as long as the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Number of successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        true
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::PreferenceStore;

    /// `window.localStorage`, looked up on each access (it can be disabled at runtime).
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }
    }

    impl PreferenceStore for LocalStorage {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> bool {
            match Self::storage() {
                Some(storage) => match storage.set_item(key, value) {
                    Ok(()) => true,
                    Err(err) => {
                        log::warn!("[i18n] Failed writing {key} to localStorage: {err:?}");
                        false
                    }
                },
                None => {
                    log::warn!("[i18n] localStorage unavailable; {key} not persisted");
                    false
                }
            }
        }
    }
}
