//! Key-value preference storage.
//!
//! The page controller persists the dark-mode choice through this trait so
//! the preference logic can be exercised without a real browser storage
//! backend.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::dom;

/// Minimal key-value surface over the browser's preference storage.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `localStorage`-backed store used on a live page.
///
/// Every operation degrades to a no-op when storage is unavailable, matching
/// the rest of the crate's missing-capability handling.
#[derive(Clone, Copy, Default)]
pub struct LocalPrefStore;

impl PrefStore for LocalPrefStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(storage) = dom::local_storage()
            && let Err(err) = storage.set_item(key, value)
        {
            log::debug!("storage write failed: {}", dom::js_error_message(&err));
        }
    }
}

/// In-memory store for tests and native builds.
#[derive(Default)]
pub struct MemoryPrefStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
